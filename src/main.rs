use std::fs;
use std::path::Path;

use clap::Parser;
use rayon::prelude::*;

use quality_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, HookArgs, InitArgs};
use quality_guard::config::{Config, ConfigLoader, FileConfigLoader};
use quality_guard::engine::QualityScanner;
use quality_guard::hook::{HookEvent, HookOutcome, SkipRules, evaluate_event};
use quality_guard::output::{
    ColorMode, FileReport, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use quality_guard::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use quality_guard::{EXIT_ADVISORY, EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Hook(args) => run_hook(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> quality_guard::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);

    // 2. Build the file filter
    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.check.extensions.clone());
    let mut exclude_patterns = config.check.exclude.clone();
    exclude_patterns.extend(args.exclude.clone());
    let skip_rules =
        SkipRules::from_config(&config.skip).with_skip_tests(!args.include_tests);
    let filter = GlobFilter::new(extensions, &exclude_patterns)?.with_skip_rules(skip_rules);

    // 3. Discover files
    let use_gitignore = config.check.gitignore && !args.no_gitignore;
    let scanner = DirectoryScanner::with_gitignore(filter, use_gitignore);
    let mut all_files = Vec::new();
    for path in &args.paths {
        let files = scanner.scan(path)?;
        all_files.extend(files);
    }
    all_files.sort();
    all_files.dedup();

    // 4. Scan each file (parallel; one file's scan is independent of another's)
    let engine = QualityScanner::new();
    let results: Vec<FileReport> = all_files
        .par_iter()
        .filter_map(|file_path| scan_file(file_path, &engine, &config))
        .collect();

    // 5. Format and write output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &results, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 6. Determine exit code
    let has_violations = results.iter().any(FileReport::has_violations);
    if has_violations && !args.warn_only {
        Ok(EXIT_VIOLATIONS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn scan_file(file_path: &Path, engine: &QualityScanner, config: &Config) -> Option<FileReport> {
    let bytes = fs::read(file_path).ok()?;
    let content = String::from_utf8_lossy(&bytes);
    let lines: Vec<&str> = content.lines().collect();
    let report = engine.scan(&lines, &config.thresholds);

    Some(FileReport {
        path: file_path.to_path_buf(),
        report,
    })
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> quality_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

const fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(max_function_lines) = args.max_function_lines {
        config.thresholds.max_function_lines = max_function_lines;
    }
    if let Some(max_nesting_depth) = args.max_nesting_depth {
        config.thresholds.max_nesting_depth = max_nesting_depth;
    }
    if let Some(max_file_lines) = args.max_file_lines {
        config.thresholds.max_file_lines = max_file_lines;
    }
    if let Some(min_stale_comment_run) = args.min_stale_comment_run {
        config.thresholds.min_stale_comment_run = min_stale_comment_run;
    }
}

fn format_output(
    format: OutputFormat,
    results: &[FileReport],
    color_mode: ColorMode,
    verbose: u8,
) -> quality_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(results),
        OutputFormat::Json => JsonFormatter.format(results),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> quality_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_hook(args: &HookArgs, cli: &Cli) -> i32 {
    let config = match load_config(args.config.as_deref(), cli.no_config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_CONFIG_ERROR;
        }
    };

    let event = match HookEvent::from_reader(std::io::stdin().lock()) {
        Ok(event) => event,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_VIOLATIONS;
        }
    };

    match evaluate_event(&event, &config) {
        HookOutcome::Skipped | HookOutcome::Clean => EXIT_SUCCESS,
        HookOutcome::Violations { file_name, report } => {
            eprintln!("Code quality issues in {file_name}:");
            for violation in &report.violations {
                eprintln!("{}", violation.render());
            }
            EXIT_ADVISORY
        }
    }
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> quality_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(quality_guard::QualityGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> &'static str {
    r#"# quality-guard configuration file

[thresholds]
# Maximum lines attributed to a single function (default: 50)
max_function_lines = 50

# Maximum indentation-derived nesting depth (default: 4)
max_nesting_depth = 4

# Maximum total lines per file (default: 500)
max_file_lines = 500

# Minimum length of a commented-out code block to flag (default: 10)
min_stale_comment_run = 10

[skip]
# Path fragments to skip (case-insensitive substring match)
# patterns = ["node_modules", "vendor", "dist/", "build/", ".min.", "__pycache__", ".pyc"]

# Test-file fragments, toggled by skip_tests
# test_patterns = ["test", "spec", "_test.go", "_spec.rb", ".test.", ".spec."]

# Skip test files (default: true)
skip_tests = true

[check]
# File extensions scanned by `quality-guard check`
# extensions = ["rs", "go", "py", "js", "ts", "c", "cpp"]

# Exclude patterns (glob syntax)
# exclude = ["**/target/**", "**/node_modules/**", "**/.git/**", "**/vendor/**"]

# Respect .gitignore rules (default: true)
gitignore = true
"#
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
