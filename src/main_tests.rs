use super::*;

use quality_guard::cli::CheckArgs;

fn check_args(extra: &[&str]) -> CheckArgs {
    let mut argv = vec!["quality-guard", "check"];
    argv.extend_from_slice(extra);
    let cli = Cli::parse_from(argv);
    match cli.command {
        Commands::Check(args) => args,
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_overrides_replace_config_thresholds() {
    let mut config = Config::default();
    let args = check_args(&[
        "--max-function-lines",
        "25",
        "--max-file-lines",
        "100",
    ]);

    apply_cli_overrides(&mut config, &args);
    assert_eq!(config.thresholds.max_function_lines, 25);
    assert_eq!(config.thresholds.max_file_lines, 100);
    // Untouched thresholds keep their defaults.
    assert_eq!(config.thresholds.max_nesting_depth, 4);
    assert_eq!(config.thresholds.min_stale_comment_run, 10);
}

#[test]
fn no_overrides_leaves_config_unchanged() {
    let mut config = Config::default();
    apply_cli_overrides(&mut config, &check_args(&[]));
    assert_eq!(config, Config::default());
}

#[test]
fn config_template_parses_and_validates() {
    let config: Config = toml::from_str(config_template()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.thresholds.max_function_lines, 50);
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
}
