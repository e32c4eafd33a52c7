use super::*;

#[test]
fn blank_lines() {
    assert_eq!(classify(""), LineClass::Blank);
    assert_eq!(classify("    "), LineClass::Blank);
    assert_eq!(classify("\t\t"), LineClass::Blank);
}

#[test]
fn single_line_comment_markers() {
    assert_eq!(classify("// rust style"), LineClass::Comment);
    assert_eq!(classify("# python style"), LineClass::Comment);
    assert_eq!(classify("-- sql style"), LineClass::Comment);
}

#[test]
fn block_comment_open_marker() {
    assert_eq!(classify("/* block start"), LineClass::Comment);
    assert_eq!(classify("/* one-liner */"), LineClass::Comment);
}

#[test]
fn leading_whitespace_is_ignored() {
    assert_eq!(classify("    // indented comment"), LineClass::Comment);
    assert_eq!(classify("\t# tabbed comment"), LineClass::Comment);
}

#[test]
fn bare_star_is_ambiguous() {
    // Block-comment continuation and pointer dereference look identical here.
    assert_eq!(classify(" * doc continuation"), LineClass::Ambiguous);
    assert_eq!(classify("*ptr = 5;"), LineClass::Ambiguous);
}

#[test]
fn code_lines() {
    assert_eq!(classify("fn main() {"), LineClass::Code);
    assert_eq!(classify("    return x;"), LineClass::Code);
    assert_eq!(classify("x = 1  # trailing comment"), LineClass::Code);
}

#[test]
fn unmarked_block_comment_interior_classifies_as_code() {
    // Known limitation: no multi-line comment state machine.
    assert_eq!(classify("this line sits inside /* ... */"), LineClass::Code);
}

#[test]
fn comment_like_covers_comment_and_ambiguous() {
    assert!(LineClass::Comment.is_comment_like());
    assert!(LineClass::Ambiguous.is_comment_like());
    assert!(!LineClass::Code.is_comment_like());
    assert!(!LineClass::Blank.is_comment_like());
}
