//! Integration tests for declaration block parsing.

use ruleset_css::{Declaration, parse_declarations};

fn value_of(block: &str, property: &str) -> Option<Declaration> {
    parse_declarations(Some(block)).get(property).cloned()
}

#[test]
fn test_parse_simple_block() {
    let declarations = parse_declarations(Some("color: red; margin: 0"));

    assert_eq!(declarations.len(), 2);
    assert_eq!(declarations.get("color"), Some(&Declaration::new("red", false)));
    assert_eq!(declarations.get("margin"), Some(&Declaration::new("0", false)));
}

#[test]
fn test_missing_and_empty_blocks_are_empty() {
    assert!(parse_declarations(None).is_empty());
    assert!(parse_declarations(Some("")).is_empty());
    assert!(parse_declarations(Some(" ;;; ")).is_empty());
}

#[test]
fn test_properties_are_lowercased_and_trimmed() {
    let declarations = parse_declarations(Some("  COLOR :  Red  ;\n\tFont-Size:12PX"));

    let properties: Vec<&str> = declarations.iter().map(|(p, _)| p).collect();
    assert_eq!(properties, ["color", "font-size"]);
    // Values are trimmed but keep their case.
    assert_eq!(declarations.get("color").unwrap().value, "Red");
    assert_eq!(declarations.get("font-size").unwrap().value, "12PX");
}

#[test]
fn test_runs_of_semicolons_collapse() {
    let declarations = parse_declarations(Some("color: red;;;; margin: 0;;"));
    assert_eq!(declarations.len(), 2);
}

#[test]
fn test_fragments_without_colon_are_skipped() {
    let declarations = parse_declarations(Some("color red; margin: 0; garbage"));

    assert_eq!(declarations.len(), 1);
    assert!(declarations.contains("margin"));
}

#[test]
fn test_empty_property_is_skipped() {
    let declarations = parse_declarations(Some(": red; color: blue"));

    assert_eq!(declarations.len(), 1);
    assert_eq!(declarations.get("color").unwrap().value, "blue");
}

#[test]
fn test_value_may_be_empty() {
    assert_eq!(value_of("color:", "color"), Some(Declaration::new("", false)));
}

#[test]
fn test_value_splits_at_first_colon_only() {
    assert_eq!(
        value_of("background: url(http://example.com/a.png)", "background")
            .unwrap()
            .value,
        "url(http://example.com/a.png)"
    );
}

#[test]
fn test_important_is_detected_and_stripped() {
    assert_eq!(
        value_of("color: red !important", "color"),
        Some(Declaration::new("red", true))
    );
    assert_eq!(
        value_of("color: red!IMPORTANT", "color"),
        Some(Declaration::new("red", true))
    );
    assert_eq!(
        value_of("color: red ! important ", "color"),
        Some(Declaration::new("red", true))
    );
    assert_eq!(
        value_of("color: red", "color"),
        Some(Declaration::new("red", false))
    );
}

#[test]
fn test_last_declaration_wins() {
    let declarations = parse_declarations(Some("color: red !important; margin: 0; color: blue"));

    assert_eq!(declarations.get("color"), Some(&Declaration::new("blue", false)));
    // The re-declared property moves to its last position.
    let properties: Vec<&str> = declarations.iter().map(|(p, _)| p).collect();
    assert_eq!(properties, ["margin", "color"]);
}

#[test]
fn test_differently_cased_properties_are_the_same_key() {
    let declarations = parse_declarations(Some("Color: red; COLOR: green"));

    assert_eq!(declarations.len(), 1);
    assert_eq!(declarations.get("color").unwrap().value, "green");
}

#[test]
fn test_important_marker_must_end_at_a_word_boundary() {
    let declarations = parse_declarations(Some("content: b !importantly"));
    assert_eq!(
        declarations.get("content"),
        Some(&Declaration::new("b !importantly", false))
    );
}
