//! Property tests for declaration parsing.

use std::fmt::Write;

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use ruleset_css::{RuleSet, SerializeOptions, parse_declarations};

const PROPERTIES: &[&str] = &[
    "color",
    " Margin ",
    "FONT",
    "background",
    "padding-LEFT",
    "\tline-height",
    "x-custom",
    "",
];

const VALUES: &[&str] = &[
    "red",
    " 1px 2px ",
    "url(a.png) no-repeat",
    "12px/14px Arial, serif",
    "",
    "inherit",
    "#FFF",
    "\"Quoted Family\"",
];

const IMPORTANCE: &[&str] = &["", " !important", "!IMPORTANT", " ! important "];

const SEPARATORS: &[&str] = &[";", ";;", " ; ", ";\n", "; garbage;"];

/// Block text assembled from declaration-shaped pieces.
#[derive(Debug, Clone)]
struct BlockText(String);

impl Arbitrary for BlockText {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = usize::arbitrary(g) % 8;
        let mut text = String::new();
        for _ in 0..count {
            let property = g.choose(PROPERTIES).copied().unwrap_or_default();
            let value = g.choose(VALUES).copied().unwrap_or_default();
            let importance = g.choose(IMPORTANCE).copied().unwrap_or_default();
            let separator = g.choose(SEPARATORS).copied().unwrap_or_default();
            let _ = write!(text, "{property}:{value}{importance}{separator}");
        }
        Self(text)
    }
}

fn keys_are_normalized(block: &str) -> bool {
    parse_declarations(Some(block))
        .iter()
        .all(|(property, _)| property.trim() == property && property.to_lowercase() == property)
}

#[quickcheck]
fn prop_keys_are_normalized(block: BlockText) -> bool {
    keys_are_normalized(&block.0)
}

#[quickcheck]
fn prop_keys_are_normalized_for_any_text(block: String) -> bool {
    keys_are_normalized(&block)
}

#[quickcheck]
fn prop_reparse_of_serialized_block_is_identical(block: BlockText) -> bool {
    let rule = RuleSet::new("p", Some(&block.0), None);
    let serialized = rule.declarations_to_s(SerializeOptions::default());
    parse_declarations(Some(&serialized)) == *rule.declarations()
}

#[quickcheck]
fn prop_add_declaration_equals_appending(block: BlockText, index: usize) -> bool {
    let property = PROPERTIES[index % PROPERTIES.len()];
    let value = VALUES[index % VALUES.len()];

    let mut added = RuleSet::new("p", Some(&block.0), None);
    added.add_declaration(property, value);

    let mut appended = block.0.clone();
    if !appended.trim_end().is_empty() && !appended.trim_end().ends_with(';') {
        appended.push(';');
    }
    let _ = write!(appended, " {property}: {value};");
    added.declarations() == &parse_declarations(Some(&appended))
}

#[quickcheck]
fn prop_expansion_removes_shorthands(block: BlockText) -> bool {
    let mut rule = RuleSet::new("p", Some(&block.0), None);
    rule.expand_shorthand();
    ["margin", "padding", "font", "background"]
        .iter()
        .all(|shorthand| rule.get(shorthand).is_none())
}
