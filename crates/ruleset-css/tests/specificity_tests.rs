//! Integration tests for selector specificity scoring.

use ruleset_css::specificity::calculate;
use ruleset_css::{Specificity, calculate_specificity};

#[test]
fn test_specificity_components() {
    let cases = [
        ("*", Specificity::new(0, 0, 0)),
        ("li", Specificity::new(0, 0, 1)),
        ("ul li", Specificity::new(0, 0, 2)),
        ("ul ol+li", Specificity::new(0, 0, 3)),
        ("div > p", Specificity::new(0, 0, 2)),
        ("h1 + *[rel=up]", Specificity::new(0, 1, 1)),
        ("ul ol li.red", Specificity::new(0, 1, 3)),
        ("li.red.level", Specificity::new(0, 2, 1)),
        ("#x34y", Specificity::new(1, 0, 0)),
        ("#nav .item a", Specificity::new(1, 1, 1)),
        ("a:link", Specificity::new(0, 1, 1)),
        ("li:first-child", Specificity::new(0, 1, 1)),
        ("p:lang(fr)", Specificity::new(0, 1, 1)),
        ("a:hover", Specificity::new(0, 0, 1)),
        ("p:first-line", Specificity::new(0, 0, 2)),
        ("p::before", Specificity::new(0, 0, 2)),
    ];

    for (selector, expected) in cases {
        assert_eq!(calculate(selector), expected, "{selector}");
    }
}

#[test]
fn test_specificity_score() {
    assert_eq!(calculate_specificity("#nav .item a"), 111);
    assert_eq!(calculate_specificity("  ul li  "), 2);
    assert_eq!(Specificity::new(1, 12, 0).score(), 220);
}

#[test]
fn test_specificity_ordering() {
    assert!(Specificity::new(1, 0, 0) > Specificity::new(0, 9, 9));
    assert!(Specificity::new(0, 1, 0) > Specificity::new(0, 0, 5));
}
