//! [CSS 2.1 § 6.4.3 Calculating a selector's specificity](https://www.w3.org/TR/CSS2/cascade.html#specificity)
//!
//! The default scoring function for rule sets that were not given a
//! precomputed specificity. It reads the selector text with a few patterns
//! instead of building a selector tree.

use std::sync::LazyLock;

use regex::Regex;

/// "count the number of ID attributes in the selector (= b)"
static ID_SELECTORS: LazyLock<Regex> = LazyLock::new(|| compile(r"#[\w-]+"));

/// "count the number of other attributes and pseudo-classes in the selector (= c)"
///
/// Only the CSS 2.1 static pseudo-classes `:link`, `:first-child` and `:lang`
/// are counted; dynamic ones such as `:hover` score nothing.
static ATTRIBUTES_AND_PSEUDO_CLASSES: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\.[\w-]+|\[[\w-]+|:(?:link|first-child|lang)\b")
});

/// "count the number of element names and pseudo-elements in the selector (= d)"
static ELEMENTS_AND_PSEUDO_ELEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(?:^|[\s+>~]+)[a-z][\w-]*|::?(?:first-line|first-letter|before|after)\b")
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid selector pattern {pattern:?}: {e}"))
}

/// [§ 6.4.3](https://www.w3.org/TR/CSS2/cascade.html#specificity)
///
/// The `(ids, classes, elements)` triple for one selector. Inline style
/// (CSS 2.1's `a`) never applies to selector text and is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (ids, classes, elements) components.
    #[must_use]
    pub const fn new(ids: u32, classes: u32, elements: u32) -> Self {
        Self(ids, classes, elements)
    }

    /// "Concatenating the four numbers a-b-c-d (in a number system with a
    /// large base) gives the specificity."
    ///
    /// Scores in base 10, so components of 10 or more carry into the next.
    #[must_use]
    pub const fn score(self) -> u32 {
        self.0
            .saturating_mul(100)
            .saturating_add(self.1.saturating_mul(10))
            .saturating_add(self.2)
    }
}

/// Count the components of a single selector (no commas).
#[must_use]
pub fn calculate(selector: &str) -> Specificity {
    let selector = selector.trim();
    let count = |pattern: &Regex| {
        u32::try_from(pattern.find_iter(selector).count()).unwrap_or(u32::MAX)
    };
    Specificity::new(
        count(&ID_SELECTORS),
        count(&ATTRIBUTES_AND_PSEUDO_CLASSES),
        count(&ELEMENTS_AND_PSEUDO_ELEMENTS),
    )
}

/// Score a single selector. This is the collaborator
/// [`RuleSet::each_selector`](crate::RuleSet::each_selector) calls when the
/// rule set carries no precomputed specificity.
#[must_use]
pub fn calculate_specificity(selector: &str) -> u32 {
    calculate(selector).score()
}
