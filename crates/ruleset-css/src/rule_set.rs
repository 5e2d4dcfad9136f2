//! A single rule set: a selector list and its declaration block.
//!
//! [CSS 2.1 § 4.1.7 Rule sets, declaration blocks, and selectors](https://www.w3.org/TR/CSS2/syndata.html#rule-sets)
//!
//! "A rule set (also called 'rule') consists of a selector followed by a
//! declaration block."

use std::fmt::{self, Write};

use serde::Serialize;

use crate::declaration::{Declaration, DeclarationBlock};
use crate::error::RuleSetError;
use crate::parser::parse_declarations;
use crate::shorthand::expand_shorthand;
use crate::specificity::calculate_specificity;

/// Options for turning declarations back into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Write `!important` after every declaration, whatever its own flag.
    pub force_important: bool,
}

impl SerializeOptions {
    /// Set [`force_important`](Self::force_important).
    #[must_use]
    pub const fn force_important(mut self, force_important: bool) -> Self {
        self.force_important = force_important;
        self
    }
}

/// A selector list with its parsed declarations.
///
/// The selector list is kept as text; it is only ever split on `,`. The
/// declarations are parsed when the rule set is built. Shorthand expansion is
/// a separate step ([`expand_shorthand`](Self::expand_shorthand)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    selectors: String,
    block: Option<String>,
    specificity: Option<u32>,
    declarations: DeclarationBlock,
}

impl RuleSet {
    /// Build a rule set from its selector list and block text.
    ///
    /// When `specificity` is given it applies to every selector in the list;
    /// otherwise each selector is scored on its own during iteration.
    #[must_use]
    pub fn new(
        selectors: impl Into<String>,
        block: Option<&str>,
        specificity: Option<u32>,
    ) -> Self {
        let block = block.map(str::to_owned);
        let declarations = parse_declarations(block.as_deref());
        Self {
            selectors: selectors.into(),
            block,
            specificity,
            declarations,
        }
    }

    /// [CSS 2.1 § 4.1.7](https://www.w3.org/TR/CSS2/syndata.html#rule-sets)
    ///
    /// Build a rule set from `selectors { declarations }` text. The block runs
    /// from the first `{` to the last `}`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no `{`, no `}` after it, or nothing before it.
    pub fn parse_rule(rule: &str) -> Result<Self, RuleSetError> {
        let Some((selectors, rest)) = rule.split_once('{') else {
            return Err(RuleSetError::MissingBlock {
                rule: rule.to_owned(),
            });
        };
        let Some((block, _)) = rest.rsplit_once('}') else {
            return Err(RuleSetError::UnterminatedBlock {
                rule: rule.to_owned(),
            });
        };
        let selectors = selectors.trim();
        if selectors.is_empty() {
            return Err(RuleSetError::EmptySelector);
        }
        Ok(Self::new(selectors, Some(block.trim()), None))
    }

    /// The selector list as given.
    #[must_use]
    pub fn selectors(&self) -> &str {
        &self.selectors
    }

    /// The block text, including anything added with
    /// [`add_declaration`](Self::add_declaration).
    #[must_use]
    pub fn block(&self) -> Option<&str> {
        self.block.as_deref()
    }

    /// The precomputed specificity, if one was supplied.
    #[must_use]
    pub const fn specificity(&self) -> Option<u32> {
        self.specificity
    }

    /// The parsed declarations.
    #[must_use]
    pub const fn declarations(&self) -> &DeclarationBlock {
        &self.declarations
    }

    /// Look up one declaration by property name (case-insensitive).
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&Declaration> {
        self.declarations.get(&property.trim().to_lowercase())
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether there are no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Append `property: value;` to the block text and re-parse the whole block.
    ///
    /// The declarations are rebuilt from text, so longhands produced by an
    /// earlier [`expand_shorthand`](Self::expand_shorthand) are gone until it
    /// is run again.
    pub fn add_declaration(&mut self, property: &str, value: &str) {
        let block = self.block.get_or_insert_with(String::new);
        let trimmed = block.trim_end();
        if !trimmed.is_empty() && !trimmed.ends_with(';') {
            block.push(';');
        }
        if !block.is_empty() && !block.ends_with(char::is_whitespace) {
            block.push(' ');
        }
        let _ = write!(block, "{property}: {value};");
        self.declarations = parse_declarations(self.block.as_deref());
    }

    /// [CSS 2.1 § 1.4.2.1 Shorthand properties](https://www.w3.org/TR/CSS2/about.html#shorthand)
    ///
    /// Replace `margin`, `padding`, `font` and `background` with their
    /// longhands, in that order.
    pub fn expand_shorthand(&mut self) {
        tracing::debug!(selectors = %self.selectors, "expanding shorthand properties");
        expand_shorthand(&mut self.declarations);
    }

    /// Replace every `"` in declaration values with `'`, so the serialized
    /// declarations can sit inside a double-quoted `style` attribute.
    pub fn escape_declarations(&mut self) {
        for declaration in self.declarations.values_mut() {
            if declaration.value.contains('"') {
                declaration.value = declaration.value.replace('"', "'");
            }
        }
    }

    /// Visit each selector in the list with the serialized declarations and
    /// its specificity, scoring selectors with
    /// [`calculate_specificity`] when none was supplied.
    pub fn each_selector<F>(&self, options: SerializeOptions, f: F)
    where
        F: FnMut(&str, &str, u32),
    {
        self.each_selector_with(options, calculate_specificity, f);
    }

    /// Like [`each_selector`](Self::each_selector), with the scoring function
    /// supplied by the caller.
    pub fn each_selector_with<S, F>(&self, options: SerializeOptions, score: S, mut f: F)
    where
        S: Fn(&str) -> u32,
        F: FnMut(&str, &str, u32),
    {
        let declarations = self.declarations_to_s(options);
        let selectors = self
            .selectors
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty());
        for selector in selectors {
            let specificity = self.specificity.unwrap_or_else(|| score(selector));
            f(selector, &declarations, specificity);
        }
    }

    /// Visit each declaration as `(property, value, important)`, in source order.
    pub fn each_declaration<F>(&self, mut f: F)
    where
        F: FnMut(&str, &str, bool),
    {
        for (property, declaration) in &self.declarations {
            f(property, &declaration.value, declaration.important);
        }
    }

    /// Serialize the declarations as `property: value[ !important]; ...`.
    #[must_use]
    pub fn declarations_to_s(&self, options: SerializeOptions) -> String {
        let mut out = String::new();
        self.each_declaration(|property, value, important| {
            let marker = if important || options.force_important {
                " !important"
            } else {
                ""
            };
            let _ = write!(out, "{property}: {value}{marker}; ");
        });
        out.trim().to_owned()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ {} }}",
            self.selectors,
            self.declarations_to_s(SerializeOptions::default())
        )
    }
}
