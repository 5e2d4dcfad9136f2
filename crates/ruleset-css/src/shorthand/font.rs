//! [CSS 2.1 § 15.8 Shorthand font property](https://www.w3.org/TR/CSS2/fonts.html#font-shorthand)
//!
//! "Value: [ [ <'font-style'> || <'font-variant'> || <'font-weight'> ]?
//! <'font-size'> [ / <'line-height'> ]? <'font-family'> ] | ... | inherit"
//!
//! The optional keywords before the size may come in any order, so tokens are
//! classified by an ordered rule table rather than by position.

use super::splice_longhands;
use crate::declaration::{Declaration, DeclarationBlock};
use crate::values::{
    FONT_TOKEN, SPACED_LINE_HEIGHT_SLASH, is_font_size, is_font_style, is_font_variant,
    is_font_weight, is_reset_keyword,
};

/// The longhands `font` always expands to. `font-family` is written as well
/// when the value names one.
pub const FONT_LONGHANDS: [&str; 5] = [
    "font-style",
    "font-variant",
    "font-weight",
    "font-size",
    "line-height",
];

/// "The 'font' property is ... a shorthand property for setting 'font-style',
/// 'font-variant', 'font-weight', 'font-size', 'line-height' and 'font-family'
/// at the same place in the style sheet."
///
/// "All font-related properties are first reset to their initial values,
/// including those listed in the preceding paragraph."
const INITIAL: &str = "normal";

/// Slots filled while classifying the tokens of a `font` value.
#[derive(Debug, Default)]
struct FontSlots {
    style: Option<String>,
    variant: Option<String>,
    weight: Option<String>,
    size: Option<String>,
    line_height: Option<String>,
    family: Vec<String>,
    /// Set once a size has been seen; everything after it is a family name.
    in_family: bool,
}

impl FontSlots {
    /// `normal`/`inherit` before the size: fill the keyword slots nothing has
    /// claimed yet.
    fn reset(&mut self, token: &str) {
        for slot in [&mut self.style, &mut self.weight, &mut self.variant] {
            if slot.is_none() {
                *slot = Some(token.to_owned());
            }
        }
    }

    fn size(&mut self, token: &str) {
        match token.split_once('/') {
            Some((size, line_height)) => {
                self.size = Some(size.to_owned());
                self.line_height = Some(line_height.to_owned());
            }
            None => self.size = Some(token.to_owned()),
        }
        self.in_family = true;
    }

    fn into_longhands(self) -> Vec<(&'static str, String)> {
        let or_initial = |slot: Option<String>| slot.unwrap_or_else(|| INITIAL.to_owned());
        let mut longhands = vec![
            ("font-style", or_initial(self.style)),
            ("font-variant", or_initial(self.variant)),
            ("font-weight", or_initial(self.weight)),
            ("font-size", or_initial(self.size)),
            ("line-height", or_initial(self.line_height)),
        ];
        if !self.family.is_empty() {
            longhands.push(("font-family", self.family.join(", ")));
        }
        longhands
    }
}

/// One classification rule: the first rule whose `matches` accepts a token
/// gets to `assign` it.
struct FontRule {
    name: &'static str,
    matches: fn(&FontSlots, &str) -> bool,
    assign: fn(&mut FontSlots, &str),
}

/// Classification rules in precedence order.
static FONT_RULES: [FontRule; 6] = [
    // After the size, every token is part of the family list.
    FontRule {
        name: "font-family",
        matches: |slots, _| slots.in_family,
        assign: |slots, token| slots.family.push(token.to_owned()),
    },
    FontRule {
        name: "normal/inherit",
        matches: |_, token| is_reset_keyword(token),
        assign: FontSlots::reset,
    },
    FontRule {
        name: "font-style",
        matches: |_, token| is_font_style(token),
        assign: |slots, token| slots.style = Some(token.to_owned()),
    },
    FontRule {
        name: "font-variant",
        matches: |_, token| is_font_variant(token),
        assign: |slots, token| slots.variant = Some(token.to_owned()),
    },
    FontRule {
        name: "font-weight",
        matches: |_, token| is_font_weight(token),
        assign: |slots, token| slots.weight = Some(token.to_owned()),
    },
    FontRule {
        name: "font-size",
        matches: |_, token| is_font_size(token),
        assign: FontSlots::size,
    },
];

/// Expand `font` into [`FONT_LONGHANDS`] (plus `font-family` when present).
/// Each longhand carries the shorthand's importance; slots the value does not
/// mention are reset to `normal`.
pub fn expand_font(declarations: &mut DeclarationBlock) {
    let Some(declaration) = declarations.get("font") else {
        return;
    };
    let important = declaration.important;
    let slots = classify(&declaration.value);

    let longhands = slots
        .into_longhands()
        .into_iter()
        .map(|(property, value)| (property, Declaration::new(value, important)));
    splice_longhands(declarations, "font", longhands);
}

fn classify(value: &str) -> FontSlots {
    let mut slots = FontSlots::default();
    let value = SPACED_LINE_HEIGHT_SLASH.replace_all(value, "${size}/");

    let tokens = FONT_TOKEN
        .find_iter(&value)
        .map(|m| m.as_str().trim_end_matches(';'))
        .filter(|token| is_word_like(token));

    for token in tokens {
        match FONT_RULES.iter().find(|rule| (rule.matches)(&slots, token)) {
            Some(rule) => {
                tracing::trace!(token, rule = rule.name, "classified font token");
                (rule.assign)(&mut slots, token);
            }
            None => tracing::debug!(token, "dropping unrecognized font token"),
        }
    }

    slots
}

/// A quoted string, or a token with at least one letter or digit. Stray
/// punctuation such as a lone `/` is dropped.
fn is_word_like(token: &str) -> bool {
    token.starts_with(['"', '\'']) || token.chars().any(char::is_alphanumeric)
}
