//! [CSS 2.1 § 14.2.1 'background'](https://www.w3.org/TR/CSS2/colors.html#propdef-background)
//!
//! "The 'background' property is a shorthand property for setting the
//! individual background properties (i.e., 'background-color',
//! 'background-image', 'background-repeat', 'background-attachment' and
//! 'background-position') at the same place in the style sheet."
//!
//! The sub-values use disjoint grammars and may appear in any order, so each
//! longhand is found by its own search over the whole value.

use std::borrow::Cow;

use regex::Regex;

use super::splice_longhands;
use crate::declaration::{Declaration, DeclarationBlock};
use crate::values::{
    BACKGROUND_ATTACHMENT, BACKGROUND_IMAGE, BACKGROUND_REPEAT, COLOR, COLOR_FUNCTION, URI,
    is_background_position,
};

/// A `background` value prepared for searching.
struct BackgroundValue<'a> {
    /// The value as written.
    raw: &'a str,
    /// The value with `url(...)` references blanked out.
    without_uris: Cow<'a, str>,
}

impl<'a> BackgroundValue<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            without_uris: URI.replace_all(raw, " "),
        }
    }
}

/// A search that extracts one longhand from a `background` value.
type Extractor = fn(&BackgroundValue<'_>) -> Option<String>;

/// The longhands of `background`, in the order they are written.
pub const BACKGROUND_LONGHANDS: [&str; 5] = [
    "background-color",
    "background-image",
    "background-repeat",
    "background-attachment",
    "background-position",
];

static EXTRACTORS: [(&str, Extractor); 5] = [
    ("background-color", color),
    ("background-image", image),
    ("background-repeat", repeat),
    ("background-attachment", attachment),
    ("background-position", position),
];

/// "Value: [<'background-color'> || <'background-image'> ||
/// <'background-repeat'> || <'background-attachment'> ||
/// <'background-position'>] | inherit"
fn color(value: &BackgroundValue<'_>) -> Option<String> {
    first_match(&COLOR, &value.without_uris)
}

/// A URI or `none`. Searched on the raw value so the URI is kept intact.
fn image(value: &BackgroundValue<'_>) -> Option<String> {
    first_match(&BACKGROUND_IMAGE, value.raw)
}

fn repeat(value: &BackgroundValue<'_>) -> Option<String> {
    first_match(&BACKGROUND_REPEAT, &value.without_uris)
}

fn attachment(value: &BackgroundValue<'_>) -> Option<String> {
    first_match(&BACKGROUND_ATTACHMENT, &value.without_uris)
}

/// Every position component, space-joined in order of appearance.
fn position(value: &BackgroundValue<'_>) -> Option<String> {
    let searchable = COLOR_FUNCTION.replace_all(&value.without_uris, " ");
    let components: Vec<&str> = searchable
        .split_whitespace()
        .filter(|token| is_background_position(token))
        .collect();
    (!components.is_empty()).then(|| components.join(" "))
}

fn first_match(pattern: &Regex, haystack: &str) -> Option<String> {
    pattern
        .find(haystack)
        .map(|m| m.as_str().trim().to_owned())
        .filter(|found| !found.is_empty())
}

/// Whether the value is, or contains as a standalone word, `inherit`.
fn has_inherit(value: &str) -> bool {
    value
        .split_whitespace()
        .any(|token| token.eq_ignore_ascii_case("inherit"))
}

/// Expand `background` into whichever of [`BACKGROUND_LONGHANDS`] its value
/// supplies. With `inherit`, every longhand the value does not supply is set
/// to `inherit`. Each longhand carries the shorthand's importance.
pub fn expand_background(declarations: &mut DeclarationBlock) {
    let Some(Declaration { value, important }) = declarations.get("background").cloned() else {
        return;
    };
    let value = BackgroundValue::new(&value);
    let inherit = has_inherit(value.raw);

    let longhands: Vec<(&str, Declaration)> = EXTRACTORS
        .iter()
        .filter_map(|(property, extract)| {
            let found = extract(&value).or_else(|| inherit.then(|| "inherit".to_owned()))?;
            Some((*property, Declaration::new(found, important)))
        })
        .collect();

    tracing::debug!(
        value = value.raw,
        found = longhands.len(),
        "expanding background shorthand"
    );
    splice_longhands(declarations, "background", longhands);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(raw: &str) -> Vec<(&'static str, Option<String>)> {
        let value = BackgroundValue::new(raw);
        EXTRACTORS
            .iter()
            .map(|(property, extract)| (*property, extract(&value)))
            .collect()
    }

    #[test]
    fn test_extractors_cover_every_longhand() {
        let names: Vec<&str> = EXTRACTORS.iter().map(|(property, _)| *property).collect();
        assert_eq!(names, BACKGROUND_LONGHANDS);
    }

    #[test]
    fn test_uri_contents_are_not_keywords() {
        let found = extract("url(fixed-red-repeat.png)");
        assert_eq!(
            found,
            [
                ("background-color", None),
                ("background-image", Some("url(fixed-red-repeat.png)".to_owned())),
                ("background-repeat", None),
                ("background-attachment", None),
                ("background-position", None),
            ]
        );
    }

    #[test]
    fn test_functional_color_arguments_are_not_positions() {
        let found = extract("rgb(0 0 0) left top");
        assert_eq!(found[0].1.as_deref(), Some("rgb(0 0 0)"));
        assert_eq!(found[4].1.as_deref(), Some("left top"));
    }

    #[test]
    fn test_none_is_an_image() {
        let found = extract("none red");
        assert_eq!(found[1].1.as_deref(), Some("none"));
        assert_eq!(found[0].1.as_deref(), Some("red"));
    }
}
