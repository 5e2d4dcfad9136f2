//! Declaration block parser.
//!
//! Turns the raw text between a rule's braces into a [`DeclarationBlock`].
//! Comments, nested blocks and string escapes are expected to have been dealt
//! with upstream; this works on plain `property: value;` text.

use crate::declaration::{Declaration, DeclarationBlock};
use crate::values::IMPORTANT;

/// [CSS Syntax § 5.3.8 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations)
///
/// Parse a declaration block into an ordered property map.
///
/// # Algorithm
///
/// STEP 1: Split the block on runs of `;`.
///
/// STEP 2: For each fragment, everything before the first `:` is the property
///         and everything after it is the value. Fragments without a `:`, or
///         with an empty property, contribute nothing.
///
/// STEP 3: Lowercase and trim the property, trim the value, and strip an
///         `!important` marker from the value, recording its presence.
///
/// STEP 4: Append to the block. A property declared twice keeps its last
///         value ("The last declaration in document order wins").
///
/// A missing or empty block yields an empty map.
#[must_use]
pub fn parse_declarations(block: Option<&str>) -> DeclarationBlock {
    let mut declarations = DeclarationBlock::new();
    let Some(block) = block else {
        return declarations;
    };

    // STEP 1: Split on one or more semicolons.
    for fragment in block.split(';').filter(|f| !f.trim().is_empty()) {
        // STEP 2: Property is up to the first colon.
        let Some((property, value)) = fragment.split_once(':') else {
            tracing::trace!(fragment, "skipping declaration fragment without ':'");
            continue;
        };

        // STEP 3: Normalize.
        let property = property.trim().to_lowercase();
        if property.is_empty() {
            tracing::trace!(fragment, "skipping declaration with an empty property");
            continue;
        }
        let declaration = parse_value(value);

        // STEP 4: Last declaration wins.
        declarations.push(property, declaration);
    }

    declarations
}

/// [CSS 2.1 § 6.4.2 !important rules](https://www.w3.org/TR/CSS2/cascade.html#important-rules)
///
/// Trim a raw value and split off its `!important` marker.
#[must_use]
pub fn parse_value(raw: &str) -> Declaration {
    let value = raw.trim();
    if IMPORTANT.is_match(value) {
        Declaration::new(IMPORTANT.replace_all(value, " ").trim(), true)
    } else {
        Declaration::new(value, false)
    }
}
