//! [CSS Cascading § 1.2 Shorthand Properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
//!
//! "Some properties are shorthand properties, meaning that they allow authors
//! to specify the values of several properties with a single property."
//!
//! Each expander takes the block by exclusive reference, replaces its
//! shorthand with the longhands it stands for, and leaves every other
//! declaration alone. An absent shorthand is a no-op.

mod background;
mod box_model;
mod font;

pub use background::{BACKGROUND_LONGHANDS, expand_background};
pub use box_model::{BOX_MODEL_SHORTHANDS, expand_box_model};
pub use font::{FONT_LONGHANDS, expand_font};

use crate::declaration::{Declaration, DeclarationBlock};

/// Expand every supported shorthand: box model (`margin`, `padding`), then
/// `font`, then `background`.
pub fn expand_shorthand(declarations: &mut DeclarationBlock) {
    expand_box_model(declarations);
    expand_font(declarations);
    expand_background(declarations);
}

/// [§ 6.4.1 Cascade sorting order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
///
/// Replace `shorthand` with `longhands`, resolving each longhand against any
/// declaration of the same property already in the block:
///
/// - Declared after the shorthand: it wins, unless the shorthand is
///   `!important` and it is not.
/// - Declared before the shorthand: the shorthand wins, unless that earlier
///   declaration is `!important` and the shorthand is not.
///
/// New longhands take the shorthand's place in source order. The shorthand is
/// removed in every case.
pub(crate) fn splice_longhands<I, P>(
    declarations: &mut DeclarationBlock,
    shorthand: &str,
    longhands: I,
) where
    I: IntoIterator<Item = (P, Declaration)>,
    P: AsRef<str>,
{
    let Some(mut at) = declarations.position(shorthand) else {
        return;
    };

    for (property, expanded) in longhands {
        let property = property.as_ref();
        let keep_existing = match declarations.get_full(property) {
            Some((index, existing)) if index > at => {
                !(expanded.important && !existing.important)
            }
            Some((_, existing)) => existing.important && !expanded.important,
            None => {
                declarations.insert_at(at, property, expanded);
                at += 1;
                continue;
            }
        };
        if keep_existing {
            tracing::trace!(property, shorthand, "longhand overrides shorthand");
        } else {
            declarations.set(property, expanded);
        }
    }

    let _ = declarations.remove(shorthand);
}
