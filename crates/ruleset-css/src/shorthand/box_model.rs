//! [CSS 2.1 § 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
//! [CSS 2.1 § 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)

use ruleset_common::warning::warn_once;

use super::splice_longhands;
use crate::declaration::{Declaration, DeclarationBlock};
use crate::values::is_box_model_value;

/// The box-model shorthands, in expansion order.
pub const BOX_MODEL_SHORTHANDS: [&str; 2] = ["margin", "padding"];

/// Physical sides, in the order longhands are written.
const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// [§ 8.3](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// Expand `margin` and `padding` into their `-top`, `-right`, `-bottom` and
/// `-left` longhands. Each longhand carries the shorthand's importance.
pub fn expand_box_model(declarations: &mut DeclarationBlock) {
    for shorthand in BOX_MODEL_SHORTHANDS {
        let Some(declaration) = declarations.get(shorthand) else {
            continue;
        };
        let important = declaration.important;
        let sides = resolve_sides(shorthand, &declaration.value);

        let longhands = SIDES
            .iter()
            .zip(sides)
            .map(|(side, value)| {
                (format!("{shorthand}-{side}"), Declaration::new(value, important))
            });
        splice_longhands(declarations, shorthand, longhands);
    }
}

/// Map the component values of a box shorthand onto `[top, right, bottom, left]`.
fn resolve_sides(shorthand: &str, value: &str) -> [String; 4] {
    // STEP 1: Collect the <margin-width>/<padding-width> tokens in order.
    let widths: Vec<&str> = value
        .split_whitespace()
        .filter(|token| is_box_model_value(token))
        .collect();

    // STEP 2: Apply the shorthand expansion rules.
    //
    // "If there is only one component value, it applies to all sides. If there
    // are two values, the top and bottom margins are set to the first value and
    // the right and left margins are set to the second. If there are three
    // values, the top is set to the first value, the left and right are set to
    // the second, and the bottom is set to the third. If there are four values,
    // they apply to the top, right, bottom, and left, respectively."
    let [top, right, bottom, left] = match widths.as_slice() {
        &[all] => [all, all, all, all],
        &[vertical, horizontal] => [vertical, horizontal, vertical, horizontal],
        &[top, horizontal, bottom] => [top, horizontal, bottom, horizontal],
        &[top, right, bottom, left] => [top, right, bottom, left],
        other => {
            warn_once(
                "CSS",
                &format!(
                    "{shorthand}: expected 1 to 4 box values, found {}",
                    other.len()
                ),
            );
            ["", "", "", ""]
        }
    };

    [top, right, bottom, left].map(str::to_owned)
}
