//! Value patterns shared by the declaration parser and the shorthand expanders.
//!
//! These recognize the component values of the CSS 2.1 grammars the expanders
//! care about. They do not validate a whole value; each one answers whether a
//! single token (or a substring) belongs to a grammar.
//!
//! - [CSS 2.1 § 4.3.2 Lengths](https://www.w3.org/TR/CSS2/syndata.html#length-units)
//! - [CSS 2.1 § 4.3.3 Percentages](https://www.w3.org/TR/CSS2/syndata.html#percentage-units)
//! - [CSS 2.1 § 4.3.4 URLs and URIs](https://www.w3.org/TR/CSS2/syndata.html#uri)
//! - [CSS Color Level 4 § 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)

use std::sync::LazyLock;

use regex::Regex;

/// Units accepted after a number in a length.
const LENGTH_UNITS: &str = "em|ex|ch|rem|vw|vh|vmin|vmax|px|cm|mm|q|in|pt|pc";

/// [CSS Color Level 4 § 6.1](https://www.w3.org/TR/css-color-4/#named-colors)
///
/// Named colors, plus `transparent` and `currentcolor`.
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aquamarine", "aqua", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blueviolet", "blue", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "currentcolor", "cyan",
    "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "goldenrod", "gold",
    "gray", "greenyellow", "green", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavenderblush", "lavender", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "limegreen", "lime", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olivedrab", "olive", "orangered", "orange", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "transparent", "turquoise", "violet", "wheat", "whitesmoke",
    "white", "yellowgreen", "yellow",
];

/// [CSS 2.1 § 6.4.2 !important rules](https://www.w3.org/TR/CSS2/cascade.html#important-rules)
///
/// "Declarations are marked important by the '!important' keyword."
/// Whitespace is allowed around and inside the marker, and it matches
/// case-insensitively.
pub(crate) static IMPORTANT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\s*!\s*important\b\s*"));

/// [CSS 2.1 § 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// "<margin-width> = <length> | <percentage> | auto"
static BOX_MODEL_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)^(?:auto|inherit|0|[-+]?(?:\d+|\d*\.\d+)(?:{LENGTH_UNITS}|%))$"
    ))
});

/// [CSS 2.1 § 15.7 Font size](https://www.w3.org/TR/CSS2/fonts.html#font-size-props)
///
/// "<absolute-size> | <relative-size> | <length> | <percentage>", optionally
/// followed by `/` and a line height as written in the `font` shorthand.
static FONT_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)^(?:xx-small|x-small|small|medium|large|x-large|xx-large|smaller|larger|(?:\d+|\d*\.\d+)(?:{LENGTH_UNITS}|%))(?:/\S+)?$"
    ))
});

/// [CSS 2.1 § 15.8 Shorthand font property](https://www.w3.org/TR/CSS2/fonts.html#font-shorthand)
///
/// Word-like or quoted-string tokens of a `font` value. Commas separate
/// family names and are not part of any token.
pub(crate) static FONT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| compile(r#""[^"]*"|'[^']*'|[^\s,"']+"#));

/// "<'font-size'> [ / <'line-height'> ]?"
///
/// White space around the `/` after a size. Replacing the match with `${size}/`
/// turns `12px / 14px` into the single token `12px/14px`.
pub(crate) static SPACED_LINE_HEIGHT_SLASH: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(?P<size>[0-9a-z%])\s*/\s*"));

/// [CSS 2.1 § 4.3.4 URLs and URIs](https://www.w3.org/TR/CSS2/syndata.html#uri)
///
/// "The format of a URI value is 'url(' followed by optional white space
/// followed by an optional single quote (') or double quote (") character
/// followed by the URI itself, followed by an optional single quote (') or
/// double quote (") character followed by optional white space followed by ')'."
pub(crate) static URI: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)url\(\s*(?:"[^"]*"|'[^']*'|[^)]*?)\s*\)"#));

/// [CSS 2.1 § 14.2.1 'background-image'](https://www.w3.org/TR/CSS2/colors.html#propdef-background-image)
///
/// "Value: <uri> | none | inherit"
pub(crate) static BACKGROUND_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"(?i)url\(\s*(?:"[^"]*"|'[^']*'|[^)]*?)\s*\)|\bnone\b"#)
});

/// [CSS 2.1 § 14.2.1 'background-attachment'](https://www.w3.org/TR/CSS2/colors.html#propdef-background-attachment)
///
/// "Value: scroll | fixed | inherit"
pub(crate) static BACKGROUND_ATTACHMENT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:scroll|fixed)\b"));

/// [CSS 2.1 § 14.2.1 'background-repeat'](https://www.w3.org/TR/CSS2/colors.html#propdef-background-repeat)
///
/// "Value: repeat | repeat-x | repeat-y | no-repeat | inherit"
pub(crate) static BACKGROUND_REPEAT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:no-repeat|repeat-x|repeat-y|repeat)\b"));

/// [CSS Color Level 4 § 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// A hex color, an `rgb()`/`rgba()`/`hsl()`/`hsla()` function, or a named color.
/// A named color must stand alone between white space, so `tan-ish` is not `tan`.
/// Matches may carry that white space; trim them.
pub(crate) static COLOR: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)#(?:[0-9a-f]{{8}}|[0-9a-f]{{6}}|[0-9a-f]{{4}}|[0-9a-f]{{3}})\b|\b(?:rgba?|hsla?)\([^)]*\)|(?:^|\s)(?:{})(?:\s|$)",
        NAMED_COLORS.join("|")
    ))
});

/// Functional colors, blanked out of a background value before the position
/// scan so their numeric arguments are not read as offsets.
pub(crate) static COLOR_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:rgba?|hsla?)\([^)]*\)"));

/// [CSS 2.1 § 14.2.1 'background-position'](https://www.w3.org/TR/CSS2/colors.html#propdef-background-position)
///
/// "[ [ <percentage> | <length> | left | center | right ] [ <percentage> |
/// <length> | top | center | bottom ]? ] | [ [ left | center | right ] ||
/// [ top | center | bottom ] ]"
static BACKGROUND_POSITION: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)^(?:left|center|right|top|bottom|0|[-+]?(?:\d+|\d*\.\d+)(?:{LENGTH_UNITS}|%))$"
    ))
});

fn compile(pattern: &str) -> Regex {
    // Patterns are compile-time constants; a failure here is a programming error.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid value pattern {pattern:?}: {e}"))
}

/// Whether `token` is a `<margin-width>`/`<padding-width>` component value.
#[must_use]
pub fn is_box_model_value(token: &str) -> bool {
    BOX_MODEL_VALUE.is_match(token)
}

/// Whether `token` is a font size, optionally with `/line-height` attached.
#[must_use]
pub fn is_font_size(token: &str) -> bool {
    FONT_SIZE.is_match(token)
}

/// Whether `token` is a single `background-position` component.
#[must_use]
pub fn is_background_position(token: &str) -> bool {
    BACKGROUND_POSITION.is_match(token)
}

/// Whether `token` is a `font-style` keyword other than `normal`.
#[must_use]
pub fn is_font_style(token: &str) -> bool {
    token.eq_ignore_ascii_case("italic") || token.eq_ignore_ascii_case("oblique")
}

/// Whether `token` is a `font-variant` keyword other than `normal`.
#[must_use]
pub fn is_font_variant(token: &str) -> bool {
    token.eq_ignore_ascii_case("small-caps")
}

/// [CSS 2.1 § 15.6 Font boldness](https://www.w3.org/TR/CSS2/fonts.html#font-boldness)
///
/// "Value: normal | bold | bolder | lighter | 100 | 200 | 300 | 400 | 500 |
/// 600 | 700 | 800 | 900 | inherit"
///
/// `normal` and `inherit` are handled by the reset rule, not here.
#[must_use]
pub fn is_font_weight(token: &str) -> bool {
    const KEYWORDS: [&str; 3] = ["bold", "bolder", "lighter"];
    if KEYWORDS.iter().any(|k| token.eq_ignore_ascii_case(k)) {
        return true;
    }
    matches!(token.as_bytes(), [b'1'..=b'9', b'0', b'0'])
}

/// Whether `token` is `normal` or `inherit`.
#[must_use]
pub fn is_reset_keyword(token: &str) -> bool {
    token.eq_ignore_ascii_case("normal") || token.eq_ignore_ascii_case("inherit")
}
