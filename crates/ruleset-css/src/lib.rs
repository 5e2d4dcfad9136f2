//! Declaration parsing and shorthand expansion for a single CSS rule set.
//!
//! # Scope
//!
//! This crate implements:
//! - **Declaration parsing** ([CSS Syntax § 5.3.8](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations))
//!   - `property: value` pairs split on `;`, normalized, last one wins
//!   - `!important` detection
//!
//! - **Shorthand expansion** ([CSS 2.1 § 1.4.2.1](https://www.w3.org/TR/CSS2/about.html#shorthand))
//!   - `margin` and `padding` into four sides
//!   - `font` into style, variant, weight, size, line height and family
//!   - `background` into color, image, repeat, attachment and position
//!
//! - **Specificity** ([CSS 2.1 § 6.4.3](https://www.w3.org/TR/CSS2/cascade.html#specificity))
//!   - Default per-selector scoring for rule sets without a precomputed value
//!
//! # Not Implemented
//!
//! - Tokenizing full stylesheets (comments, nested blocks, escapes)
//! - Validating values against the property grammars
//! - Cascading across rule sets, media queries
//!
//! # Example
//!
//! ```
//! use ruleset_css::{RuleSet, SerializeOptions};
//!
//! let mut rule = RuleSet::new("h1, p", Some("margin: 0 auto; color: red !important"), None);
//! rule.expand_shorthand();
//!
//! assert_eq!(rule.get("margin-left").unwrap().value, "auto");
//! assert!(rule.get("color").unwrap().important);
//!
//! rule.each_selector(SerializeOptions::default(), |selector, declarations, specificity| {
//!     println!("{selector} {{ {declarations} }} /* {specificity} */");
//! });
//! ```

/// The declaration model.
pub mod declaration;
/// Errors for building rule sets from rule text.
pub mod error;
/// Declaration block parser per [CSS Syntax § 5.3.8](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations).
pub mod parser;
/// Rule sets per [CSS 2.1 § 4.1.7](https://www.w3.org/TR/CSS2/syndata.html#rule-sets).
pub mod rule_set;
/// Shorthand expansion per [CSS Cascading § 1.2](https://www.w3.org/TR/css-cascade-4/#shorthand).
pub mod shorthand;
/// Selector specificity per [CSS 2.1 § 6.4.3](https://www.w3.org/TR/CSS2/cascade.html#specificity).
pub mod specificity;
/// Component value patterns.
pub mod values;

// Re-exports for convenience
pub use declaration::{Declaration, DeclarationBlock};
pub use error::RuleSetError;
pub use parser::parse_declarations;
pub use rule_set::{RuleSet, SerializeOptions};
pub use shorthand::{expand_background, expand_box_model, expand_font, expand_shorthand};
pub use specificity::{Specificity, calculate_specificity};
