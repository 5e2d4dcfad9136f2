//! Errors for building a [`RuleSet`](crate::RuleSet) from rule text.
//!
//! Declaration parsing and shorthand expansion never fail; only splitting a
//! whole `selectors { block }` rule can.

use thiserror::Error;

/// Why a rule's text could not be split into selectors and a block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSetError {
    /// No `{` opens a declaration block.
    #[error("rule has no declaration block: {rule:?}")]
    MissingBlock {
        /// The rule text as given.
        rule: String,
    },
    /// A `{` with no `}` after it.
    #[error("declaration block is not closed: {rule:?}")]
    UnterminatedBlock {
        /// The rule text as given.
        rule: String,
    },
    /// Nothing but whitespace before the block.
    #[error("rule has an empty selector list")]
    EmptySelector,
}
