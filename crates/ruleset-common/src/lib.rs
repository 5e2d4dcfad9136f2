//! Common utilities for the rule-set parser.
//!
//! This crate provides shared infrastructure used by the parsing crates:
//! - **Warning System** - deduplicated diagnostics for input that is accepted
//!   but degraded (unexpected value shapes, dropped tokens)

pub mod warning;
