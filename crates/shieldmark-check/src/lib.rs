//! # Shieldmark Check
//!
//! Structural validation for artwork data: every rule walks the group
//! sequence and reports violations instead of failing, so callers can show
//! all problems at once. The built-in shield artwork passes clean.

pub mod violation;
pub mod rules;

pub use violation::{RuleKind, Severity, Violation};
pub use rules::{check_artwork, has_errors};
