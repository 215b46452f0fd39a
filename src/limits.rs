//! DoS prevention constants.
//!
//! These limits keep pathological inputs from building unbounded
//! chains of nested block parsers.

/// Maximum nesting depth for container blocks (blockquotes, lists).
/// Markers beyond this depth are rendered as literal text.
pub const MAX_BLOCK_NESTING: usize = 32;

/// Maximum ATX heading level.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Maximum digits in ordered list marker (prevents big-integer parsing)
pub const MAX_LIST_MARKER_DIGITS: usize = 9;
