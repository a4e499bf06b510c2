//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser asks
//! these types what a delimiter looks like; it never hardcodes `**`.

pub mod strong;

pub use strong::Strong;
