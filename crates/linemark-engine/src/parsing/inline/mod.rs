//! # Inline Parsing
//!
//! Cursor-based emphasis scanning over a single, already escaped line.
//!
//! ## Architecture
//!
//! Inline parsing runs after angle-bracket escaping and before line
//! classification, so classification sees the line the way it will be
//! rendered: a `*` bullet hidden behind a `**strong**` opener is not a bullet.
//!
//! The scan is leftmost-first and non-overlapping. There is no nesting: once a
//! `**` opener finds its closer, everything in between is literal text.
//!
//! ## Modules
//!
//! - **`types`**: `Inline` enum (Text, Strong)
//! - **`kinds`**: Inline-specific types with owned delimiters (Strong)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_inline()` main entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::Inline;
