//! # Block Parsing
//!
//! Two-phase block parsing over the lines of one reply.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is escaped, scanned for
//!    inline emphasis, trimmed, and matched against an ordered rule table to
//!    produce a `LineClass`. Classification is local to the line.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` folds line classes
//!    into `BlockNode`s. Whether a list is open is the only state carried from
//!    one line to the next.
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `ListItem`)
//! - **`kinds`**: Block-specific types with owned markers (Heading, Bullet,
//!   Disclaimer, Paragraph)
//! - **`classify`**: `LineClassifier` and the `RULES` priority table
//! - **`builder`**: `BlockBuilder` list-grouping state machine
//!
//! ## Key Invariants
//!
//! - Lists are never empty and two lists are never adjacent
//! - Every disclaimer is immediately preceded by a separator, and separators
//!   appear nowhere else
//! - All text stored in block nodes is already escaped

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier, LineRule, RULES};
pub use types::{BlockNode, ListItem};
