//! # Snapshot Testing Support
//!
//! Utilities for checking parser output in tests and from the command line.
//!
//! ## Modules
//!
//! - **`outline`**: Renders blocks as a compact, indented text outline that is
//!   stable enough for `insta` snapshots and readable in a terminal
//! - **`invariants`**: Structural checks on the block sequence (lists never
//!   empty or adjacent, separators only before disclaimers)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
