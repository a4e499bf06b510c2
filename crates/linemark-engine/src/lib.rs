//! Line-oriented formatting of generated replies into safe HTML.
//!
//! Raw text goes through four steps per line: angle brackets are escaped,
//! `**strong**` spans are scanned, the line is classified against an ordered
//! rule table, and a small builder groups consecutive bullets into lists.
//! See [`parsing`] for the pipeline and [`render`] for the output vocabulary.

pub mod error;
pub mod formatter;
pub mod parsing;
pub mod prompt;
pub mod render;
pub mod reply;
pub mod request;

// Re-export key types for easier usage
pub use error::RequestError;
pub use formatter::{LineFormatter, format};
pub use parsing::{ParsedDoc, blocks::BlockNode, inline::Inline, parse_document};
pub use prompt::build_prompt;
pub use render::RenderOptions;
pub use reply::ServiceReply;
pub use request::{SymptomRequest, Symptoms};
