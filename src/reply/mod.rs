//! Response template engine.
//!
//! A reply is an empathy prefix chosen by emotion, glued onto a core message
//! chosen by keyword intent. Both come from a static [`ReplyTable`]; the
//! [`ReplyEngine`] is a pure function over it.

mod engine;
mod table;
mod templates;

pub use engine::{Reply, ReplyEngine};
pub use table::{ReplyTable, TemplateRevision};
