//! Strip ellipsis runs from chat transcripts and Markdown documents.
//!
//! The core of the crate is [`clean`]: a pure, idempotent transformation
//! that masks protected regions (fenced code blocks, inline code spans,
//! and optionally HTML markup), removes ellipsis-like runs (`...`, `..`,
//! `…`) from the remaining text under a configurable policy, and restores
//! the masked regions byte-for-byte. Runs next to quotation or emphasis
//! marks are deleted without a replacement space; digit-adjacent runs are
//! left alone so numeric ranges survive.
//!
//! Everything else is a thin shell over the core: [`sweep_message`] cleans
//! the text fields of a chat-message record, [`clean_stream`] and
//! [`sweep_lines`] adapt the cleaner to line vectors, and the `unellipsis`
//! binary wires those up behind a command-line interface.

pub mod clean;
pub mod config;
pub mod io;
mod macros;
mod mask;
mod pattern;
pub mod sweep;

pub use clean::{CleanOutcome, clean, clean_stream};
pub use config::{CleanOptions, StructuralTags};
pub use io::{rewrite, rewrite_chat};
pub use sweep::{ChatMessage, MessageExtra, sweep_lines, sweep_message};
