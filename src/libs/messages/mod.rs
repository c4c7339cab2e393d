//! Message catalogue and output macros.
//!
//! All user-visible and diagnostic text is produced from [`Message`] so the
//! wording lives in one place (`display.rs`). The deferred error log stores
//! rendered messages as plain strings.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
