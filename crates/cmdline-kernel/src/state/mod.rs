//! Session state persistence.
//!
//! The shell persists three values through a key-value service:
//! - the command history (ordered, de-duplicated)
//! - the history navigation index
//! - the output transcript
//!
//! The service is a trait so hosts can plug in their own preference storage.
//! Two implementations ship here: an in-memory map and a JSON file stored at
//! `$XDG_DATA_HOME/cmdline/sessions/{name}.json`.

mod history;
pub mod paths;
mod store;

pub use history::{
    Direction, HISTORY_INDEX_KEY, HISTORY_KEY, History, OUTPUT_KEY, SYSTEM_SOURCE,
    TranscriptEntry,
};
pub use store::{FileStore, KeyValueStore, MemoryStore};
