//! Command history and output transcript.
//!
//! The history is an ordered list of distinct command lines, most recently
//! used last. Recording a line that is already present moves it to the end.
//! The transcript is every `(command, output)` pair shown to the user, in
//! order, and is append-only.
//!
//! Both are written through to the [`KeyValueStore`] on every change, so the
//! store and memory agree at the end of each turn.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

use super::store::KeyValueStore;

/// Key of the serialized history list.
pub const HISTORY_KEY: &str = "cmdline.history";
/// Key of the history navigation index.
pub const HISTORY_INDEX_KEY: &str = "cmdline.history_index";
/// Key of the serialized transcript.
pub const OUTPUT_KEY: &str = "cmdline.output";

/// Source name for messages produced by the shell itself.
///
/// Recorded in the transcript, never in the command history.
pub const SYSTEM_SOURCE: &str = "System";

const CLEAR_COMMAND: &str = "clear";

/// One entry in the output transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub command: String,
    pub output: String,
}

/// Direction for history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Older,
    Newer,
}

impl Direction {
    fn step(self) -> i64 {
        match self {
            Direction::Older => -1,
            Direction::Newer => 1,
        }
    }
}

/// History and transcript, backed by a key-value store.
pub struct History {
    store: Box<dyn KeyValueStore>,
    commands: Vec<String>,
    /// `-1` is before the start, `commands.len()` is past the end.
    index: i64,
    transcript: Vec<TranscriptEntry>,
}

impl History {
    /// Create an empty history over `store`. Nothing is read yet.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            commands: Vec::new(),
            index: -1,
            transcript: Vec::new(),
        }
    }

    /// Load history, index, and transcript from the store.
    ///
    /// Each key loads on its own. A missing key loads as empty; an
    /// unreadable one is logged and reset without touching the others. An
    /// unparsable index points past the end of the history, and an out of
    /// range one is clamped to `[-1, len]`. Only a failing store is an error,
    /// and then the in-memory state is untouched.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let commands: Vec<String> = self.read_json(HISTORY_KEY)?;
        let transcript: Vec<TranscriptEntry> = self.read_json(OUTPUT_KEY)?;

        let len = commands.len() as i64;
        let index = match self.store.get(HISTORY_INDEX_KEY)? {
            Some(text) => match text.trim().parse::<i64>() {
                Ok(index) => index.clamp(-1, len),
                Err(e) => {
                    tracing::warn!(key = HISTORY_INDEX_KEY, error = %e, "unreadable history index");
                    len
                }
            },
            None => -1,
        };

        self.commands = commands;
        self.transcript = transcript;
        self.index = index;
        Ok(())
    }

    fn read_json<T>(&self, key: &str) -> Result<T, StoreError>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let Some(text) = self.store.get(key)? else {
            return Ok(T::default());
        };
        Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "discarding unreadable session value");
            T::default()
        }))
    }

    /// Record a command and the output it produced.
    ///
    /// A previous identical command is removed before appending. The
    /// [`SYSTEM_SOURCE`] sentinel only reaches the transcript, and `clear`
    /// is never recorded at all.
    pub fn record(&mut self, command: &str, output: &str) -> Result<(), StoreError> {
        if command == CLEAR_COMMAND {
            return Ok(());
        }

        self.commands.retain(|c| c != command);

        if command != SYSTEM_SOURCE {
            self.commands.push(command.to_string());
            self.index = self.commands.len() as i64;
            self.store
                .set(HISTORY_KEY, serde_json::to_string(&self.commands)?)?;
            self.store
                .set(HISTORY_INDEX_KEY, self.index.to_string())?;
        }

        self.transcript.push(TranscriptEntry {
            command: command.to_string(),
            output: output.to_string(),
        });
        self.store
            .set(OUTPUT_KEY, serde_json::to_string(&self.transcript)?)?;
        Ok(())
    }

    /// Empty history and transcript in memory and in the store.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.commands.clear();
        self.index = -1;
        self.transcript.clear();

        self.store.delete(HISTORY_KEY)?;
        self.store.delete(HISTORY_INDEX_KEY)?;
        self.store.delete(OUTPUT_KEY)?;
        Ok(())
    }

    /// Step through the history, returning the command at the new position.
    ///
    /// The index is clamped to the list bounds. Returns `None` if the
    /// history is empty.
    pub fn navigate(&mut self, direction: Direction) -> Option<&str> {
        if self.commands.is_empty() {
            return None;
        }

        let last = self.commands.len() as i64 - 1;
        self.index = self.index.saturating_add(direction.step()).clamp(0, last);
        self.commands.get(self.index as usize).map(String::as_str)
    }

    /// Distinct command lines, oldest first.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Current navigation index.
    pub fn index(&self) -> i64 {
        self.index
    }

    /// Every recorded `(command, output)` pair.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }
}

impl std::fmt::Debug for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History")
            .field("commands", &self.commands)
            .field("index", &self.index)
            .field("transcript", &self.transcript.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryStore;

    fn history() -> (History, MemoryStore) {
        let store = MemoryStore::new();
        (History::new(Box::new(store.clone())), store)
    }

    #[test]
    fn record_appends_and_persists() {
        let (mut history, store) = history();
        history.record("echo a", "a").unwrap();
        history.record("help", "...").unwrap();

        assert_eq!(history.commands(), &["echo a", "help"]);
        assert_eq!(history.index(), 2);
        assert_eq!(
            store.get(HISTORY_KEY).unwrap().as_deref(),
            Some(r#"["echo a","help"]"#)
        );
        assert_eq!(store.get(HISTORY_INDEX_KEY).unwrap().as_deref(), Some("2"));
        assert_eq!(history.transcript().len(), 2);
    }

    #[test]
    fn duplicate_moves_to_end() {
        let (mut history, _) = history();
        history.record("echo a", "a").unwrap();
        history.record("help", "...").unwrap();
        history.record("echo a", "again").unwrap();

        assert_eq!(history.commands(), &["help", "echo a"]);
        assert_eq!(history.index(), 2);
        // The transcript keeps both outputs.
        let outputs: Vec<_> = history.transcript().iter().map(|e| e.output.as_str()).collect();
        assert_eq!(outputs, vec!["a", "...", "again"]);
    }

    #[test]
    fn system_source_only_in_transcript() {
        let (mut history, store) = history();
        history.record(SYSTEM_SOURCE, "Welcome").unwrap();

        assert!(history.commands().is_empty());
        assert_eq!(history.index(), -1);
        assert_eq!(store.get(HISTORY_KEY).unwrap(), None);
        assert_eq!(history.transcript()[0].command, SYSTEM_SOURCE);
    }

    #[test]
    fn clear_is_never_recorded() {
        let (mut history, store) = history();
        history.record("clear", "Output cleared.").unwrap();
        assert!(history.commands().is_empty());
        assert!(history.transcript().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let (mut history, store) = history();
        history.record("echo a", "a").unwrap();
        history.clear().unwrap();

        assert!(history.commands().is_empty());
        assert!(history.transcript().is_empty());
        assert_eq!(history.index(), -1);
        assert!(store.is_empty());
    }

    #[test]
    fn load_reproduces_recorded_sequence() {
        let (mut history, store) = history();
        history.record("echo a", "a").unwrap();
        history.record("math add 1 2", "1 + 2 = 3").unwrap();
        history.record("echo a", "a").unwrap();

        let mut restored = History::new(Box::new(store));
        restored.load().unwrap();
        assert_eq!(restored.commands(), history.commands());
        assert_eq!(restored.transcript(), history.transcript());
        assert_eq!(restored.index(), 2);
    }

    #[test]
    fn load_empty_store() {
        let (mut history, _) = history();
        history.load().unwrap();
        assert!(history.commands().is_empty());
        assert_eq!(history.index(), -1);
    }

    #[test]
    fn load_unreadable_index_keeps_history() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, r#"["a","b"]"#.into()).unwrap();
        store.set(HISTORY_INDEX_KEY, "lots".into()).unwrap();

        let mut history = History::new(Box::new(store));
        history.load().unwrap();
        assert_eq!(history.commands(), &["a", "b"]);
        assert_eq!(history.index(), 2);
        assert_eq!(history.navigate(Direction::Older), Some("b"));
    }

    #[test]
    fn load_unreadable_transcript_keeps_commands() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, r#"["a"]"#.into()).unwrap();
        store.set(OUTPUT_KEY, "{not a list".into()).unwrap();

        let mut history = History::new(Box::new(store));
        history.load().unwrap();
        assert_eq!(history.commands(), &["a"]);
        assert!(history.transcript().is_empty());
    }

    #[test]
    fn load_clamps_out_of_range_index() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, r#"["a","b"]"#.into()).unwrap();
        store.set(HISTORY_INDEX_KEY, i64::MAX.to_string()).unwrap();

        let mut history = History::new(Box::new(store.clone()));
        history.load().unwrap();
        assert_eq!(history.index(), 2);
        assert_eq!(history.navigate(Direction::Newer), Some("b"));

        store.set(HISTORY_INDEX_KEY, i64::MIN.to_string()).unwrap();
        let mut history = History::new(Box::new(store));
        history.load().unwrap();
        assert_eq!(history.index(), -1);
        assert_eq!(history.navigate(Direction::Older), Some("a"));
    }

    #[test]
    fn navigate_empty_is_noop() {
        let (mut history, _) = history();
        assert_eq!(history.navigate(Direction::Older), None);
        assert_eq!(history.index(), -1);
    }

    #[test]
    fn navigate_clamps_both_ends() {
        let (mut history, _) = history();
        for cmd in ["one", "two", "three"] {
            history.record(cmd, "").unwrap();
        }

        assert_eq!(history.navigate(Direction::Older), Some("three"));
        assert_eq!(history.navigate(Direction::Older), Some("two"));
        assert_eq!(history.navigate(Direction::Older), Some("one"));
        assert_eq!(history.navigate(Direction::Older), Some("one"));
        assert_eq!(history.index(), 0);

        assert_eq!(history.navigate(Direction::Newer), Some("two"));
        assert_eq!(history.navigate(Direction::Newer), Some("three"));
        assert_eq!(history.navigate(Direction::Newer), Some("three"));
        assert_eq!(history.index(), 2);
    }

    #[test]
    fn navigate_from_before_start_goes_to_first() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, r#"["a","b"]"#.into()).unwrap();

        let mut history = History::new(Box::new(store));
        history.load().unwrap();
        assert_eq!(history.index(), -1);
        assert_eq!(history.navigate(Direction::Newer), Some("a"));
    }
}
