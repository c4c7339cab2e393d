//! Deferred error log.
//!
//! Bulk operations (list, search, filter) cannot report a failure per item,
//! so every failed query is rendered into a line here instead. Callers pull
//! the lines with [`ErrorLog::drain`], which empties the log.
//!
//! Owned by a single `Db` handle; not shared between threads.

use crate::libs::messages::Message;
use crate::msg_debug;

#[derive(Debug, Default, Clone)]
pub struct ErrorLog {
    entries: Vec<String>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, message: Message) {
        let line = message.to_string();
        msg_debug!(line);
        self.entries.push(line);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns everything recorded so far, oldest first, and clears the log.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_is_one_shot() {
        let mut log = ErrorLog::new();
        log.record(Message::DbNotConnected);
        log.record(Message::QueryFailed("Products::get".into(), "boom".into()));
        assert!(!log.is_empty());
        assert_eq!(log.len(), 2);

        let first = log.drain();
        assert_eq!(first.len(), 2);
        assert!(first[1].contains("Products::get"));
        assert!(log.drain().is_empty());
        assert!(log.is_empty());
    }
}
