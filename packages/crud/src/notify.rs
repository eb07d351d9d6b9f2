//! Transient user-facing notifications ("toasts").
//!
//! Every caught error ends up here, as do confirmations of successful
//! mutations. The queue is bounded; the oldest entry is dropped first.

use serde::{Deserialize, Serialize};

const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Success,
    Error,
    Info,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
            Level::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub level: Level,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification and return its id for later dismissal.
    pub fn push(&mut self, level: Level, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            level,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            self.items.remove(0);
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(Level::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(Level::Error, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(Level::Info, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn count(&self, level: Level) -> usize {
        self.items.iter().filter(|n| n.level == level).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_and_dismiss() {
        let mut notes = Notifications::new();
        let a = notes.success("Saved");
        let b = notes.error("Failed");
        assert_ne!(a, b);
        assert_eq!(notes.items().len(), 2);

        notes.dismiss(a);
        assert_eq!(notes.items().len(), 1);
        assert_eq!(notes.items()[0].message, "Failed");
        assert_eq!(notes.count(Level::Error), 1);
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut notes = Notifications::new();
        for i in 0..(MAX_VISIBLE + 2) {
            notes.info(format!("n{i}"));
        }
        assert_eq!(notes.items().len(), MAX_VISIBLE);
        assert_eq!(notes.items()[0].message, "n2");
    }

    #[test]
    fn test_dismiss_unknown_is_noop() {
        let mut notes = Notifications::new();
        notes.info("hello");
        notes.dismiss(999);
        assert_eq!(notes.items().len(), 1);
    }
}
