//! Console events for the embedding UI
//!
//! Operations push events onto a queue instead of rendering anything
//! themselves; the UI drains the queue each frame and turns events into
//! notices, navigation, or a catalog reload.

use serde::{Deserialize, Serialize};

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// User-facing notice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Events emitted by console operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConsoleEvent {
    /// Show a notice to the user
    Notice(Notice),
    /// The session was denied; navigate to the login screen
    RedirectToLogin,
    /// A product was created; the catalog should be re-fetched
    ReloadRequested,
}

/// Pending events in emission order
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<ConsoleEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: ConsoleEvent) {
        self.events.push(event);
    }

    /// Take every pending event, oldest first
    pub fn drain(&mut self) -> Vec<ConsoleEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_preserves_emission_order() {
        let mut queue = EventQueue::default();
        queue.push(ConsoleEvent::Notice(Notice::info("first")));
        queue.push(ConsoleEvent::RedirectToLogin);
        queue.push(ConsoleEvent::ReloadRequested);

        let events = queue.drain();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], ConsoleEvent::Notice(n) if n.message == "first"));
        assert_eq!(events[1], ConsoleEvent::RedirectToLogin);
        assert_eq!(events[2], ConsoleEvent::ReloadRequested);
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = EventQueue::default();
        queue.push(ConsoleEvent::ReloadRequested);

        assert!(!queue.is_empty());
        let _ = queue.drain();
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_notice_constructors_set_level() {
        assert_eq!(Notice::info("ok").level, NoticeLevel::Info);
        assert_eq!(Notice::error("bad").level, NoticeLevel::Error);
    }
}
