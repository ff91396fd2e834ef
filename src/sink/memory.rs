use crate::{sink::Sink, types::Message};
use std::sync::{Mutex, PoisonError};

/// Retains every handled record in memory.
///
/// Useful for tests and for programmatic consumers that want to inspect the
/// record stream without going through an output format. Share it with a
/// logger via `Arc` to read records back after registration.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<Message>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records handled so far, in delivery order.
    pub fn messages(&self) -> Vec<Message> {
        self.lock().clone()
    }

    /// Drains and returns the retained records.
    pub fn take(&self) -> Vec<Message> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Message>> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn handle(&self, message: &Message) {
        self.lock().push(message.clone());
    }
}
