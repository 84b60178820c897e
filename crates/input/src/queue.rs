//! Per-tick key buffer.

use arrayvec::ArrayVec;

use crate::types::LogicalKey;

/// Keys buffered between two ticks
pub const INPUT_QUEUE_CAPACITY: usize = 32;

/// Fixed-capacity FIFO of logical keys collected during one frame.
///
/// Keys pushed past capacity are dropped, except [`LogicalKey::Quit`], which
/// replaces the newest entry so a flood of input cannot swallow it.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    keys: ArrayVec<LogicalKey, INPUT_QUEUE_CAPACITY>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key. Returns false if it was dropped.
    pub fn push(&mut self, key: LogicalKey) -> bool {
        if self.keys.try_push(key).is_ok() {
            return true;
        }
        if key == LogicalKey::Quit {
            self.keys.pop();
            self.keys.push(key);
            return true;
        }
        false
    }

    pub fn as_slice(&self) -> &[LogicalKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
