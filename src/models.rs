//! Frontend Models
//!
//! The todo record, its identity, display ordering and id generation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Todo identity. Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Todo record, stored verbatim in localStorage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: TodoId, text: String) -> Self {
        Self { id, text, completed: false }
    }
}

/// Display direction for the completion sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Open todos first
    #[default]
    Ascending,
    /// Completed todos first
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

/// Largest id a JS number represents exactly (`Number.MAX_SAFE_INTEGER`)
pub const MAX_TODO_ID: u64 = (1 << 53) - 1;

/// Wall-clock source for id generation
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

/// Browser clock (`Date.now()`), or `SystemTime` off the wasm target
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_millis(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Timestamp-shaped ids that never repeat.
///
/// Issues `max(now, last + 1)`, so two adds inside the same millisecond
/// (or a clock stepping backwards) still get distinct, increasing ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Start above every id already in use
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a TodoId>) -> Self {
        let last = existing.into_iter().map(|id| id.0).max().unwrap_or(0);
        Self { last }
    }

    pub fn next(&mut self, now_millis: u64) -> TodoId {
        self.last = now_millis.max(self.last.saturating_add(1));
        TodoId(self.last)
    }
}
