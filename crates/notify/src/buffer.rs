use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Default retention window in milliseconds.
pub const DEFAULT_RETENTION_MS: u64 = 5000;

/// One displayable line with the instant it was observed.
#[derive(Debug, Clone)]
struct TimedEntry {
    text: String,
    at: DateTime<Local>,
}

impl TimedEntry {
    /// Render as `[3:04 PM] text` using the local short time format.
    fn render(&self) -> String {
        format!("[{}] {}", self.at.format("%-I:%M %p"), self.text)
    }
}

/// Sliding time-window log of recent chat lines.
///
/// Backed by a `VecDeque`, oldest → newest. Entries are appended with a
/// caller-supplied timestamp and evicted from the head once their age
/// reaches the retention window. The bound is purely temporal — there is
/// no capacity limit.
///
/// The head-only eviction rule relies on appends arriving in non-decreasing
/// time order (single producer); an out-of-order feed would need a re-sort
/// instead.
#[derive(Debug, Clone)]
pub struct AgingBuffer {
    entries: VecDeque<TimedEntry>,
    retention_ms: u64,
}

impl AgingBuffer {
    /// Create an empty buffer with the given retention window in milliseconds.
    pub fn new(retention_ms: u64) -> Self {
        Self {
            entries: VecDeque::new(),
            retention_ms,
        }
    }

    /// Append a line at `now`, evict expired entries, and render the rest.
    ///
    /// `text` must be a single already-formatted line; `now` must be ≥ the
    /// timestamp of every previous append. An entry survives while its age
    /// is strictly below the retention window (age == window evicts).
    ///
    /// Returns the surviving entries oldest-first, one per line, joined by
    /// `\n` with no trailing separator.
    pub fn append(&mut self, text: impl Into<String>, now: DateTime<Local>) -> String {
        self.entries.push_back(TimedEntry {
            text: text.into(),
            at: now,
        });

        while let Some(oldest) = self.entries.front() {
            let age_ms = (now - oldest.at).num_milliseconds();
            if age_ms < self.retention_ms as i64 {
                break;
            }
            self.entries.pop_front();
        }

        self.render()
    }

    /// Render all retained entries without mutating the buffer.
    pub fn render(&self) -> String {
        let lines: Vec<String> = self.entries.iter().map(TimedEntry::render).collect();
        lines.join("\n")
    }

    /// Number of entries currently retained.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the buffer holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured retention window in milliseconds.
    pub fn retention_ms(&self) -> u64 {
        self.retention_ms
    }
}
