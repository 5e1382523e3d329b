//! Bounded cursor over the handle buffer and the end-of-stream state.

use std::ops::Range;

/// Cursor and fill-end offsets into a fixed-capacity buffer.
///
/// Every operation keeps `cursor <= end <= capacity`. In read mode `end`
/// marks how much of the buffer holds valid data. In write mode `end` is
/// pinned to the capacity and `cursor` counts the pending bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    cursor: usize,
    end: usize,
    capacity: usize,
}

impl Window {
    /// Creates an empty read window.
    #[must_use]
    pub const fn readable(capacity: usize) -> Self {
        Self {
            cursor: 0,
            end: 0,
            capacity,
        }
    }

    /// Creates an empty write window spanning the whole buffer.
    #[must_use]
    pub const fn writable(capacity: usize) -> Self {
        Self {
            cursor: 0,
            end: capacity,
            capacity,
        }
    }

    /// Current cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Offset one past the last valid byte.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Buffer capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes left between cursor and end.
    #[must_use]
    pub const fn available(&self) -> usize {
        self.end - self.cursor
    }

    /// Whether the cursor has reached the end.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.cursor == self.end
    }

    /// Advances the cursor by at most `n` bytes and returns the range passed over.
    pub fn take(&mut self, n: usize) -> Range<usize> {
        let n = n.min(self.available());
        let start = self.cursor;
        self.cursor += n;
        start..self.cursor
    }

    /// Resets the window after `filled` bytes were loaded at offset 0.
    pub fn refill(&mut self, filled: usize) {
        self.cursor = 0;
        self.end = filled.min(self.capacity);
    }

    /// Reserves the next byte slot, or `None` when the window is full.
    pub fn push(&mut self) -> Option<usize> {
        if self.cursor < self.end {
            let slot = self.cursor;
            self.cursor += 1;
            Some(slot)
        } else {
            None
        }
    }

    /// Range holding bytes written but not yet flushed.
    #[must_use]
    pub const fn pending(&self) -> Range<usize> {
        0..self.cursor
    }

    /// Sets the number of pending bytes, clamped to the window.
    pub fn set_pending(&mut self, n: usize) {
        self.cursor = n.min(self.end);
    }
}

/// End-of-stream state of a reader.
///
/// States are ordered and only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum EofState {
    /// More backend data may follow.
    #[default]
    Open,
    /// The backend returned a short read; buffered data may remain.
    BackendExhausted,
    /// Nothing more will be returned.
    Drained,
}

impl EofState {
    /// Moves to `next` unless that would go backwards.
    pub fn escalate(&mut self, next: EofState) {
        if next > *self {
            *self = next;
        }
    }

    /// State implied by a refill that loaded `filled` of `wanted` bytes.
    #[must_use]
    pub const fn after_refill(filled: usize, wanted: usize) -> Self {
        if filled == 0 {
            Self::Drained
        } else if filled < wanted {
            Self::BackendExhausted
        } else {
            Self::Open
        }
    }
}
