//! Capacity-bounded entry state.
//!
//! [`EntryState`] owns the entered value and the cursor. The cursor is the
//! index of the next empty cell and always equals the number of entered
//! cells; it is derived from the value rather than stored separately.
//!
//! ```text
//!  push                 push                 push
//! ──────► cursor=0 ──────────► cursor=1 ─ … ─► cursor=capacity (full)
//!          ◄──────────          ◄────────       push is a no-op here
//!  pop is a no-op here   pop                 pop
//! ```

use pin_field_core::logging::targets;

/// The value and cursor of a pin field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryState {
    capacity: usize,
    /// Concatenated text of all filled cells.
    value: String,
    /// Byte offset in `value` where each filled cell ends.
    ends: Vec<usize>,
}

impl EntryState {
    /// An empty entry with room for `capacity` cells.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            value: String::new(),
            ends: Vec::new(),
        }
    }

    /// Number of cells.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index of the next cell to fill.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.ends.len()
    }

    /// The entered text.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether any cell is filled.
    #[inline]
    pub fn has_text(&self) -> bool {
        !self.ends.is_empty()
    }

    /// Whether every cell is filled.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursor() >= self.capacity
    }

    /// Text entered into the cell at `index`, if it is filled.
    pub fn cell_text(&self, index: usize) -> Option<&str> {
        let end = *self.ends.get(index)?;
        let start = match index {
            0 => 0,
            _ => self.ends[index - 1],
        };
        Some(&self.value[start..end])
    }

    /// Fill the cell at the cursor with `text` and advance the cursor.
    ///
    /// Returns the index of the filled cell, or `None` when the field is full
    /// or `text` is empty. Nothing changes in that case.
    pub fn push(&mut self, text: &str) -> Option<usize> {
        if self.is_full() {
            tracing::debug!(target: targets::ENTRY, capacity = self.capacity, "field full, input dropped");
            return None;
        }
        if text.is_empty() {
            tracing::debug!(target: targets::ENTRY, "empty input ignored");
            return None;
        }

        let index = self.cursor();
        self.value.push_str(text);
        self.ends.push(self.value.len());
        tracing::trace!(target: targets::ENTRY, index, cursor = self.cursor(), "cell filled");
        Some(index)
    }

    /// Clear the last filled cell and move the cursor back onto it.
    ///
    /// Returns the index of the cleared cell, or `None` when the field is empty.
    pub fn pop(&mut self) -> Option<usize> {
        if self.ends.pop().is_none() {
            tracing::debug!(target: targets::ENTRY, "field empty, nothing to delete");
            return None;
        }

        let new_len = self.ends.last().copied().unwrap_or(0);
        self.value.truncate(new_len);
        let index = self.cursor();
        tracing::trace!(target: targets::ENTRY, index, "cell cleared");
        Some(index)
    }
}
