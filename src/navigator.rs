// ABOUTME: Navigation module for the text-slides application
// ABOUTME: Tracks the current slide index with bounds-checked transitions

use log::debug;

/// Index state machine over a fixed-length slide list.
///
/// The index is always within `[0, count - 1]` when `count > 0`, and `0`
/// otherwise. Moving past either end is a silent no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    count: usize,
}

impl Navigator {
    /// Create a navigator over `count` slides, positioned on the first one
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    /// Replace the slide list length. The index always resets to 0.
    pub fn reset(&mut self, count: usize) {
        self.count = count;
        self.index = 0;
    }

    /// Jump to `at` (clamped to the last slide). Does nothing without slides.
    pub fn start(&mut self, at: usize) -> bool {
        if self.count == 0 {
            debug!("Ignoring start at {}: no slides", at);
            return false;
        }
        self.index = at.min(self.count - 1);
        true
    }

    /// Advance one slide, stopping at the last one
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.count {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one slide, stopping at the first one
    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// 1-based position as shown by the presenter, e.g. "2/5"
    pub fn position_label(&self) -> String {
        format!("{}/{}", self.index + 1, self.count)
    }
}
