//! Horizontal swipe recognition for the lightbox.

use crate::modal::Step;

/// Tracks one touch gesture at a time.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    /// Minimum horizontal travel in pixels.
    threshold: i32,
    start_x: Option<i32>,
    current_x: Option<i32>,
}

impl SwipeTracker {
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold: threshold.max(1),
            start_x: None,
            current_x: None,
        }
    }

    /// First finger down. Restarts any gesture in progress.
    pub fn start(&mut self, x: i32) {
        self.start_x = Some(x);
        self.current_x = Some(x);
    }

    /// Finger moved. Ignored without a preceding start.
    pub fn move_to(&mut self, x: i32) {
        if self.start_x.is_some() {
            self.current_x = Some(x);
        }
    }

    /// Finger lifted at `x`. A leftward drag of at least the threshold is
    /// [`Step::Next`], a rightward one [`Step::Prev`]; anything shorter is
    /// not a swipe.
    pub fn end(&mut self, x: i32) -> Option<Step> {
        let start = self.start_x.take()?;
        self.current_x = None;
        let dx = x.saturating_sub(start);
        if dx.unsigned_abs() < self.threshold.unsigned_abs() {
            return None;
        }
        Some(if dx < 0 { Step::Next } else { Step::Prev })
    }

    /// Abandon the current gesture.
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.current_x = None;
    }

    /// Horizontal drag distance so far, for drag feedback. `None` when no
    /// gesture is in progress.
    pub fn drag_offset(&self) -> Option<i32> {
        Some(self.current_x?.saturating_sub(self.start_x?))
    }
}
