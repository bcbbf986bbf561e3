use crate::core::constants::DRAG_SENSITIVITY;

/// Click-and-drag state for one carousel: Idle until a mouse-down, Dragging
/// until the pointer is released or leaves the element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub dragging: bool,
    pub start_x: f64,
    pub start_scroll: f64,
    pub sensitivity: f64,
}

impl Default for DragState {
    fn default() -> Self {
        Self::with_sensitivity(DRAG_SENSITIVITY)
    }
}

impl DragState {
    pub fn with_sensitivity(sensitivity: f64) -> Self {
        Self {
            dragging: false,
            start_x: 0.0,
            start_scroll: 0.0,
            sensitivity,
        }
    }

    pub fn begin(&mut self, pointer_x: f64, scroll_left: f64) {
        self.dragging = true;
        self.start_x = pointer_x;
        self.start_scroll = scroll_left;
    }

    pub fn end(&mut self) {
        self.dragging = false;
    }

    /// Scroll offset for the current pointer position, or `None` when idle.
    pub fn scroll_for(&self, pointer_x: f64) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        let walk = (pointer_x - self.start_x) * self.sensitivity;
        Some(self.start_scroll - walk)
    }
}

/// Pointer x relative to the carousel's left edge.
#[inline]
pub fn local_x(page_x: f64, offset_left: f64) -> f64 {
    page_x - offset_left
}
