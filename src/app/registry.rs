//! Ordered collection of live editor windows plus the cascade placement
//! shared by every window the factory creates.

/// Opaque handle for a framework window, assigned by the platform backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const CASCADE_SHIFT: i32 = 20;

/// Position for the Nth created window: a diagonal cascade that wraps inside
/// the visible work area. Degenerate work areas clamp the divisor so the
/// window lands at the origin instead of dividing by zero.
pub fn cascade_position(n: usize, work_width: i32, work_height: i32) -> (i32, i32) {
    let span_x = (work_width - WINDOW_WIDTH).max(1);
    let span_y = (work_height - WINDOW_HEIGHT).max(1);
    let offset = n as i32 * CASCADE_SHIFT;
    (offset.rem_euclid(span_x), offset.rem_euclid(span_y))
}

/// Insertion-ordered list of open windows. Entries are removed only when the
/// framework reports the window closed, never on a close request.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: Vec<WindowId>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: WindowId) {
        self.windows.push(id);
    }

    /// Returns true when the window was present.
    pub fn remove(&mut self, id: WindowId) -> bool {
        match self.windows.iter().position(|&w| w == id) {
            Some(index) => {
                self.windows.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn windows(&self) -> &[WindowId] {
        &self.windows
    }
}
