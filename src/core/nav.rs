use crate::constants::NAV_DESKTOP_MIN_WIDTH;

/// Open/closed state of the mobile navigation panel. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    /// Flip the panel and return the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force the panel closed. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Close when the viewport grows past the mobile breakpoint.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        if viewport_width > NAV_DESKTOP_MIN_WIDTH {
            self.close()
        } else {
            false
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value for the control's `aria-expanded` attribute.
    #[inline]
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}
