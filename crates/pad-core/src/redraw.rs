/// Coalesces redraw requests into at most one pending frame.
///
/// Transitions call [`RedrawFlag::mark`]; the host asks
/// [`RedrawFlag::should_schedule`] once per event and only requests a new
/// animation frame when it returns `true`. The frame callback calls
/// [`RedrawFlag::begin_frame`] before drawing.
#[derive(Clone, Copy, Debug, Default)]
pub struct RedrawFlag {
    dirty: bool,
    scheduled: bool,
}

impl RedrawFlag {
    #[inline]
    pub fn mark(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn should_schedule(&mut self) -> bool {
        if self.dirty && !self.scheduled {
            self.scheduled = true;
            true
        } else {
            false
        }
    }

    /// The frame request failed; a later [`RedrawFlag::should_schedule`] may
    /// try again. Pending changes stay dirty.
    #[inline]
    pub fn unschedule(&mut self) {
        self.scheduled = false;
    }

    /// Returns whether anything changed since the previous frame.
    pub fn begin_frame(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        self.scheduled = false;
        dirty
    }
}
