//! Viewport and element measurement capabilities
//!
//! Positioning code never talks to a rendering surface directly. Hosts hand
//! in implementations of these traits, and tests use fixed sizes.

use std::cell::Cell;

use crate::geometry::{Rect, Size};

/// Inner size of the window the menus live in (`innerWidth`/`innerHeight`)
pub trait Viewport {
    fn inner_size(&self) -> Size;
}

/// Measurement of a rendered element
pub trait Measure {
    /// Layout size of the element (`offsetWidth`/`offsetHeight`)
    fn offset_size(&self) -> Size;

    /// Client-space bounds (`getBoundingClientRect()`)
    fn bounding_rect(&self) -> Rect;
}

impl Viewport for Size {
    fn inner_size(&self) -> Size {
        *self
    }
}

/// A viewport whose size the host updates on resize
impl Viewport for Cell<Size> {
    fn inner_size(&self) -> Size {
        self.get()
    }
}

impl Measure for Rect {
    fn offset_size(&self) -> Size {
        self.size
    }

    fn bounding_rect(&self) -> Rect {
        *self
    }
}

impl Measure for Cell<Rect> {
    fn offset_size(&self) -> Size {
        self.get().size
    }

    fn bounding_rect(&self) -> Rect {
        self.get()
    }
}
