//! Surfaces - Output seams the controllers write through.
//!
//! Controllers never touch the page directly. Every externally visible
//! mutation goes through one of these narrow traits, so a real host can wire
//! them to its document while tests substitute [`RecordingSurface`] and
//! assert on the write log.

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::NavClasses;

// =============================================================================
// Traits
// =============================================================================

/// Navigation link highlighting.
pub trait NavSurface {
    /// Mark the link for `id` active.
    fn set_active(&self, id: &str);
    /// Remove the active mark from every link.
    fn clear_active(&self);
}

/// Single text slot (the typewriter target).
pub trait TextSurface {
    fn set_text(&self, text: &str);
}

/// Navbar class set.
pub trait ClassSurface {
    fn set_classes(&self, classes: NavClasses);
}

/// Vertical translation of the hero background.
pub trait TransformSurface {
    fn set_offset_y(&self, offset: f64);
}

/// One-shot reveal of a fade-in element.
pub trait RevealSurface {
    fn reveal(&self, id: &str);
}

/// Programmatic smooth scroll.
pub trait ScrollSurface {
    fn scroll_to(&self, top: f64);
}

// =============================================================================
// Recording implementation
// =============================================================================

/// One recorded surface write.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceWrite {
    SetActive(String),
    ClearActive,
    SetText(String),
    SetClasses(NavClasses),
    SetOffsetY(f64),
    Reveal(String),
    ScrollTo(f64),
}

/// Surface that records every write instead of touching a page.
///
/// Implements all surface traits, so one instance can back every controller
/// in a test. `active()` tracks the set of currently highlighted links so
/// tests can assert the at-most-one-active invariant directly.
#[derive(Default)]
pub struct RecordingSurface {
    writes: RefCell<Vec<SurfaceWrite>>,
    active_links: RefCell<Vec<String>>,
}

impl RecordingSurface {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Full write log, in order.
    pub fn writes(&self) -> Vec<SurfaceWrite> {
        self.writes.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    /// Currently highlighted links.
    pub fn active(&self) -> Vec<String> {
        self.active_links.borrow().clone()
    }

    pub fn active_count(&self) -> usize {
        self.active_links.borrow().len()
    }

    /// Most recent text write, if any.
    pub fn last_text(&self) -> Option<String> {
        self.writes
            .borrow()
            .iter()
            .rev()
            .find_map(|w| match w {
                SurfaceWrite::SetText(t) => Some(t.clone()),
                _ => None,
            })
    }

    /// Most recent class write, if any.
    pub fn last_classes(&self) -> Option<NavClasses> {
        self.writes.borrow().iter().rev().find_map(|w| match w {
            SurfaceWrite::SetClasses(c) => Some(*c),
            _ => None,
        })
    }

    /// Most recent transform write, if any.
    pub fn last_offset(&self) -> Option<f64> {
        self.writes.borrow().iter().rev().find_map(|w| match w {
            SurfaceWrite::SetOffsetY(o) => Some(*o),
            _ => None,
        })
    }

    /// Every id revealed so far, in order.
    pub fn revealed(&self) -> Vec<String> {
        self.writes
            .borrow()
            .iter()
            .filter_map(|w| match w {
                SurfaceWrite::Reveal(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Every programmatic scroll target so far, in order.
    pub fn scrolled_to(&self) -> Vec<f64> {
        self.writes
            .borrow()
            .iter()
            .filter_map(|w| match w {
                SurfaceWrite::ScrollTo(top) => Some(*top),
                _ => None,
            })
            .collect()
    }

    /// Drop the write log. The active-link set is kept, it mirrors page
    /// state rather than history.
    pub fn clear(&self) {
        self.writes.borrow_mut().clear();
    }

    fn record(&self, write: SurfaceWrite) {
        self.writes.borrow_mut().push(write);
    }
}

impl NavSurface for RecordingSurface {
    fn set_active(&self, id: &str) {
        self.active_links.borrow_mut().push(id.to_string());
        self.record(SurfaceWrite::SetActive(id.to_string()));
    }

    fn clear_active(&self) {
        self.active_links.borrow_mut().clear();
        self.record(SurfaceWrite::ClearActive);
    }
}

impl TextSurface for RecordingSurface {
    fn set_text(&self, text: &str) {
        self.record(SurfaceWrite::SetText(text.to_string()));
    }
}

impl ClassSurface for RecordingSurface {
    fn set_classes(&self, classes: NavClasses) {
        self.record(SurfaceWrite::SetClasses(classes));
    }
}

impl TransformSurface for RecordingSurface {
    fn set_offset_y(&self, offset: f64) {
        self.record(SurfaceWrite::SetOffsetY(offset));
    }
}

impl RevealSurface for RecordingSurface {
    fn reveal(&self, id: &str) {
        self.record(SurfaceWrite::Reveal(id.to_string()));
    }
}

impl ScrollSurface for RecordingSurface {
    fn scroll_to(&self, top: f64) {
        self.record(SurfaceWrite::ScrollTo(top));
    }
}

// =============================================================================
// Tests
// =============================================================================
