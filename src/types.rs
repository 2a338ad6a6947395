//! Core types for folio-motion.
//!
//! These types define the foundation the controllers build on: document-space
//! section geometry, viewport metrics, intersection observer records, and the
//! navbar CSS-class flag set.

// =============================================================================
// Section
// =============================================================================

/// A page section in document space.
///
/// Sections are read-only to the core: the host owns the live list and hands
/// it over (and replaces it) as the document changes. `top` is the distance
/// from the document top, `height` the rendered height, both in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Stable string id (the anchor target, e.g. "home", "about").
    pub id: String,
    /// Distance from the top of the document, in pixels.
    pub top: f64,
    /// Rendered height, in pixels.
    pub height: f64,
}

impl Section {
    /// Create a new section descriptor.
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Bottom edge in document space.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Top edge in viewport space for the given scroll offset.
    pub fn rect_top(&self, scroll_offset: f64) -> f64 {
        self.top - scroll_offset
    }
}

// =============================================================================
// Viewport
// =============================================================================

/// Current viewport metrics.
///
/// `nav_height` is the height of the fixed navigation bar; visibility math
/// clips the top of the viewport below it so content hidden behind the bar
/// does not count as visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Inner height of the viewport, in pixels.
    pub height: f64,
    /// Height of the fixed navigation bar, in pixels.
    pub nav_height: f64,
}

impl Viewport {
    /// Create viewport metrics.
    pub fn new(height: f64, nav_height: f64) -> Self {
        Self { height, nav_height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        // 80px matches the fallback nav height used when the bar is absent.
        Self {
            height: 800.0,
            nav_height: 80.0,
        }
    }
}

// =============================================================================
// Intersection Entries
// =============================================================================

/// One record from a visibility-intersection event.
///
/// Mirrors what an intersection observer reports per section: the fraction of
/// the section currently visible (`ratio`, in `[0, 1]`), the top of its
/// bounding rect relative to the viewport, and whether it intersects at all.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    /// Section id this entry refers to.
    pub id: String,
    /// Visible fraction of the section, 0.0 to 1.0.
    pub ratio: f64,
    /// Top of the bounding rect relative to the viewport, in pixels.
    pub top: f64,
    /// Whether the section currently intersects the (margin-adjusted) viewport.
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    /// An intersecting entry.
    pub fn new(id: impl Into<String>, ratio: f64, top: f64) -> Self {
        Self {
            id: id.into(),
            ratio,
            top,
            is_intersecting: true,
        }
    }

    /// A non-intersecting entry (the section left the viewport).
    pub fn hidden(id: impl Into<String>, top: f64) -> Self {
        Self {
            id: id.into(),
            ratio: 0.0,
            top,
            is_intersecting: false,
        }
    }
}

// =============================================================================
// Navbar Classes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// CSS-class flag set applied to the navigation bar.
    ///
    /// Combine with bitwise OR: `NavClasses::SHRINK | NavClasses::COLLAPSED`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NavClasses: u8 {
        /// Compact bar after scrolling past the shrink threshold.
        const SHRINK = 1 << 0;
        /// Mobile menu is expanded.
        const COLLAPSED = 1 << 1;
    }
}

// =============================================================================
// Tests
// =============================================================================
