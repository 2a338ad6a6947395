//! Scroll Spy - Navigation highlighting driven by scroll position
//!
//! Tracks which page section the reader is looking at and keeps exactly one
//! navigation link highlighted. Two inputs feed the same decision:
//!
//! - Scroll offsets, recomputed at most once per animation frame against the
//!   known section layout.
//! - Intersection records from the host's visibility observer, applied
//!   directly.
//!
//! Near the very top of the page the first section always wins, regardless
//! of what the scoring says, so the landing link stays highlighted while the
//! hero is on screen. Re-applying the already active section is a no-op and
//! produces no surface writes.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use folio_motion::events::EventBus;
//! use folio_motion::scrollspy::{ScrollSpy, ScrollSpyConfig};
//! use folio_motion::surface::RecordingSurface;
//! use folio_motion::types::{Section, Viewport};
//!
//! let bus = EventBus::new();
//! let nav = RecordingSurface::new();
//! let spy = ScrollSpy::new(
//!     vec![Section::new("home", 0.0, 600.0)],
//!     Viewport::default(),
//!     ScrollSpyConfig::default(),
//!     nav.clone(),
//! );
//! let cleanups = spy.attach(&bus);
//!
//! bus.emit_scroll(0.0);
//! bus.run_frame();
//! assert_eq!(spy.active(), Some("home".to_string()));
//! ```

pub mod tracker;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{Signal, signal};

use crate::events::{Cleanup, EventBus};
use crate::surface::NavSurface;
use crate::types::{IntersectionEntry, Section, Viewport};

// =============================================================================
// Configuration
// =============================================================================

/// Tuning knobs for section selection.
#[derive(Debug, Clone)]
pub struct ScrollSpyConfig {
    /// Below this scroll offset the first section is always active.
    pub home_threshold: f64,
    /// Score multiplier for sections whose top edge is in the upper half
    /// of the viewport.
    pub upper_half_bias: f64,
    /// Sections below this visible ratio never become active.
    pub min_visible_ratio: f64,
    /// Extra clip below the navigation bar, in pixels.
    pub nav_margin: f64,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            home_threshold: 100.0,
            upper_half_bias: 1.2,
            min_visible_ratio: 0.1,
            nav_margin: 20.0,
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Scroll-spy controller. One per tracked navigation.
pub struct ScrollSpy {
    sections: RefCell<Vec<Section>>,
    viewport: Cell<Viewport>,
    config: ScrollSpyConfig,
    active: Signal<Option<String>>,
    nav: Rc<dyn NavSurface>,
    frame_pending: Cell<bool>,
    latest_offset: Cell<f64>,
}

impl ScrollSpy {
    pub fn new(
        sections: Vec<Section>,
        viewport: Viewport,
        config: ScrollSpyConfig,
        nav: Rc<dyn NavSurface>,
    ) -> Rc<Self> {
        Rc::new(Self {
            sections: RefCell::new(sections),
            viewport: Cell::new(viewport),
            config,
            active: signal(None),
            nav,
            frame_pending: Cell::new(false),
            latest_offset: Cell::new(0.0),
        })
    }

    /// Subscribe to scroll and intersection events on the bus.
    pub fn attach(self: &Rc<Self>, bus: &EventBus) -> Vec<Cleanup> {
        let spy = self.clone();
        let bus_clone = bus.clone();
        let scroll = bus.on_scroll(move |offset| {
            spy.notify_scroll(offset, &bus_clone);
        });

        let spy = self.clone();
        let intersection = bus.on_intersections(move |entries| {
            spy.on_intersections(entries);
        });

        vec![scroll, intersection]
    }

    /// Record a scroll offset and schedule one recomputation for the next
    /// frame. Further offsets arriving before the frame runs only update
    /// the recorded position.
    pub fn notify_scroll(self: &Rc<Self>, offset: f64, bus: &EventBus) {
        self.latest_offset.set(offset);
        if self.frame_pending.replace(true) {
            return;
        }
        let spy = self.clone();
        bus.request_frame(move || {
            spy.frame_pending.set(false);
            spy.recompute();
        });
    }

    /// Apply a batch of intersection records.
    pub fn on_intersections(&self, entries: &[IntersectionEntry]) {
        let offset = self.latest_offset.get();
        if offset < self.config.home_threshold {
            self.force_home();
            return;
        }
        if let Some(best) = tracker::pick_intersecting(entries) {
            let id = best.id.clone();
            self.apply_active(&id);
        }
    }

    /// Currently active section id.
    pub fn active(&self) -> Option<String> {
        self.active.get()
    }

    /// Reactive handle on the active section.
    pub fn active_signal(&self) -> Signal<Option<String>> {
        self.active.clone()
    }

    /// Replace the tracked section layout.
    pub fn set_sections(&self, sections: Vec<Section>) {
        *self.sections.borrow_mut() = sections;
    }

    /// Update viewport metrics after a resize.
    pub fn set_viewport(&self, viewport: Viewport) {
        self.viewport.set(viewport);
    }

    fn recompute(&self) {
        let offset = self.latest_offset.get();
        if offset < self.config.home_threshold {
            self.force_home();
            return;
        }

        let sections = self.sections.borrow();
        let best = tracker::pick_by_visibility(
            &sections,
            offset,
            self.viewport.get(),
            &self.config,
        )
        .map(|s| s.id.clone());
        drop(sections);

        if let Some(id) = best {
            self.apply_active(&id);
        }
        // No qualifying section keeps the previous highlight.
    }

    fn force_home(&self) {
        let first = self.sections.borrow().first().map(|s| s.id.clone());
        if let Some(id) = first {
            self.apply_active(&id);
        }
    }

    fn apply_active(&self, id: &str) {
        if self.active.get().as_deref() == Some(id) {
            return;
        }
        self.nav.clear_active();
        self.nav.set_active(id);
        self.active.set(Some(id.to_string()));
    }
}

// =============================================================================
// Tests
// =============================================================================
