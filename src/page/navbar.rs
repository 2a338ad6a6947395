//! Navbar - Shrink-on-scroll and collapse handling
//!
//! The navigation bar shrinks once the page scrolls past a threshold and
//! expands back at the top. The shrunk flag is a derived over the bus scroll
//! signal; an effect mirrors the class set out through the surface, so the
//! surface only hears about changes. Resize events above the desktop
//! breakpoint force the mobile menu closed, behind a leading-edge debounce
//! so a drag-resize costs one update per quiet window.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use spark_signals::{Signal, derived, effect, flush_sync, signal};

use crate::events::{Cleanup, EventBus};
use crate::surface::ClassSurface;
use crate::timer::TimerQueue;
use crate::types::NavClasses;

// =============================================================================
// Configuration
// =============================================================================

#[derive(Debug, Clone)]
pub struct NavbarConfig {
    /// Scroll offset past which the bar shrinks.
    pub shrink_threshold: f64,
    /// Viewport width above which the collapse is forced closed.
    pub desktop_breakpoint: f64,
    /// Quiet window for the resize debounce.
    pub resize_quiet: Duration,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            shrink_threshold: 100.0,
            desktop_breakpoint: 991.0,
            resize_quiet: Duration::from_millis(250),
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

pub struct Navbar {
    classes: Signal<NavClasses>,
    surface: Rc<dyn ClassSurface>,
    config: NavbarConfig,
    debounce_gate: Cell<bool>,
}

impl Navbar {
    pub fn new(surface: Rc<dyn ClassSurface>, config: NavbarConfig) -> Rc<Self> {
        Rc::new(Self {
            classes: signal(NavClasses::empty()),
            surface,
            config,
            debounce_gate: Cell::new(false),
        })
    }

    /// Wire scroll and resize handling to the bus. The current class set is
    /// written out once on attach so the surface starts in sync.
    pub fn attach(self: &Rc<Self>, bus: &EventBus, timers: &TimerQueue) -> Vec<Cleanup> {
        self.surface.set_classes(self.classes.get());

        // Shrink tracks the scroll signal reactively.
        let offset = bus.scroll_offset_signal();
        let threshold = self.config.shrink_threshold;
        let shrunk = derived(move || offset.get() > threshold);

        let navbar = self.clone();
        let stop = effect(move || {
            let mut classes = navbar.classes.get();
            classes.set(NavClasses::SHRINK, shrunk.get());
            if classes != navbar.classes.get() {
                navbar.classes.set(classes);
                navbar.surface.set_classes(classes);
            }
        });
        flush_sync();

        let navbar = self.clone();
        let timers = timers.clone();
        let resize = bus.on_resize(move |width| {
            navbar.on_resize(width, &timers);
        });

        vec![Box::new(stop), resize]
    }

    /// Open or close the mobile menu.
    pub fn set_collapsed(&self, collapsed: bool) {
        let mut classes = self.classes.get();
        classes.set(NavClasses::COLLAPSED, collapsed);
        if classes != self.classes.get() {
            self.classes.set(classes);
            self.surface.set_classes(classes);
            flush_sync();
        }
    }

    pub fn classes(&self) -> NavClasses {
        self.classes.get()
    }

    /// Reactive handle on the class set.
    pub fn classes_signal(&self) -> Signal<NavClasses> {
        self.classes.clone()
    }

    /// Leading-edge debounce: the first resize in a quiet window applies
    /// immediately, the rest are dropped until the window expires.
    fn on_resize(self: &Rc<Self>, width: f64, timers: &TimerQueue) {
        if self.debounce_gate.replace(true) {
            return;
        }
        if width > self.config.desktop_breakpoint {
            self.set_collapsed(false);
        }
        let navbar = self.clone();
        timers.schedule(self.config.resize_quiet, move |_| {
            navbar.debounce_gate.set(false);
        });
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn setup() -> (EventBus, TimerQueue, Rc<RecordingSurface>, Rc<Navbar>) {
        let bus = EventBus::new();
        let timers = TimerQueue::default();
        let surface = RecordingSurface::new();
        let navbar = Navbar::new(surface.clone(), NavbarConfig::default());
        let cleanups = navbar.attach(&bus, &timers);
        std::mem::forget(cleanups);
        (bus, timers, surface, navbar)
    }

    #[test]
    fn test_shrinks_past_threshold() {
        let (bus, _timers, surface, navbar) = setup();

        bus.emit_scroll(50.0);
        assert!(!navbar.classes().contains(NavClasses::SHRINK));

        bus.emit_scroll(150.0);
        assert!(navbar.classes().contains(NavClasses::SHRINK));
        assert_eq!(surface.last_classes(), Some(NavClasses::SHRINK));
    }

    #[test]
    fn test_expands_back_at_top() {
        let (bus, _timers, surface, navbar) = setup();

        bus.emit_scroll(500.0);
        bus.emit_scroll(0.0);

        assert!(!navbar.classes().contains(NavClasses::SHRINK));
        assert_eq!(surface.last_classes(), Some(NavClasses::empty()));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let (bus, _timers, _surface, navbar) = setup();

        bus.emit_scroll(100.0);
        assert!(!navbar.classes().contains(NavClasses::SHRINK));

        bus.emit_scroll(100.5);
        assert!(navbar.classes().contains(NavClasses::SHRINK));
    }

    #[test]
    fn test_collapse_preserves_shrink() {
        let (bus, _timers, _surface, navbar) = setup();

        bus.emit_scroll(500.0);
        navbar.set_collapsed(true);

        assert_eq!(
            navbar.classes(),
            NavClasses::SHRINK | NavClasses::COLLAPSED
        );
    }

    #[test]
    fn test_desktop_resize_closes_collapse() {
        let (bus, _timers, _surface, navbar) = setup();

        navbar.set_collapsed(true);
        bus.emit_resize(1200.0);

        assert!(!navbar.classes().contains(NavClasses::COLLAPSED));
    }

    #[test]
    fn test_narrow_resize_leaves_collapse() {
        let (bus, _timers, _surface, navbar) = setup();

        navbar.set_collapsed(true);
        bus.emit_resize(600.0);

        assert!(navbar.classes().contains(NavClasses::COLLAPSED));
    }

    #[test]
    fn test_breakpoint_width_itself_is_still_mobile() {
        let (bus, timers, _surface, navbar) = setup();

        navbar.set_collapsed(true);
        bus.emit_resize(991.0);
        assert!(navbar.classes().contains(NavClasses::COLLAPSED));

        timers.advance(Duration::from_millis(250));
        bus.emit_resize(992.0);
        assert!(!navbar.classes().contains(NavClasses::COLLAPSED));
    }

    #[test]
    fn test_resize_debounce_leading_edge() {
        let (bus, timers, _surface, navbar) = setup();

        // First resize in the window applies, the rest are dropped.
        navbar.set_collapsed(true);
        bus.emit_resize(1200.0);
        assert!(!navbar.classes().contains(NavClasses::COLLAPSED));

        navbar.set_collapsed(true);
        bus.emit_resize(1200.0);
        assert!(navbar.classes().contains(NavClasses::COLLAPSED));

        // After the quiet window a new resize applies again.
        timers.advance(Duration::from_millis(250));
        bus.emit_resize(1200.0);
        assert!(!navbar.classes().contains(NavClasses::COLLAPSED));
    }

    #[test]
    fn test_no_redundant_surface_writes() {
        let (bus, _timers, surface, _navbar) = setup();
        let baseline = surface.write_count();

        // Repeated offsets on the same side of the threshold write nothing.
        bus.emit_scroll(200.0);
        let after_shrink = surface.write_count();
        bus.emit_scroll(300.0);
        bus.emit_scroll(400.0);

        assert!(after_shrink > baseline);
        assert_eq!(surface.write_count(), after_shrink);
    }
}
