//! Event Bus - Page event source and frame scheduling.
//!
//! An explicit event source the controllers subscribe against, instead of
//! hidden global listeners. The host forwards its real events (scroll offset,
//! intersection records, viewport resize, the one-shot load event) into the
//! bus; tests inject synthetic streams the same way.
//!
//! # API
//!
//! - `on_scroll` / `emit_scroll` - vertical scroll offset stream
//! - `on_intersections` / `emit_intersections` - visibility records
//! - `on_language` / `emit_language` - language-switch notifications
//! - `on_resize` / `emit_resize` - viewport width changes
//! - `on_load` / `emit_load` - one-shot page load
//! - `request_frame` / `run_frame` - animation-frame scheduling
//!
//! Every `on_*` returns a cleanup closure that unsubscribes the handler.
//!
//! # Frame scheduling
//!
//! `request_frame` queues a one-shot callback for the NEXT `run_frame` call.
//! Controllers gate their per-scroll recomputation behind a pending flag plus
//! `request_frame`, so any number of scroll events within one frame collapse
//! into a single recomputation. Callbacks that request another frame during
//! `run_frame` land in the following frame, matching animation-frame
//! semantics.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{Signal, flush_sync, signal};

use crate::i18n::Language;
use crate::types::IntersectionEntry;

/// Cleanup closure returned by subscriptions. Call to unsubscribe.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Registry
// =============================================================================

struct BusInner {
    scroll: Vec<(usize, Rc<dyn Fn(f64)>)>,
    intersection: Vec<(usize, Rc<dyn Fn(&[IntersectionEntry])>)>,
    language: Vec<(usize, Rc<dyn Fn(Language)>)>,
    resize: Vec<(usize, Rc<dyn Fn(f64)>)>,
    load: Vec<Box<dyn FnOnce()>>,
    frame: Vec<Box<dyn FnOnce()>>,
    next_id: usize,
}

impl BusInner {
    fn new() -> Self {
        Self {
            scroll: Vec::new(),
            intersection: Vec::new(),
            language: Vec::new(),
            resize: Vec::new(),
            load: Vec::new(),
            frame: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

// =============================================================================
// EventBus
// =============================================================================

/// Page event source. Clones share the same registries and signals.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<BusInner>>,
    scroll_offset: Signal<f64>,
    viewport_width: Signal<f64>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner::new())),
            scroll_offset: signal(0.0),
            viewport_width: signal(0.0),
        }
    }

    /// Last emitted scroll offset.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset.get()
    }

    /// Reactive handle on the scroll offset (for deriveds).
    pub fn scroll_offset_signal(&self) -> Signal<f64> {
        self.scroll_offset.clone()
    }

    /// Last emitted viewport width.
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width.get()
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Subscribe to scroll offset events.
    pub fn on_scroll(&self, handler: impl Fn(f64) + 'static) -> Cleanup {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id();
            inner.scroll.push((id, Rc::new(handler)));
            id
        };
        let inner = self.inner.clone();
        Box::new(move || {
            inner.borrow_mut().scroll.retain(|(h, _)| *h != id);
        })
    }

    /// Subscribe to intersection events.
    pub fn on_intersections(
        &self,
        handler: impl Fn(&[IntersectionEntry]) + 'static,
    ) -> Cleanup {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id();
            inner.intersection.push((id, Rc::new(handler)));
            id
        };
        let inner = self.inner.clone();
        Box::new(move || {
            inner.borrow_mut().intersection.retain(|(h, _)| *h != id);
        })
    }

    /// Subscribe to language-switch notifications.
    pub fn on_language(&self, handler: impl Fn(Language) + 'static) -> Cleanup {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id();
            inner.language.push((id, Rc::new(handler)));
            id
        };
        let inner = self.inner.clone();
        Box::new(move || {
            inner.borrow_mut().language.retain(|(h, _)| *h != id);
        })
    }

    /// Subscribe to viewport width changes.
    pub fn on_resize(&self, handler: impl Fn(f64) + 'static) -> Cleanup {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id();
            inner.resize.push((id, Rc::new(handler)));
            id
        };
        let inner = self.inner.clone();
        Box::new(move || {
            inner.borrow_mut().resize.retain(|(h, _)| *h != id);
        })
    }

    /// Subscribe to the one-shot load event. Handlers are consumed when the
    /// event fires; handlers registered after the fact never run.
    pub fn on_load(&self, handler: impl FnOnce() + 'static) {
        self.inner.borrow_mut().load.push(Box::new(handler));
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Emit a scroll offset event to all live handlers.
    pub fn emit_scroll(&self, offset: f64) {
        self.scroll_offset.set(offset);
        for handler in self.snapshot_scroll() {
            handler(offset);
        }
        flush_sync();
    }

    /// Emit a batch of intersection records.
    pub fn emit_intersections(&self, entries: &[IntersectionEntry]) {
        let handlers: Vec<_> = self
            .inner
            .borrow()
            .intersection
            .iter()
            .map(|(_, h)| h.clone())
            .collect();
        for handler in handlers {
            handler(entries);
        }
        flush_sync();
    }

    /// Emit a language-switch notification.
    pub fn emit_language(&self, language: Language) {
        let handlers: Vec<_> = self
            .inner
            .borrow()
            .language
            .iter()
            .map(|(_, h)| h.clone())
            .collect();
        for handler in handlers {
            handler(language);
        }
        flush_sync();
    }

    /// Emit a viewport width change.
    pub fn emit_resize(&self, width: f64) {
        self.viewport_width.set(width);
        let handlers: Vec<_> = self
            .inner
            .borrow()
            .resize
            .iter()
            .map(|(_, h)| h.clone())
            .collect();
        for handler in handlers {
            handler(width);
        }
        flush_sync();
    }

    /// Fire the one-shot load event, consuming its handlers.
    pub fn emit_load(&self) {
        let handlers = std::mem::take(&mut self.inner.borrow_mut().load);
        for handler in handlers {
            handler();
        }
        flush_sync();
    }

    // -------------------------------------------------------------------------
    // Frames
    // -------------------------------------------------------------------------

    /// Queue a one-shot callback for the next animation frame.
    pub fn request_frame(&self, callback: impl FnOnce() + 'static) {
        self.inner.borrow_mut().frame.push(Box::new(callback));
    }

    /// Run one animation frame: drain and execute every queued callback,
    /// then flush reactive effects so surface writes land within the frame.
    ///
    /// Callbacks queued during the run execute on the NEXT frame.
    pub fn run_frame(&self) {
        let callbacks = std::mem::take(&mut self.inner.borrow_mut().frame);
        for callback in callbacks {
            callback();
        }
        flush_sync();
    }

    /// Whether any frame callback is queued.
    pub fn has_pending_frame(&self) -> bool {
        !self.inner.borrow().frame.is_empty()
    }

    fn snapshot_scroll(&self) -> Vec<Rc<dyn Fn(f64)>> {
        self.inner
            .borrow()
            .scroll
            .iter()
            .map(|(_, h)| h.clone())
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
