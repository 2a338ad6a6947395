//! Reveal - One-shot fade-in of elements entering the viewport
//!
//! Elements registered for reveal stay hidden until an intersection record
//! shows enough of them on screen, then reveal exactly once. Scrolling back
//! past a revealed element never re-hides or re-reveals it.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::events::{Cleanup, EventBus};
use crate::surface::RevealSurface;
use crate::types::IntersectionEntry;

#[derive(Debug, Clone)]
pub struct RevealConfig {
    /// Visible ratio at which an element reveals.
    pub min_ratio: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { min_ratio: 0.1 }
    }
}

pub struct Reveal {
    pending: RefCell<HashSet<String>>,
    surface: Rc<dyn RevealSurface>,
    config: RevealConfig,
}

impl Reveal {
    pub fn new(
        ids: impl IntoIterator<Item = String>,
        surface: Rc<dyn RevealSurface>,
        config: RevealConfig,
    ) -> Rc<Self> {
        Rc::new(Self {
            pending: RefCell::new(ids.into_iter().collect()),
            surface,
            config,
        })
    }

    pub fn attach(self: &Rc<Self>, bus: &EventBus) -> Vec<Cleanup> {
        let reveal = self.clone();
        let intersections = bus.on_intersections(move |entries| {
            reveal.on_intersections(entries);
        });
        vec![intersections]
    }

    pub fn on_intersections(&self, entries: &[IntersectionEntry]) {
        for entry in entries {
            if !entry.is_intersecting || entry.ratio < self.config.min_ratio {
                continue;
            }
            // remove() doubles as the one-shot guard.
            if self.pending.borrow_mut().remove(&entry.id) {
                self.surface.reveal(&entry.id);
            }
        }
    }

    /// Elements still waiting to reveal.
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }
}
