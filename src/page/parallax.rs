//! Parallax - Hero background offset
//!
//! Translates the hero background at half the scroll speed while any part of
//! the hero is still on screen. Once the page scrolls past a full viewport
//! height the hero is gone, so updates stop and whatever offset was last
//! written stays put. Recomputation is frame-gated like the scroll spy, and
//! the surface only hears about changed values.

use std::cell::Cell;
use std::rc::Rc;

use crate::events::{Cleanup, EventBus};
use crate::surface::TransformSurface;

/// Background translation per scroll pixel.
const PARALLAX_SPEED: f64 = 0.5;

pub struct Parallax {
    surface: Rc<dyn TransformSurface>,
    viewport_height: Cell<f64>,
    frame_pending: Cell<bool>,
    latest_offset: Cell<f64>,
    last_written: Cell<Option<f64>>,
}

impl Parallax {
    pub fn new(surface: Rc<dyn TransformSurface>, viewport_height: f64) -> Rc<Self> {
        Rc::new(Self {
            surface,
            viewport_height: Cell::new(viewport_height),
            frame_pending: Cell::new(false),
            latest_offset: Cell::new(0.0),
            last_written: Cell::new(None),
        })
    }

    pub fn attach(self: &Rc<Self>, bus: &EventBus) -> Vec<Cleanup> {
        let parallax = self.clone();
        let bus_clone = bus.clone();
        let scroll = bus.on_scroll(move |offset| {
            parallax.latest_offset.set(offset);
            if parallax.frame_pending.replace(true) {
                return;
            }
            let parallax = parallax.clone();
            bus_clone.request_frame(move || {
                parallax.frame_pending.set(false);
                parallax.apply();
            });
        });
        vec![scroll]
    }

    pub fn set_viewport_height(&self, height: f64) {
        self.viewport_height.set(height);
    }

    fn apply(&self) {
        let offset = self.latest_offset.get();
        if offset >= self.viewport_height.get() {
            return;
        }
        let translated = offset * PARALLAX_SPEED;
        if self.last_written.get() == Some(translated) {
            return;
        }
        self.last_written.set(Some(translated));
        self.surface.set_offset_y(translated);
    }
}
