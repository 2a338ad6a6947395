//! Anchors - Smooth in-page navigation
//!
//! Resolves an anchor href against the known section layout and scrolls the
//! page so the target lands just below the navigation bar. Clicking a link
//! also closes the mobile menu, matching what a reader expects after picking
//! a destination.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::page::navbar::Navbar;
use crate::surface::ScrollSurface;
use crate::types::Section;

/// Resolve an anchor href to a scroll target.
///
/// `"#about"` resolves to the top of the `about` section minus the nav
/// height. A bare `"#"`, an href without a fragment, or an unknown id all
/// return None.
pub fn resolve_target(sections: &[Section], href: &str, nav_height: f64) -> Option<f64> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    sections
        .iter()
        .find(|s| s.id == fragment)
        .map(|s| s.top - nav_height)
}

pub struct AnchorNav {
    sections: RefCell<Vec<Section>>,
    nav_height: Cell<f64>,
    scroll: Rc<dyn ScrollSurface>,
    navbar: Option<Rc<Navbar>>,
}

impl AnchorNav {
    pub fn new(
        sections: Vec<Section>,
        nav_height: f64,
        scroll: Rc<dyn ScrollSurface>,
        navbar: Option<Rc<Navbar>>,
    ) -> Self {
        Self {
            sections: RefCell::new(sections),
            nav_height: Cell::new(nav_height),
            scroll,
            navbar,
        }
    }

    /// Handle an anchor click. Returns the scroll target when one resolved.
    pub fn click(&self, href: &str) -> Option<f64> {
        let target = resolve_target(&self.sections.borrow(), href, self.nav_height.get())?;
        self.scroll.scroll_to(target);
        if let Some(navbar) = &self.navbar {
            navbar.set_collapsed(false);
        }
        Some(target)
    }

    pub fn set_sections(&self, sections: Vec<Section>) {
        *self.sections.borrow_mut() = sections;
    }

    pub fn set_nav_height(&self, height: f64) {
        self.nav_height.set(height);
    }
}
