//! Page - Controller assembly and lifecycle
//!
//! [`mount`] wires every page behavior to one event bus and one timer queue:
//! language setup first (the typewriter roles come from the catalog), then
//! the typewriter loop, scroll spy, navbar, parallax, reveal, anchors, email
//! copy, and preloader. The returned [`PageHandle`] exposes the controllers
//! and tears the page down on [`unmount`](PageHandle::unmount).
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use folio_motion::clipboard::BufferClipboard;
//! use folio_motion::i18n::{Language, MemoryStore, StaticSource};
//! use folio_motion::page::{PageConfig, PageSurfaces, mount};
//! use folio_motion::surface::RecordingSurface;
//!
//! let surface = RecordingSurface::new();
//! let handle = mount(
//!     PageConfig::default(),
//!     PageSurfaces::uniform(surface),
//!     Rc::new(StaticSource::new().with_json(Language::Es, "{}")?),
//!     Rc::new(MemoryStore::default()),
//!     Rc::new(BufferClipboard::new()),
//! )?;
//! handle.bus().emit_scroll(0.0);
//! handle.bus().run_frame();
//! # Ok::<(), folio_motion::i18n::I18nError>(())
//! ```

pub mod anchors;
pub mod email;
pub mod navbar;
pub mod parallax;
pub mod preloader;
pub mod reveal;

use std::cell::RefCell;
use std::rc::Rc;

use crate::clipboard::Clipboard;
use crate::events::{Cleanup, EventBus};
use crate::i18n::{I18n, I18nError, Language, PreferenceStore, TranslationSource};
use crate::scrollspy::{ScrollSpy, ScrollSpyConfig};
use crate::surface::{
    ClassSurface, NavSurface, RevealSurface, ScrollSurface, TextSurface, TransformSurface,
};
use crate::timer::TimerQueue;
use crate::types::{Section, Viewport};
use crate::typewriter::task::{self, TypewriterHandle};
use crate::typewriter::{Typewriter, TypewriterConfig};

pub use anchors::AnchorNav;
pub use email::{CopyOutcome, EmailCopy};
pub use navbar::{Navbar, NavbarConfig};
pub use parallax::Parallax;
pub use preloader::{Preloader, PreloaderPhase};
pub use reveal::{Reveal, RevealConfig};

// =============================================================================
// Configuration
// =============================================================================

/// Everything the page needs to know about its content and host.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub sections: Vec<Section>,
    pub viewport: Viewport,
    /// Catalog keys resolved into the typewriter role list.
    pub role_keys: Vec<String>,
    pub email_address: String,
    /// Elements registered for one-shot reveal.
    pub reveal_ids: Vec<String>,
    /// Host locale, consulted when no preference is stored.
    pub initial_locale: Option<String>,
    pub default_language: Language,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            viewport: Viewport::default(),
            role_keys: Vec::new(),
            email_address: String::new(),
            reveal_ids: Vec::new(),
            initial_locale: None,
            default_language: Language::default(),
        }
    }
}

/// The output seams, one per concern.
#[derive(Clone)]
pub struct PageSurfaces {
    pub nav: Rc<dyn NavSurface>,
    pub typed: Rc<dyn TextSurface>,
    pub navbar: Rc<dyn ClassSurface>,
    pub hero: Rc<dyn TransformSurface>,
    pub reveal: Rc<dyn RevealSurface>,
    pub scroll: Rc<dyn ScrollSurface>,
}

impl PageSurfaces {
    /// Back every seam with one implementation (the test shape).
    pub fn uniform<S>(surface: Rc<S>) -> Self
    where
        S: NavSurface
            + TextSurface
            + ClassSurface
            + TransformSurface
            + RevealSurface
            + ScrollSurface
            + 'static,
    {
        Self {
            nav: surface.clone(),
            typed: surface.clone(),
            navbar: surface.clone(),
            hero: surface.clone(),
            reveal: surface.clone(),
            scroll: surface,
        }
    }
}

// =============================================================================
// Mount
// =============================================================================

/// Assembled page. Dropping the handle without `unmount` leaves the
/// subscriptions live.
pub struct PageHandle {
    bus: EventBus,
    timers: TimerQueue,
    i18n: Rc<I18n>,
    scrollspy: Rc<ScrollSpy>,
    navbar: Rc<Navbar>,
    typewriter: TypewriterHandle,
    email: Rc<EmailCopy>,
    preloader: Rc<Preloader>,
    anchors: AnchorNav,
    cleanups: RefCell<Vec<Cleanup>>,
}

/// Build and wire every controller.
pub fn mount(
    config: PageConfig,
    surfaces: PageSurfaces,
    source: Rc<dyn TranslationSource>,
    store: Rc<dyn PreferenceStore>,
    clipboard: Rc<dyn Clipboard>,
) -> Result<PageHandle, I18nError> {
    let bus = EventBus::new();
    let timers = TimerQueue::default();
    let mut cleanups: Vec<Cleanup> = Vec::new();

    // Language first: the typewriter roles come out of the catalog.
    let i18n = I18n::new(source, store, bus.clone(), config.default_language);
    i18n.init(config.initial_locale.as_deref())?;

    let role_keys: Vec<&str> = config.role_keys.iter().map(String::as_str).collect();
    let machine = Typewriter::new(i18n.roles(&role_keys), TypewriterConfig::default());
    let typewriter = task::spawn(machine, &timers, surfaces.typed.clone());

    // A language switch re-sources the role list at the next word.
    {
        let i18n = i18n.clone();
        let typewriter = typewriter.clone();
        let role_keys = config.role_keys.clone();
        cleanups.push(bus.on_language(move |_| {
            let keys: Vec<&str> = role_keys.iter().map(String::as_str).collect();
            typewriter.set_roles(i18n.roles(&keys));
        }));
    }

    let scrollspy = ScrollSpy::new(
        config.sections.clone(),
        config.viewport,
        ScrollSpyConfig::default(),
        surfaces.nav.clone(),
    );
    cleanups.extend(scrollspy.attach(&bus));

    let navbar = Navbar::new(surfaces.navbar.clone(), NavbarConfig::default());
    cleanups.extend(navbar.attach(&bus, &timers));

    let parallax = Parallax::new(surfaces.hero.clone(), config.viewport.height);
    cleanups.extend(parallax.attach(&bus));

    let reveal = Reveal::new(
        config.reveal_ids.clone(),
        surfaces.reveal.clone(),
        RevealConfig::default(),
    );
    cleanups.extend(reveal.attach(&bus));

    let anchors = AnchorNav::new(
        config.sections,
        config.viewport.nav_height,
        surfaces.scroll.clone(),
        Some(navbar.clone()),
    );

    let email = EmailCopy::new(config.email_address, clipboard, timers.clone());

    let preloader = Preloader::new(timers.clone());
    preloader.attach(&bus);

    Ok(PageHandle {
        bus,
        timers,
        i18n,
        scrollspy,
        navbar,
        typewriter,
        email,
        preloader,
        anchors,
        cleanups: RefCell::new(cleanups),
    })
}

impl PageHandle {
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn scrollspy(&self) -> &ScrollSpy {
        &self.scrollspy
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn typewriter(&self) -> &TypewriterHandle {
        &self.typewriter
    }

    pub fn email(&self) -> &Rc<EmailCopy> {
        &self.email
    }

    pub fn preloader(&self) -> &Preloader {
        &self.preloader
    }

    pub fn anchors(&self) -> &AnchorNav {
        &self.anchors
    }

    /// Switch the page language.
    pub fn switch_language(&self, language: Language) -> Result<Language, I18nError> {
        self.i18n.switch_language(language)
    }

    /// Stop the typewriter and drop every subscription. Idempotent.
    pub fn unmount(&self) {
        self.typewriter.cancel();
        for cleanup in self.cleanups.borrow_mut().drain(..) {
            cleanup();
        }
    }
}
