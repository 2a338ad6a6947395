//! Folio Motion - Reactive behavior engine for portfolio pages
//!
//! Headless controllers for the interactive behavior of a single-page
//! portfolio: scroll-spy navigation highlighting, a typewriter role
//! animation, language switching over JSON catalogs, navbar shrink and
//! collapse, parallax, one-shot reveals, smooth anchor scrolling, an email
//! copy flow, and a preloader phase machine.
//!
//! Nothing here touches a real page. Hosts feed events in through an
//! [`EventBus`](events::EventBus), drive time through a
//! [`TimerQueue`](timer::TimerQueue), and receive output through the narrow
//! traits in [`surface`]. Tests drive the same seams with synthetic events
//! and a recording surface.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::rc::Rc;
//! use folio_motion::clipboard::BufferClipboard;
//! use folio_motion::i18n::{Language, MemoryStore, StaticSource};
//! use folio_motion::page::{PageConfig, PageSurfaces, mount};
//! use folio_motion::surface::RecordingSurface;
//! use folio_motion::types::{Section, Viewport};
//!
//! let surface = RecordingSurface::new();
//! let handle = mount(
//!     PageConfig {
//!         sections: vec![Section::new("home", 0.0, 600.0)],
//!         viewport: Viewport::default(),
//!         role_keys: vec!["hero.roles.0".into()],
//!         email_address: "me@example.com".into(),
//!         ..PageConfig::default()
//!     },
//!     PageSurfaces::uniform(surface.clone()),
//!     Rc::new(StaticSource::new().with_json(
//!         Language::Es,
//!         r#"{"hero":{"roles":["Desarrollador"]}}"#,
//!     )?),
//!     Rc::new(MemoryStore::default()),
//!     Rc::new(BufferClipboard::new()),
//! )?;
//!
//! handle.bus().emit_scroll(0.0);
//! handle.bus().run_frame();
//! assert_eq!(handle.scrollspy().active(), Some("home".to_string()));
//! # Ok::<(), folio_motion::i18n::I18nError>(())
//! ```

pub mod clipboard;
pub mod events;
pub mod i18n;
pub mod page;
pub mod scrollspy;
pub mod surface;
pub mod timer;
pub mod types;
pub mod typewriter;

// Re-export the main entry points.
pub use events::{Cleanup, EventBus};
pub use i18n::{Catalog, I18n, I18nError, Language};
pub use page::{PageConfig, PageHandle, PageSurfaces, mount};
pub use scrollspy::{ScrollSpy, ScrollSpyConfig};
pub use surface::{
    ClassSurface, NavSurface, RecordingSurface, RevealSurface, ScrollSurface, SurfaceWrite,
    TextSurface, TransformSurface,
};
pub use timer::{TimerHandle, TimerQueue};
pub use types::{IntersectionEntry, NavClasses, Section, Viewport};
pub use typewriter::task::TypewriterHandle;
pub use typewriter::{Typewriter, TypewriterConfig};
