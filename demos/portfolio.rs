//! Portfolio Example - A simulated page session
//!
//! This example demonstrates basic usage of the folio-motion controllers:
//! - Mounting the full controller set over a recording surface
//! - Driving scroll, frame, and timer events by hand
//! - Switching language mid-session
//!
//! Run with: cargo run --example portfolio

use std::rc::Rc;
use std::time::Duration;

use folio_motion::clipboard::BufferClipboard;
use folio_motion::i18n::{Language, MemoryStore, StaticSource};
use folio_motion::page::{PageConfig, PageSurfaces, mount};
use folio_motion::surface::RecordingSurface;
use folio_motion::types::{Section, Viewport};

fn main() -> Result<(), folio_motion::I18nError> {
    println!("=== folio-motion Portfolio Example ===\n");

    let source = StaticSource::new()
        .with_json(
            Language::Es,
            r#"{"hero":{"roles":["Desarrollador","Fotógrafo"]}}"#,
        )?
        .with_json(
            Language::En,
            r#"{"hero":{"roles":["Developer","Photographer"]}}"#,
        )?;

    let surface = RecordingSurface::new();
    let page = mount(
        PageConfig {
            sections: vec![
                Section::new("home", 0.0, 600.0),
                Section::new("about", 600.0, 600.0),
                Section::new("projects", 1200.0, 600.0),
            ],
            viewport: Viewport {
                height: 600.0,
                nav_height: 80.0,
            },
            role_keys: vec!["hero.roles.0".into(), "hero.roles.1".into()],
            email_address: "hola@example.com".into(),
            reveal_ids: vec!["card-1".into()],
            initial_locale: Some("es-ES".into()),
            default_language: Language::Es,
        },
        PageSurfaces::uniform(surface.clone()),
        Rc::new(source),
        Rc::new(MemoryStore::default()),
        Rc::new(BufferClipboard::new()),
    )?;

    println!("Mounted in {}", page.i18n().language());
    println!("Typewriter shows: {:?}", page.typewriter().text());

    // Scroll down the page one frame at a time.
    for offset in [0.0, 400.0, 650.0, 1300.0] {
        page.bus().emit_scroll(offset);
        page.bus().run_frame();
        println!(
            "scroll {:>6}px -> active section {:?}, navbar {:?}",
            offset,
            page.scrollspy().active(),
            page.navbar().classes(),
        );
    }

    // Let the typewriter finish its first word.
    page.timers().advance(Duration::from_millis(1200));
    println!("\nAfter 1.2s: typewriter shows {:?}", page.typewriter().text());

    // Switch language; the role list swaps at the next word.
    page.switch_language(Language::En)?;
    page.timers().advance(Duration::from_millis(5000));
    println!(
        "After switching to en: typewriter shows {:?}",
        page.typewriter().text()
    );

    // Copy the email address.
    println!("\nEmail click -> {:?}", page.email().click());

    println!("\nSurface writes recorded: {}", surface.write_count());

    page.unmount();
    Ok(())
}
