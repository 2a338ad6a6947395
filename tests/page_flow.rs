//! End-to-end page behavior over a mounted controller set.

use std::rc::Rc;
use std::time::Duration;

use folio_motion::clipboard::BufferClipboard;
use folio_motion::i18n::{Language, MemoryStore, StaticSource};
use folio_motion::page::{CopyOutcome, PageConfig, PageHandle, PageSurfaces, PreloaderPhase, mount};
use folio_motion::surface::RecordingSurface;
use folio_motion::types::{IntersectionEntry, NavClasses, Section, Viewport};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn catalogs() -> Rc<StaticSource> {
    Rc::new(
        StaticSource::new()
            .with_json(
                Language::Es,
                r#"{
                    "nav": { "home": "Inicio" },
                    "hero": { "roles": ["Desarrollador", "Fotógrafo"] }
                }"#,
            )
            .unwrap()
            .with_json(
                Language::En,
                r#"{
                    "nav": { "home": "Home" },
                    "hero": { "roles": ["Developer", "Photographer"] }
                }"#,
            )
            .unwrap(),
    )
}

fn mount_page(surface: Rc<RecordingSurface>) -> PageHandle {
    mount(
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
            reveal_ids: vec!["card-1".into(), "card-2".into()],
            initial_locale: None,
            default_language: Language::Es,
        },
        PageSurfaces::uniform(surface),
        catalogs(),
        Rc::new(MemoryStore::default()),
        Rc::new(BufferClipboard::new()),
    )
    .unwrap()
}

#[test]
fn scroll_session_keeps_one_link_active() {
    let surface = RecordingSurface::new();
    let page = mount_page(surface.clone());

    for offset in [0.0, 300.0, 650.0, 1300.0, 650.0, 0.0] {
        page.bus().emit_scroll(offset);
        page.bus().run_frame();
        assert!(surface.active_count() <= 1, "offset {offset}");
    }

    assert_eq!(page.scrollspy().active(), Some("home".to_string()));
}

#[test]
fn intersections_and_scroll_agree_on_active_section() {
    let surface = RecordingSurface::new();
    let page = mount_page(surface.clone());

    page.bus().emit_scroll(650.0);
    page.bus().run_frame();
    assert_eq!(page.scrollspy().active(), Some("about".to_string()));

    page.bus().emit_intersections(&[
        IntersectionEntry::new("about", 0.7, 0.0),
        IntersectionEntry::new("projects", 0.3, 500.0),
    ]);
    assert_eq!(page.scrollspy().active(), Some("about".to_string()));
    assert_eq!(surface.active(), vec!["about"]);
}

#[test]
fn typewriter_types_the_localized_role() {
    let surface = RecordingSurface::new();
    let page = mount_page(surface.clone());

    // Mounting runs the first tick.
    assert_eq!(surface.last_text(), Some("D".to_string()));

    // "Desarrollador" finishes after 12 more ticks of 100ms.
    page.timers().advance(ms(1200));
    assert_eq!(surface.last_text(), Some("Desarrollador".to_string()));
}

#[test]
fn language_switch_swaps_roles_at_next_word() {
    let surface = RecordingSurface::new();
    let page = mount_page(surface.clone());

    // Finish typing the first Spanish word and its pause.
    page.timers().advance(ms(1200));
    page.switch_language(Language::En).unwrap();
    assert_eq!(page.i18n().t("nav.home"), "Home");

    // The word in flight still deletes as typed.
    page.timers().advance(ms(2000)); // pause ends, first delete
    page.timers().advance(ms(12 * 50)); // delete the rest, advance

    // Next word comes from the English list.
    page.timers().advance(ms(500));
    assert_eq!(surface.last_text(), Some("P".to_string()));
}

#[test]
fn navbar_shrinks_and_anchor_click_closes_menu() {
    let surface = RecordingSurface::new();
    let page = mount_page(surface.clone());

    page.bus().emit_scroll(400.0);
    page.bus().run_frame();
    assert!(page.navbar().classes().contains(NavClasses::SHRINK));

    page.navbar().set_collapsed(true);
    let target = page.anchors().click("#about");

    assert_eq!(target, Some(520.0));
    assert_eq!(surface.scrolled_to(), vec![520.0]);
    assert!(!page.navbar().classes().contains(NavClasses::COLLAPSED));
}

#[test]
fn parallax_tracks_half_speed_until_hero_leaves() {
    let surface = RecordingSurface::new();
    let page = mount_page(surface.clone());

    page.bus().emit_scroll(300.0);
    page.bus().run_frame();
    assert_eq!(surface.last_offset(), Some(150.0));

    page.bus().emit_scroll(900.0);
    page.bus().run_frame();
    assert_eq!(surface.last_offset(), Some(150.0));
}

#[test]
fn reveals_fire_once_per_element() {
    let surface = RecordingSurface::new();
    let page = mount_page(surface.clone());

    page.bus()
        .emit_intersections(&[IntersectionEntry::new("card-1", 0.4, 400.0)]);
    page.bus()
        .emit_intersections(&[IntersectionEntry::new("card-1", 0.9, 100.0)]);
    page.bus()
        .emit_intersections(&[IntersectionEntry::new("card-2", 0.4, 450.0)]);

    assert_eq!(surface.revealed(), vec!["card-1", "card-2"]);
}

#[test]
fn email_click_copies_and_reverts() {
    let surface = RecordingSurface::new();
    let page = mount_page(surface);

    assert_eq!(page.email().click(), CopyOutcome::Copied);
    assert!(page.email().copied());

    page.timers().advance(ms(2000));
    assert!(!page.email().copied());
}

#[test]
fn preloader_fades_after_load() {
    let surface = RecordingSurface::new();
    let page = mount_page(surface);

    page.bus().emit_load();
    page.timers().advance(ms(500));
    assert_eq!(page.preloader().phase(), PreloaderPhase::Fading);
    page.timers().advance(ms(500));
    assert_eq!(page.preloader().phase(), PreloaderPhase::Removed);
}

#[test]
fn language_preference_survives_remount() {
    let store = Rc::new(MemoryStore::default());
    let surface = RecordingSurface::new();

    let config = PageConfig {
        role_keys: vec!["hero.roles.0".into()],
        default_language: Language::Es,
        ..PageConfig::default()
    };

    let page = mount(
        config.clone(),
        PageSurfaces::uniform(surface.clone()),
        catalogs(),
        store.clone(),
        Rc::new(BufferClipboard::new()),
    )
    .unwrap();
    page.switch_language(Language::En).unwrap();
    page.unmount();

    let page = mount(
        config,
        PageSurfaces::uniform(surface),
        catalogs(),
        store,
        Rc::new(BufferClipboard::new()),
    )
    .unwrap();
    assert_eq!(page.i18n().language(), Language::En);
}

#[test]
fn unmount_silences_every_controller() {
    let surface = RecordingSurface::new();
    let page = mount_page(surface.clone());

    page.unmount();
    surface.clear();

    page.bus().emit_scroll(650.0);
    page.bus().run_frame();
    page.bus()
        .emit_intersections(&[IntersectionEntry::new("card-1", 0.9, 100.0)]);
    page.timers().advance(ms(10_000));

    assert_eq!(surface.write_count(), 0);
}
