//! Section Tracking - Pure visibility scoring
//!
//! The selection logic behind the scroll-spy, kept free of state so it can
//! be tested against section layouts directly.

use crate::scrollspy::ScrollSpyConfig;
use crate::types::{IntersectionEntry, Section, Viewport};

/// Pick the intersecting record with the highest visible ratio.
///
/// Ties go to the record closest to the top of the viewport. Returns None
/// when nothing intersects.
pub fn pick_intersecting(entries: &[IntersectionEntry]) -> Option<&IntersectionEntry> {
    let mut best: Option<&IntersectionEntry> = None;
    for entry in entries.iter().filter(|e| e.is_intersecting) {
        best = match best {
            None => Some(entry),
            Some(current) => {
                if entry.ratio > current.ratio
                    || (entry.ratio == current.ratio && entry.top < current.top)
                {
                    Some(entry)
                } else {
                    Some(current)
                }
            }
        };
    }
    best
}

/// Pick the most visible section at the given scroll offset.
///
/// Visibility is the fraction of a section inside the viewport band below
/// the navigation bar (plus its margin). Sections whose top edge sits in the
/// upper half of the viewport get their score multiplied by the configured
/// bias, so the section being read wins over one that is merely taller.
/// Sections below the minimum ratio never qualify.
pub fn pick_by_visibility<'a>(
    sections: &'a [Section],
    scroll_offset: f64,
    viewport: Viewport,
    config: &ScrollSpyConfig,
) -> Option<&'a Section> {
    let clip_top = viewport.nav_height + config.nav_margin;
    let mut best: Option<&Section> = None;
    let mut best_weighted = 0.0;

    for section in sections {
        if section.height <= 0.0 {
            continue;
        }
        let rect_top = section.rect_top(scroll_offset);
        let rect_bottom = rect_top + section.height;

        let visible = (rect_bottom.min(viewport.height) - rect_top.max(clip_top)).max(0.0);
        let ratio = visible / section.height;

        let weighted = if rect_top < viewport.height * 0.5 {
            ratio * config.upper_half_bias
        } else {
            ratio
        };

        if weighted > best_weighted && ratio > config.min_visible_ratio {
            best_weighted = weighted;
            best = Some(section);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 600.0),
            Section::new("about", 600.0, 600.0),
            Section::new("projects", 1200.0, 600.0),
        ]
    }

    fn viewport() -> Viewport {
        Viewport {
            height: 600.0,
            nav_height: 80.0,
        }
    }

    #[test]
    fn test_pick_intersecting_max_ratio() {
        let entries = [
            IntersectionEntry::new("home", 0.3, 0.0),
            IntersectionEntry::new("about", 0.7, 200.0),
            IntersectionEntry::hidden("projects", 800.0),
        ];
        let best = pick_intersecting(&entries).map(|e| e.id.as_str());
        assert_eq!(best, Some("about"));
    }

    #[test]
    fn test_pick_intersecting_tie_prefers_topmost() {
        let entries = [
            IntersectionEntry::new("about", 0.5, 300.0),
            IntersectionEntry::new("home", 0.5, 0.0),
        ];
        let best = pick_intersecting(&entries).map(|e| e.id.as_str());
        assert_eq!(best, Some("home"));
    }

    #[test]
    fn test_pick_intersecting_none_visible() {
        let entries = [
            IntersectionEntry::hidden("home", -600.0),
            IntersectionEntry::hidden("about", 900.0),
        ];
        assert!(pick_intersecting(&entries).is_none());
    }

    #[test]
    fn test_visibility_at_top() {
        // Offset 0: home fills the band below the nav bar.
        let sections = sections();
        let best = pick_by_visibility(&sections, 0.0, viewport(), &ScrollSpyConfig::default());
        assert_eq!(best.map(|s| s.id.as_str()), Some("home"));
    }

    #[test]
    fn test_visibility_mid_scroll() {
        // Offset 650: about spans rect -50..550, 450px visible below the
        // 100px clip, ratio 0.75, and its top is in the upper half so the
        // bias applies. Home is almost gone, projects barely entering.
        let sections = sections();
        let best = pick_by_visibility(&sections, 650.0, viewport(), &ScrollSpyConfig::default());
        assert_eq!(best.map(|s| s.id.as_str()), Some("about"));
    }

    #[test]
    fn test_upper_half_bias_breaks_raw_ratio() {
        // Two sections with the taller one lower on screen. The bias lets
        // the section being read beat the one with more raw pixels visible.
        let sections = vec![
            Section::new("reading", 0.0, 400.0),
            Section::new("tall", 400.0, 2000.0),
        ];
        let offset = 150.0;
        // reading: rect -150..250, visible 150, ratio 0.375, biased 0.45.
        // tall: rect 250..2250, visible 350, ratio 0.175, biased 0.21.
        let best = pick_by_visibility(&sections, offset, viewport(), &ScrollSpyConfig::default());
        assert_eq!(best.map(|s| s.id.as_str()), Some("reading"));
    }

    #[test]
    fn test_min_ratio_filters_slivers() {
        // projects shows a 40px sliver at offset 700 (rect 500..1100,
        // visible 100, ratio ~0.17) but a 30px sliver at 640 stays below
        // the 0.1 floor.
        let sections = sections();
        let best = pick_by_visibility(&sections, 630.0, viewport(), &ScrollSpyConfig::default());
        assert_eq!(best.map(|s| s.id.as_str()), Some("about"));
    }

    #[test]
    fn test_zero_height_section_skipped() {
        let sections = vec![
            Section::new("empty", 0.0, 0.0),
            Section::new("real", 0.0, 600.0),
        ];
        let best = pick_by_visibility(&sections, 0.0, viewport(), &ScrollSpyConfig::default());
        assert_eq!(best.map(|s| s.id.as_str()), Some("real"));
    }

    #[test]
    fn test_nothing_qualifies() {
        // Scrolled far past every section.
        let sections = sections();
        let best = pick_by_visibility(&sections, 5000.0, viewport(), &ScrollSpyConfig::default());
        assert!(best.is_none());
    }
}
