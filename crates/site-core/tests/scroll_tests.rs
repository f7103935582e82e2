use site_core::scroll::{ScrollModel, SectionBounds};

fn model() -> ScrollModel {
    let mut m = ScrollModel::new();
    m.set_sections(vec![
        SectionBounds {
            id: "a".into(),
            top: 0.0,
            height: 500.0,
        },
        SectionBounds {
            id: "b".into(),
            top: 500.0,
            height: 500.0,
        },
    ]);
    m
}

#[test]
fn header_flips_strictly_above_threshold() {
    let m = model();
    assert!(!m.derive(0.0).header_scrolled);
    assert!(!m.derive(100.0).header_scrolled, "100 itself is not scrolled");
    assert!(m.derive(101.0).header_scrolled);
}

#[test]
fn parallax_offset_is_half_the_scroll() {
    let m = model();
    assert_eq!(m.derive(240.0).parallax_offset, 120.0);
    assert_eq!(m.derive(0.0).parallax_offset, 0.0);
}

#[test]
fn active_section_follows_the_probe_line() {
    let m = model();
    assert_eq!(m.active_section(0.0), Some(0));
    assert_eq!(m.active_section(400.0), Some(1));
    assert_eq!(m.active_section(1000.0), None, "past both sections");
}

#[test]
fn section_ranges_are_half_open() {
    let m = model();
    // probe = 350 + 150 lands exactly on the start of "b"
    assert_eq!(m.active_section(350.0), Some(1));
    assert_eq!(m.active_section(349.0), Some(0));
}

#[test]
fn section_id_resolves_the_active_index() {
    let m = model();
    let state = m.derive(400.0);
    assert_eq!(state.active_section.and_then(|i| m.section_id(i)), Some("b"));
}

#[test]
fn empty_cache_derives_no_active_section() {
    let m = ScrollModel::new();
    let state = m.derive(300.0);
    assert_eq!(state.active_section, None);
    assert!(state.header_scrolled);
}

#[test]
fn header_height_is_cached() {
    let mut m = ScrollModel::new();
    m.set_header_height(64.0);
    assert_eq!(m.header_height(), 64.0);
}
