use super::*;
use crate::ui::core::geom::Pos;

const TABS: [&str; 3] = ["Quote", "Options", "Indicators"];

#[test]
fn controls_do_not_overlap() {
    let layout = DashboardLayout::compute(Rect::new(0, 0, 100, 40), &TABS, 3);
    let controls = [
        layout.input,
        layout.quote_button,
        layout.options_button,
        layout.dropdown,
    ];
    for (i, a) in controls.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &controls[i + 1..] {
            assert!(!a.intersects(*b), "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn tabs_are_adjacent_and_disjoint() {
    let layout = DashboardLayout::compute(Rect::new(0, 0, 100, 40), &TABS, 3);
    assert_eq!(layout.tabs.len(), 3);
    assert_eq!(layout.tabs[0].w, 7);
    assert_eq!(layout.tabs[0].right(), layout.tabs[1].x);
    assert!(!layout.tabs[0].intersects(layout.tabs[1]));
}

#[test]
fn option_rows_drop_below_the_control() {
    let layout = DashboardLayout::compute(Rect::new(0, 0, 100, 40), &TABS, 3);
    assert_eq!(layout.dropdown_options.len(), 3);
    assert_eq!(layout.dropdown_options[0].y, layout.dropdown.bottom());
    assert_eq!(layout.dropdown_options[2].y, layout.dropdown.bottom() + 2);
    assert_eq!(layout.dropdown_options[1].x, layout.dropdown.x);
}

#[test]
fn regions_resolve_controls() {
    let layout = DashboardLayout::compute(Rect::new(0, 0, 100, 40), &TABS, 3);
    let regions = layout.regions();
    let center = |r: Rect| Pos::new(r.x + r.w / 2, r.y + r.h / 2);

    assert_eq!(regions.hit_test(center(layout.input), false), Some(RegionId::Input));
    assert_eq!(
        regions.hit_test(center(layout.quote_button), false),
        Some(RegionId::QuoteButton)
    );
    assert_eq!(
        regions.hit_test(center(layout.tabs[2]), false),
        Some(RegionId::Tab(2))
    );
    assert_eq!(
        regions.hit_test(center(layout.dropdown_options[0]), true),
        Some(RegionId::DropdownOption(0))
    );
    assert_eq!(regions.hit_test(center(layout.log), false), None);
}

#[test]
fn tiny_area_clips_everything() {
    let layout = DashboardLayout::compute(Rect::new(0, 0, 10, 2), &TABS, 3);
    assert!(layout.quote_button.is_empty());
    assert!(layout.tabs.iter().all(|t| t.is_empty()));
    assert!(layout.log.is_empty());
}
