use super::*;
use crate::kernel::services::ports::IndicatorSettings;

#[test]
fn new_state_starts_idle() {
    let state = WidgetState::new(&IndicatorSettings::default().presets, Some(10));
    assert!(state.input.text.is_empty());
    assert!(!state.input.focused);
    assert!(!state.dropdown.open);
    assert_eq!(state.dropdown.selected, 0);
    assert_eq!(state.dropdown.options.len(), 3);
    assert_eq!(state.dropdown.selected_period(), 14);
    assert_eq!(state.active_tab, DashboardTab::Quote);
    assert!(state.hover.is_empty());
    assert!(state.log.is_empty());
    assert!(state.in_flight.is_empty());
}

#[test]
fn backspace_on_empty_input_is_noop() {
    let mut input = TextInputState::default();
    assert!(!input.backspace());
    input.push_str("MSFT");
    assert!(input.backspace());
    assert_eq!(input.text, "MSF");
}

#[test]
fn backspace_removes_whole_grapheme() {
    let mut input = TextInputState::default();
    input.push_str("Ae\u{301}");
    assert!(input.backspace());
    assert_eq!(input.text, "A");
}

#[test]
fn selected_period_falls_back_without_options() {
    let dropdown = DropdownState::default();
    assert_eq!(dropdown.selected_period(), 14);
}

#[test]
fn tabs_cycle_and_index() {
    assert_eq!(DashboardTab::from_index(2), Some(DashboardTab::Indicators));
    assert_eq!(DashboardTab::from_index(3), None);
    assert_eq!(DashboardTab::Indicators.next(), DashboardTab::Quote);
    for (i, tab) in DashboardTab::ALL.iter().enumerate() {
        assert_eq!(tab.index(), i);
    }
}

#[test]
fn log_evicts_oldest_lines_over_capacity() {
    let mut log = LogState::new(Some(3));
    for i in 0..5 {
        log.push_line(format!("line {i}"));
    }
    assert_eq!(log.len(), 3);
    assert_eq!(log.evicted(), 2);
    assert_eq!(log.lines().collect::<Vec<_>>(), ["line 2", "line 3", "line 4"]);
}

#[test]
fn unlimited_log_keeps_everything() {
    let mut log = LogState::new(None);
    for i in 0..5000 {
        log.push_line(i.to_string());
    }
    assert_eq!(log.len(), 5000);
    assert_eq!(log.evicted(), 0);
}

#[test]
fn push_block_splits_lines() {
    let mut log = LogState::new(None);
    log.push_block("{\r\n  \"symbol\": \"X\"\n}\n");
    assert_eq!(log.lines().collect::<Vec<_>>(), ["{", "  \"symbol\": \"X\"", "}"]);
}

#[test]
fn tail_returns_newest_lines_in_order() {
    let mut log = LogState::new(None);
    for s in ["a", "b", "c", "d"] {
        log.push_line(s);
    }
    assert_eq!(log.tail(2).collect::<Vec<_>>(), ["c", "d"]);
    assert_eq!(log.tail(10).count(), 4);
    assert_eq!(log.last(), Some("d"));
}
