use super::*;
use crate::kernel::services::ports::IndicatorSettings;
use crate::kernel::state::DashboardTab;

fn new_store() -> Store {
    Store::new(WidgetState::new(
        &IndicatorSettings::default().presets,
        Some(100),
    ))
}

fn type_text(store: &mut Store, text: &str) {
    store.dispatch(Action::FocusInput { focused: true });
    store.dispatch(Action::InputAppend(text.to_string()));
}

fn request(symbol: &str, kind: FetchKind) -> FetchRequest {
    FetchRequest::new(symbol, kind).unwrap()
}

const CLOSES_JSON: &str = r#"{"symbol":"MSFT","currency":"USD","last_price":46.0,"previous_close":46.75,"rsi":12.0,
"closes":[44,44.25,44.5,43.75,44.5,44.25,45,47,46.75,46]}"#;

#[test]
fn typing_and_backspace_edit_the_input() {
    let mut store = new_store();
    type_text(&mut store, "MSFT");
    let result = store.dispatch(Action::InputBackspace);
    assert!(result.state_changed);
    assert_eq!(store.state().input.text, "MSF");
}

#[test]
fn text_is_ignored_while_unfocused() {
    let mut store = new_store();
    let result = store.dispatch(Action::InputAppend("X".to_string()));
    assert!(!result.state_changed);
    assert!(store.state().input.text.is_empty());
}

#[test]
fn empty_symbol_logs_and_emits_no_effect() {
    let mut store = new_store();
    type_text(&mut store, "$ !");
    let result = store.dispatch(Action::RequestFetch {
        kind: FetchKind::Quote,
    });
    assert!(result.effects.is_empty());
    assert_eq!(store.state().log.last(), Some("No symbol provided"));
    assert!(store.state().in_flight.is_empty());
}

#[test]
fn fetch_request_uses_sanitized_symbol() {
    let mut store = new_store();
    type_text(&mut store, "BRK.B;rm -rf");
    let result = store.dispatch(Action::RequestFetch {
        kind: FetchKind::Quote,
    });
    assert_eq!(
        result.effects,
        vec![Effect::Fetch(request("BRK.Brm-rf", FetchKind::Quote))]
    );
    assert!(store.state().is_in_flight(FetchKind::Quote));
}

#[test]
fn second_fetch_of_same_kind_is_refused_while_in_flight() {
    let mut store = new_store();
    type_text(&mut store, "SPY");
    let first = store.dispatch(Action::RequestFetch {
        kind: FetchKind::Options,
    });
    assert_eq!(first.effects.len(), 1);

    let second = store.dispatch(Action::RequestFetch {
        kind: FetchKind::Options,
    });
    assert!(second.effects.is_empty());
    assert_eq!(
        store.state().log.last(),
        Some("A options fetch is already running")
    );

    // A different kind is independent.
    let quote = store.dispatch(Action::RequestFetch {
        kind: FetchKind::Quote,
    });
    assert_eq!(quote.effects.len(), 1);
}

#[test]
fn completion_clears_in_flight_and_logs_output() {
    let mut store = new_store();
    type_text(&mut store, "MSFT");
    store.dispatch(Action::RequestFetch {
        kind: FetchKind::Quote,
    });
    store.dispatch(Action::FetchCompleted {
        request: request("MSFT", FetchKind::Quote),
        outcome: FetchOutcome::Success {
            output: "line one\nline two\n".to_string(),
            partial: false,
        },
    });

    let state = store.state();
    assert!(state.in_flight.is_empty());
    let tail: Vec<&str> = state.log.tail(3).collect();
    assert_eq!(tail, ["quote output for MSFT:", "line one", "line two"]);
    // Free text never becomes a snapshot.
    assert!(state.quote.is_none());
}

#[test]
fn partial_output_is_logged_with_marker() {
    let mut store = new_store();
    store.dispatch(Action::FetchCompleted {
        request: request("AAPL", FetchKind::Options),
        outcome: FetchOutcome::Success {
            output: "partial".to_string(),
            partial: true,
        },
    });
    let tail: Vec<&str> = store.state().log.tail(2).collect();
    assert_eq!(
        tail,
        ["options output for AAPL (exit status non-zero):", "partial"]
    );
}

#[test]
fn failures_are_logged_and_not_fatal() {
    let mut store = new_store();
    store.dispatch(Action::FetchCompleted {
        request: request("AAPL", FetchKind::Quote),
        outcome: FetchOutcome::NonZeroExit(Some(1)),
    });
    assert_eq!(
        store.state().log.last(),
        Some("quote fetch exited with code 1")
    );

    store.dispatch(Action::FetchCompleted {
        request: request("AAPL", FetchKind::Quote),
        outcome: FetchOutcome::LaunchFailure("not found".to_string()),
    });
    assert_eq!(
        store.state().log.last(),
        Some("Failed to start quote fetch: not found")
    );
}

#[test]
fn quote_json_becomes_snapshot_and_feeds_rsi() {
    let mut store = new_store();
    // Period 5 preset so the sample series is long enough.
    store.state.dropdown.options[1].period = 5;
    store.dispatch(Action::DropdownSelect { index: 1 });
    store.dispatch(Action::FetchCompleted {
        request: request("MSFT", FetchKind::Quote),
        outcome: FetchOutcome::Success {
            output: CLOSES_JSON.to_string(),
            partial: false,
        },
    });

    let state = store.state();
    assert_eq!(state.quote.as_ref().map(|q| q.symbol.as_str()), Some("MSFT"));
    let rsi = state.rsi.unwrap();
    assert!((rsi - 61.54542369046272).abs() < 1e-9);
}

#[test]
fn selecting_a_longer_period_clears_rsi_when_data_is_short() {
    let mut store = new_store();
    store.state.dropdown.options[1].period = 5;
    store.dispatch(Action::DropdownSelect { index: 1 });
    store.dispatch(Action::FetchCompleted {
        request: request("MSFT", FetchKind::Quote),
        outcome: FetchOutcome::Success {
            output: CLOSES_JSON.to_string(),
            partial: false,
        },
    });
    assert!(store.state().rsi.is_some());

    // RSI 21 needs 22 closes.
    store.dispatch(Action::DropdownSelect { index: 2 });
    assert_eq!(store.state().dropdown.selected, 2);
    assert!(!store.state().dropdown.open);
    assert_eq!(store.state().rsi, None);
}

#[test]
fn reported_rsi_is_used_without_closes() {
    let mut store = new_store();
    store.dispatch(Action::FetchCompleted {
        request: request("MSFT", FetchKind::Quote),
        outcome: FetchOutcome::Success {
            output: r#"{"symbol":"MSFT","rsi":58.5}"#.to_string(),
            partial: false,
        },
    });
    assert_eq!(store.state().rsi, Some(58.5));

    store.dispatch(Action::DropdownSelect { index: 1 });
    assert_eq!(store.state().rsi, None);
}

#[test]
fn options_json_becomes_snapshot() {
    let mut store = new_store();
    store.dispatch(Action::FetchCompleted {
        request: request("SPY", FetchKind::Options),
        outcome: FetchOutcome::Success {
            output: r#"{"symbol":"SPY","straddle_rows":3,"stacked_rows":6,"preview":{}}"#
                .to_string(),
            partial: false,
        },
    });
    let options = store.state().options.as_ref().unwrap();
    assert_eq!(options.straddle_rows, 3);
    assert_eq!(options.stacked_rows, 6);
}

#[test]
fn dropdown_select_out_of_range_is_ignored() {
    let mut store = new_store();
    store.dispatch(Action::DropdownOpen);
    let result = store.dispatch(Action::DropdownSelect { index: 9 });
    assert!(!result.state_changed);
    assert!(store.state().dropdown.open);
}

#[test]
fn tab_and_hover_report_changes() {
    let mut store = new_store();
    assert!(!store
        .dispatch(Action::SetActiveTab {
            tab: DashboardTab::Quote
        })
        .state_changed);
    assert!(store
        .dispatch(Action::SetActiveTab {
            tab: DashboardTab::Options
        })
        .state_changed);

    let hover = crate::kernel::regions::HoverSet::default();
    assert!(!store
        .dispatch(Action::SetHover {
            pointer: None,
            hover: hover.clone(),
        })
        .state_changed);
}
