//! Input event to action planning.
//!
//! Precedence for pointer-down:
//! 1. an open dropdown consumes the click (option row selects, anything else
//!    closes) and nothing else happens in the same event;
//! 2. otherwise focus follows the input region;
//! 3. then the highest-priority region under the pointer acts.

use crate::core::event::{InputEvent, KeyCode};
use crate::kernel::regions::{RegionId, RegionMap};
use crate::kernel::services::ports::FetchKind;
use crate::kernel::state::{DashboardTab, WidgetState};
use crate::kernel::Action;
use crate::ui::core::geom::Pos;

pub fn plan_event(event: &InputEvent, state: &WidgetState, regions: &RegionMap) -> Vec<Action> {
    match event {
        InputEvent::PointerDown(pos) => plan_pointer_down(*pos, state, regions),
        InputEvent::TextInput(text) if state.input.focused && !text.is_empty() => {
            vec![Action::InputAppend(text.clone())]
        }
        InputEvent::KeyDown(key) => plan_key(*key, state),
        InputEvent::Quit
        | InputEvent::PointerMove(_)
        | InputEvent::TextInput(_)
        | InputEvent::Resize(..) => Vec::new(),
    }
}

fn plan_pointer_down(pos: Pos, state: &WidgetState, regions: &RegionMap) -> Vec<Action> {
    if state.dropdown.open {
        return match regions.hit_test(pos, true) {
            Some(RegionId::DropdownOption(index)) => vec![Action::DropdownSelect { index }],
            _ => vec![Action::DropdownClose],
        };
    }

    let hit = regions.hit_test(pos, false);
    let mut actions = Vec::new();

    let on_input = hit == Some(RegionId::Input);
    if on_input != state.input.focused {
        actions.push(Action::FocusInput { focused: on_input });
    }

    match hit {
        Some(RegionId::Dropdown) => actions.push(Action::DropdownOpen),
        Some(RegionId::QuoteButton) => actions.push(Action::RequestFetch {
            kind: FetchKind::Quote,
        }),
        Some(RegionId::OptionsButton) => actions.push(Action::RequestFetch {
            kind: FetchKind::Options,
        }),
        Some(RegionId::Tab(index)) => {
            if let Some(tab) = DashboardTab::from_index(index) {
                actions.push(Action::SetActiveTab { tab });
            }
        }
        Some(RegionId::Input) | Some(RegionId::DropdownOption(_)) | None => {}
    }

    actions
}

fn plan_key(key: KeyCode, state: &WidgetState) -> Vec<Action> {
    match key {
        KeyCode::Esc if state.dropdown.open => vec![Action::DropdownClose],
        KeyCode::Esc if state.input.focused => vec![Action::FocusInput { focused: false }],
        KeyCode::Backspace if state.input.focused => vec![Action::InputBackspace],
        KeyCode::Enter if state.input.focused => vec![Action::RequestFetch {
            kind: FetchKind::Quote,
        }],
        KeyCode::Tab if !state.dropdown.open => vec![Action::SetActiveTab {
            tab: state.active_tab.next(),
        }],
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/dispatch.rs"]
mod tests;
