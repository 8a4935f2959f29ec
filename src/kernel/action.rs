use crate::kernel::regions::HoverSet;
use crate::kernel::services::ports::{FetchKind, FetchOutcome, FetchRequest};
use crate::kernel::state::DashboardTab;
use crate::ui::core::geom::Pos;

#[derive(Debug, Clone)]
pub enum Action {
    FocusInput { focused: bool },
    InputAppend(String),
    InputBackspace,
    DropdownOpen,
    DropdownClose,
    /// Selects an option row and closes the list.
    DropdownSelect { index: usize },
    SetActiveTab { tab: DashboardTab },
    /// Fetch for the current input text.
    RequestFetch { kind: FetchKind },
    FetchCompleted {
        request: FetchRequest,
        outcome: FetchOutcome,
    },
    SetHover {
        pointer: Option<Pos>,
        hover: HoverSet,
    },
    AppendLog(String),
}
