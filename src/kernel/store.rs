use super::quote::{OptionsSnapshot, QuoteSnapshot};
use super::services::ports::{FetchKind, FetchOutcome, FetchRequest};
use super::{Action, Effect, WidgetState};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed: changed,
        }
    }
}

pub struct Store {
    state: WidgetState,
}

impl Store {
    pub fn new(state: WidgetState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::FocusInput { focused } => {
                let changed = self.state.input.focused != focused;
                self.state.input.focused = focused;
                DispatchResult::changed(changed)
            }
            Action::InputAppend(text) => {
                if !self.state.input.focused || text.is_empty() {
                    return DispatchResult::changed(false);
                }
                self.state.input.push_str(&text);
                DispatchResult::changed(true)
            }
            Action::InputBackspace => {
                if !self.state.input.focused {
                    return DispatchResult::changed(false);
                }
                DispatchResult::changed(self.state.input.backspace())
            }
            Action::DropdownOpen => {
                let changed = !self.state.dropdown.open;
                self.state.dropdown.open = true;
                DispatchResult::changed(changed)
            }
            Action::DropdownClose => {
                let changed = self.state.dropdown.open;
                self.state.dropdown.open = false;
                DispatchResult::changed(changed)
            }
            Action::DropdownSelect { index } => {
                if index >= self.state.dropdown.options.len() {
                    return DispatchResult::changed(false);
                }
                self.state.dropdown.selected = index;
                self.state.dropdown.open = false;
                self.refresh_rsi();
                DispatchResult::changed(true)
            }
            Action::SetActiveTab { tab } => {
                let changed = self.state.active_tab != tab;
                self.state.active_tab = tab;
                DispatchResult::changed(changed)
            }
            Action::RequestFetch { kind } => self.request_fetch(kind),
            Action::FetchCompleted { request, outcome } => {
                self.complete_fetch(request, outcome);
                DispatchResult::changed(true)
            }
            Action::SetHover { pointer, hover } => {
                let changed = self.state.pointer != pointer || self.state.hover != hover;
                self.state.pointer = pointer;
                self.state.hover = hover;
                DispatchResult::changed(changed)
            }
            Action::AppendLog(line) => {
                self.state.log.push_line(line);
                DispatchResult::changed(true)
            }
        }
    }

    fn request_fetch(&mut self, kind: FetchKind) -> DispatchResult {
        let Some(request) = FetchRequest::new(&self.state.input.text, kind) else {
            if let Some(msg) = FetchOutcome::EmptyInput.describe_failure(kind) {
                self.state.log.push_line(msg);
            }
            return DispatchResult::changed(true);
        };

        if self.state.is_in_flight(kind) {
            tracing::debug!(%kind, symbol = %request.symbol, "fetch already in flight");
            self.state
                .log
                .push_line(format!("A {kind} fetch is already running"));
            return DispatchResult::changed(true);
        }

        tracing::info!(%kind, symbol = %request.symbol, "fetch requested");
        self.state.in_flight.push(kind);
        self.state
            .log
            .push_line(format!("Fetching {kind} for {}...", request.symbol));
        DispatchResult {
            effects: vec![Effect::Fetch(request)],
            state_changed: true,
        }
    }

    fn complete_fetch(&mut self, request: FetchRequest, outcome: FetchOutcome) {
        let kind = request.kind;
        self.state.in_flight.retain(|k| *k != kind);

        if let Some(msg) = outcome.describe_failure(kind) {
            tracing::warn!(%kind, symbol = %request.symbol, reason = %msg, "fetch failed");
            self.state.log.push_line(msg);
            return;
        }

        let FetchOutcome::Success { output, partial } = outcome else {
            return;
        };

        let header = if partial {
            format!("{kind} output for {} (exit status non-zero):", request.symbol)
        } else {
            format!("{kind} output for {}:", request.symbol)
        };
        self.state.log.push_line(header);
        if output.trim().is_empty() {
            self.state.log.push_line("(no output)");
        } else {
            self.state.log.push_block(&output);
        }

        match kind {
            FetchKind::Quote => {
                if let Some(quote) = QuoteSnapshot::parse(&output) {
                    tracing::info!(symbol = %quote.symbol, closes = quote.closes.len(), "quote parsed");
                    self.state.quote = Some(quote);
                    self.refresh_rsi();
                }
            }
            FetchKind::Options => {
                if let Some(options) = OptionsSnapshot::parse(&output) {
                    self.state.options = Some(options);
                }
            }
        }
    }

    /// RSI for the selected period: computed from the quote's closes when
    /// present, otherwise the value the fetch program reported for the default
    /// period.
    fn refresh_rsi(&mut self) {
        let period = self.state.dropdown.selected_period();
        self.state.rsi = self.state.quote.as_ref().and_then(|quote| {
            if !quote.closes.is_empty() {
                return quote.series().rsi(period);
            }
            if period == crate::kernel::indicator::DEFAULT_RSI_PERIOD {
                return quote.rsi.filter(|v| v.is_finite() && (0.0..=100.0).contains(v));
            }
            None
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
