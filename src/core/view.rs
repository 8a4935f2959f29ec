#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, EventResult::Ignored)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }

    /// Combines results of consecutive events: `Quit` wins, then `Consumed`.
    pub fn merge(self, other: EventResult) -> EventResult {
        match (self, other) {
            (EventResult::Quit, _) | (_, EventResult::Quit) => EventResult::Quit,
            (EventResult::Consumed, _) | (_, EventResult::Consumed) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/view.rs"]
mod tests;
