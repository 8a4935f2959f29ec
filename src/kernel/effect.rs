use crate::kernel::services::ports::FetchRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the external program for `request`; the result comes back as
    /// `Action::FetchCompleted`.
    Fetch(FetchRequest),
}
