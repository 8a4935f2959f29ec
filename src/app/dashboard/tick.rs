use super::{Dashboard, FetchExecutor};
use crate::kernel::services::adapters::AppMessage;
use crate::kernel::Action as KernelAction;
use std::sync::mpsc;

impl Dashboard {
    /// Folds finished background fetches into the state (called once per frame).
    pub fn tick(&mut self) -> bool {
        let FetchExecutor::Background { rx, .. } = &self.executor else {
            return false;
        };

        let mut messages = Vec::new();
        while messages.len() < super::MAX_FETCH_DRAIN_PER_TICK {
            match rx.try_recv() {
                Ok(msg) => messages.push(msg),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::warn!("fetch runtime channel disconnected");
                    break;
                }
            }
        }

        let mut changed = false;
        for msg in messages {
            match msg {
                AppMessage::FetchCompleted { request, outcome } => {
                    changed |= self.dispatch_kernel(KernelAction::FetchCompleted { request, outcome });
                }
            }
        }
        changed
    }

    /// Hover is presentational and derived from the last pointer position.
    pub(super) fn update_hover(&mut self) -> bool {
        let open = self.store.state().dropdown.open;
        let hover = self
            .pointer
            .map(|pos| self.regions.hits_at(pos, open))
            .unwrap_or_default();
        self.dispatch_kernel(KernelAction::SetHover {
            pointer: self.pointer,
            hover,
        })
    }
}
