use super::{Dashboard, FetchExecutor};
use crate::kernel::{Action as KernelAction, Effect as KernelEffect};

impl Dashboard {
    pub(super) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        let mut changed = result.state_changed;
        for effect in result.effects {
            changed |= self.run_effect(effect);
        }
        self.dirty |= changed;
        changed
    }

    fn run_effect(&mut self, effect: KernelEffect) -> bool {
        match effect {
            KernelEffect::Fetch(request) => match &self.executor {
                FetchExecutor::Blocking(gateway) => {
                    let outcome = gateway.fetch_request(&request);
                    self.dispatch_kernel(KernelAction::FetchCompleted { request, outcome })
                }
                FetchExecutor::Background {
                    runtime, commands, ..
                } => {
                    let command = commands.command(request.kind).clone();
                    runtime.spawn_fetch(request, command, commands.timeout());
                    false
                }
            },
        }
    }
}
