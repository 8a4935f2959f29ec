use super::Dashboard;
use crate::core::event::InputEvent;
use crate::core::view::EventResult;
use crate::kernel::plan_event;
use crate::ui::core::geom::Rect;

impl Dashboard {
    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        if let Some(pos) = event.pointer() {
            self.pointer = Some(pos);
        }

        match event {
            InputEvent::Quit => EventResult::Quit,
            InputEvent::Resize(w, h) => {
                self.set_area(Rect::new(0, 0, *w, *h));
                EventResult::Consumed
            }
            InputEvent::PointerMove(_) => EventResult::Consumed,
            _ => {
                let actions = plan_event(event, self.store.state(), &self.regions);
                if actions.is_empty() {
                    return EventResult::Ignored;
                }
                for action in actions {
                    self.dispatch_kernel(action);
                }
                EventResult::Consumed
            }
        }
    }
}
