//! Named hit-test rectangles with a fixed resolution order.

use rustc_hash::FxHashSet;

use crate::ui::core::geom::{Pos, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    DropdownOption(usize),
    Dropdown,
    Input,
    QuoteButton,
    OptionsButton,
    Tab(usize),
}

impl RegionId {
    /// Lower wins when regions overlap.
    pub fn priority(self) -> u8 {
        match self {
            RegionId::DropdownOption(_) => 0,
            RegionId::Dropdown => 1,
            RegionId::Input => 2,
            RegionId::QuoteButton => 3,
            RegionId::OptionsButton => 4,
            RegionId::Tab(_) => 5,
        }
    }
}

pub type HoverSet = FxHashSet<RegionId>;

#[derive(Debug, Clone, Default)]
pub struct RegionMap {
    regions: Vec<(RegionId, Rect)>,
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Registers `rect` under `id`, replacing an earlier rect for the same id.
    pub fn insert(&mut self, id: RegionId, rect: Rect) {
        if let Some(slot) = self.regions.iter_mut().find(|(existing, _)| *existing == id) {
            slot.1 = rect;
        } else {
            self.regions.push((id, rect));
        }
    }

    pub fn rect(&self, id: RegionId) -> Option<Rect> {
        self.regions
            .iter()
            .find_map(|(existing, rect)| (*existing == id).then_some(*rect))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegionId, Rect)> + '_ {
        self.regions.iter().copied()
    }

    /// Highest-priority region containing `pos`. Option rows only match while
    /// `dropdown_open` is set.
    pub fn hit_test(&self, pos: Pos, dropdown_open: bool) -> Option<RegionId> {
        self.regions
            .iter()
            .filter(|(id, _)| dropdown_open || !matches!(id, RegionId::DropdownOption(_)))
            .filter(|(_, rect)| rect.contains(pos))
            .min_by_key(|(id, _)| id.priority())
            .map(|(id, _)| *id)
    }

    /// Every region containing `pos`, for hover highlighting.
    pub fn hits_at(&self, pos: Pos, dropdown_open: bool) -> HoverSet {
        self.regions
            .iter()
            .filter(|(id, _)| dropdown_open || !matches!(id, RegionId::DropdownOption(_)))
            .filter(|(_, rect)| rect.contains(pos))
            .map(|(id, _)| *id)
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/regions.rs"]
mod tests;
