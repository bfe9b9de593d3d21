//! Hit regions: maps pointer positions back to interaction regions.
//!
//! The renderer publishes a fresh map every frame; the mouse handler looks
//! positions up here instead of knowing anything about layout.

use ratatui::layout::{Position, Rect};

use crate::registry::SortColumn;

/// Interaction regions the renderer can register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    HeaderCell(SortColumn),
    Row(u32),
    KillButton(u32),
    Thumbnail(u32),
    /// The dropdown body; clicks here are inside the dropdown but on no
    /// particular option.
    Dropdown(u32),
    DropdownOption { pid: u32, index: usize },
    PreviewBody,
    PreviewClose,
    AdvancedToggle,
}

/// Regions registered for the current frame, later entries on top.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Region)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, region: Region) {
        self.regions.push((area, region));
    }

    /// Topmost region containing the position. Overlays are registered
    /// after the table, so they win.
    pub fn hit(&self, x: u16, y: u16) -> Option<Region> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(Position { x, y }))
            .map(|(_, region)| *region)
    }
}
