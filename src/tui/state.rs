//! View state owned by the dashboard core.
//!
//! The registry owns the process list, filter text, and sort configuration;
//! everything here is purely presentational.

use crate::preview::PreviewModel;

use super::hit::HitMap;

/// Overlay state. The kill dropdown and the preview are mutually exclusive
/// by construction: at most one variant is ever active.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Kill-signal dropdown for one row; `selected` indexes
    /// `KillSignal::ALL`.
    Dropdown { pid: u32, selected: usize },
    /// Preview overlay. The model is rebuilt on every open, so a re-open
    /// always overwrites prior content.
    Preview { model: PreviewModel, scroll: usize },
}

impl Overlay {
    pub fn dropdown_pid(&self) -> Option<u32> {
        match self {
            Overlay::Dropdown { pid, .. } => Some(*pid),
            _ => None,
        }
    }

    pub fn preview_pid(&self) -> Option<u32> {
        match self {
            Overlay::Preview { model, .. } => Some(model.pid),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::None)
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
}

/// State owned by the view layer.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Selected row. Independent of overlays: selecting never opens or
    /// closes anything.
    pub selected_pid: Option<u32>,
    pub overlay: Overlay,
    /// Advanced-controls panel visibility.
    pub advanced_open: bool,
    pub input_mode: InputMode,
    /// Filter input buffer, applied to the registry in real time.
    pub filter_input: String,
    /// Hit regions published by the renderer each frame.
    pub hit_map: HitMap,
}
