//! Main rendering logic.
//!
//! Every frame is a full rebuild from the row model and view state. The hit
//! map is cleared first and repopulated widget by widget; overlays render
//! last so their regions sit on top.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::registry::{FileRegistry, ProcessRecord, SortConfig};

use super::state::{Overlay, ViewState};
use super::widgets::{
    render_advanced, render_dropdown, render_footer, render_header, render_preview, render_table,
};

pub fn render(
    frame: &mut Frame,
    state: &mut ViewState,
    rows: &[ProcessRecord],
    files: &FileRegistry,
    sort: SortConfig,
    escape_closes_dropdown: bool,
) {
    let area = frame.area();
    state.hit_map.clear();

    let advanced_height = if state.advanced_open { 5 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(advanced_height),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    if state.advanced_open {
        render_advanced(frame, chunks[1], sort, escape_closes_dropdown);
    }
    render_table(frame, chunks[2], state, rows, files, sort);
    render_footer(frame, chunks[3]);

    if state.overlay.dropdown_pid().is_some() {
        render_dropdown(frame, area, state);
    } else if matches!(state.overlay, Overlay::Preview { .. }) {
        render_preview(frame, area, state);
    }
}
