//! Kill-signal dropdown popup for one row.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::registry::KillSignal;

use super::super::hit::Region;
use super::super::state::{Overlay, ViewState};
use super::super::style::Styles;

const WIDTH: u16 = 32;

pub fn render_dropdown(frame: &mut Frame, area: Rect, state: &mut ViewState) {
    let (pid, selected) = match &state.overlay {
        Overlay::Dropdown { pid, selected } => (*pid, *selected),
        _ => return,
    };

    let height = KillSignal::ALL.len() as u16 + 2;
    let width = WIDTH.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let popup = Rect::new(x, y, width, height.min(area.height));

    frame.render_widget(Clear, popup);

    // Body first: clicks inside the popup that miss every option must not
    // count as outside clicks.
    state.hit_map.push(popup, Region::Dropdown(pid));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::action())
        .title(format!(" Signals: PID {pid} "));
    let inner = block.inner(popup);

    let lines: Vec<Line> = KillSignal::ALL
        .iter()
        .enumerate()
        .map(|(idx, signal)| {
            let style = if idx == selected {
                Styles::selected()
            } else {
                Styles::default()
            };
            state.hit_map.push(
                Rect::new(inner.x, inner.y + idx as u16, inner.width, 1),
                Region::DropdownOption { pid, index: idx },
            );
            Line::from(Span::styled(
                format!(" SIG{:<5} ({})", signal.name(), signal.description()),
                style,
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
