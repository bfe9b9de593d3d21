//! Header bar, advanced-controls panel, and footer hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::registry::SortConfig;

use super::super::hit::Region;
use super::super::state::{InputMode, ViewState};
use super::super::style::Styles;

const ADVANCED_TAG: &str = "[advanced]";

pub fn render_header(frame: &mut Frame, area: Rect, state: &mut ViewState) {
    let selected = state
        .selected_pid
        .map(|pid| pid.to_string())
        .unwrap_or_else(|| "-".to_string());

    let filter = match state.input_mode {
        InputMode::Filter => format!("Filter: {}_", state.filter_input),
        InputMode::Normal if !state.filter_input.is_empty() => {
            format!("Filter: {}", state.filter_input)
        }
        InputMode::Normal => String::new(),
    };

    let mut spans = vec![
        Span::styled(" tasktop ", Styles::table_header()),
        Span::raw("  "),
        Span::styled(format!("Selected PID: {selected}"), Styles::default()),
        Span::raw("  "),
        Span::styled(filter, Styles::hint_key()),
    ];

    // Right-aligned advanced toggle; clickable.
    let used: u16 = spans.iter().map(|s| s.content.chars().count() as u16).sum();
    let tag_len = ADVANCED_TAG.len() as u16;
    if area.width > used + tag_len + 1 {
        let pad = area.width - used - tag_len - 1;
        spans.push(Span::raw(" ".repeat(pad as usize)));
        spans.push(Span::styled(ADVANCED_TAG, Styles::hint_key()));
        state.hit_map.push(
            Rect::new(area.x + used + pad, area.y, tag_len, 1),
            Region::AdvancedToggle,
        );
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// The advanced-controls panel, shown below the header when toggled on.
pub fn render_advanced(frame: &mut Frame, area: Rect, sort: SortConfig, escape_closes: bool) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Sort: ", Styles::hint_text()),
            Span::styled(
                format!("{} {:?}", sort.column.label(), sort.direction),
                Styles::default(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Direct signals: ", Styles::hint_text()),
            Span::styled("K", Styles::hint_key()),
            Span::raw(" kill (TERM)  "),
            Span::styled("P", Styles::hint_key()),
            Span::raw(" pause (STOP)  "),
            Span::styled("R", Styles::hint_key()),
            Span::raw(" restart (HUP)"),
        ]),
        Line::from(vec![
            Span::styled("Esc closes dropdown: ", Styles::hint_text()),
            Span::styled(if escape_closes { "on" } else { "off" }, Styles::default()),
        ]),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Advanced controls ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" q", Styles::hint_key()),
        Span::styled(" quit  ", Styles::hint_text()),
        Span::styled("/", Styles::hint_key()),
        Span::styled(" filter  ", Styles::hint_text()),
        Span::styled("s", Styles::hint_key()),
        Span::styled("/", Styles::hint_text()),
        Span::styled("r", Styles::hint_key()),
        Span::styled(" sort  ", Styles::hint_text()),
        Span::styled("j/k", Styles::hint_key()),
        Span::styled(" move  ", Styles::hint_text()),
        Span::styled("x", Styles::hint_key()),
        Span::styled(" signals  ", Styles::hint_text()),
        Span::styled("Enter", Styles::hint_key()),
        Span::styled(" preview  ", Styles::hint_text()),
        Span::styled("a", Styles::hint_key()),
        Span::styled(" advanced  ", Styles::hint_text()),
        Span::styled("Esc", Styles::hint_key()),
        Span::styled(" close", Styles::hint_text()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
