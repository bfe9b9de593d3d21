//! Preview overlay popup: process details plus classified content.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::preview::{PreviewContent, PreviewModel};
use crate::view::fmt::load_bar;

use super::super::hit::Region;
use super::super::state::{Overlay, ViewState};
use super::super::style::Styles;

const CLOSE_TAG: &str = "[x]";

pub fn render_preview(frame: &mut Frame, area: Rect, state: &mut ViewState) {
    let Overlay::Preview { model, scroll } = &mut state.overlay else {
        return;
    };

    let popup_width = (area.width * 70 / 100).clamp(50, 100).min(area.width);
    let popup_height = (area.height * 85 / 100).clamp(15, 40).min(area.height);
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup);
    state.hit_map.push(popup, Region::PreviewBody);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::badge())
        .title(crate::view::fmt::normalize_for_display(&model.title));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    // Close button in the top border, right corner.
    let close_len = CLOSE_TAG.len() as u16;
    if popup.width > close_len + 2 {
        let close = Rect::new(popup.right() - close_len - 1, popup.y, close_len, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(CLOSE_TAG, Styles::action())),
            close,
        );
        state.hit_map.push(close, Region::PreviewClose);
    }

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let lines = preview_lines(model);
    let max_scroll = lines.len().saturating_sub(chunks[0].height as usize);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Styles::default());
    frame.render_widget(paragraph, chunks[0]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Styles::hint_key()),
        Span::styled(" scroll  ", Styles::hint_text()),
        Span::styled("Esc", Styles::hint_key()),
        Span::styled(" close", Styles::hint_text()),
    ]));
    frame.render_widget(footer, chunks[1]);
}

/// Materializes the preview model into display lines. Pure: the same model
/// always yields the same lines.
pub fn preview_lines(model: &PreviewModel) -> Vec<Line<'static>> {
    let status = if model.background {
        "Background Process"
    } else {
        "Active Process"
    };

    let mut lines = vec![
        Line::from(Span::styled("Process Information", Styles::table_header())),
        info_row("PID", model.pid.to_string()),
        info_row("Command", model.command.clone()),
        info_row("User", model.user.clone()),
        info_row(
            "CPU",
            format!("{}  {}", model.cpu_text, load_bar(model.cpu_fraction, 20)),
        ),
        info_row(
            "Memory",
            format!("{}  {}", model.memory_text, load_bar(model.memory_fraction, 20)),
        ),
        info_row("Uptime", model.uptime.clone()),
        info_row(
            "Started",
            model.started_at.clone().unwrap_or_else(|| "-".to_string()),
        ),
        info_row("Status", status.to_string()),
        Line::raw(""),
    ];

    match &model.content {
        PreviewContent::File { kind, filename, snippet } => {
            lines.push(Line::from(Span::styled(
                format!("{} File Preview: {}", kind.label(), filename),
                Styles::table_header(),
            )));
            lines.push(Line::raw(""));
            for text in snippet.split('\n') {
                lines.push(Line::raw(text.to_string()));
            }
        }
        PreviewContent::WebService { service, port } => {
            lines.push(Line::from(Span::styled("Web Service", Styles::table_header())));
            lines.push(info_row("Service", service.clone()));
            lines.push(info_row(
                "Port",
                port.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
            ));
        }
        PreviewContent::Database { service } => {
            lines.push(Line::from(Span::styled(
                "Database Service",
                Styles::table_header(),
            )));
            lines.push(info_row("Service", service.clone()));
        }
        PreviewContent::Port { port } => {
            lines.push(Line::from(Span::styled("Port Listener", Styles::table_header())));
            lines.push(info_row("Port", port.to_string()));
        }
        PreviewContent::Generic { command } => {
            lines.push(Line::from(Span::styled("Process", Styles::table_header())));
            lines.push(info_row("Command", command.clone()));
        }
    }

    lines
}

fn info_row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<9}"), Styles::hint_text()),
        Span::raw(value),
    ])
}
