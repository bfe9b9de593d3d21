//! Process table widget: formatted rows with hierarchy indent, thumbnail
//! badges, and per-row action triggers.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Row, Table};

use crate::preview::thumbnail_badge;
use crate::registry::{
    FileRegistry, ProcessRecord, ProcessState, SortColumn, SortConfig, SortDirection,
};
use crate::view::fmt::{format_load_cell, normalize_for_display};

use super::super::hit::Region;
use super::super::state::ViewState;
use super::super::style::Styles;

/// Fixed column widths; COMMAND takes the remaining space.
const PID_W: u16 = 7;
const USER_W: u16 = 10;
const CPU_W: u16 = 6;
const MEM_W: u16 = 6;
const TIME_W: u16 = 9;
const PORT_W: u16 = 6;
const ACT_W: u16 = 5;
const SPACING: u16 = 1;

const FIXED: [u16; 6] = [PID_W, USER_W, CPU_W, MEM_W, TIME_W, PORT_W];

/// Width of the COMMAND column for the given inner area.
fn command_width(inner: Rect) -> u16 {
    let fixed: u16 = FIXED.iter().sum::<u16>() + ACT_W;
    inner.width.saturating_sub(fixed + 7 * SPACING)
}

/// X offset (relative to the inner area) of column `idx`, given the command
/// width. Columns: 6 fixed, then COMMAND, then ACT.
fn column_x(idx: usize, cmd_w: u16) -> u16 {
    let mut x = 0;
    for (i, w) in FIXED.iter().chain([&cmd_w, &ACT_W]).enumerate() {
        if i == idx {
            return x;
        }
        x += w + SPACING;
    }
    x
}

/// Clips to `width` characters and pads the remainder with spaces.
fn clip_pad(s: &str, width: usize) -> String {
    let mut out: String = s.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    out
}

pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    state: &mut ViewState,
    rows: &[ProcessRecord],
    files: &FileRegistry,
    sort: SortConfig,
) {
    let title = if state.filter_input.is_empty() {
        format!(" {} processes ", rows.len())
    } else {
        format!(" {} processes (filter: {}) ", rows.len(), state.filter_input)
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    let cmd_w = command_width(inner);

    // Header with sort indicator on the active column.
    let headers: Vec<Span> = SortColumn::ALL
        .iter()
        .map(|column| {
            let indicator = if *column == sort.column {
                match sort.direction {
                    SortDirection::Asc => "▲",
                    SortDirection::Desc => "▼",
                }
            } else {
                ""
            };
            Span::styled(
                format!("{}{}", column.label(), indicator),
                Styles::table_header(),
            )
        })
        .collect();
    let mut header_cells: Vec<Cell> = headers.into_iter().map(Cell::from).collect();
    header_cells.push(Cell::from(Span::styled("ACT", Styles::table_header())));
    let header = Row::new(header_cells).style(Styles::table_header()).height(1);

    // Hit regions for the sortable header cells.
    for (idx, column) in SortColumn::ALL.iter().enumerate() {
        let w = if idx < FIXED.len() { FIXED[idx] } else { cmd_w };
        let rect = Rect::new(inner.x + column_x(idx, cmd_w), inner.y, w, 1);
        state.hit_map.push(rect, Region::HeaderCell(*column));
    }

    let visible = inner.height.saturating_sub(1) as usize;
    let table_rows: Vec<Row> = rows
        .iter()
        .take(visible)
        .enumerate()
        .map(|(idx, record)| {
            let y = inner.y + 1 + idx as u16;
            state.hit_map.push(
                Rect::new(inner.x, y, inner.width, 1),
                Region::Row(record.pid),
            );
            state.hit_map.push(
                Rect::new(inner.x + column_x(7, cmd_w), y, ACT_W, 1),
                Region::KillButton(record.pid),
            );

            let row_style = if state.selected_pid == Some(record.pid) {
                Styles::selected()
            } else if record.state == ProcessState::Stopped {
                Styles::stopped()
            } else if record.is_background() {
                Styles::dimmed()
            } else {
                Styles::default()
            };

            let cmd_cell = command_cell(state, record, files, inner, y, cmd_w);

            Row::new(vec![
                Cell::from(record.pid.to_string()),
                Cell::from(clip_pad(&record.user, USER_W as usize)),
                Cell::from(format_load_cell(record.cpu)),
                Cell::from(format_load_cell(record.memory)),
                Cell::from(record.time.clone()),
                Cell::from(
                    record
                        .port
                        .map(|p| p.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
                cmd_cell,
                Cell::from(Span::styled("[x]", Styles::action())),
            ])
            .style(row_style)
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Length(PID_W),
        Constraint::Length(USER_W),
        Constraint::Length(CPU_W),
        Constraint::Length(MEM_W),
        Constraint::Length(TIME_W),
        Constraint::Length(PORT_W),
        Constraint::Length(cmd_w),
        Constraint::Length(ACT_W),
    ];
    let table = Table::new(table_rows, widths)
        .header(header)
        .column_spacing(SPACING)
        .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(table, area);
}

/// Builds the COMMAND cell: hierarchy indent, sanitized command text and,
/// when the process classifies to one, a right-aligned thumbnail badge.
fn command_cell<'a>(
    state: &mut ViewState,
    record: &ProcessRecord,
    files: &FileRegistry,
    inner: Rect,
    y: u16,
    cmd_w: u16,
) -> Cell<'a> {
    let indent = "  ".repeat(record.level as usize);
    let text = format!("{}{}", indent, normalize_for_display(&record.command));

    let badge = thumbnail_badge(record, files);
    match badge {
        Some(label) => {
            let tag = format!("[{label}]");
            let tag_len = tag.chars().count() as u16;
            if cmd_w > tag_len + 1 {
                let avail = (cmd_w - tag_len - 1) as usize;
                let rect = Rect::new(inner.x + column_x(6, cmd_w) + avail as u16 + 1, y, tag_len, 1);
                state.hit_map.push(rect, Region::Thumbnail(record.pid));
                return Cell::from(Line::from(vec![
                    Span::raw(clip_pad(&text, avail)),
                    Span::raw(" "),
                    Span::styled(tag, Styles::badge()),
                ]));
            }
            Cell::from(clip_pad(&text, cmd_w as usize))
        }
        None => Cell::from(clip_pad(&text, cmd_w as usize)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_offsets_accumulate_widths_and_spacing() {
        assert_eq!(column_x(0, 20), 0);
        assert_eq!(column_x(1, 20), PID_W + SPACING);
        assert_eq!(column_x(6, 20), FIXED.iter().sum::<u16>() + 6 * SPACING);
        assert_eq!(
            column_x(7, 20),
            FIXED.iter().sum::<u16>() + 20 + 7 * SPACING
        );
    }

    #[test]
    fn command_width_absorbs_the_remainder() {
        let inner = Rect::new(0, 0, 100, 20);
        let cmd = command_width(inner);
        let total: u16 = FIXED.iter().sum::<u16>() + ACT_W + cmd + 7 * SPACING;
        assert_eq!(total, 100);
    }

    #[test]
    fn clip_pad_clips_and_pads() {
        assert_eq!(clip_pad("abc", 5), "abc  ");
        assert_eq!(clip_pad("abcdefgh", 5), "abcde");
    }
}
