//! Input handling: maps keys and mouse clicks to interaction events.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::registry::{KillSignal, ProcessRecord, SortConfig};

use super::controller::{DirectAction, UiEvent};
use super::hit::Region;
use super::state::{InputMode, Overlay, ViewState};

/// Result of handling one input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputResult {
    /// Events to feed the controller, in order.
    Events(Vec<UiEvent>),
    Quit,
    None,
}

fn one(event: UiEvent) -> InputResult {
    InputResult::Events(vec![event])
}

/// Handles a key event. `rows` is the currently displayed row set (used for
/// keyboard selection movement) and `sort` the active sort configuration.
pub fn handle_key(
    state: &mut ViewState,
    rows: &[ProcessRecord],
    sort: SortConfig,
    key: KeyEvent,
) -> InputResult {
    match state.input_mode {
        InputMode::Filter => handle_filter_key(state, key),
        InputMode::Normal => handle_normal_key(state, rows, sort, key),
    }
}

/// Keys in filter mode edit the buffer and apply it in real time.
fn handle_filter_key(state: &mut ViewState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            state.filter_input.clear();
            one(UiEvent::FilterChanged(String::new()))
        }
        KeyCode::Enter => {
            // Already applied in real time; just leave the mode.
            state.input_mode = InputMode::Normal;
            InputResult::None
        }
        KeyCode::Backspace => {
            state.filter_input.pop();
            one(UiEvent::FilterChanged(state.filter_input.clone()))
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return InputResult::None;
            }
            state.filter_input.push(c);
            one(UiEvent::FilterChanged(state.filter_input.clone()))
        }
        _ => InputResult::None,
    }
}

fn handle_normal_key(
    state: &mut ViewState,
    rows: &[ProcessRecord],
    sort: SortConfig,
    key: KeyEvent,
) -> InputResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        KeyCode::Char('/') => {
            state.input_mode = InputMode::Filter;
            state.filter_input.clear();
            one(UiEvent::FilterChanged(String::new()))
        }

        // Sorting: `s` activates the next column, `r` re-activates the
        // current one (which flips its direction).
        KeyCode::Char('s') => one(UiEvent::SortBy(sort.column.next())),
        KeyCode::Char('r') => one(UiEvent::SortBy(sort.column)),

        KeyCode::Up | KeyCode::Char('k') => match &state.overlay {
            Overlay::Dropdown { .. } => one(UiEvent::DropdownMoved(-1)),
            Overlay::Preview { .. } => one(UiEvent::PreviewScrolled(-1)),
            Overlay::None => move_selection(state, rows, -1),
        },
        KeyCode::Down | KeyCode::Char('j') => match &state.overlay {
            Overlay::Dropdown { .. } => one(UiEvent::DropdownMoved(1)),
            Overlay::Preview { .. } => one(UiEvent::PreviewScrolled(1)),
            Overlay::None => move_selection(state, rows, 1),
        },
        KeyCode::PageUp => match &state.overlay {
            Overlay::Preview { .. } => one(UiEvent::PreviewScrolled(-10)),
            _ => move_selection(state, rows, -10),
        },
        KeyCode::PageDown => match &state.overlay {
            Overlay::Preview { .. } => one(UiEvent::PreviewScrolled(10)),
            _ => move_selection(state, rows, 10),
        },

        KeyCode::Enter => match &state.overlay {
            Overlay::Dropdown { pid, selected } => one(UiEvent::SignalChosen {
                pid: *pid,
                signal: KillSignal::ALL[*selected],
            }),
            Overlay::Preview { .. } => InputResult::None,
            Overlay::None => match target_pid(state, rows) {
                Some(pid) => one(UiEvent::ThumbnailClicked(pid)),
                None => InputResult::None,
            },
        },

        KeyCode::Char('x') => match target_pid(state, rows) {
            Some(pid) => one(UiEvent::DropdownToggled(pid)),
            None => InputResult::None,
        },

        // Direct signal shortcuts.
        KeyCode::Char('K') => direct_action(state, rows, DirectAction::Kill),
        KeyCode::Char('P') => direct_action(state, rows, DirectAction::Pause),
        KeyCode::Char('R') => direct_action(state, rows, DirectAction::Restart),

        KeyCode::Char('a') => one(UiEvent::AdvancedToggled),
        KeyCode::Esc => one(UiEvent::EscapePressed),

        _ => InputResult::None,
    }
}

/// The row a row-scoped key acts on: the selection, else the first row.
fn target_pid(state: &ViewState, rows: &[ProcessRecord]) -> Option<u32> {
    state
        .selected_pid
        .filter(|pid| rows.iter().any(|r| r.pid == *pid))
        .or_else(|| rows.first().map(|r| r.pid))
}

fn direct_action(state: &ViewState, rows: &[ProcessRecord], action: DirectAction) -> InputResult {
    match target_pid(state, rows) {
        Some(pid) => one(UiEvent::DirectAction { pid, action }),
        None => InputResult::None,
    }
}

fn move_selection(state: &ViewState, rows: &[ProcessRecord], delta: isize) -> InputResult {
    if rows.is_empty() {
        return InputResult::None;
    }
    let current = state
        .selected_pid
        .and_then(|pid| rows.iter().position(|r| r.pid == pid));
    let next = match current {
        Some(idx) => idx
            .saturating_add_signed(delta)
            .min(rows.len() - 1),
        None => 0,
    };
    one(UiEvent::RowClicked(rows[next].pid))
}

/// Handles a mouse event by resolving the click against the frame's hit
/// regions.
///
/// While a dropdown is open, a click that lands outside the dropdown and
/// its trigger also produces `OutsideClick` (after any region-specific
/// event), mirroring the document-level dismiss listener of the original:
/// a row-body click both selects the row and dismisses the dropdown.
pub fn handle_mouse(state: &ViewState, mouse: MouseEvent) -> InputResult {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return InputResult::None;
    }

    let hit = state.hit_map.hit(mouse.column, mouse.row);
    let dropdown_open = state.overlay.dropdown_pid().is_some();
    let mut events = Vec::new();

    match hit {
        Some(Region::HeaderCell(column)) => events.push(UiEvent::SortBy(column)),
        Some(Region::KillButton(pid)) => events.push(UiEvent::DropdownToggled(pid)),
        Some(Region::Thumbnail(pid)) => events.push(UiEvent::ThumbnailClicked(pid)),
        Some(Region::DropdownOption { pid, index }) => events.push(UiEvent::SignalChosen {
            pid,
            signal: KillSignal::ALL[index],
        }),
        Some(Region::Dropdown(_)) | Some(Region::PreviewBody) => {}
        Some(Region::PreviewClose) => events.push(UiEvent::PreviewClosed),
        Some(Region::AdvancedToggle) => events.push(UiEvent::AdvancedToggled),
        Some(Region::Row(pid)) => {
            events.push(UiEvent::RowClicked(pid));
            if dropdown_open {
                events.push(UiEvent::OutsideClick);
            }
        }
        None => {
            if dropdown_open {
                events.push(UiEvent::OutsideClick);
            }
        }
    }

    // Header/thumbnail/other-trigger clicks are also outside the dropdown.
    if dropdown_open
        && matches!(
            hit,
            Some(Region::HeaderCell(_)) | Some(Region::Thumbnail(_)) | Some(Region::AdvancedToggle)
        )
    {
        events.push(UiEvent::OutsideClick);
    }

    if events.is_empty() {
        InputResult::None
    } else {
        InputResult::Events(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ProcessState, SortColumn, SortDirection};
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn proc(pid: u32) -> ProcessRecord {
        ProcessRecord {
            pid,
            parent_pid: None,
            level: 0,
            user: "root".to_string(),
            command: format!("proc-{pid}"),
            cpu: 0.1,
            memory: 0.1,
            time: "00:01:00".to_string(),
            port: None,
            service: None,
            file: None,
            transparency: 1.0,
            state: ProcessState::Running,
        }
    }

    #[test]
    fn filter_mode_edits_apply_live() {
        let mut state = ViewState::default();
        let rows = [proc(1)];

        assert_eq!(
            handle_key(&mut state, &rows, SortConfig::default(), key(KeyCode::Char('/'))),
            InputResult::Events(vec![UiEvent::FilterChanged(String::new())])
        );
        assert_eq!(state.input_mode, InputMode::Filter);

        assert_eq!(
            handle_key(&mut state, &rows, SortConfig::default(), key(KeyCode::Char('n'))),
            InputResult::Events(vec![UiEvent::FilterChanged("n".to_string())])
        );
        assert_eq!(
            handle_key(&mut state, &rows, SortConfig::default(), key(KeyCode::Backspace)),
            InputResult::Events(vec![UiEvent::FilterChanged(String::new())])
        );

        // Enter confirms and leaves the mode without a new event.
        assert_eq!(
            handle_key(&mut state, &rows, SortConfig::default(), key(KeyCode::Enter)),
            InputResult::None
        );
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn sort_keys_activate_columns() {
        let mut state = ViewState::default();
        let rows = [proc(1)];
        let sort = SortConfig { column: SortColumn::Cpu, direction: SortDirection::Asc };

        assert_eq!(
            handle_key(&mut state, &rows, sort, key(KeyCode::Char('r'))),
            InputResult::Events(vec![UiEvent::SortBy(SortColumn::Cpu)])
        );
        assert_eq!(
            handle_key(&mut state, &rows, sort, key(KeyCode::Char('s'))),
            InputResult::Events(vec![UiEvent::SortBy(SortColumn::Mem)])
        );
    }

    #[test]
    fn selection_movement_clamps_to_rows() {
        let mut state = ViewState::default();
        let rows = [proc(1), proc(2), proc(3)];

        assert_eq!(
            handle_key(&mut state, &rows, SortConfig::default(), key(KeyCode::Down)),
            InputResult::Events(vec![UiEvent::RowClicked(1)])
        );

        state.selected_pid = Some(3);
        assert_eq!(
            handle_key(&mut state, &rows, SortConfig::default(), key(KeyCode::Down)),
            InputResult::Events(vec![UiEvent::RowClicked(3)])
        );
        assert_eq!(
            handle_key(&mut state, &rows, SortConfig::default(), key(KeyCode::Up)),
            InputResult::Events(vec![UiEvent::RowClicked(2)])
        );
    }

    #[test]
    fn enter_in_dropdown_chooses_the_selected_signal() {
        let mut state = ViewState::default();
        state.overlay = Overlay::Dropdown { pid: 7, selected: 1 };
        let rows = [proc(7)];

        assert_eq!(
            handle_key(&mut state, &rows, SortConfig::default(), key(KeyCode::Enter)),
            InputResult::Events(vec![UiEvent::SignalChosen {
                pid: 7,
                signal: KillSignal::Kill
            }])
        );
    }

    #[test]
    fn direct_action_keys_target_the_selection() {
        let mut state = ViewState::default();
        state.selected_pid = Some(2);
        let rows = [proc(1), proc(2)];

        assert_eq!(
            handle_key(&mut state, &rows, SortConfig::default(), key(KeyCode::Char('P'))),
            InputResult::Events(vec![UiEvent::DirectAction {
                pid: 2,
                action: DirectAction::Pause
            }])
        );
    }

    #[test]
    fn mouse_row_click_while_dropdown_open_selects_and_dismisses() {
        let mut state = ViewState::default();
        state.overlay = Overlay::Dropdown { pid: 1, selected: 0 };
        state.hit_map.push(Rect::new(0, 5, 40, 1), Region::Row(2));

        assert_eq!(
            handle_mouse(&state, click(3, 5)),
            InputResult::Events(vec![UiEvent::RowClicked(2), UiEvent::OutsideClick])
        );
    }

    #[test]
    fn mouse_click_on_nothing_only_dismisses_when_open() {
        let mut state = ViewState::default();
        assert_eq!(handle_mouse(&state, click(50, 20)), InputResult::None);

        state.overlay = Overlay::Dropdown { pid: 1, selected: 0 };
        assert_eq!(
            handle_mouse(&state, click(50, 20)),
            InputResult::Events(vec![UiEvent::OutsideClick])
        );
    }

    #[test]
    fn mouse_click_inside_dropdown_body_is_not_outside() {
        let mut state = ViewState::default();
        state.overlay = Overlay::Dropdown { pid: 1, selected: 0 };
        state.hit_map.push(Rect::new(10, 4, 20, 8), Region::Dropdown(1));

        assert_eq!(handle_mouse(&state, click(12, 5)), InputResult::None);
    }

    #[test]
    fn mouse_click_on_option_dispatches_without_outside() {
        let mut state = ViewState::default();
        state.overlay = Overlay::Dropdown { pid: 1, selected: 0 };
        state
            .hit_map
            .push(Rect::new(10, 4, 20, 1), Region::DropdownOption { pid: 1, index: 0 });

        assert_eq!(
            handle_mouse(&state, click(12, 4)),
            InputResult::Events(vec![UiEvent::SignalChosen {
                pid: 1,
                signal: KillSignal::Term
            }])
        );
    }
}
