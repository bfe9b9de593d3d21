//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::registry::{FileRegistry, ProcessRegistry};
use crate::view::build_rows;

use super::controller::{Controller, ControllerConfig};
use super::input::{InputResult, handle_key, handle_mouse};
use super::render::render;

/// Owns the registries and the controller and drives the event loop.
pub struct App {
    registry: ProcessRegistry,
    files: FileRegistry,
    controller: Controller,
    escape_closes_dropdown: bool,
    tick_rate: Duration,
}

impl App {
    pub fn new(
        registry: ProcessRegistry,
        files: FileRegistry,
        config: ControllerConfig,
        tick_rate: Duration,
    ) -> Self {
        Self {
            registry,
            files,
            controller: Controller::new(config),
            escape_closes_dropdown: config.escape_closes_dropdown,
            tick_rate,
        }
    }

    /// Runs the TUI until the user quits.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        self.controller.attach();

        loop {
            // Full recompute per frame: the row model is cheap at this
            // scale and keeps the view consistent with registry mutations.
            let sort = self.registry.sort_config();
            let rows = build_rows(
                self.registry.processes(),
                self.registry.filter_text(),
                sort,
            );
            let escape_closes = self.escape_closes_dropdown;
            terminal.draw(|frame| {
                render(
                    frame,
                    self.controller.state_mut(),
                    &rows,
                    &self.files,
                    sort,
                    escape_closes,
                )
            })?;

            if !event::poll(self.tick_rate)? {
                continue;
            }
            let result = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(self.controller.state_mut(), &rows, sort, key)
                }
                Event::Mouse(mouse) => handle_mouse(self.controller.state(), mouse),
                _ => InputResult::None,
            };

            match result {
                InputResult::Quit => break,
                InputResult::Events(events) => {
                    for event in events {
                        self.controller.handle(event, &mut self.registry, &self.files);
                    }
                }
                InputResult::None => {}
            }
        }

        self.controller.detach();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }
}
