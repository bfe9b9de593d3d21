//! Interaction controller: translates UI events into registry calls and
//! view-state transitions.
//!
//! The "click outside closes the dropdown" listener is modeled as a scoped
//! subscription in an explicit registration table: acquired when a dropdown
//! opens, released on every path that closes it (outside click, option
//! select, toggle close, replace by another row, detach). Repeated
//! open/close cycles therefore never accumulate listeners.

use chrono::Local;
use tracing::debug;

use crate::preview::build_preview;
use crate::registry::{FileRegistry, KillSignal, ProcessRegistry, SortColumn, SortDirection};

use super::state::{Overlay, ViewState};

/// Substrate-neutral interaction events. The key and mouse mapping layers
/// both produce these; the controller consumes nothing else.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Filter text edited; applied to the registry in real time.
    FilterChanged(String),
    /// A column header was activated: the active column flips direction,
    /// a different column takes over with the default (ascending) one.
    SortBy(SortColumn),
    /// A row body was clicked. Purely additive: selection never opens or
    /// closes anything by itself.
    RowClicked(u32),
    /// The per-row "more actions" trigger.
    DropdownToggled(u32),
    /// Keyboard movement inside an open dropdown.
    DropdownMoved(i32),
    /// A signal option inside the open dropdown.
    SignalChosen { pid: u32, signal: KillSignal },
    /// A direct per-row shortcut (kill/pause/restart).
    DirectAction { pid: u32, action: DirectAction },
    ThumbnailClicked(u32),
    PreviewClosed,
    PreviewScrolled(i32),
    /// A click that landed outside the open dropdown and its trigger.
    OutsideClick,
    EscapePressed,
    AdvancedToggled,
}

/// Per-row shortcuts that dispatch a fixed signal without the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectAction {
    Kill,
    Pause,
    Restart,
}

impl DirectAction {
    pub fn signal(self) -> KillSignal {
        match self {
            DirectAction::Kill => KillSignal::Term,
            DirectAction::Pause => KillSignal::Stop,
            DirectAction::Restart => KillSignal::Hup,
        }
    }
}

/// Interaction regions that can hold a scoped subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionRegion {
    GlobalDismiss,
}

/// Explicit registration table for listeners whose lifetime is scoped to an
/// overlay.
#[derive(Debug, Default)]
pub struct Subscriptions {
    active: Vec<SubscriptionRegion>,
}

impl Subscriptions {
    pub fn acquire(&mut self, region: SubscriptionRegion) {
        if !self.active.contains(&region) {
            self.active.push(region);
        }
    }

    pub fn release(&mut self, region: SubscriptionRegion) {
        self.active.retain(|r| *r != region);
    }

    pub fn contains(&self, region: SubscriptionRegion) -> bool {
        self.active.contains(&region)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

/// Controller behavior switches surfaced to configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerConfig {
    /// Whether Escape closes an open kill-dropdown. Observed variants
    /// disagree on this; the default keeps the dropdown open and lets
    /// Escape only close the advanced-controls panel.
    pub escape_closes_dropdown: bool,
}

/// Owns the view state and applies every interaction transition.
#[derive(Debug)]
pub struct Controller {
    state: ViewState,
    subscriptions: Subscriptions,
    config: ControllerConfig,
    attached: bool,
}

impl Controller {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            state: ViewState::default(),
            subscriptions: Subscriptions::default(),
            config,
            attached: false,
        }
    }

    /// Starts delivering events. The registration table starts empty.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stops delivering events, closing overlays and releasing every
    /// subscription.
    pub fn detach(&mut self) {
        self.attached = false;
        self.state.overlay = Overlay::None;
        self.subscriptions.clear();
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    /// Applies one event. Lookups for pids that no longer exist (a click
    /// can race a re-render) are silent no-ops.
    pub fn handle(&mut self, event: UiEvent, registry: &mut ProcessRegistry, files: &FileRegistry) {
        if !self.attached {
            return;
        }
        match event {
            UiEvent::FilterChanged(text) => {
                self.state.filter_input = text.clone();
                registry.set_filter_text(text);
            }
            UiEvent::SortBy(column) => {
                let current = registry.sort_config();
                let direction = if current.column == column {
                    current.direction.flip()
                } else {
                    SortDirection::Asc
                };
                registry.set_sort_config(column, direction);
            }
            UiEvent::RowClicked(pid) => {
                if registry.get_process_by_pid(pid).is_some() {
                    self.state.selected_pid = Some(pid);
                }
            }
            UiEvent::DropdownToggled(pid) => match self.state.overlay {
                // The preview is modal here; its overlay swallows the click.
                Overlay::Preview { .. } => {}
                Overlay::Dropdown { pid: open, .. } if open == pid => self.close_dropdown(),
                _ => {
                    if registry.get_process_by_pid(pid).is_some() {
                        self.close_dropdown();
                        self.open_dropdown(pid);
                    }
                }
            },
            UiEvent::DropdownMoved(delta) => {
                if let Overlay::Dropdown { selected, .. } = &mut self.state.overlay {
                    let max = KillSignal::ALL.len() - 1;
                    *selected = selected
                        .saturating_add_signed(delta as isize)
                        .min(max);
                }
            }
            UiEvent::SignalChosen { pid, signal } => {
                registry.kill_process(pid, signal);
                self.close_dropdown();
            }
            UiEvent::DirectAction { pid, action } => {
                registry.kill_process(pid, action.signal());
            }
            UiEvent::ThumbnailClicked(pid) => {
                if let Some(process) = registry.get_process_by_pid(pid) {
                    let model = build_preview(process, files, Local::now());
                    self.close_dropdown();
                    self.state.overlay = Overlay::Preview { model, scroll: 0 };
                }
            }
            UiEvent::PreviewClosed => {
                if matches!(self.state.overlay, Overlay::Preview { .. }) {
                    self.state.overlay = Overlay::None;
                }
            }
            UiEvent::PreviewScrolled(delta) => {
                if let Overlay::Preview { scroll, .. } = &mut self.state.overlay {
                    // Clamped against content height during render.
                    *scroll = scroll.saturating_add_signed(delta as isize);
                }
            }
            UiEvent::OutsideClick => {
                if self.state.overlay.dropdown_pid().is_some()
                    && self.subscriptions.contains(SubscriptionRegion::GlobalDismiss)
                {
                    self.close_dropdown();
                }
            }
            UiEvent::EscapePressed => {
                if matches!(self.state.overlay, Overlay::Preview { .. }) {
                    self.state.overlay = Overlay::None;
                } else if self.state.overlay.dropdown_pid().is_some() {
                    if self.state.advanced_open {
                        self.state.advanced_open = false;
                    } else if self.config.escape_closes_dropdown {
                        self.close_dropdown();
                    }
                } else if self.state.advanced_open {
                    self.state.advanced_open = false;
                }
            }
            UiEvent::AdvancedToggled => {
                self.state.advanced_open = !self.state.advanced_open;
            }
        }
    }

    fn open_dropdown(&mut self, pid: u32) {
        debug!(pid, "dropdown opened");
        self.state.overlay = Overlay::Dropdown { pid, selected: 0 };
        self.subscriptions.acquire(SubscriptionRegion::GlobalDismiss);
    }

    fn close_dropdown(&mut self) {
        if self.state.overlay.dropdown_pid().is_some() {
            self.state.overlay = Overlay::None;
        }
        self.subscriptions.release(SubscriptionRegion::GlobalDismiss);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ProcessRecord, ProcessState, SortConfig};

    fn proc(pid: u32, command: &str) -> ProcessRecord {
        ProcessRecord {
            pid,
            parent_pid: None,
            level: 0,
            user: "root".to_string(),
            command: command.to_string(),
            cpu: 0.12,
            memory: 0.08,
            time: "00:05:30".to_string(),
            port: None,
            service: None,
            file: None,
            transparency: 1.0,
            state: ProcessState::Running,
        }
    }

    fn setup() -> (Controller, ProcessRegistry, FileRegistry) {
        let mut controller = Controller::new(ControllerConfig::default());
        controller.attach();
        let registry = ProcessRegistry::new(vec![
            proc(10, "nginx -g daemon"),
            proc(11, "node server.js"),
            proc(12, "bash backup.sh"),
        ]);
        (controller, registry, FileRegistry::with_fixtures())
    }

    #[test]
    fn dropdown_single_open_invariant() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
        assert_eq!(c.state().overlay.dropdown_pid(), Some(10));
        assert_eq!(c.subscriptions().len(), 1);

        // Opening a second row's dropdown replaces the first.
        c.handle(UiEvent::DropdownToggled(11), &mut reg, &files);
        assert_eq!(c.state().overlay.dropdown_pid(), Some(11));
        assert_eq!(c.subscriptions().len(), 1);
    }

    #[test]
    fn toggling_the_open_dropdown_closes_it() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
        c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
        assert_eq!(c.state().overlay, Overlay::None);
        assert!(c.subscriptions().is_empty());
    }

    #[test]
    fn outside_click_dismisses_and_releases() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
        c.handle(UiEvent::OutsideClick, &mut reg, &files);
        assert_eq!(c.state().overlay, Overlay::None);
        assert!(c.subscriptions().is_empty());

        // Outside clicks with nothing open are no-ops.
        c.handle(UiEvent::OutsideClick, &mut reg, &files);
        assert_eq!(c.state().overlay, Overlay::None);
    }

    #[test]
    fn repeated_cycles_do_not_accumulate_subscriptions() {
        let (mut c, mut reg, files) = setup();

        for _ in 0..10 {
            c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
            assert_eq!(c.subscriptions().len(), 1);
            c.handle(UiEvent::OutsideClick, &mut reg, &files);
            assert!(c.subscriptions().is_empty());
        }
        for _ in 0..10 {
            c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
            c.handle(UiEvent::DropdownToggled(11), &mut reg, &files);
            assert_eq!(c.subscriptions().len(), 1);
        }
    }

    #[test]
    fn signal_option_dispatches_once_and_closes() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
        c.handle(
            UiEvent::SignalChosen { pid: 10, signal: KillSignal::Term },
            &mut reg,
            &files,
        );

        assert_eq!(reg.delivered_signals(), &[(10, KillSignal::Term)]);
        assert_eq!(c.state().overlay, Overlay::None);
        assert!(c.subscriptions().is_empty());
    }

    #[test]
    fn direct_actions_map_to_fixed_signals() {
        let (mut c, mut reg, files) = setup();

        c.handle(
            UiEvent::DirectAction { pid: 11, action: DirectAction::Pause },
            &mut reg,
            &files,
        );
        c.handle(
            UiEvent::DirectAction { pid: 12, action: DirectAction::Restart },
            &mut reg,
            &files,
        );
        c.handle(
            UiEvent::DirectAction { pid: 11, action: DirectAction::Kill },
            &mut reg,
            &files,
        );

        assert_eq!(
            reg.delivered_signals(),
            &[
                (11, KillSignal::Stop),
                (12, KillSignal::Hup),
                (11, KillSignal::Term),
            ]
        );
        // Shortcuts never open the dropdown.
        assert_eq!(c.state().overlay, Overlay::None);
    }

    #[test]
    fn row_click_is_additive() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
        c.handle(UiEvent::RowClicked(11), &mut reg, &files);

        assert_eq!(c.state().selected_pid, Some(11));
        // Selection alone never closes the dropdown; only the scoped
        // dismiss (OutsideClick) does.
        assert_eq!(c.state().overlay.dropdown_pid(), Some(10));
    }

    #[test]
    fn row_click_on_unknown_pid_is_a_noop() {
        let (mut c, mut reg, files) = setup();
        c.handle(UiEvent::RowClicked(999), &mut reg, &files);
        assert_eq!(c.state().selected_pid, None);
    }

    #[test]
    fn thumbnail_opens_preview_and_reopen_overwrites() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::ThumbnailClicked(10), &mut reg, &files);
        assert_eq!(c.state().overlay.preview_pid(), Some(10));

        c.handle(UiEvent::ThumbnailClicked(11), &mut reg, &files);
        assert_eq!(c.state().overlay.preview_pid(), Some(11));
        match &c.state().overlay {
            Overlay::Preview { model, .. } => assert_eq!(model.command, "node server.js"),
            other => panic!("expected preview, got {other:?}"),
        }
    }

    #[test]
    fn reopening_the_same_preview_rebuilds_identical_content() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::ThumbnailClicked(10), &mut reg, &files);
        let first = match &c.state().overlay {
            Overlay::Preview { model, .. } => model.clone(),
            other => panic!("expected preview, got {other:?}"),
        };

        c.handle(UiEvent::ThumbnailClicked(10), &mut reg, &files);
        let second = match &c.state().overlay {
            Overlay::Preview { model, .. } => model.clone(),
            other => panic!("expected preview, got {other:?}"),
        };

        assert_eq!(first.content, second.content);
        assert_eq!(first.cpu_text, second.cpu_text);
        assert_eq!(first.memory_text, second.memory_text);
        assert_eq!(first.uptime, second.uptime);
        assert_eq!(first.title, second.title);
    }

    #[test]
    fn thumbnail_click_closes_an_open_dropdown() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
        c.handle(UiEvent::ThumbnailClicked(11), &mut reg, &files);

        assert_eq!(c.state().overlay.preview_pid(), Some(11));
        assert!(c.subscriptions().is_empty());
    }

    #[test]
    fn dropdown_ignored_while_preview_open() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::ThumbnailClicked(10), &mut reg, &files);
        c.handle(UiEvent::DropdownToggled(11), &mut reg, &files);
        assert_eq!(c.state().overlay.preview_pid(), Some(10));
    }

    #[test]
    fn escape_closes_preview() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::ThumbnailClicked(10), &mut reg, &files);
        c.handle(UiEvent::EscapePressed, &mut reg, &files);
        assert_eq!(c.state().overlay, Overlay::None);
    }

    #[test]
    fn escape_with_dropdown_closes_advanced_panel_first() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::AdvancedToggled, &mut reg, &files);
        c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
        c.handle(UiEvent::EscapePressed, &mut reg, &files);

        assert!(!c.state().advanced_open);
        assert_eq!(c.state().overlay.dropdown_pid(), Some(10));

        // Default behavior: Escape never closes the dropdown itself.
        c.handle(UiEvent::EscapePressed, &mut reg, &files);
        assert_eq!(c.state().overlay.dropdown_pid(), Some(10));
    }

    #[test]
    fn escape_closes_dropdown_when_configured() {
        let mut c = Controller::new(ControllerConfig { escape_closes_dropdown: true });
        c.attach();
        let mut reg = ProcessRegistry::new(vec![proc(10, "nginx")]);
        let files = FileRegistry::new();

        c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
        c.handle(UiEvent::EscapePressed, &mut reg, &files);
        assert_eq!(c.state().overlay, Overlay::None);
        assert!(c.subscriptions().is_empty());
    }

    #[test]
    fn sort_activation_flips_or_switches() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::SortBy(SortColumn::Cpu), &mut reg, &files);
        assert_eq!(
            reg.sort_config(),
            SortConfig { column: SortColumn::Cpu, direction: SortDirection::Asc }
        );

        // Same column flips direction.
        c.handle(UiEvent::SortBy(SortColumn::Cpu), &mut reg, &files);
        assert_eq!(reg.sort_config().direction, SortDirection::Desc);

        // A different column resets to ascending.
        c.handle(UiEvent::SortBy(SortColumn::Port), &mut reg, &files);
        assert_eq!(
            reg.sort_config(),
            SortConfig { column: SortColumn::Port, direction: SortDirection::Asc }
        );
    }

    #[test]
    fn filter_changes_flow_to_registry() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::FilterChanged("nginx".to_string()), &mut reg, &files);
        assert_eq!(reg.filter_text(), "nginx");
        assert_eq!(c.state().filter_input, "nginx");
    }

    #[test]
    fn dropdown_selection_moves_are_clamped() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
        c.handle(UiEvent::DropdownMoved(-1), &mut reg, &files);
        assert_eq!(c.state().overlay, Overlay::Dropdown { pid: 10, selected: 0 });

        for _ in 0..10 {
            c.handle(UiEvent::DropdownMoved(1), &mut reg, &files);
        }
        assert_eq!(
            c.state().overlay,
            Overlay::Dropdown { pid: 10, selected: KillSignal::ALL.len() - 1 }
        );
    }

    #[test]
    fn detach_closes_overlays_and_releases_subscriptions() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
        c.detach();
        assert_eq!(c.state().overlay, Overlay::None);
        assert!(c.subscriptions().is_empty());

        // Detached controllers drop events.
        c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
        assert_eq!(c.state().overlay, Overlay::None);
    }

    #[test]
    fn kill_e2e_scenario() {
        let (mut c, mut reg, files) = setup();

        c.handle(UiEvent::DropdownToggled(10), &mut reg, &files);
        c.handle(
            UiEvent::SignalChosen { pid: 10, signal: KillSignal::Term },
            &mut reg,
            &files,
        );

        // Delivered exactly once, the dropdown for pid 10 is closed, and
        // the process is gone from the registry.
        assert_eq!(reg.delivered_signals(), &[(10, KillSignal::Term)]);
        assert_eq!(c.state().overlay, Overlay::None);
        assert!(reg.get_process_by_pid(10).is_none());
    }
}
