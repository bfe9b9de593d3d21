//! Simulated process registry: canonical process list, filter and sort
//! state, and signal delivery.
//!
//! The view layer consumes this module through a narrow contract
//! (`processes`, `get_process_by_pid`, `set_filter_text`, `set_sort_config`,
//! `kill_process`) and never mutates records directly.

mod files;
mod record;
mod simulated;

pub use files::{FileRegistry, FileResolver};
pub use record::{ProcessRecord, ProcessState};
pub use simulated::builtin_scenario;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Columns the process table can sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Pid,
    User,
    Cpu,
    Mem,
    Time,
    Port,
    Command,
}

impl SortColumn {
    pub const ALL: [SortColumn; 7] = [
        SortColumn::Pid,
        SortColumn::User,
        SortColumn::Cpu,
        SortColumn::Mem,
        SortColumn::Time,
        SortColumn::Port,
        SortColumn::Command,
    ];

    /// Header label for the column.
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Pid => "PID",
            SortColumn::User => "USER",
            SortColumn::Cpu => "CPU",
            SortColumn::Mem => "MEM",
            SortColumn::Time => "TIME",
            SortColumn::Port => "PORT",
            SortColumn::Command => "COMMAND",
        }
    }

    /// The column after this one, wrapping around.
    pub fn next(&self) -> SortColumn {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active sort configuration. Exactly one column at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// Signals the dashboard can dispatch. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KillSignal {
    Term,
    Kill,
    Int,
    Hup,
    Stop,
    Cont,
}

impl KillSignal {
    pub const ALL: [KillSignal; 6] = [
        KillSignal::Term,
        KillSignal::Kill,
        KillSignal::Int,
        KillSignal::Hup,
        KillSignal::Stop,
        KillSignal::Cont,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            KillSignal::Term => "TERM",
            KillSignal::Kill => "KILL",
            KillSignal::Int => "INT",
            KillSignal::Hup => "HUP",
            KillSignal::Stop => "STOP",
            KillSignal::Cont => "CONT",
        }
    }

    /// Human label shown in the dropdown, e.g. "SIGTERM (Terminate)".
    pub fn description(&self) -> &'static str {
        match self {
            KillSignal::Term => "Terminate",
            KillSignal::Kill => "Kill",
            KillSignal::Int => "Interrupt",
            KillSignal::Hup => "Hangup",
            KillSignal::Stop => "Stop",
            KillSignal::Cont => "Continue",
        }
    }
}

/// Errors loading a process scenario from disk.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("cannot read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse scenario file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The canonical process list plus filter/sort state.
#[derive(Debug)]
pub struct ProcessRegistry {
    processes: Vec<ProcessRecord>,
    filter_text: String,
    sort_config: SortConfig,
    /// Dispatched signals, oldest first. Inspected by tests.
    delivered: Vec<(u32, KillSignal)>,
}

impl ProcessRegistry {
    pub fn new(processes: Vec<ProcessRecord>) -> Self {
        Self {
            processes,
            filter_text: String::new(),
            sort_config: SortConfig::default(),
            delivered: Vec::new(),
        }
    }

    /// Loads a registry from a JSON scenario file (an array of records).
    pub fn from_scenario_file(path: &Path) -> Result<Self, ScenarioError> {
        let data = std::fs::read_to_string(path)?;
        let processes: Vec<ProcessRecord> = serde_json::from_str(&data)?;
        info!(count = processes.len(), path = %path.display(), "loaded scenario");
        Ok(Self::new(processes))
    }

    pub fn processes(&self) -> &[ProcessRecord] {
        &self.processes
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn sort_config(&self) -> SortConfig {
        self.sort_config
    }

    pub fn get_process_by_pid(&self, pid: u32) -> Option<&ProcessRecord> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    pub fn set_sort_config(&mut self, column: SortColumn, direction: SortDirection) {
        debug!(column = column.label(), ?direction, "sort changed");
        self.sort_config = SortConfig { column, direction };
    }

    /// Delivers a signal to a process. Unknown pids are a silent no-op
    /// (a click can race a re-render) and are not recorded.
    ///
    /// Simulated semantics: TERM/KILL/INT remove the record, STOP marks it
    /// stopped, CONT resumes it, HUP resets its elapsed time.
    pub fn kill_process(&mut self, pid: u32, signal: KillSignal) -> bool {
        let Some(idx) = self.processes.iter().position(|p| p.pid == pid) else {
            debug!(pid, signal = signal.name(), "signal for unknown pid dropped");
            return false;
        };

        info!(pid, signal = signal.name(), "signal dispatched");
        self.delivered.push((pid, signal));

        match signal {
            KillSignal::Term | KillSignal::Kill | KillSignal::Int => {
                self.processes.remove(idx);
            }
            KillSignal::Stop => {
                self.processes[idx].state = ProcessState::Stopped;
            }
            KillSignal::Cont => {
                self.processes[idx].state = ProcessState::Running;
            }
            KillSignal::Hup => {
                self.processes[idx].time = "00:00:00".to_string();
            }
        }
        true
    }

    /// Signals delivered so far, oldest first.
    pub fn delivered_signals(&self) -> &[(u32, KillSignal)] {
        &self.delivered
    }
}
