//! Process record as published by the registry.

use serde::{Deserialize, Serialize};

/// One simulated process. Owned by the registry, read-only to the view layer.
///
/// `cpu` and `memory` are stored as fractions in `[0, 1]` and multiplied by
/// 100 only at format time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub pid: u32,
    /// Parent linkage. `level` is the precomputed depth in the tree
    /// (0 = root); the registry guarantees depth(child) = depth(parent) + 1
    /// and an acyclic chain. The view layer does not re-derive either.
    #[serde(default)]
    pub parent_pid: Option<u32>,
    #[serde(default)]
    pub level: u8,
    pub user: String,
    pub command: String,
    pub cpu: f64,
    pub memory: f64,
    /// Elapsed time as HH:MM:SS. Opaque to the view layer.
    pub time: String,
    #[serde(default)]
    pub port: Option<u16>,
    /// Well-known service tag (`nginx`, `node`, `mysql`, ...) used for
    /// preview and thumbnail dispatch.
    #[serde(default)]
    pub service: Option<String>,
    /// Path to an associated file, if any.
    #[serde(default)]
    pub file: Option<String>,
    /// Row opacity in [0, 1]; below 0.8 the process counts as background.
    #[serde(default = "default_transparency")]
    pub transparency: f64,
    #[serde(default)]
    pub state: ProcessState,
}

fn default_transparency() -> f64 {
    1.0
}

/// Simulated run state, mutated by signal delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessState {
    #[default]
    Running,
    Stopped,
}

impl ProcessRecord {
    /// Whether the preview should report this process as a background one.
    pub fn is_background(&self) -> bool {
        self.transparency < 0.8
    }

    /// Elapsed seconds parsed from the HH:MM:SS `time` field.
    /// Returns `None` when the field is not in that shape.
    pub fn elapsed_secs(&self) -> Option<i64> {
        let mut parts = self.time.split(':');
        let h: i64 = parts.next()?.parse().ok()?;
        let m: i64 = parts.next()?.parse().ok()?;
        let s: i64 = parts.next()?.parse().ok()?;
        if parts.next().is_some() || !(0..60).contains(&m) || !(0..60).contains(&s) {
            return None;
        }
        Some(h * 3600 + m * 60 + s)
    }
}
