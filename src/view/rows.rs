//! Row model: the filtered, sorted row set for the process table.
//!
//! Hierarchy is not re-derived here: `level` comes from the record, and sort
//! order may interleave parents and children. That is inherited behavior
//! from the simulated domain and is kept as-is.

use std::cmp::Ordering;

use crate::registry::{ProcessRecord, SortColumn, SortConfig, SortDirection};

/// Sort key per column; ordering mirrors the column's natural type.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Integer(i64),
    Float(f64),
    String(String),
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (SortKey::Integer(a), SortKey::Integer(b)) => a.partial_cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.partial_cmp(b),
            (SortKey::String(a), SortKey::String(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

fn sort_key(record: &ProcessRecord, column: SortColumn) -> SortKey {
    match column {
        SortColumn::Pid => SortKey::Integer(record.pid as i64),
        SortColumn::User => SortKey::String(record.user.clone()),
        SortColumn::Cpu => SortKey::Float(record.cpu),
        SortColumn::Mem => SortKey::Float(record.memory),
        SortColumn::Time => SortKey::String(record.time.clone()),
        // Missing ports sort as lowest.
        SortColumn::Port => SortKey::Integer(record.port.map(i64::from).unwrap_or(-1)),
        SortColumn::Command => SortKey::String(record.command.clone()),
    }
}

/// Case-sensitive substring match on `command` or `user`; an empty filter
/// matches everything.
pub fn matches_filter(record: &ProcessRecord, filter_text: &str) -> bool {
    filter_text.is_empty()
        || record.command.contains(filter_text)
        || record.user.contains(filter_text)
}

/// Builds the displayed row set: filter, then stable sort. Descending order
/// reverses the comparator, not the sorted sequence, so ties keep their
/// input order in both directions. Returns a fresh sequence each call.
pub fn build_rows(
    processes: &[ProcessRecord],
    filter_text: &str,
    sort: SortConfig,
) -> Vec<ProcessRecord> {
    let mut rows: Vec<ProcessRecord> = processes
        .iter()
        .filter(|p| matches_filter(p, filter_text))
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        let cmp = sort_key(a, sort.column)
            .partial_cmp(&sort_key(b, sort.column))
            .unwrap_or(Ordering::Equal);
        match sort.direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });

    rows
}
