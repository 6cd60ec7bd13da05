//! Reconciling the internal bar list against the external source.
//!
//! Everything here is a pure state transition:
//! `reconcile(previous, source) -> (next, changes)`. Callers apply the new
//! state first and only then deliver the changes, so anyone reacting to a
//! change already sees the updated list.

use super::bar::{Bar, BarDefaults, BarsSource};
use std::sync::Arc;
use tallybar_core::alloc::HashMap;
use tallybar_core::profiling::profile_scope;

/// A bar whose value differs between two snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct BarValueChange {
    pub key: String,
    pub value: f64,
}

/// The kind of source the current list was last reconciled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Count(usize),
    List,
}

impl From<&BarsSource> for SourceKind {
    fn from(source: &BarsSource) -> Self {
        match source {
            BarsSource::Count(count) => Self::Count(*count),
            BarsSource::List(_) => Self::List,
        }
    }
}

/// Immutable snapshot of the internal bar list.
///
/// Cloning is cheap; every change produces a new snapshot and leaves
/// existing ones untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct BarsState {
    source: SourceKind,
    bars: Arc<[Bar]>,
}

impl BarsState {
    /// Initial state generated straight from a source.
    pub fn new(source: &BarsSource, defaults: &BarDefaults) -> Self {
        Self {
            source: source.into(),
            bars: source.generate(defaults).into(),
        }
    }

    /// The bars in display order.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// A shared handle to the bars.
    pub fn snapshot(&self) -> Arc<[Bar]> {
        self.bars.clone()
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source
    }

    pub fn get(&self, key: &str) -> Option<&Bar> {
        self.bars.iter().find(|bar| bar.key == key)
    }

    /// Replace the value of the bar with `key`.
    ///
    /// Returns `None` when no bar has that key. All other fields, and all
    /// other bars, are carried over unchanged.
    pub fn with_value(&self, key: &str, value: f64) -> Option<(Self, Vec<BarValueChange>)> {
        let index = self.bars.iter().position(|bar| bar.key == key)?;

        let mut bars = self.bars.to_vec();
        bars[index].value = value;

        let next = Self {
            source: self.source,
            bars: bars.into(),
        };
        let changes = diff_values(&self.bars, &next.bars);
        Some((next, changes))
    }
}

/// Reconcile `previous` against a new source.
///
/// When both the previous and the new source are counts, existing bars
/// keep their values and styling by position, the list is truncated or
/// grown with defaulted bars whose keys continue from the current length.
/// Any other combination regenerates the list from the new source, which
/// drops unsaved edits.
pub fn reconcile(
    previous: &BarsState,
    source: &BarsSource,
    defaults: &BarDefaults,
) -> (BarsState, Vec<BarValueChange>) {
    profile_scope!("bars_reconcile");

    let bars: Vec<Bar> = match (previous.source, source) {
        (SourceKind::Count(old), BarsSource::Count(new)) => {
            resize_counted(&previous.bars, old, *new, defaults)
        }
        _ => source.generate(defaults),
    };

    let next = BarsState {
        source: source.into(),
        bars: bars.into(),
    };
    let changes = diff_values(&previous.bars, &next.bars);

    tracing::debug!(
        from = ?previous.source,
        to = ?next.source,
        bars = next.bars.len(),
        changes = changes.len(),
        "reconciled bars"
    );

    (next, changes)
}

fn resize_counted(existing: &[Bar], old: usize, new: usize, defaults: &BarDefaults) -> Vec<Bar> {
    let mut bars: Vec<Bar> = existing.iter().take(new).cloned().collect();

    let kept = bars.len();
    let additional = new.saturating_sub(old);
    bars.extend((0..additional).map(|i| defaults.bar((kept + i).to_string())));
    bars
}

/// Bars whose value differs between two snapshots, matched by key.
///
/// Bars present in only one snapshot are not changes. Values compare with
/// `!=`, so a NaN value always counts as changed.
pub fn diff_values(previous: &[Bar], next: &[Bar]) -> Vec<BarValueChange> {
    let previous_values: HashMap<&str, f64> = previous
        .iter()
        .map(|bar| (bar.key.as_str(), bar.value))
        .collect();

    next.iter()
        .filter_map(|bar| {
            let old = previous_values.get(bar.key.as_str())?;
            (*old != bar.value).then(|| BarValueChange {
                key: bar.key.clone(),
                value: bar.value,
            })
        })
        .collect()
}
