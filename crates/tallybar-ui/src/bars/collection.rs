//! The owned bar collection and its change listeners.

use super::bar::{Bar, BarDefaults, BarsSource};
use super::reconcile::{BarValueChange, BarsState, reconcile};
use std::fmt;
use std::sync::Arc;

/// Listener for bar value changes, called with `(key, new_value)`.
pub type ValueListener = Box<dyn FnMut(&str, f64)>;

/// Handle for removing a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Bounds applied to step requests coming from drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepLimits {
    pub max: f64,
    pub step: f64,
}

impl StepLimits {
    /// The value after one step up, or `None` if already at the top.
    pub fn up(&self, value: f64) -> Option<f64> {
        (value < self.max).then(|| (value + self.step).min(self.max))
    }

    /// The value after one step down, or `None` if already at zero.
    ///
    /// A value above `max` snaps to one step below `max`.
    pub fn down(&self, value: f64) -> Option<f64> {
        if value <= 0.0 {
            return None;
        }

        let next = if value > self.max {
            self.max - self.step
        } else {
            value - self.step
        };
        Some(next.max(0.0))
    }
}

/// Canonical owner of the bar list.
///
/// The list only changes through [`set_source`](Self::set_source) and the
/// value mutators. Each change swaps in a new snapshot, then notifies the
/// listeners once per bar whose value actually changed.
pub struct BarCollection {
    state: BarsState,
    defaults: BarDefaults,
    listeners: Vec<(ListenerId, ValueListener)>,
    next_listener: u64,
}

impl BarCollection {
    pub fn new(source: &BarsSource, defaults: BarDefaults) -> Self {
        Self {
            state: BarsState::new(source, &defaults),
            defaults,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Register a value listener.
    pub fn on_value_changed(&mut self, listener: impl FnMut(&str, f64) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Reconcile against a new external source.
    pub fn set_source(&mut self, source: &BarsSource) -> Vec<BarValueChange> {
        let (next, changes) = reconcile(&self.state, source, &self.defaults);
        self.apply(next, changes)
    }

    /// Set the value of the bar with `key`.
    ///
    /// Unknown keys are ignored and return `false`.
    pub fn set_value(&mut self, key: &str, value: f64) -> bool {
        match self.state.with_value(key, value) {
            Some((next, changes)) => {
                self.apply(next, changes);
                true
            }
            None => {
                tracing::trace!(key, "set_value for unknown bar ignored");
                false
            }
        }
    }

    /// Step a bar up within `limits`; returns the new value if it moved.
    pub fn step_up(&mut self, key: &str, limits: StepLimits) -> Option<f64> {
        let next = limits.up(self.value(key)?)?;
        self.set_value(key, next);
        Some(next)
    }

    /// Step a bar down within `limits`; returns the new value if it moved.
    pub fn step_down(&mut self, key: &str, limits: StepLimits) -> Option<f64> {
        let next = limits.down(self.value(key)?)?;
        self.set_value(key, next);
        Some(next)
    }

    /// Replace the defaults used for bars generated from now on.
    pub fn set_defaults(&mut self, defaults: BarDefaults) {
        self.defaults = defaults;
    }

    pub fn defaults(&self) -> &BarDefaults {
        &self.defaults
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.state.get(key).map(|bar| bar.value)
    }

    pub fn get(&self, key: &str) -> Option<&Bar> {
        self.state.get(key)
    }

    pub fn bars(&self) -> &[Bar] {
        self.state.bars()
    }

    /// A shared, immutable handle to the current bars.
    pub fn snapshot(&self) -> Arc<[Bar]> {
        self.state.snapshot()
    }

    pub fn state(&self) -> &BarsState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.state.bars().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.bars().is_empty()
    }

    fn apply(&mut self, next: BarsState, changes: Vec<BarValueChange>) -> Vec<BarValueChange> {
        self.state = next;

        for change in &changes {
            tracing::debug!(key = %change.key, value = change.value, "bar value changed");
            for (_, listener) in self.listeners.iter_mut() {
                listener(&change.key, change.value);
            }
        }

        changes
    }
}

impl fmt::Debug for BarCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarCollection")
            .field("state", &self.state)
            .field("defaults", &self.defaults)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorded(collection: &mut BarCollection) -> Rc<RefCell<Vec<(String, f64)>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        collection.on_value_changed(move |key, value| sink.borrow_mut().push((key.to_string(), value)));
        log
    }

    #[test]
    fn test_step_limits() {
        let limits = StepLimits { max: 10.0, step: 1.0 };
        assert_eq!(limits.up(9.0), Some(10.0));
        assert_eq!(limits.up(10.0), None);
        assert_eq!(limits.up(9.5), Some(10.0));
        assert_eq!(limits.down(1.0), Some(0.0));
        assert_eq!(limits.down(0.0), None);
        assert_eq!(limits.down(0.5), Some(0.0));
        assert_eq!(limits.down(14.0), Some(9.0));
    }

    #[test]
    fn test_set_value_notifies_once() {
        let mut collection = BarCollection::new(&BarsSource::Count(2), BarDefaults::default());
        let log = recorded(&mut collection);

        assert!(collection.set_value("1", 3.0));
        assert!(collection.set_value("1", 3.0));
        assert!(!collection.set_value("9", 3.0));

        assert_eq!(*log.borrow(), vec![("1".to_string(), 3.0)]);
    }

    #[test]
    fn test_removed_listener_is_silent() {
        let mut collection = BarCollection::new(&BarsSource::Count(1), BarDefaults::default());
        let log = Rc::new(RefCell::new(0));
        let sink = log.clone();
        let id = collection.on_value_changed(move |_, _| *sink.borrow_mut() += 1);

        assert!(collection.remove_listener(id));
        assert!(!collection.remove_listener(id));
        collection.set_value("0", 1.0);
        assert_eq!(*log.borrow(), 0);
    }

    #[test]
    fn test_step_refusals_do_not_notify() {
        let mut collection = BarCollection::new(&BarsSource::Count(1), BarDefaults::default());
        let log = recorded(&mut collection);
        let limits = StepLimits { max: 2.0, step: 1.0 };

        assert_eq!(collection.step_down("0", limits), None);
        assert_eq!(collection.step_up("0", limits), Some(1.0));
        assert_eq!(collection.step_up("0", limits), Some(2.0));
        assert_eq!(collection.step_up("0", limits), None);
        assert_eq!(collection.step_up("missing", limits), None);

        assert_eq!(log.borrow().len(), 2);
    }
}
