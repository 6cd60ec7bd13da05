use parking_lot::Mutex;
use std::sync::Arc;

/// Records value-change notifications in arrival order.
///
/// Clones share the same log, so one clone can be moved into a listener
/// while the test keeps another for assertions.
#[derive(Debug, Clone, Default)]
pub struct ChangeRecorder {
    events: Arc<Mutex<Vec<(String, f64)>>>,
}

impl ChangeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener closure that appends to this recorder.
    pub fn listener(&self) -> impl FnMut(&str, f64) + 'static {
        let events = self.events.clone();
        move |key: &str, value: f64| events.lock().push((key.to_string(), value))
    }

    /// All events recorded so far.
    pub fn events(&self) -> Vec<(String, f64)> {
        self.events.lock().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<(String, f64)> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Events recorded for one key.
    pub fn values_for(&self, key: &str) -> Vec<f64> {
        self.events
            .lock()
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| *v)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}
