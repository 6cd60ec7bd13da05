use parking_lot::Mutex;
use std::sync::Arc;
use tallybar_input::{PointerPressedObserver, PointerPressedSignal, PressedCallback, Subscription};

#[derive(Debug, Default)]
struct Counts {
    subscribed: usize,
    unsubscribed: usize,
}

/// A [`PointerPressedSignal`] that counts subscriptions.
#[derive(Debug, Clone, Default)]
pub struct CountingObserver {
    signal: PointerPressedSignal,
    counts: Arc<Mutex<Counts>>,
}

impl CountingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The wrapped signal, for driving press and release.
    pub fn signal(&self) -> &PointerPressedSignal {
        &self.signal
    }

    pub fn press(&self) {
        self.signal.press();
    }

    pub fn release(&self) {
        self.signal.release();
    }

    /// Total subscriptions ever made.
    pub fn subscribe_count(&self) -> usize {
        self.counts.lock().subscribed
    }

    /// Subscriptions currently alive.
    pub fn live_subscriptions(&self) -> usize {
        let counts = self.counts.lock();
        counts.subscribed - counts.unsubscribed
    }
}

impl PointerPressedObserver for CountingObserver {
    fn is_pressed(&self) -> bool {
        self.signal.is_pressed()
    }

    fn subscribe(&self, callback: PressedCallback) -> Subscription {
        self.counts.lock().subscribed += 1;
        let inner = self.signal.subscribe(callback);
        let counts = self.counts.clone();

        Subscription::new(move || {
            inner.unsubscribe();
            counts.lock().unsubscribed += 1;
        })
    }
}
