//! The "is a pointer button held" signal.

use super::event::PointerEvent;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Callback invoked with the new pressed state on every transition.
pub type PressedCallback = Box<dyn FnMut(bool)>;

/// Read access to a document-wide pointer pressed state.
///
/// Implementations call every subscribed callback once per transition,
/// never for repeated identical states.
pub trait PointerPressedObserver {
    /// Whether a pointer button is currently held.
    fn is_pressed(&self) -> bool;

    /// Register a callback for pressed state transitions.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// dropped or [`Subscription::unsubscribe`]d.
    fn subscribe(&self, callback: PressedCallback) -> Subscription;
}

/// Handle that keeps a callback registered.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the action that removes the callback.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription that was never registered anywhere.
    pub fn empty() -> Self {
        Self { cancel: None }
    }

    /// Remove the callback now.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[derive(Default)]
struct SignalState {
    pressed: bool,
    next_id: u64,
    subscribers: Vec<(u64, PressedCallback)>,
    dispatching: bool,
    cancelled: Vec<u64>,
}

impl SignalState {
    fn remove(&mut self, id: u64) {
        if self.dispatching {
            self.cancelled.push(id);
        } else {
            self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        }
    }
}

/// Single-threaded pressed signal driven by the host.
///
/// Clones share the same state; feed it every pointer press and release
/// the host sees, including those outside any widget.
///
/// # Example
///
/// ```
/// use tallybar_input::{PointerPressedObserver, PointerPressedSignal};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let signal = PointerPressedSignal::new();
/// let releases = Rc::new(Cell::new(0));
///
/// let counter = releases.clone();
/// let _sub = signal.subscribe(Box::new(move |pressed| {
///     if !pressed {
///         counter.set(counter.get() + 1);
///     }
/// }));
///
/// signal.press();
/// signal.release();
/// signal.release();
/// assert_eq!(releases.get(), 1);
/// ```
#[derive(Clone, Default)]
pub struct PointerPressedSignal {
    state: Rc<RefCell<SignalState>>,
}

impl PointerPressedSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// A button went down anywhere.
    pub fn press(&self) {
        self.set_pressed(true);
    }

    /// A button went up anywhere.
    pub fn release(&self) {
        self.set_pressed(false);
    }

    /// Update the pressed state from a raw pointer event.
    pub fn handle_event(&self, event: &PointerEvent) {
        if let Some(pressed) = event.pressed_state() {
            self.set_pressed(pressed);
        }
    }

    /// Set the pressed state, notifying subscribers on transitions only.
    ///
    /// Callbacks may subscribe or unsubscribe while being notified; such
    /// changes apply from the next transition on.
    pub fn set_pressed(&self, pressed: bool) {
        let mut subscribers = {
            let mut state = self.state.borrow_mut();
            if state.pressed == pressed {
                return;
            }
            state.pressed = pressed;
            state.dispatching = true;
            std::mem::take(&mut state.subscribers)
        };

        tracing::trace!(pressed, subscribers = subscribers.len(), "pointer pressed state changed");

        for (_, callback) in subscribers.iter_mut() {
            callback(pressed);
        }

        let mut state = self.state.borrow_mut();
        state.dispatching = false;
        subscribers.append(&mut state.subscribers);
        let cancelled = std::mem::take(&mut state.cancelled);
        subscribers.retain(|(id, _)| !cancelled.contains(id));
        state.subscribers = subscribers;
    }

    /// Number of registered callbacks.
    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }
}

impl PointerPressedObserver for PointerPressedSignal {
    fn is_pressed(&self) -> bool {
        self.state.borrow().pressed
    }

    fn subscribe(&self, callback: PressedCallback) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.subscribers.push((id, callback));
            id
        };

        let weak: Weak<RefCell<SignalState>> = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().remove(id);
            }
        })
    }
}

impl fmt::Debug for PointerPressedSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("PointerPressedSignal")
            .field("pressed", &state.pressed)
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}
