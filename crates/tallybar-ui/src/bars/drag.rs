//! Drag-to-edit state machine.
//!
//! ```text
//! Idle --begin(key, pointer)--> Dragging(key, pointer)
//! Dragging --pointer_move, moved >= threshold--> Dragging(key, new pointer) + step
//! Dragging --pressed signal goes false--> Idle
//! ```
//!
//! The controller never changes values itself. It reports [`DragStep`]s and
//! the owner of the bars decides what a step means.

use glam::DVec2;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tallybar_geometry::{Axis, Diagram};
use tallybar_input::{PointerPressedObserver, Subscription};

/// Default share of one step's pixel height a drag has to cover.
pub const DEFAULT_DRAG_STEP_RATIO: f64 = 0.85;

/// A discrete step requested by a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStep {
    Up,
    Down,
}

/// The bar being dragged and the pointer position of the last step.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub active_key: String,
    pub last_pointer: DVec2,
}

/// Converts pointer moves into step requests while a bar is dragged.
pub struct DragController {
    session: Rc<RefCell<Option<DragSession>>>,
    observer: Rc<dyn PointerPressedObserver>,
    step_ratio: f64,
    _subscription: Subscription,
}

impl DragController {
    /// Create an idle controller listening to `observer`.
    ///
    /// Any session ends as soon as the observer reports the pointer
    /// released, wherever that happens.
    pub fn new(observer: Rc<dyn PointerPressedObserver>, step_ratio: f64) -> Self {
        let session: Rc<RefCell<Option<DragSession>>> = Rc::new(RefCell::new(None));

        let on_release = Rc::downgrade(&session);
        let subscription = observer.subscribe(Box::new(move |pressed| {
            if pressed {
                return;
            }
            if let Some(session) = on_release.upgrade() {
                if let Some(ended) = session.borrow_mut().take() {
                    tracing::debug!(key = %ended.active_key, "drag ended");
                }
            }
        }));

        Self {
            session,
            observer,
            step_ratio,
            _subscription: subscription,
        }
    }

    /// Start dragging the bar with `key`, replacing any current session.
    pub fn begin(&mut self, key: &str, pointer: DVec2) {
        tracing::debug!(key, x = pointer.x, y = pointer.y, "drag started");
        *self.session.borrow_mut() = Some(DragSession {
            active_key: key.to_string(),
            last_pointer: pointer,
        });
    }

    /// End the current session without waiting for a release.
    pub fn cancel(&mut self) {
        if let Some(ended) = self.session.borrow_mut().take() {
            tracing::debug!(key = %ended.active_key, "drag cancelled");
        }
    }

    /// Feed a pointer move over the bar with `key`.
    ///
    /// Returns a step once the pointer has travelled at least `min_distance_px`
    /// vertically since the last step. Moves over other bars, moves without
    /// a held button and moves while idle are ignored.
    pub fn pointer_move(&mut self, key: &str, pointer: DVec2, min_distance_px: f64) -> Option<DragStep> {
        if !self.observer.is_pressed() {
            return None;
        }

        let mut guard = self.session.borrow_mut();
        let session = guard.as_mut().filter(|session| session.active_key == key)?;

        let previous_y = session.last_pointer.y;
        let step = if previous_y - pointer.y >= min_distance_px {
            DragStep::Up
        } else if pointer.y - previous_y >= min_distance_px {
            DragStep::Down
        } else {
            return None;
        };

        session.last_pointer = pointer;
        tracing::trace!(key, ?step, "drag step");
        Some(step)
    }

    /// Minimum vertical travel for one step in `diagram`.
    pub fn min_step_distance(&self, diagram: &Diagram) -> f64 {
        min_step_distance(diagram, self.step_ratio)
    }

    /// A copy of the current session, if any.
    pub fn session(&self) -> Option<DragSession> {
        self.session.borrow().clone()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn step_ratio(&self) -> f64 {
        self.step_ratio
    }

    pub fn set_step_ratio(&mut self, ratio: f64) {
        self.step_ratio = ratio;
    }
}

/// Pixel distance between data `0` and one step up, scaled by `ratio`.
pub fn min_step_distance(diagram: &Diagram, ratio: f64) -> f64 {
    let step = diagram.range(Axis::Y).step;
    (diagram.to_pixel_y(0.0, 0.0) - diagram.to_pixel_y(step, 0.0)) * ratio
}

impl fmt::Debug for DragController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragController")
            .field("session", &self.session.borrow())
            .field("step_ratio", &self.step_ratio)
            .finish()
    }
}
