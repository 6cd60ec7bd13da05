use glam::DVec2;

/// A raw pointer event in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The primary button went down.
    Pressed(DVec2),
    /// The pointer moved.
    Moved(DVec2),
    /// The primary button went up.
    Released(DVec2),
}

impl PointerEvent {
    /// Where the event happened.
    pub fn position(&self) -> DVec2 {
        match self {
            Self::Pressed(pos) | Self::Moved(pos) | Self::Released(pos) => *pos,
        }
    }

    /// The pressed state implied by this event, if it changes it.
    pub fn pressed_state(&self) -> Option<bool> {
        match self {
            Self::Pressed(_) => Some(true),
            Self::Released(_) => Some(false),
            Self::Moved(_) => None,
        }
    }
}
