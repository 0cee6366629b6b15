//! Events that drive screen transitions

use crate::input::GestureEvent;

/// Input events consumed by the application state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Two quick taps anywhere
    DoubleTap,
    /// A single tap released at row `y`
    Tap { y: i16 },
}

impl Event {
    /// Build an event from a classified gesture and the release row
    pub fn from_gesture(gesture: GestureEvent, y: i16) -> Option<Self> {
        match gesture {
            GestureEvent::None => None,
            GestureEvent::SingleTap => Some(Event::Tap { y }),
            GestureEvent::DoubleTap => Some(Event::DoubleTap),
        }
    }
}

/// What the controller must do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Remain on the current screen, nothing to do
    Stay,
    /// Switch to another screen (full redraw, idle timer reset)
    Switch(super::AppState),
    /// Run a network time sync in place
    StartSync,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_gesture() {
        assert_eq!(Event::from_gesture(GestureEvent::None, 10), None);
        assert_eq!(
            Event::from_gesture(GestureEvent::SingleTap, 10),
            Some(Event::Tap { y: 10 })
        );
        assert_eq!(
            Event::from_gesture(GestureEvent::DoubleTap, 10),
            Some(Event::DoubleTap)
        );
    }
}
