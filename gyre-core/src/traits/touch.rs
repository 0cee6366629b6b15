//! Touch panel trait

/// Trait for the capacitive touch controller
pub trait TouchPanel {
    /// Read the current touch point
    ///
    /// Returns `Some((x, y))` while a finger is on the panel, `None` otherwise.
    /// Called exactly once per loop tick.
    fn poll(&mut self) -> Option<(i16, i16)>;
}
