//! Precomputed ring coordinates
//!
//! The clock face rotates by whole degrees, so every position it can
//! draw at is one of 360 points on each of three concentric rings.

use crate::traits::Point;

/// Degrees in a full turn, and the table length
pub const RING_STEPS: usize = 360;

/// Distance from the label ring to the tick ring
pub const TICK_INSET: i32 = 16;

/// Distance from the label ring to the inner end of hour ticks
pub const TICK_END_INSET: i32 = 26;

/// Points on the label, tick and tick-end rings for every degree
#[derive(Clone)]
pub struct CoordinateTable {
    label: [Point; RING_STEPS],
    tick: [Point; RING_STEPS],
    tick_end: [Point; RING_STEPS],
}

impl core::fmt::Debug for CoordinateTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CoordinateTable").finish_non_exhaustive()
    }
}

impl CoordinateTable {
    /// Project every degree onto the three rings around `center`
    ///
    /// Angle 0 points right and angles grow clockwise in screen space.
    pub fn build(center: Point, radius: i32) -> Self {
        let mut table = Self {
            label: [Point::default(); RING_STEPS],
            tick: [Point::default(); RING_STEPS],
            tick_end: [Point::default(); RING_STEPS],
        };

        let project = |r: i32, cos: f64, sin: f64| {
            Point::new(
                (f64::from(r) * cos + f64::from(center.x)) as i32,
                (f64::from(r) * sin + f64::from(center.y)) as i32,
            )
        };

        for i in 0..RING_STEPS {
            let rad = (i as f64).to_radians();
            let (sin, cos) = (libm::sin(rad), libm::cos(rad));
            table.label[i] = project(radius, cos, sin);
            table.tick[i] = project(radius - TICK_INSET, cos, sin);
            table.tick_end[i] = project(radius - TICK_END_INSET, cos, sin);
        }

        table
    }

    /// Base angle of hour slot `k` (0-11)
    pub const fn hour_base(k: usize) -> usize {
        k * 30
    }

    /// Base angle of minute slot `k` (0-59)
    pub const fn minute_base(k: usize) -> usize {
        k * 6
    }

    /// Table index of a slot rotated by `offset` degrees
    pub const fn ring_index(base: usize, offset: u16) -> usize {
        (base + offset as usize) % RING_STEPS
    }

    pub fn label(&self, index: usize) -> Point {
        self.label[index % RING_STEPS]
    }

    pub fn tick(&self, index: usize) -> Point {
        self.tick[index % RING_STEPS]
    }

    pub fn tick_end(&self, index: usize) -> Point {
        self.tick_end[index % RING_STEPS]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CoordinateTable {
        CoordinateTable::build(Point::new(120, 120), 104)
    }

    #[test]
    fn test_cardinal_points() {
        let t = table();
        assert_eq!(t.label(0), Point::new(224, 120));
        assert_eq!(t.tick(0), Point::new(208, 120));
        assert_eq!(t.tick_end(0), Point::new(198, 120));
        // Screen y grows downwards, so 90 degrees is straight down
        assert_eq!(t.label(90), Point::new(120, 224));
        assert_eq!(t.label(180).y, 120);
        assert!((15..=16).contains(&t.label(180).x));
        assert!((15..=16).contains(&t.label(270).y));
    }

    #[test]
    fn test_points_stay_on_panel() {
        let t = table();
        for i in 0..RING_STEPS {
            for p in [t.label(i), t.tick(i), t.tick_end(i)] {
                assert!((0..240).contains(&p.x) && (0..240).contains(&p.y));
            }
        }
    }

    #[test]
    fn test_slot_bases() {
        assert_eq!(CoordinateTable::hour_base(11), 330);
        assert_eq!(CoordinateTable::minute_base(59), 354);
        assert_eq!(CoordinateTable::ring_index(330, 54), 24);
        assert_eq!(CoordinateTable::ring_index(0, 0), 0);
    }
}
