//! Planar coordinates.
//!
//! The city is a flat square of side `city_size`; all distances are straight
//! lines.  There is no obstacle avoidance.

/// A position in city units.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Squared Euclidean distance.  Cheaper when only ordering matters.
    #[inline]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Move from `self` toward `target` by at most `max_step`.
    ///
    /// Never overshoots: if `target` is within `max_step` the result is
    /// `target` itself, which also covers a coincident target without
    /// normalising a zero-length vector.
    pub fn step_toward(self, target: Point, max_step: f64) -> Point {
        let dist = self.distance(target);
        if dist <= max_step.max(0.0) {
            return target;
        }
        let f = max_step / dist;
        Point {
            x: self.x + (target.x - self.x) * f,
            y: self.y + (target.y - self.y) * f,
        }
    }

    #[inline]
    pub fn as_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
