//! Joint angle computation and range classification.

use crate::pose::Point;

/// Computes the interior angle at vertex `b`, in degrees.
///
/// The angle is formed by the rays `b → a` and `b → c` and always lies in `[0, 180]`.
/// Defined for all finite inputs; degenerate cases (coincident or collinear points) yield 0
/// or 180 like any other input, and the result is never NaN.
pub fn angle_at(a: Point, b: Point, c: Point) -> f32 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let degrees = radians.abs().to_degrees();
    if degrees > 180.0 {
        360.0 - degrees
    } else {
        degrees
    }
}

/// The acceptable bend range for an elbow angle, in degrees.
///
/// Angles strictly below `lower_deg` or strictly above `upper_deg` classify as out of
/// range; both boundary values count as in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormRange {
    pub lower_deg: f32,
    pub upper_deg: f32,
}

/// The default range flags a nearly-closed (< 30°) or nearly-hyperextended (> 160°) elbow.
impl Default for FormRange {
    fn default() -> Self {
        Self {
            lower_deg: 30.0,
            upper_deg: 160.0,
        }
    }
}

impl FormRange {
    pub fn new(lower_deg: f32, upper_deg: f32) -> Self {
        Self { lower_deg, upper_deg }
    }

    /// Returns true ("check form") when `angle_deg` falls outside this range.
    #[inline]
    pub fn is_out_of_range(&self, angle_deg: f32) -> bool {
        angle_deg < self.lower_deg || angle_deg > self.upper_deg
    }

    /// Computes the interior angle at `b` and classifies it against this range.
    pub fn evaluate(&self, a: Point, b: Point, c: Point) -> ArmAngle {
        let degrees = angle_at(a, b, c);
        ArmAngle {
            degrees,
            out_of_range: self.is_out_of_range(degrees),
        }
    }
}

/// A classified elbow angle. Derived once per frame, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmAngle {
    /// Interior angle at the elbow, in `[0, 180]` degrees.
    pub degrees: f32,
    /// Whether the angle falls outside the configured [`FormRange`].
    pub out_of_range: bool,
}
