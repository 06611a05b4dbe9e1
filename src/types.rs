use crate::outline::OutlinePoints;

/// Winding of an outline, as seen in y-down screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Aka 'Positive' in Geometry
    Clockwise,
    /// Aka 'Negative' in Geometry
    CounterClockwise,
}

impl Winding {
    /// Zero-area outlines, including those with fewer than 3 points, count as counter-clockwise.
    pub fn from_outline<T: OutlinePoints + ?Sized>(outline: &T) -> Self {
        let count = outline.point_count();
        let mut sum = 0.0;
        for i in 0..count {
            let a = outline.point_at(i);
            let b = outline.point_at((i + 1) % count);
            sum += a.x * b.y - b.x * a.y;
        }
        if sum > 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}
