use crate::outline::{outline_points, OutlinePoints};
use crate::spacial::Position;

/// Axis-aligned bounds of a vertex set.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min: Position,
    pub max: Position,
}

impl BoundingBox {
    pub fn expand(&mut self, other: &BoundingBox) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
    }

    pub fn expand_to_include(&mut self, position: &Position) {
        self.min.x = self.min.x.min(position.x);
        self.min.y = self.min.y.min(position.y);
        self.max.x = self.max.x.max(position.x);
        self.max.y = self.max.y.max(position.y);
    }
}

/// The empty bounding box, which contains nothing.
impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: Position::new(f64::MAX, f64::MAX),
            max: Position::new(f64::MIN, f64::MIN),
        }
    }
}

impl BoundingBox {
    /// Note that a bounding box of 0,0 -> 0,0 is NOT empty
    /// e.g., a shape with all its points at the origin still has bounds, just zero-sized ones.
    ///
    /// Only a bounding box which is the same as the one returned by `default` counts as empty.
    pub fn is_empty(&self) -> bool {
        self.eq(&BoundingBox::default())
    }

    /// Zero for an empty bounding box.
    pub fn width(&self) -> f64 {
        match self.is_empty() {
            true => 0.0,
            false => self.max.x - self.min.x,
        }
    }

    /// Zero for an empty bounding box.
    pub fn height(&self) -> f64 {
        match self.is_empty() {
            true => 0.0,
            false => self.max.y - self.min.y,
        }
    }

    /// Returns the geometric center of the bounding box, `None` when empty.
    pub fn center(&self) -> Option<Position> {
        match self.is_empty() {
            true => None,
            false => Some(Position::new(
                (self.min.x + self.max.x) / 2.0,
                (self.min.y + self.max.y) / 2.0,
            )),
        }
    }

    /// Edges are inclusive. Always false for an empty bounding box.
    pub fn contains(&self, position: &Position) -> bool {
        position.x >= self.min.x && position.x <= self.max.x && position.y >= self.min.y && position.y <= self.max.y
    }

    /// True if `other` lies entirely within this bounding box. An empty `other` is contained by anything.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        if other.is_empty() {
            return true;
        }
        self.contains(&other.min) && self.contains(&other.max)
    }

    /// Returns 4 corner points of the bounding box such that the result is useable as a closed path.
    /// ```plaintext
    /// (min_x, min_y) 1 ┌────────────┐ 2 (max_x, min_y)
    ///                  │            │
    /// (min_x, max_y) 4 └────────────┘ 3 (max_x, max_y)
    /// ```
    pub fn vertices(&self) -> Vec<Position> {
        vec![
            Position::new(self.min.x, self.min.y),
            Position::new(self.max.x, self.min.y),
            Position::new(self.max.x, self.max.y),
            Position::new(self.min.x, self.max.y),
        ]
    }

    /// Constructs a bounding box from a list of points, empty if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Position>) -> Self {
        let mut bbox = BoundingBox::default();

        for position in points {
            bbox.expand_to_include(position);
        }

        bbox
    }

    /// Bounds of an outline's points, empty if it has none.
    pub fn from_outline<T: OutlinePoints + ?Sized>(outline: &T) -> Self {
        let mut bbox = BoundingBox::default();

        for position in outline_points(outline) {
            bbox.expand_to_include(&position);
        }

        bbox
    }
}
