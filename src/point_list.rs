use log::trace;

use crate::error::ShapeError;
use crate::outline::OutlinePoints;
use crate::spacial::Position;

/// An ordered, resizable list of outline points, in drawing order.
///
/// Duplicate points and zero-length edges are allowed. The points must describe a convex polygon and
/// must stay ordered, using a random order results in an incorrect shape; neither is checked.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointList {
    points: Vec<Position>,
}

impl PointList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Position>) -> Self {
        Self {
            points,
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Resize to exactly `count` points.
    ///
    /// Points below `min(old count, count)` are kept, new points are at the origin.
    pub fn set_point_count(&mut self, count: usize) {
        trace!("set_point_count. old: {}, new: {}", self.points.len(), count);
        self.points.resize(count, Position::origin());
    }

    pub fn point(&self, index: usize) -> Result<Position, ShapeError> {
        self.points
            .get(index)
            .copied()
            .ok_or(ShapeError::IndexOutOfRange {
                index,
                count: self.points.len(),
            })
    }

    pub fn set_point(&mut self, index: usize, point: Position) -> Result<(), ShapeError> {
        let count = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(ShapeError::IndexOutOfRange {
                index,
                count,
            })?;
        *slot = point;
        Ok(())
    }

    /// Append a point after the current last point.
    pub fn push_point(&mut self, point: Position) {
        self.points.push(point);
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl OutlinePoints for PointList {
    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn point_at(&self, index: usize) -> Position {
        self.points[index]
    }
}

impl FromIterator<Position> for PointList {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
