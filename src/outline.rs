mod parametric;

pub use parametric::*;

use crate::spacial::{Position, ToVector};

/// Ordered boundary points of a closed 2D outline.
///
/// This is the only thing the mesh pipeline needs from a shape. Point-list backed shapes return their
/// stored points, parametric shapes (rectangle, circle, star) compute them from their own parameters.
///
/// The points are expected to describe a convex polygon, wound consistently. This is not checked; see
/// [`crate::is_convex`] and [`crate::Winding`] for opt-in diagnostics.
pub trait OutlinePoints {
    fn point_count(&self) -> usize;

    /// `index` must be less than [`OutlinePoints::point_count`], implementations may panic otherwise.
    fn point_at(&self, index: usize) -> Position;
}

impl<T: OutlinePoints + ?Sized> OutlinePoints for &T {
    fn point_count(&self) -> usize {
        (**self).point_count()
    }

    fn point_at(&self, index: usize) -> Position {
        (**self).point_at(index)
    }
}

impl<T: OutlinePoints + ?Sized> OutlinePoints for Box<T> {
    fn point_count(&self) -> usize {
        (**self).point_count()
    }

    fn point_at(&self, index: usize) -> Position {
        (**self).point_at(index)
    }
}

/// Iterate the points of any outline, in drawing order.
pub fn outline_points<T: OutlinePoints + ?Sized>(outline: &T) -> OutlinePointsIter<'_, T> {
    OutlinePointsIter {
        outline,
        index: 0,
    }
}

pub struct OutlinePointsIter<'a, T: OutlinePoints + ?Sized> {
    outline: &'a T,
    index: usize,
}

impl<T: OutlinePoints + ?Sized> Iterator for OutlinePointsIter<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.outline.point_count() {
            return None;
        }
        let point = self.outline.point_at(self.index);
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .outline
            .point_count()
            .saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T: OutlinePoints + ?Sized> ExactSizeIterator for OutlinePointsIter<'_, T> {}

/// Average of the outline points, `None` for an empty outline.
///
/// For a convex outline this is always an interior point (or on the boundary, for degenerate outlines).
pub fn vertex_centroid<T: OutlinePoints + ?Sized>(outline: &T) -> Option<Position> {
    let count = outline.point_count();
    if count == 0 {
        return None;
    }

    let sum = outline_points(outline).fold(nalgebra::Vector2::zeros(), |sum, point| sum + point.to_vector());

    Some(Position::from(sum / count as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointList;

    #[test]
    fn test_points_iterator_visits_in_order() {
        // given
        let list = PointList::from_points(vec![
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(1.0, 1.0),
        ]);

        // when
        let iter = outline_points(&list);

        // then
        assert_eq!(iter.len(), 3);
        assert_eq!(outline_points(&list).collect::<Vec<_>>(), list.as_slice().to_vec());
    }

    #[test]
    fn test_vertex_centroid() {
        let list = PointList::from_points(vec![
            Position::new(0.0, 0.0),
            Position::new(4.0, 0.0),
            Position::new(4.0, 2.0),
            Position::new(0.0, 2.0),
        ]);

        assert_eq!(vertex_centroid(&list), Some(Position::new(2.0, 1.0)));
        assert_eq!(vertex_centroid(&PointList::default()), None);
    }

    #[test]
    fn test_trait_object_dispatch() {
        let list = PointList::from_points(vec![Position::new(1.0, 2.0)]);
        let outline: &dyn OutlinePoints = &list;

        assert_eq!(outline.point_count(), 1);
        assert_eq!(outline.point_at(0), Position::new(1.0, 2.0));
    }
}
