//! Helpers for building outlines and checking generated geometry in tests and benchmarks.

use crate::{ConvexShape, FromTuple2, OutlinePoints, PointList, Position, ShapeGeometry};

pub fn points_from_tuples(points: &[(f64, f64)]) -> Vec<Position> {
    points
        .iter()
        .map(|&point| <Position as FromTuple2>::from(point))
        .collect()
}

pub fn convex_shape_from_tuples(points: &[(f64, f64)]) -> ConvexShape {
    ConvexShape::new(PointList::from_points(points_from_tuples(points)))
}

/// generate the points of a regular polygon, starting on the positive x axis
pub fn regular_polygon_points(count: usize, radius: f64, center: Position) -> Vec<Position> {
    let angle_step = std::f64::consts::TAU / count as f64;

    (0..count)
        .map(|index| {
            let angle = angle_step * index as f64;
            Position::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Edges of the closed outline, the last one connecting the final point back to the first.
pub fn extract_edges<T: OutlinePoints + ?Sized>(outline: &T) -> Vec<(Position, Position)> {
    let count = outline.point_count();
    if count < 2 {
        return vec![];
    }

    (0..count)
        .map(|index| (outline.point_at(index), outline.point_at((index + 1) % count)))
        .collect()
}

/// Panics unless both bounding boxes contain every vertex of their mesh.
pub fn assert_bounds_contain_meshes(geometry: &ShapeGeometry) {
    for vertex in geometry.fill.vertices() {
        assert!(
            geometry.fill_bounds.contains(vertex),
            "fill vertex outside fill bounds. vertex: {:?}, bounds: {:?}",
            vertex,
            geometry.fill_bounds
        );
    }
    for vertex in geometry.outline.vertices() {
        assert!(
            geometry.outline_bounds.contains(vertex),
            "outline vertex outside outline bounds. vertex: {:?}, bounds: {:?}",
            vertex,
            geometry.outline_bounds
        );
    }
}
