//! Outlines computed from a few parameters instead of stored point by point.
//!
//! All of them are in local coordinates with the origin at the top-left of their bounds and y pointing
//! down, and are wound clockwise on screen.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::outline::OutlinePoints;
use crate::spacial::{Position, Size};

pub const DEFAULT_CIRCLE_POINT_COUNT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectangleOutline {
    pub size: Size,
}

impl RectangleOutline {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

impl OutlinePoints for RectangleOutline {
    fn point_count(&self) -> usize {
        4
    }

    fn point_at(&self, index: usize) -> Position {
        match index {
            0 => Position::new(0.0, 0.0),
            1 => Position::new(self.size.x, 0.0),
            2 => Position::new(self.size.x, self.size.y),
            3 => Position::new(0.0, self.size.y),
            _ => panic!("rectangle point index out of range. index: {}", index),
        }
    }
}

/// A circle approximated by a regular polygon, starting at the top.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleOutline {
    pub radius: f64,
    pub point_count: usize,
}

impl CircleOutline {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            point_count: DEFAULT_CIRCLE_POINT_COUNT,
        }
    }

    pub fn with_point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }
}

impl OutlinePoints for CircleOutline {
    fn point_count(&self) -> usize {
        self.point_count
    }

    fn point_at(&self, index: usize) -> Position {
        let angle = index as f64 * TAU / self.point_count as f64 - FRAC_PI_2;
        Position::new(
            self.radius + self.radius * angle.cos(),
            self.radius + self.radius * angle.sin(),
        )
    }
}

/// A star with `tips` points, alternating between the outer and inner radius, starting at the top tip.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarOutline {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub tips: usize,
}

impl StarOutline {
    pub fn new(outer_radius: f64, inner_radius: f64, tips: usize) -> Self {
        Self {
            outer_radius,
            inner_radius,
            tips,
        }
    }
}

/// Stars are concave unless `inner_radius` is close to `outer_radius`, their fill fan is only exact when convex.
impl OutlinePoints for StarOutline {
    fn point_count(&self) -> usize {
        self.tips * 2
    }

    fn point_at(&self, index: usize) -> Position {
        let angle_step = TAU / self.point_count() as f64;
        let radius = if index % 2 == 0 {
            self.outer_radius
        } else {
            self.inner_radius
        };
        let angle = angle_step * index as f64 - FRAC_PI_2;

        Position::new(
            self.outer_radius + radius * angle.cos(),
            self.outer_radius + radius * angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::outline::outline_points;

    fn assert_close(actual: Position, expected: Position) {
        let epsilon = 1e-9;
        assert!(
            (actual - expected).norm() < epsilon,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_rectangle_points() {
        // given
        let rectangle = RectangleOutline::new(20.0, 5.0);

        // when
        let points = outline_points(&rectangle).collect::<Vec<_>>();

        // then
        assert_eq!(points, vec![
            Position::new(0.0, 0.0),
            Position::new(20.0, 0.0),
            Position::new(20.0, 5.0),
            Position::new(0.0, 5.0),
        ]);
    }

    #[test]
    fn test_circle_points() {
        // given
        let circle = CircleOutline::new(10.0).with_point_count(4);

        // when
        let points = outline_points(&circle).collect::<Vec<_>>();

        // then
        assert_eq!(points.len(), 4);
        assert_close(points[0], Position::new(10.0, 0.0));
        assert_close(points[1], Position::new(20.0, 10.0));
        assert_close(points[2], Position::new(10.0, 20.0));
        assert_close(points[3], Position::new(0.0, 10.0));
    }

    #[test]
    fn test_circle_default_point_count() {
        assert_eq!(CircleOutline::new(1.0).point_count(), DEFAULT_CIRCLE_POINT_COUNT);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 6)]
    #[case(5, 10)]
    fn test_star_point_count(#[case] tips: usize, #[case] expected: usize) {
        assert_eq!(StarOutline::new(1.0, 0.5, tips).point_count(), expected);
    }

    #[test]
    fn test_star_alternates_radius() {
        // given
        let star = StarOutline::new(1.0, 0.5, 5);
        let center = Position::new(1.0, 1.0);

        // when
        let distances = outline_points(&star)
            .map(|point| (point - center).norm())
            .collect::<Vec<_>>();

        // then
        assert_close(star.point_at(0), Position::new(1.0, 0.0));
        for (index, distance) in distances.iter().enumerate() {
            let expected = if index % 2 == 0 { 1.0 } else { 0.5 };
            assert!((distance - expected).abs() < 1e-9, "index: {}, distance: {}", index, distance);
        }
    }
}
