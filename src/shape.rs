use log::{debug, trace};

use crate::error::ShapeError;
use crate::geometry::{extrude_outline, triangulate_fan, BoundingBox, FillMesh, OutlineMesh};
use crate::outline::{CircleOutline, OutlinePoints, RectangleOutline, StarOutline};
use crate::point_list::PointList;
use crate::spacial::Position;

/// A convex polygon, defined point by point.
///
/// ```
/// use convex_shape::{ConvexShape, Position};
///
/// let mut polygon = ConvexShape::default();
/// polygon.set_point_count(3);
/// polygon.set_point(0, Position::new(0.0, 0.0))?;
/// polygon.set_point(1, Position::new(0.0, 10.0))?;
/// polygon.set_point(2, Position::new(25.0, 5.0))?;
/// polygon.set_outline_thickness(5.0);
///
/// assert_eq!(polygon.fill_mesh().len(), 1);
/// assert_eq!(polygon.outline_mesh().len(), 3);
/// # Ok::<(), convex_shape::ShapeError>(())
/// ```
pub type ConvexShape = Shape<PointList>;
pub type RectangleShape = Shape<RectangleOutline>;
pub type CircleShape = Shape<CircleOutline>;
pub type StarShape = Shape<StarOutline>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// The cached geometry matches the outline and configuration.
    Clean,
    /// The outline or configuration changed since the last recompute.
    Dirty,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeConfiguration {
    /// Distance the outline is extruded away from the fill, negative values extrude inwards.
    pub outline_thickness: f64,
}

impl Default for ShapeConfiguration {
    fn default() -> Self {
        Self {
            outline_thickness: 0.0,
        }
    }
}

/// Everything derived from a shape's outline, in the shape's local coordinates.
///
/// Fill bounds cover the outline points, which are also the fan's vertices, so only an outline without points
/// has empty fill bounds. Outline bounds cover the outline mesh vertices and are empty below 2 points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeGeometry {
    pub fill: FillMesh,
    pub outline: OutlineMesh,
    pub fill_bounds: BoundingBox,
    pub outline_bounds: BoundingBox,
}

/// An outline plus its lazily computed fill and outline geometry.
///
/// Every mutation marks the cached geometry dirty, the next read recomputes all of it.
#[derive(Debug, Clone)]
pub struct Shape<P: OutlinePoints> {
    outline: P,
    configuration: ShapeConfiguration,
    geometry: ShapeGeometry,
    state: CacheState,
    recompute_count: u64,
}

impl<P: OutlinePoints + Default> Default for Shape<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P: OutlinePoints> Shape<P> {
    pub fn new(outline: P) -> Self {
        Self::with_configuration(outline, ShapeConfiguration::default())
    }

    pub fn with_configuration(outline: P, configuration: ShapeConfiguration) -> Self {
        Self {
            outline,
            configuration,
            geometry: ShapeGeometry::default(),
            state: CacheState::Dirty,
            recompute_count: 0,
        }
    }

    pub fn outline(&self) -> &P {
        &self.outline
    }

    /// Change the outline's parameters, e.g. a circle's radius. Always marks the geometry dirty.
    pub fn update_outline<R>(&mut self, update: impl FnOnce(&mut P) -> R) -> R {
        self.mark_dirty();
        update(&mut self.outline)
    }

    pub fn into_outline(self) -> P {
        self.outline
    }

    pub fn configuration(&self) -> &ShapeConfiguration {
        &self.configuration
    }

    pub fn outline_thickness(&self) -> f64 {
        self.configuration.outline_thickness
    }

    pub fn set_outline_thickness(&mut self, thickness: f64) {
        self.configuration.outline_thickness = thickness;
        self.mark_dirty();
    }

    pub fn state(&self) -> CacheState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self.state, CacheState::Dirty)
    }

    /// Number of times the geometry has been recomputed since construction.
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    /// Recompute now if dirty, instead of on the next read.
    pub fn update(&mut self) {
        if self.is_dirty() {
            self.recompute();
        }
    }

    pub fn geometry(&mut self) -> &ShapeGeometry {
        self.update();
        &self.geometry
    }

    pub fn fill_mesh(&mut self) -> &FillMesh {
        &self.geometry().fill
    }

    pub fn outline_mesh(&mut self) -> &OutlineMesh {
        &self.geometry().outline
    }

    pub fn fill_bounds(&mut self) -> &BoundingBox {
        &self.geometry().fill_bounds
    }

    pub fn outline_bounds(&mut self) -> &BoundingBox {
        &self.geometry().outline_bounds
    }

    fn mark_dirty(&mut self) {
        self.state = CacheState::Dirty;
    }

    /// The only `Dirty -> Clean` transition. Refills the existing buffers.
    #[profiling::function]
    fn recompute(&mut self) {
        let ShapeGeometry {
            fill,
            outline,
            fill_bounds,
            outline_bounds,
        } = &mut self.geometry;
        let thickness = self.configuration.outline_thickness;

        triangulate_fan(&self.outline, fill);
        extrude_outline(&self.outline, thickness, outline);

        *fill_bounds = BoundingBox::from_outline(&self.outline);
        *outline_bounds = BoundingBox::from_points(outline.vertices());

        self.state = CacheState::Clean;
        self.recompute_count += 1;

        debug!(
            "recomputed geometry. points: {}, thickness: {}, triangles: {}, quads: {}, recompute_count: {}",
            self.outline.point_count(),
            thickness,
            self.geometry.fill.len(),
            self.geometry.outline.len(),
            self.recompute_count
        );
        trace!("geometry: {:?}", self.geometry);
    }
}

impl Shape<PointList> {
    pub fn point_count(&self) -> usize {
        self.outline.point_count()
    }

    /// See [`PointList::set_point_count`].
    pub fn set_point_count(&mut self, count: usize) {
        self.outline.set_point_count(count);
        self.mark_dirty();
    }

    pub fn point(&self, index: usize) -> Result<Position, ShapeError> {
        self.outline.point(index)
    }

    /// The polygon must stay convex and its points ordered, this is not checked.
    pub fn set_point(&mut self, index: usize, point: Position) -> Result<(), ShapeError> {
        self.outline.set_point(index, point)?;
        self.mark_dirty();
        Ok(())
    }

    pub fn push_point(&mut self, point: Position) {
        self.outline.push_point(point);
        self.mark_dirty();
    }
}
