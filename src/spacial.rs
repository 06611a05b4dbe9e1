pub type Vector = nalgebra::Vector2<f64>;
pub type Position = nalgebra::Point2<f64>;
pub type Size = nalgebra::Vector2<f64>;

pub trait ToVector {
    fn to_vector(self) -> Vector;
}

impl ToVector for Position {
    fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

pub trait ToPosition {
    fn to_position(self) -> Position;
}

impl ToPosition for Vector {
    fn to_position(self) -> Position {
        Position::new(self.x, self.y)
    }
}

pub trait FromTuple2 {
    fn from(value: (f64, f64)) -> Self;
}

impl FromTuple2 for Position {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

pub trait ToArray2 {
    /// Narrows to the `[f32; 2]` layout used by vertex buffers.
    fn to_array2(self) -> [f32; 2];
}

impl ToArray2 for Position {
    fn to_array2(self) -> [f32; 2] {
        [self.x as f32, self.y as f32]
    }
}

/// Rotate a vector by 90 degrees, counter-clockwise in y-up space.
pub fn perpendicular(vector: Vector) -> Vector {
    Vector::new(-vector.y, vector.x)
}
