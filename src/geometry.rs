mod bounding_box;
mod mesh;
mod shapes;

pub use bounding_box::*;
pub use mesh::*;
pub use shapes::*;
