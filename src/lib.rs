mod error;
mod geometry;
mod outline;
mod point_list;
mod shape;
mod spacial;
mod types;

pub use error::*;
pub use geometry::*;
pub use outline::*;
pub use point_list::*;
pub use shape::*;
pub use spacial::*;
pub use types::*;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
