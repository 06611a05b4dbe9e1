use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Point index out of range. index: {index}, count: {count}")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("Too many vertices for u32 indices. count: {count}")]
    TooManyVertices { count: usize },
}
