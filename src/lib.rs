pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod transform;

pub use error::{QuimeraError, Result};
