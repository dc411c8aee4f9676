pub mod error;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{HullPathError, Result};
