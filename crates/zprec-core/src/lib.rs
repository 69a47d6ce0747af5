pub mod error;
pub mod validate;

pub mod precision;
pub mod projection;
pub mod sampling;
pub mod crossover;
pub mod analysis;
pub mod study;

pub use crate::precision::{DepthFormat, PrecisionSample};
pub use crate::projection::ProjectionParams;
pub use crate::study::Study;
