#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod chart;
mod errors;
pub mod materials;
pub mod micromechanics;
pub mod report;
pub mod sweep;

pub use errors::{ChartError, GeometryError, RangeError};
pub use materials::{FiberGeometry, FiberProperties, MatrixProperties};
pub use sweep::{Composite, PropertyRecord, SweepRange};
