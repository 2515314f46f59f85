//! Error types produced while configuring or rendering a property sweep.

use thiserror::Error;

/// Error returned when a requested percentage range is invalid.
///
/// The variants describe the reason the supplied range is rejected so callers can
/// present actionable feedback to users.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    /// Returned when the starting percentage is not below the ending percentage.
    #[error("starting percentage must be below ending percentage (received {start}..={end})")]
    BoundsOutOfOrder {
        /// Rejected starting percentage.
        start: u32,
        /// Rejected ending percentage.
        end: u32,
    },
    /// Returned when the ending percentage exceeds 100 %.
    #[error("ending percentage must not exceed 100 (received {end})")]
    EndAboveFull {
        /// Rejected ending percentage.
        end: u32,
    },
    /// Returned when the step size is zero.
    #[error("step size must be positive")]
    ZeroStep,
}

/// Error returned when the supplied fiber geometry is not physically meaningful.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum GeometryError {
    /// Returned when the fiber length is zero or negative.
    #[error("fiber length must be positive (received {length} cm)")]
    NonPositiveLength {
        /// Rejected fiber length in centimetres.
        length: f64,
    },
    /// Returned when the fiber diameter is zero or negative.
    #[error("fiber diameter must be positive (received {diameter} \u{3bc}m)")]
    NonPositiveDiameter {
        /// Rejected fiber diameter in micrometres.
        diameter: f64,
    },
    /// Returned when the orientation correction factor is zero or negative.
    #[error("orientation correction factor must be positive (received {factor})")]
    NonPositiveOrientationFactor {
        /// Rejected orientation correction factor.
        factor: f64,
    },
}

/// Error returned when a chart cannot be rendered.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Returned when the result series contains no records to plot.
    #[error("cannot chart an empty result series")]
    EmptySeries,
    /// Returned when the drawing backend fails while producing the image.
    #[error("chart rendering failed: {0}")]
    Render(String),
}
