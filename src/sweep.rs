//! Percentage-range sweep producing the ordered composite property series.

use crate::errors::RangeError;
use crate::materials::{FiberGeometry, FiberProperties, MatrixProperties};
use crate::micromechanics::{
    critical_length, halpin_tsai_modulus, kelly_tyson_strength, rule_of_mixtures,
};

/// Validated range of fiber content percentages to iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepRange {
    /// First percentage evaluated.
    start: u32,
    /// Last percentage that may be evaluated.
    end: u32,
    /// Increment between evaluated percentages.
    step: u32,
}

impl SweepRange {
    /// Create a sweep range over `start..=end` in increments of `step`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] unless `0 <= start < end <= 100` and `step > 0`.
    ///
    /// # Examples
    /// ```
    /// use compositex::{RangeError, SweepRange};
    ///
    /// let range = SweepRange::new(20, 40, 5).expect("valid range");
    /// assert_eq!(range.percentages().count(), 5);
    ///
    /// let error = SweepRange::new(20, 10, 5).expect_err("reversed bounds rejected");
    /// assert_eq!(error, RangeError::BoundsOutOfOrder { start: 20, end: 10 });
    /// ```
    pub fn new(start: u32, end: u32, step: u32) -> Result<Self, RangeError> {
        if start >= end {
            return Err(RangeError::BoundsOutOfOrder { start, end });
        }
        if end > 100 {
            return Err(RangeError::EndAboveFull { end });
        }
        if step == 0 {
            return Err(RangeError::ZeroStep);
        }
        Ok(Self { start, end, step })
    }

    /// Iterate the percentages in ascending order.
    ///
    /// The last yielded percentage is the largest value of `start + k * step`
    /// that does not exceed `end`.
    pub fn percentages(&self) -> impl Iterator<Item = u32> {
        (self.start..=self.end).step_by(self.step as usize)
    }
}

/// Composite properties evaluated at a single fiber content percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyRecord {
    /// Fiber content as a percentage of total volume.
    pub percentage: u32,
    /// Estimated elastic modulus in gigapascals.
    pub elastic_modulus: f64,
    /// Estimated Poisson's ratio.
    pub poisson_ratio: f64,
    /// Estimated density in grams per cubic centimetre.
    pub density: f64,
    /// Estimated tensile strength in megapascals.
    pub tensile_strength: f64,
}

/// A fiber/matrix pairing with a fixed fiber geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composite {
    /// Properties of the reinforcing fiber.
    pub fiber: FiberProperties,
    /// Properties of the matrix material.
    pub matrix: MatrixProperties,
    /// Geometry and orientation of the chopped fibers.
    pub geometry: FiberGeometry,
}

impl Composite {
    /// Combine a fiber, a matrix and a fiber geometry into a composite model.
    #[must_use]
    pub fn new(fiber: FiberProperties, matrix: MatrixProperties, geometry: FiberGeometry) -> Self {
        Self {
            fiber,
            matrix,
            geometry,
        }
    }

    /// Build the bundled silk-fiber / PGA-matrix composite.
    #[must_use]
    pub fn silk_pga(geometry: FiberGeometry) -> Self {
        Self::new(
            FiberProperties::default(),
            MatrixProperties::default(),
            geometry,
        )
    }

    /// Critical fiber length for this pairing in centimetres.
    #[must_use]
    pub fn critical_length(&self) -> f64 {
        critical_length(
            self.fiber.tensile_strength,
            self.geometry.diameter(),
            self.matrix.shear_strength,
        )
    }

    /// Evaluate the composite properties at a single fiber content percentage.
    #[must_use]
    pub fn evaluate(&self, percentage: u32) -> PropertyRecord {
        let fiber_fraction = f64::from(percentage) / 100.0;
        PropertyRecord {
            percentage,
            elastic_modulus: halpin_tsai_modulus(
                self.fiber.elastic_modulus,
                self.matrix.elastic_modulus,
                fiber_fraction,
                self.geometry.orientation_factor(),
            ),
            poisson_ratio: rule_of_mixtures(
                self.fiber.poisson_ratio,
                self.matrix.poisson_ratio,
                fiber_fraction,
            ),
            density: rule_of_mixtures(self.fiber.density, self.matrix.density, fiber_fraction),
            tensile_strength: kelly_tyson_strength(
                self.fiber.tensile_strength,
                self.matrix.tensile_strength,
                fiber_fraction,
                self.geometry.length(),
                self.critical_length(),
            ),
        }
    }

    /// Evaluate every percentage in the range and collect the ordered series.
    #[must_use]
    pub fn sweep(&self, range: &SweepRange) -> Vec<PropertyRecord> {
        range
            .percentages()
            .map(|percentage| self.evaluate(percentage))
            .collect()
    }
}
