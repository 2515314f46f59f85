//! Constituent material data and fiber geometry for the composite.

use crate::errors::GeometryError;

/// Conversion factor from micrometres to centimetres.
const MICROMETRE_TO_CENTIMETRE: f64 = 1.0e-4;

/// Mechanical properties of the reinforcing fiber.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiberProperties {
    /// Elastic modulus in gigapascals.
    pub elastic_modulus: f64,
    /// Poisson's ratio.
    pub poisson_ratio: f64,
    /// Density in grams per cubic centimetre.
    pub density: f64,
    /// Tensile strength in megapascals.
    pub tensile_strength: f64,
}

impl Default for FiberProperties {
    /// Silk fiber reference data.
    fn default() -> Self {
        Self {
            elastic_modulus: 14.0,
            poisson_ratio: 0.34,
            density: 1.35,
            tensile_strength: 500.0,
        }
    }
}

/// Mechanical properties of the matrix material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixProperties {
    /// Elastic modulus in gigapascals.
    pub elastic_modulus: f64,
    /// Poisson's ratio.
    pub poisson_ratio: f64,
    /// Density in grams per cubic centimetre.
    pub density: f64,
    /// Tensile strength in megapascals.
    pub tensile_strength: f64,
    /// Shear strength in megapascals, used for the critical fiber length.
    pub shear_strength: f64,
}

impl Default for MatrixProperties {
    /// Polyglycolic acid (PGA) reference data.
    fn default() -> Self {
        Self {
            elastic_modulus: 10.0,
            poisson_ratio: 0.33,
            density: 1.45,
            tensile_strength: 85.0,
            shear_strength: 65.4,
        }
    }
}

/// Geometry and orientation of the chopped fibers in the composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiberGeometry {
    /// Fiber length in centimetres.
    length: f64,
    /// Fiber diameter in centimetres.
    diameter: f64,
    /// Orientation correction factor applied to the estimated modulus.
    orientation_factor: f64,
}

impl FiberGeometry {
    /// Create a fiber geometry from a length in centimetres, a diameter in
    /// micrometres and an orientation correction factor.
    ///
    /// The diameter is converted to centimetres internally so all length
    /// quantities share a unit.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] when any of the supplied quantities is not
    /// strictly positive.
    ///
    /// # Examples
    /// ```
    /// use compositex::FiberGeometry;
    ///
    /// let geometry = FiberGeometry::new(0.5, 10.0, 0.3).expect("valid geometry");
    /// assert!((geometry.diameter() - 0.001).abs() < f64::EPSILON);
    /// ```
    pub fn new(
        length_cm: f64,
        diameter_um: f64,
        orientation_factor: f64,
    ) -> Result<Self, GeometryError> {
        if length_cm <= 0.0 {
            return Err(GeometryError::NonPositiveLength { length: length_cm });
        }
        if diameter_um <= 0.0 {
            return Err(GeometryError::NonPositiveDiameter {
                diameter: diameter_um,
            });
        }
        if orientation_factor <= 0.0 {
            return Err(GeometryError::NonPositiveOrientationFactor {
                factor: orientation_factor,
            });
        }
        Ok(Self {
            length: length_cm,
            diameter: diameter_um * MICROMETRE_TO_CENTIMETRE,
            orientation_factor,
        })
    }

    /// Fiber length in centimetres.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Fiber diameter in centimetres.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Orientation correction factor.
    #[must_use]
    pub fn orientation_factor(&self) -> f64 {
        self.orientation_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silk_reference_data() {
        let silk = FiberProperties::default();
        assert!((silk.elastic_modulus - 14.0).abs() < f64::EPSILON);
        assert!((silk.tensile_strength - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pga_reference_data() {
        let pga = MatrixProperties::default();
        assert!((pga.elastic_modulus - 10.0).abs() < f64::EPSILON);
        assert!((pga.shear_strength - 65.4).abs() < f64::EPSILON);
    }

    #[test]
    fn converts_diameter_to_centimetres() {
        let geometry = FiberGeometry::new(0.5, 10.0, 0.3).expect("valid geometry");
        assert!((geometry.diameter() - 0.001).abs() < 1.0e-12);
        assert!((geometry.length() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_non_positive_quantities() {
        assert_eq!(
            FiberGeometry::new(0.0, 10.0, 0.3),
            Err(GeometryError::NonPositiveLength { length: 0.0 })
        );
        assert_eq!(
            FiberGeometry::new(0.5, -1.0, 0.3),
            Err(GeometryError::NonPositiveDiameter { diameter: -1.0 })
        );
        assert_eq!(
            FiberGeometry::new(0.5, 10.0, 0.0),
            Err(GeometryError::NonPositiveOrientationFactor { factor: 0.0 })
        );
    }
}
