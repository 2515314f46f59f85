//! Closed-form micromechanics models for short-fiber composites.
//!
//! The functions here are pure arithmetic over constituent properties. Volume
//! fractions are expected in the range `0.0..=1.0`; callers obtain validated
//! fractions from [`SweepRange`](crate::SweepRange).

/// Estimate the composite elastic modulus with the modified Halpin-Tsai
/// equation.
///
/// The reinforcement efficiency factor is computed from the modulus ratio as
/// `eta = (Ef/Em - 1) / (Ef/Em + 2)` and the unmodified composite modulus as
/// `Em * (1 + 2 * eta * Vf) / (1 - eta * Vf)`, following
/// <https://en.wikipedia.org/wiki/Halpin%E2%80%93Tsai_model>. The result is
/// derated by the orientation correction factor to account for randomly
/// oriented fibers.
///
/// For finite positive moduli `eta` is strictly below one, so the denominator
/// stays positive for any volume fraction in `0.0..=1.0`.
///
/// # Examples
/// ```
/// use compositex::micromechanics::halpin_tsai_modulus;
///
/// // A fully-matrix composite reduces to the derated matrix modulus.
/// let modulus = halpin_tsai_modulus(14.0, 10.0, 0.0, 0.3);
/// assert!((modulus - 3.0).abs() < 1.0e-12);
/// ```
#[must_use]
pub fn halpin_tsai_modulus(
    fiber_modulus: f64,
    matrix_modulus: f64,
    fiber_fraction: f64,
    orientation_factor: f64,
) -> f64 {
    let modulus_ratio = fiber_modulus / matrix_modulus;
    let eta = (modulus_ratio - 1.0) / (modulus_ratio + 2.0);
    let composite_modulus =
        matrix_modulus * (1.0 + 2.0 * eta * fiber_fraction) / (1.0 - eta * fiber_fraction);
    composite_modulus * orientation_factor
}

/// Estimate the composite tensile strength with the Kelly-Tyson
/// rule-of-mixtures model.
///
/// Fibers shorter than the critical length cannot be loaded to their full
/// strength before pulling out of the matrix, so the fiber contribution is
/// scaled by `1 - critical_length / fiber_length` and floored at zero once
/// the correction drives it negative. Fibers at or above the critical length
/// contribute their nominal strength.
#[must_use]
pub fn kelly_tyson_strength(
    fiber_strength: f64,
    matrix_strength: f64,
    fiber_fraction: f64,
    fiber_length: f64,
    critical_length: f64,
) -> f64 {
    let effective_fiber_strength = if fiber_length < critical_length {
        (fiber_strength * (1.0 - critical_length / fiber_length)).max(0.0)
    } else {
        fiber_strength
    };
    matrix_strength * (1.0 - fiber_fraction) + fiber_fraction * effective_fiber_strength
}

/// Compute the critical fiber length `Lc = sigma_f * d / tau_m`.
///
/// This is the minimum length at which a fiber reaches its full tensile
/// strength before the surrounding matrix fails in shear. Both the diameter
/// and the returned length are in centimetres.
///
/// # Examples
/// ```
/// use compositex::micromechanics::critical_length;
///
/// let critical = critical_length(500.0, 0.001, 65.4);
/// assert!((critical - 0.00765).abs() < 1.0e-5);
/// ```
#[must_use]
pub fn critical_length(
    fiber_strength: f64,
    fiber_diameter: f64,
    matrix_shear_strength: f64,
) -> f64 {
    fiber_strength * fiber_diameter / matrix_shear_strength
}

/// Volume-weighted linear mixture of a fiber and matrix property.
///
/// Used for Poisson's ratio and density, which scale linearly with the
/// constituent volume fractions (<https://en.wikipedia.org/wiki/Rule_of_mixtures>).
#[must_use]
pub fn rule_of_mixtures(fiber_value: f64, matrix_value: f64, fiber_fraction: f64) -> f64 {
    fiber_fraction * fiber_value + (1.0 - fiber_fraction) * matrix_value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulus_at_zero_fraction_is_derated_matrix_modulus() {
        let modulus = halpin_tsai_modulus(14.0, 10.0, 0.0, 0.3);
        assert!((modulus - 10.0 * 0.3).abs() < 1.0e-12);
    }

    #[test]
    fn modulus_at_full_fraction_matches_closed_form() {
        let eta: f64 = (1.4 - 1.0) / (1.4 + 2.0);
        let expected = 10.0 * (1.0 + 2.0 * eta) / (1.0 - eta) * 0.3;
        let modulus = halpin_tsai_modulus(14.0, 10.0, 1.0, 0.3);
        assert!((modulus - expected).abs() < 1.0e-12);
    }

    #[test]
    fn modulus_matches_worked_example() {
        // Ef = 14, Em = 10, Vf = 0.3, K_o = 0.3 gives roughly 3.33 GPa.
        let modulus = halpin_tsai_modulus(14.0, 10.0, 0.3, 0.3);
        assert!((modulus - 3.329_268).abs() < 1.0e-4);
    }

    #[test]
    fn long_fibers_contribute_full_strength() {
        let strength = kelly_tyson_strength(500.0, 85.0, 0.3, 0.5, 0.00765);
        let expected = 85.0 * 0.7 + 0.3 * 500.0;
        assert!((strength - expected).abs() < 1.0e-9);
    }

    #[test]
    fn sub_critical_fibers_floor_at_matrix_contribution() {
        // Any fiber below the critical length drives the correction factor
        // negative, leaving only the matrix term.
        let strength = kelly_tyson_strength(500.0, 85.0, 0.3, 0.004, 0.00765);
        assert!((strength - 85.0 * 0.7).abs() < 1.0e-9);
    }

    #[test]
    fn fiber_exactly_at_critical_length_keeps_full_strength() {
        let strength = kelly_tyson_strength(500.0, 85.0, 0.2, 0.00765, 0.00765);
        let expected = 85.0 * 0.8 + 0.2 * 500.0;
        assert!((strength - expected).abs() < 1.0e-9);
    }

    #[test]
    fn critical_length_matches_worked_example() {
        let critical = critical_length(500.0, 0.001, 65.4);
        assert!((critical - 500.0 * 0.001 / 65.4).abs() < 1.0e-12);
        assert!((critical - 0.007_645).abs() < 1.0e-5);
    }

    #[test]
    fn mixture_is_linear_between_endpoints() {
        assert!((rule_of_mixtures(0.34, 0.33, 0.0) - 0.33).abs() < f64::EPSILON);
        assert!((rule_of_mixtures(0.34, 0.33, 1.0) - 0.34).abs() < f64::EPSILON);
        let halfway = rule_of_mixtures(1.35, 1.45, 0.5);
        assert!((halfway - 1.40).abs() < 1.0e-12);
    }
}
