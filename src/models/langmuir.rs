//! Langmuir isotherm
//!
//! # Physical background
//!
//! Monolayer adsorption on a homogeneous surface with a finite number of
//! identical sites and no interaction between adsorbed molecules. Each
//! site holds at most one molecule, so the adsorbed amount saturates at
//! $q_{max}$.
//!
//! # Model equations
//!
//! Fractional coverage:
//!
//! $$\theta(p) = \frac{K p}{1 + K p}$$
//!
//! Adsorbed amount:
//!
//! $$Q(p) = q_{max} \cdot \theta(p)$$
//!
//! | Parameter | Symbol | Unit | Domain |
//! |-----------|--------|------|--------|
//! | `q_max` | $q_{max}$ | mol/kg | > 0 |
//! | `k` | $K$ | 1/bar | ≥ 0 |
//!
//! # Example
//!
//! ```rust
//! use isotherm_rs::models::{Isotherm, Langmuir};
//!
//! let langmuir = Langmuir::new(10.0, 0.05).unwrap();
//!
//! // K·p = 1: half of the sites are occupied
//! assert!((langmuir.coverage(20.0).unwrap() - 0.5).abs() < 1e-12);
//! assert!((langmuir.adsorption(20.0).unwrap() - 5.0).abs() < 1e-12);
//! ```

use crate::error::{Result, ensure_non_negative, ensure_positive};
use crate::models::{Isotherm, check_pressure};

/// Langmuir monolayer isotherm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Langmuir {
    /// Saturation capacity q_max \[mol/kg\]
    q_max: f64,
    /// Equilibrium constant K \[1/bar\]
    k: f64,
}

impl Langmuir {
    /// Create a Langmuir isotherm
    ///
    /// # Arguments
    ///
    /// * `q_max` - Saturation capacity \[mol/kg\], must be > 0
    /// * `k` - Equilibrium constant \[1/bar\], must be ≥ 0
    ///
    /// # Errors
    ///
    /// Returns [`crate::IsothermError::Domain`] when a parameter is out of range.
    pub fn new(q_max: f64, k: f64) -> Result<Self> {
        Ok(Self {
            q_max: ensure_positive("Langmuir q_max", q_max)?,
            k: ensure_non_negative("Langmuir K", k)?,
        })
    }

    /// Saturation capacity \[mol/kg\]
    pub fn q_max(&self) -> f64 {
        self.q_max
    }

    /// Equilibrium constant \[1/bar\]
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Fractional surface coverage θ ∈ [0, 1)
    ///
    /// # Errors
    ///
    /// Returns [`crate::IsothermError::Domain`] for negative or non-finite pressures.
    pub fn coverage(&self, pressure: f64) -> Result<f64> {
        let pressure = check_pressure(pressure)?;
        let kp = self.k * pressure;

        // K·p beyond f64::MAX means every site is taken
        if kp.is_infinite() {
            return Ok(1.0);
        }

        Ok(kp / (1.0 + kp))
    }
}

impl Isotherm for Langmuir {
    fn adsorption(&self, pressure: f64) -> Result<f64> {
        Ok(self.q_max * self.coverage(pressure)?)
    }

    fn name(&self) -> &str {
        "Langmuir"
    }

    fn description(&self) -> Option<&str> {
        Some("Monolayer adsorption on a homogeneous surface")
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IsothermError;
    use approx::assert_relative_eq;

    #[test]
    fn test_half_coverage() {
        let model = Langmuir::new(10.0, 0.05).unwrap();
        assert_relative_eq!(model.coverage(20.0).unwrap(), 0.5);
        assert_relative_eq!(model.adsorption(20.0).unwrap(), 5.0);
    }

    #[test]
    fn test_zero_pressure() {
        let model = Langmuir::new(10.0, 0.05).unwrap();
        assert_eq!(model.adsorption(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_saturation() {
        let model = Langmuir::new(7.5, 0.2).unwrap();
        let q = model.adsorption(1e6).unwrap();
        assert!(q / model.q_max() > 0.99);
        assert!(q < model.q_max());
    }

    #[test]
    fn test_huge_pressure_does_not_produce_nan() {
        let model = Langmuir::new(1.0, 1e300).unwrap();
        assert_eq!(model.coverage(1e300).unwrap(), 1.0);
    }

    #[test]
    fn test_zero_affinity_is_flat() {
        let model = Langmuir::new(5.0, 0.0).unwrap();
        assert_eq!(model.adsorption(100.0).unwrap(), 0.0);
    }

    #[test]
    fn test_negative_pressure_is_rejected() {
        let model = Langmuir::new(10.0, 0.05).unwrap();
        assert!(matches!(
            model.adsorption(-1.0),
            Err(IsothermError::Domain { quantity: "pressure", .. })
        ));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(Langmuir::new(0.0, 1.0).is_err());
        assert!(Langmuir::new(10.0, -0.1).is_err());
        assert!(Langmuir::new(f64::NAN, 1.0).is_err());
    }
}
