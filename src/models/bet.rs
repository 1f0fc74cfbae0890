//! BET (Brunauer–Emmett–Teller) isotherm
//!
//! Extends Langmuir theory to multilayer adsorption, the usual model for
//! porous materials and for surface-area measurements.
//!
//! $$Q(p) = \frac{q_{max} \cdot C \cdot p}{\left(1 - \frac{p}{P_0}\right)\left(1 + (C - 1)\frac{p}{P_0}\right)}$$
//!
//! # Singularity at the saturation pressure
//!
//! As $p \to P_0$ the adsorbate condenses and the first factor of the
//! denominator vanishes. Any `p >= P0` is rejected with
//! [`crate::IsothermError::Domain`] rather than returning a division by zero
//! or a negative uptake.
//!
//! For `0 <= p < P0` and `C > 0` the second factor stays strictly positive
//! (it is bounded below by `min(1, C)`), so the result is non-negative.

use crate::error::{IsothermError, Result, ensure_finite, ensure_positive};
use crate::models::{Isotherm, check_pressure};

/// BET multilayer isotherm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bet {
    /// Monolayer capacity q_max (V_m) \[mol/kg\]
    q_max: f64,
    /// BET constant C (dimensionless)
    c: f64,
    /// Saturation pressure P₀ \[bar\]
    p0: f64,
}

impl Bet {
    /// Create a BET isotherm
    ///
    /// # Arguments
    ///
    /// * `q_max` - Monolayer capacity \[mol/kg\], must be > 0
    /// * `c` - BET constant, must be > 0
    /// * `p0` - Saturation pressure \[bar\], must be > 0
    ///
    /// # Example
    ///
    /// ```rust
    /// use isotherm_rs::models::{Bet, Isotherm};
    ///
    /// let bet = Bet::new(10.0, 10.0, 1000.0).unwrap();
    /// assert!(bet.adsorption(500.0).is_ok());
    /// assert!(bet.adsorption(1000.0).is_err());
    /// ```
    pub fn new(q_max: f64, c: f64, p0: f64) -> Result<Self> {
        Ok(Self {
            q_max: ensure_positive("BET q_max", q_max)?,
            c: ensure_positive("BET C", c)?,
            p0: ensure_positive("BET P0", p0)?,
        })
    }

    /// Monolayer capacity \[mol/kg\]
    pub fn q_max(&self) -> f64 {
        self.q_max
    }

    /// BET constant
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Saturation pressure \[bar\]
    pub fn p0(&self) -> f64 {
        self.p0
    }
}

impl Isotherm for Bet {
    fn adsorption(&self, pressure: f64) -> Result<f64> {
        let pressure = check_pressure(pressure)?;

        if pressure >= self.p0 {
            return Err(IsothermError::domain(
                "pressure",
                pressure,
                "BET requires p < P0 (saturation pressure)",
            ));
        }

        let relative = pressure / self.p0;
        let denominator = (1.0 - relative) * (1.0 + (self.c - 1.0) * relative);

        ensure_finite(
            "BET multilayer uptake",
            self.q_max * self.c * pressure / denominator,
        )
    }

    fn name(&self) -> &str {
        "BET"
    }

    fn description(&self) -> Option<&str> {
        Some("Multilayer adsorption on porous materials")
    }
}
