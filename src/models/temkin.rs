//! Temkin isotherm
//!
//! Accounts for adsorbate–adsorbent interactions: the heat of adsorption of
//! all molecules in the layer decreases linearly with coverage.
//!
//! $$Q(p) = \frac{R T}{b_T} \ln(K_T \, p)$$
//!
//! | Parameter | Symbol | Unit | Domain |
//! |-----------|--------|------|--------|
//! | `kt` | $K_T$ | 1/bar | > 0 |
//! | `bt` | $b_T$ | J/mol per (mol/kg) | > 0 |
//! | `temperature` | $T$ | K | > 0 |
//!
//! # Clipping at low loading (approximation)
//!
//! The logarithm is undefined at `p = 0` and negative whenever `K_T·p < 1`.
//! The Temkin form is only meaningful in the intermediate-coverage region,
//! so both cases are clipped to `Q = 0`:
//!
//! - `p <= 0` returns `0` instead of `-inf`
//! - `0 < K_T·p < 1` returns `0` instead of a negative uptake
//!
//! The first case only replaces an undefined value. The second departs from
//! the equation itself: there the formula is defined and gives a negative
//! number, which this model discards. This is a modelling approximation,
//! not a physical result.
//! [`Isotherm::is_clipped`] reports which samples were affected.
//!
//! A product `K_T·p` that is not strictly positive for `p > 0` (e.g. after
//! underflow) fails with [`crate::IsothermError::Domain`].

use crate::error::{IsothermError, Result, ensure_finite, ensure_positive};
use crate::models::Isotherm;
use crate::physics::GAS_CONSTANT;

/// Temkin isotherm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temkin {
    /// Temkin equilibrium binding constant K_T \[1/bar\]
    kt: f64,
    /// Temkin constant b_T, related to the heat of adsorption
    bt: f64,
    /// Temperature \[K\]
    temperature: f64,
}

impl Temkin {
    /// Create a Temkin isotherm
    ///
    /// # Example
    ///
    /// ```rust
    /// use isotherm_rs::models::{Isotherm, Temkin};
    ///
    /// let temkin = Temkin::new(2.0, 100.0, 298.0).unwrap();
    /// assert_eq!(temkin.adsorption(0.0).unwrap(), 0.0);
    /// assert!(temkin.adsorption(10.0).unwrap() > 0.0);
    /// ```
    pub fn new(kt: f64, bt: f64, temperature: f64) -> Result<Self> {
        Ok(Self {
            kt: ensure_positive("Temkin K_T", kt)?,
            bt: ensure_positive("Temkin b_T", bt)?,
            temperature: ensure_positive("temperature", temperature)?,
        })
    }

    /// Binding constant K_T \[1/bar\]
    pub fn kt(&self) -> f64 {
        self.kt
    }

    /// Temkin constant b_T
    pub fn bt(&self) -> f64 {
        self.bt
    }

    /// Temperature \[K\]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Prefactor R·T/b_T
    pub fn slope(&self) -> f64 {
        GAS_CONSTANT * self.temperature / self.bt
    }
}

impl Isotherm for Temkin {
    fn adsorption(&self, pressure: f64) -> Result<f64> {
        if pressure.is_nan() || pressure.is_infinite() {
            return Err(IsothermError::domain("pressure", pressure, "must be finite"));
        }
        if pressure <= 0.0 {
            return Ok(0.0);
        }

        let argument = self.kt * pressure;
        if !(argument > 0.0) {
            return Err(IsothermError::domain(
                "K_T·p",
                argument,
                "Temkin logarithm requires K_T·p > 0",
            ));
        }

        let q = ensure_finite("Temkin logarithm", self.slope() * argument.ln())?;
        Ok(q.max(0.0))
    }

    fn is_clipped(&self, pressure: f64) -> bool {
        pressure <= 0.0 || self.kt * pressure < 1.0
    }

    fn name(&self) -> &str {
        "Temkin"
    }

    fn description(&self) -> Option<&str> {
        Some("Linear decrease of adsorption heat with coverage")
    }
}
