//! Freundlich isotherm
//!
//! Empirical model for heterogeneous surfaces, where site energies are
//! spread over a distribution instead of being identical. There is no
//! saturation plateau: the uptake keeps growing as a power of pressure
//! (or concentration for liquid-phase systems).
//!
//! $$Q(p) = K_d \cdot p^{1/n}$$
//!
//! `n > 1` describes favourable adsorption. The power is undefined for
//! negative abscissas, which are rejected.

use crate::error::{Result, ensure_finite, ensure_non_negative, ensure_positive};
use crate::models::{Isotherm, check_pressure};

/// Freundlich power-law isotherm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Freundlich {
    /// Freundlich constant K_d
    kd: f64,
    /// Heterogeneity exponent n (dimensionless)
    n: f64,
}

impl Freundlich {
    /// Create a Freundlich isotherm
    ///
    /// # Arguments
    ///
    /// * `kd` - Freundlich constant, must be ≥ 0
    /// * `n` - Heterogeneity exponent, must be > 0
    ///
    /// # Example
    ///
    /// ```rust
    /// use isotherm_rs::models::{Freundlich, Isotherm};
    ///
    /// let freundlich = Freundlich::new(20.0, 2.5).unwrap();
    /// let q = freundlich.adsorption(2.0).unwrap();
    /// assert!((q - 26.39).abs() < 1e-2);
    /// ```
    pub fn new(kd: f64, n: f64) -> Result<Self> {
        Ok(Self {
            kd: ensure_non_negative("Freundlich Kd", kd)?,
            n: ensure_positive("Freundlich n", n)?,
        })
    }

    /// Freundlich constant
    pub fn kd(&self) -> f64 {
        self.kd
    }

    /// Heterogeneity exponent
    pub fn n(&self) -> f64 {
        self.n
    }
}

impl Isotherm for Freundlich {
    fn adsorption(&self, pressure: f64) -> Result<f64> {
        let pressure = check_pressure(pressure)?;
        ensure_finite("Freundlich power law", self.kd * pressure.powf(1.0 / self.n))
    }

    fn name(&self) -> &str {
        "Freundlich"
    }

    fn description(&self) -> Option<&str> {
        Some("Empirical power law for heterogeneous surfaces")
    }
}
