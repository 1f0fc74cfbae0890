//! Equilibrium constant from adsorption thermodynamics
//!
//! The adsorption equilibrium constant follows from the Gibbs energy of
//! adsorption, $\Delta G = \Delta H - T\Delta S = -RT\ln K$:
//!
//! $$K = \exp\left(\frac{-\Delta H \cdot 1000}{R\,T} + \frac{\Delta S}{R}\right)$$
//!
//! with ΔH in kJ/mol (hence the factor 1000), ΔS in J/(mol·K) and
//! R = 8.314 J/(mol·K).
//!
//! # Edge cases
//!
//! - `T <= 0` is rejected with [`IsothermError::Domain`].
//! - An exponent above `ln(f64::MAX)` (≈ 709.78) fails with
//!   [`IsothermError::Overflow`] instead of returning `inf`.
//! - A very negative exponent underflows to `K = 0`, which is a valid
//!   (vanishing) affinity for every model except Temkin.

use crate::error::{IsothermError, Result, ensure_positive};
use crate::physics::constants::{GAS_CONSTANT, KJ_TO_J};

/// Thermodynamic parameters of an adsorption process
///
/// Enthalpy is conventionally negative (adsorption is exothermic), but no
/// sign is enforced here: only finiteness is required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermodynamicParameters {
    /// Enthalpy of adsorption ΔH \[kJ/mol\]
    pub enthalpy: f64,
    /// Entropy of adsorption ΔS \[J/(mol·K)\]
    pub entropy: f64,
}

impl ThermodynamicParameters {
    /// Create a new parameter set
    ///
    /// # Arguments
    ///
    /// * `enthalpy` - ΔH \[kJ/mol\]
    /// * `entropy` - ΔS \[J/(mol·K)\]
    pub fn new(enthalpy: f64, entropy: f64) -> Self {
        Self { enthalpy, entropy }
    }

    /// Equilibrium constant at `temperature` \[K\]
    ///
    /// See [`equilibrium_constant`].
    pub fn equilibrium_constant(&self, temperature: f64) -> Result<f64> {
        equilibrium_constant(self.enthalpy, self.entropy, temperature)
    }
}

impl Default for ThermodynamicParameters {
    /// ΔH = -20 kJ/mol, ΔS = -60 J/(mol·K): a typical physisorption
    fn default() -> Self {
        Self::new(-20.0, -60.0)
    }
}

/// Compute the equilibrium constant K from ΔH, ΔS and T
///
/// # Arguments
///
/// * `delta_h` - Enthalpy \[kJ/mol\]
/// * `delta_s` - Entropy \[J/(mol·K)\]
/// * `temperature` - Temperature \[K\], must be > 0
///
/// # Errors
///
/// - [`IsothermError::Domain`] if the temperature is not strictly positive
///   or ΔH / ΔS are not finite
/// - [`IsothermError::Overflow`] if `K` exceeds `f64::MAX`
///
/// # Example
///
/// ```rust
/// use isotherm_rs::physics::equilibrium_constant;
///
/// let k = equilibrium_constant(-20.0, -60.0, 298.0).unwrap();
/// assert!((k - 2.353).abs() < 1e-3);
///
/// assert!(equilibrium_constant(-20.0, -60.0, 0.0).is_err());
/// ```
pub fn equilibrium_constant(delta_h: f64, delta_s: f64, temperature: f64) -> Result<f64> {
    let temperature = ensure_positive("temperature", temperature)?;

    if !delta_h.is_finite() {
        return Err(IsothermError::domain("enthalpy", delta_h, "must be finite"));
    }
    if !delta_s.is_finite() {
        return Err(IsothermError::domain("entropy", delta_s, "must be finite"));
    }

    let exponent = (-delta_h * KJ_TO_J) / (GAS_CONSTANT * temperature) + delta_s / GAS_CONSTANT;

    if exponent > f64::MAX.ln() {
        return Err(IsothermError::overflow("equilibrium constant exp(-ΔG/RT)"));
    }

    Ok(exponent.exp())
}

// =================================================================================================
// Tests
// =================================================================================================
