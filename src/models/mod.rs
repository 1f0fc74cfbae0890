//! Isotherm formula library
//!
//! All isotherms implement the [`Isotherm`] trait: a pure mapping from a
//! pressure (or concentration) to an adsorbed amount. Model selection is a
//! sum type, [`IsothermModel`], with one explicit parameter record per
//! variant; parameter names that a model does not carry are rejected when
//! looked up, never silently ignored.
//!
//! # Available Models
//!
//! | Model | Equation | Typical use |
//! |-------|----------|-------------|
//! | [`Langmuir`] | $q_{max} K p / (1 + K p)$ | Monolayer, homogeneous surface |
//! | [`Freundlich`] | $K_d p^{1/n}$ | Heterogeneous surface |
//! | [`Bet`] | $q_{max} C p / [(1 - p/P_0)(1 + (C-1) p/P_0)]$ | Multilayer, porous solids |
//! | [`Temkin`] | $(RT/b_T) \ln(K_T p)$ | Adsorbate–adsorbent interactions |
//!
//! # Edge policy
//!
//! - `p = 0` gives `Q = 0` for every model.
//! - `p < 0` is a domain error for Langmuir, Freundlich and BET.
//! - Temkin clips `p <= 0` (and `K_T·p < 1`) to zero, see [`temkin`].
//!
//! # Materials
//!
//! [`MaterialProfile`] scales any curve by `surface_area / 1000`, a linear
//! approximation relative to a 1000 m²/g reference adsorbent.
//!
//! # Example
//!
//! ```rust
//! use isotherm_rs::models::{Isotherm, IsothermModel, Langmuir, ModelKind};
//!
//! let model = IsothermModel::from(Langmuir::new(10.0, 0.05).unwrap());
//! assert_eq!(model.kind(), ModelKind::Langmuir);
//!
//! let profile = model.adsorption_profile(&[0.0, 20.0]).unwrap();
//! assert_eq!(profile, vec![0.0, 5.0]);
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod bet;
pub mod freundlich;
pub mod langmuir;
pub mod material;
pub mod recommendation;
pub mod temkin;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use bet::Bet;
pub use freundlich::Freundlich;
pub use langmuir::Langmuir;
pub use material::MaterialProfile;
pub use recommendation::{Layering, Recommendation, SurfaceNature, recommend};
pub use temkin::Temkin;

use std::fmt;
use std::str::FromStr;

use crate::error::{IsothermError, Result};

// =================================================================================================
// Isotherm Trait
// =================================================================================================

/// Trait for adsorption isotherms
///
/// # Responsibility
///
/// Maps a loading abscissa (pressure in bar, or concentration for liquid
/// systems) to an adsorbed amount. Implementations are pure: the same input
/// always yields the same output, and no state is kept between calls.
pub trait Isotherm: Send + Sync {
    /// Adsorbed amount at one pressure
    ///
    /// # Errors
    ///
    /// - [`IsothermError::Domain`] if the pressure is outside the model's domain
    /// - [`IsothermError::Overflow`] if the result is not representable
    fn adsorption(&self, pressure: f64) -> Result<f64>;

    /// Adsorbed amounts for a slice of pressures (same length out)
    ///
    /// Fails on the first sample that fails.
    fn adsorption_profile(&self, pressures: &[f64]) -> Result<Vec<f64>> {
        pressures.iter().map(|&p| self.adsorption(p)).collect()
    }

    /// Whether the value at `pressure` is a clipped approximation
    ///
    /// Only models with a convention-based cut-off (Temkin) override this.
    fn is_clipped(&self, _pressure: f64) -> bool {
        false
    }

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}

/// Validate a pressure abscissa: finite and non-negative
pub(crate) fn check_pressure(pressure: f64) -> Result<f64> {
    if pressure.is_nan() || pressure.is_infinite() {
        Err(IsothermError::domain("pressure", pressure, "must be finite"))
    } else if pressure < 0.0 {
        Err(IsothermError::domain("pressure", pressure, "must be >= 0"))
    } else {
        Ok(pressure)
    }
}

// =================================================================================================
// Model Kind (parameterless selector)
// =================================================================================================

/// The four isotherm families, without parameters
///
/// Used by selectors and by [`recommend`]. `FromStr` accepts the display
/// names case-insensitively, with or without an "Isotherm" suffix.
///
/// ```rust
/// use isotherm_rs::models::ModelKind;
///
/// assert_eq!("bet".parse::<ModelKind>().unwrap(), ModelKind::Bet);
/// assert_eq!("Temkin Isotherm".parse::<ModelKind>().unwrap(), ModelKind::Temkin);
/// assert!("Toth".parse::<ModelKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Langmuir,
    Freundlich,
    Bet,
    Temkin,
}

impl ModelKind {
    /// All kinds, in selector order
    pub const ALL: [ModelKind; 4] = [
        ModelKind::Langmuir,
        ModelKind::Freundlich,
        ModelKind::Bet,
        ModelKind::Temkin,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Langmuir => "Langmuir",
            ModelKind::Freundlich => "Freundlich",
            ModelKind::Bet => "BET",
            ModelKind::Temkin => "Temkin",
        }
    }

    /// Governing equation in LaTeX
    pub fn equation(&self) -> &'static str {
        match self {
            ModelKind::Langmuir => r"\theta = \frac{K \cdot p}{1 + K \cdot p}",
            ModelKind::Freundlich => r"q = K_d \cdot p^{\frac{1}{n}}",
            ModelKind::Bet => {
                r"\frac{p}{q(p_0 - p)} = \frac{1}{q_{max} \cdot C} + \frac{C - 1}{q_{max} \cdot C} \cdot \frac{p}{p_0}"
            }
            ModelKind::Temkin => r"q = \frac{RT}{b} \ln(K \cdot p)",
        }
    }

    /// One-paragraph summary of the model assumptions
    pub fn summary(&self) -> &'static str {
        match self {
            ModelKind::Langmuir => {
                "The Langmuir model assumes monolayer adsorption on a surface with a finite number \
                 of identical sites and no interactions between adsorbed molecules."
            }
            ModelKind::Freundlich => {
                "The Freundlich model is an empirical model that describes adsorption on \
                 heterogeneous surfaces."
            }
            ModelKind::Bet => {
                "The BET model extends the Langmuir theory to multilayer adsorption and is well \
                 suited for porous materials."
            }
            ModelKind::Temkin => {
                "The Temkin model considers adsorbate-adsorbent interactions on heterogeneous \
                 surfaces and assumes a linear decrease in adsorption heat."
            }
        }
    }

    /// Parameters carried by this family
    pub fn parameters(&self) -> &'static [ModelParameter] {
        match self {
            ModelKind::Langmuir => &[ModelParameter::MaxCapacity, ModelParameter::Affinity],
            ModelKind::Freundlich => &[ModelParameter::Affinity, ModelParameter::Exponent],
            ModelKind::Bet => &[
                ModelParameter::MaxCapacity,
                ModelParameter::Affinity,
                ModelParameter::SaturationPressure,
            ],
            ModelKind::Temkin => &[
                ModelParameter::Affinity,
                ModelParameter::HeatParameter,
                ModelParameter::Temperature,
            ],
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = IsothermError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        let key = lowered.strip_suffix("isotherm").unwrap_or(&lowered).trim();

        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| IsothermError::key_not_found("isotherm models", s))
    }
}

// =================================================================================================
// Model Parameters (sweepable)
// =================================================================================================

/// Named parameter of an isotherm, used for sensitivity sweeps
///
/// | Parameter | Langmuir | Freundlich | BET | Temkin |
/// |-----------|----------|------------|-----|--------|
/// | `MaxCapacity` | q_max | - | q_max | - |
/// | `Affinity` | K | K_d | C | K_T |
/// | `Exponent` | - | n | - | - |
/// | `SaturationPressure` | - | - | P₀ | - |
/// | `HeatParameter` | - | - | - | b_T |
/// | `Temperature` | - | - | - | T |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelParameter {
    MaxCapacity,
    Affinity,
    Exponent,
    SaturationPressure,
    HeatParameter,
    Temperature,
}

impl ModelParameter {
    const ALL: [ModelParameter; 6] = [
        ModelParameter::MaxCapacity,
        ModelParameter::Affinity,
        ModelParameter::Exponent,
        ModelParameter::SaturationPressure,
        ModelParameter::HeatParameter,
        ModelParameter::Temperature,
    ];

    /// Short identifier
    pub fn name(&self) -> &'static str {
        match self {
            ModelParameter::MaxCapacity => "q_max",
            ModelParameter::Affinity => "K",
            ModelParameter::Exponent => "n",
            ModelParameter::SaturationPressure => "P0",
            ModelParameter::HeatParameter => "b",
            ModelParameter::Temperature => "T",
        }
    }
}

impl fmt::Display for ModelParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelParameter {
    type Err = IsothermError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        ModelParameter::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| IsothermError::key_not_found("model parameters", s))
    }
}

// =================================================================================================
// Isotherm Model (tagged variant)
// =================================================================================================

/// An isotherm with its full parameter record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IsothermModel {
    Langmuir(Langmuir),
    Freundlich(Freundlich),
    Bet(Bet),
    Temkin(Temkin),
}

impl IsothermModel {
    /// Family of this model
    pub fn kind(&self) -> ModelKind {
        match self {
            IsothermModel::Langmuir(_) => ModelKind::Langmuir,
            IsothermModel::Freundlich(_) => ModelKind::Freundlich,
            IsothermModel::Bet(_) => ModelKind::Bet,
            IsothermModel::Temkin(_) => ModelKind::Temkin,
        }
    }

    /// Current value of a parameter
    ///
    /// # Errors
    ///
    /// [`IsothermError::KeyNotFound`] if the model does not carry `parameter`.
    pub fn parameter(&self, parameter: ModelParameter) -> Result<f64> {
        use ModelParameter as P;

        match (self, parameter) {
            (IsothermModel::Langmuir(m), P::MaxCapacity) => Ok(m.q_max()),
            (IsothermModel::Langmuir(m), P::Affinity) => Ok(m.k()),
            (IsothermModel::Freundlich(m), P::Affinity) => Ok(m.kd()),
            (IsothermModel::Freundlich(m), P::Exponent) => Ok(m.n()),
            (IsothermModel::Bet(m), P::MaxCapacity) => Ok(m.q_max()),
            (IsothermModel::Bet(m), P::Affinity) => Ok(m.c()),
            (IsothermModel::Bet(m), P::SaturationPressure) => Ok(m.p0()),
            (IsothermModel::Temkin(m), P::Affinity) => Ok(m.kt()),
            (IsothermModel::Temkin(m), P::HeatParameter) => Ok(m.bt()),
            (IsothermModel::Temkin(m), P::Temperature) => Ok(m.temperature()),
            (model, parameter) => Err(model.missing_parameter(parameter)),
        }
    }

    /// Copy of this model with one parameter replaced
    ///
    /// The new value goes through the variant's validating constructor.
    ///
    /// # Errors
    ///
    /// - [`IsothermError::KeyNotFound`] if the model does not carry `parameter`
    /// - [`IsothermError::Domain`] if `value` is out of range for it
    ///
    /// # Example
    ///
    /// ```rust
    /// use isotherm_rs::models::{IsothermModel, Langmuir, ModelParameter};
    ///
    /// let base = IsothermModel::from(Langmuir::new(10.0, 0.05).unwrap());
    /// let stronger = base.with_parameter(ModelParameter::Affinity, 0.5).unwrap();
    /// assert_eq!(stronger.parameter(ModelParameter::Affinity).unwrap(), 0.5);
    ///
    /// assert!(base.with_parameter(ModelParameter::Exponent, 2.0).is_err());
    /// ```
    pub fn with_parameter(&self, parameter: ModelParameter, value: f64) -> Result<Self> {
        use ModelParameter as P;

        let model = match (self, parameter) {
            (IsothermModel::Langmuir(m), P::MaxCapacity) => Langmuir::new(value, m.k())?.into(),
            (IsothermModel::Langmuir(m), P::Affinity) => Langmuir::new(m.q_max(), value)?.into(),
            (IsothermModel::Freundlich(m), P::Affinity) => Freundlich::new(value, m.n())?.into(),
            (IsothermModel::Freundlich(m), P::Exponent) => Freundlich::new(m.kd(), value)?.into(),
            (IsothermModel::Bet(m), P::MaxCapacity) => Bet::new(value, m.c(), m.p0())?.into(),
            (IsothermModel::Bet(m), P::Affinity) => Bet::new(m.q_max(), value, m.p0())?.into(),
            (IsothermModel::Bet(m), P::SaturationPressure) => {
                Bet::new(m.q_max(), m.c(), value)?.into()
            }
            (IsothermModel::Temkin(m), P::Affinity) => {
                Temkin::new(value, m.bt(), m.temperature())?.into()
            }
            (IsothermModel::Temkin(m), P::HeatParameter) => {
                Temkin::new(m.kt(), value, m.temperature())?.into()
            }
            (IsothermModel::Temkin(m), P::Temperature) => {
                Temkin::new(m.kt(), m.bt(), value)?.into()
            }
            (model, parameter) => return Err(model.missing_parameter(parameter)),
        };

        Ok(model)
    }

    /// Copy of this model re-targeted to `temperature` with affinity `k`
    ///
    /// Used when K is recomputed from thermodynamics at every temperature of
    /// a surface: the affinity is replaced for every family, and Temkin (the
    /// only model with an explicit temperature) also takes the new `T`.
    pub fn at_temperature(&self, temperature: f64, k: f64) -> Result<Self> {
        let model = self.with_parameter(ModelParameter::Affinity, k)?;

        match model {
            IsothermModel::Temkin(_) => model.with_parameter(ModelParameter::Temperature, temperature),
            other => Ok(other),
        }
    }

    fn missing_parameter(&self, parameter: ModelParameter) -> IsothermError {
        let table = match self.kind() {
            ModelKind::Langmuir => "Langmuir parameters",
            ModelKind::Freundlich => "Freundlich parameters",
            ModelKind::Bet => "BET parameters",
            ModelKind::Temkin => "Temkin parameters",
        };
        IsothermError::key_not_found(table, parameter.name())
    }

    fn inner(&self) -> &dyn Isotherm {
        match self {
            IsothermModel::Langmuir(m) => m,
            IsothermModel::Freundlich(m) => m,
            IsothermModel::Bet(m) => m,
            IsothermModel::Temkin(m) => m,
        }
    }
}

impl Isotherm for IsothermModel {
    fn adsorption(&self, pressure: f64) -> Result<f64> {
        self.inner().adsorption(pressure)
    }

    fn is_clipped(&self, pressure: f64) -> bool {
        self.inner().is_clipped(pressure)
    }

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn description(&self) -> Option<&str> {
        self.inner().description()
    }
}

impl From<Langmuir> for IsothermModel {
    fn from(model: Langmuir) -> Self {
        IsothermModel::Langmuir(model)
    }
}

impl From<Freundlich> for IsothermModel {
    fn from(model: Freundlich) -> Self {
        IsothermModel::Freundlich(model)
    }
}

impl From<Bet> for IsothermModel {
    fn from(model: Bet) -> Self {
        IsothermModel::Bet(model)
    }
}

impl From<Temkin> for IsothermModel {
    fn from(model: Temkin) -> Self {
        IsothermModel::Temkin(model)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn all_models() -> Vec<IsothermModel> {
        vec![
            Langmuir::new(10.0, 0.05).unwrap().into(),
            Freundlich::new(20.0, 2.5).unwrap().into(),
            Bet::new(10.0, 10.0, 1000.0).unwrap().into(),
            Temkin::new(2.0, 100.0, 298.0).unwrap().into(),
        ]
    }

    #[test]
    fn test_kind_and_name_agree() {
        for model in all_models() {
            assert_eq!(model.name(), model.kind().name());
        }
    }

    #[test]
    fn test_zero_pressure_gives_zero_for_all_models() {
        for model in all_models() {
            assert_eq!(model.adsorption(0.0).unwrap(), 0.0, "{}", model.name());
        }
    }

    #[test]
    fn test_profile_has_same_shape() {
        let pressures = [0.0, 0.5, 1.0, 5.0];
        for model in all_models() {
            assert_eq!(model.adsorption_profile(&pressures).unwrap().len(), pressures.len());
        }
    }

    #[test]
    fn test_profile_fails_on_first_bad_sample() {
        let model = IsothermModel::from(Bet::new(1.0, 5.0, 2.0).unwrap());
        assert!(model.adsorption_profile(&[0.0, 1.0, 2.0]).is_err());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Langmuir".parse::<ModelKind>().unwrap(), ModelKind::Langmuir);
        assert_eq!(" freundlich ".parse::<ModelKind>().unwrap(), ModelKind::Freundlich);
        assert_eq!("BET Isotherm".parse::<ModelKind>().unwrap(), ModelKind::Bet);

        let err = "Dubinin".parse::<ModelKind>().unwrap_err();
        assert!(matches!(err, IsothermError::KeyNotFound { table: "isotherm models", .. }));
    }

    #[test]
    fn test_parameter_from_str() {
        assert_eq!("q_max".parse::<ModelParameter>().unwrap(), ModelParameter::MaxCapacity);
        assert_eq!("p0".parse::<ModelParameter>().unwrap(), ModelParameter::SaturationPressure);
        assert!("alpha".parse::<ModelParameter>().is_err());
    }

    #[test]
    fn test_declared_parameters_are_readable() {
        for model in all_models() {
            for &parameter in model.kind().parameters() {
                assert!(model.parameter(parameter).is_ok(), "{} {}", model.name(), parameter);
            }
        }
    }

    #[test]
    fn test_with_parameter_round_trips_value() {
        for model in all_models() {
            for &parameter in model.kind().parameters() {
                let current = model.parameter(parameter).unwrap();
                let updated = model.with_parameter(parameter, current * 2.0).unwrap();
                assert_eq!(updated.parameter(parameter).unwrap(), current * 2.0);
            }
        }
    }

    #[test]
    fn test_foreign_parameter_is_key_not_found() {
        let langmuir = IsothermModel::from(Langmuir::new(10.0, 0.05).unwrap());
        let err = langmuir.with_parameter(ModelParameter::Exponent, 2.0).unwrap_err();
        assert_eq!(err, IsothermError::key_not_found("Langmuir parameters", "n"));

        let bet = IsothermModel::from(Bet::new(10.0, 10.0, 1000.0).unwrap());
        assert!(bet.parameter(ModelParameter::Temperature).is_err());
    }

    #[test]
    fn test_with_parameter_validates_value() {
        let freundlich = IsothermModel::from(Freundlich::new(20.0, 2.5).unwrap());
        assert!(matches!(
            freundlich.with_parameter(ModelParameter::Exponent, 0.0),
            Err(IsothermError::Domain { .. })
        ));
    }

    #[test]
    fn test_at_temperature_updates_temkin_temperature() {
        let temkin = IsothermModel::from(Temkin::new(2.0, 100.0, 298.0).unwrap());
        let moved = temkin.at_temperature(350.0, 3.0).unwrap();
        assert_eq!(moved.parameter(ModelParameter::Temperature).unwrap(), 350.0);
        assert_eq!(moved.parameter(ModelParameter::Affinity).unwrap(), 3.0);

        let langmuir = IsothermModel::from(Langmuir::new(10.0, 0.05).unwrap());
        let moved = langmuir.at_temperature(350.0, 3.0).unwrap();
        assert_eq!(moved.parameter(ModelParameter::Affinity).unwrap(), 3.0);
        assert_eq!(moved.parameter(ModelParameter::MaxCapacity).unwrap(), 10.0);
    }

    #[test]
    fn test_summaries_are_present() {
        for kind in ModelKind::ALL {
            assert!(!kind.summary().is_empty());
            assert!(!kind.equation().is_empty());
        }
    }
}
