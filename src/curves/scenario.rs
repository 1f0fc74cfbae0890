//! Simulation scenario
//!
//! A scenario holds every input of the interactive simulation page in one
//! explicit record. The presentation shell owns it, edits its fields, and
//! calls the builders below; nothing is cached between calls.
//!
//! # Defaults
//!
//! | Field | Default |
//! |-------|---------|
//! | model | Langmuir |
//! | temperature | 298 K |
//! | max pressure | 1 bar |
//! | q_max | 10 mol/kg |
//! | ΔH / ΔS | −20 kJ/mol / −60 J/(mol·K) |
//! | Freundlich n | 2 |
//! | BET C / P₀ | 10 / 2 bar |
//! | Temkin b | 100 |
//! | material | Activated Carbon |
//! | curve samples | 100 |
//! | surface | 50 pressures × 50 temperatures over 273–298 K |
//!
//! # Model construction
//!
//! The affinity of every model is the equilibrium constant computed from
//! (ΔH, ΔS, T):
//!
//! | Model | Parameters |
//! |-------|------------|
//! | Langmuir | q_max, K |
//! | Freundlich | K_d = K, n |
//! | BET | q_max, C, P₀ |
//! | Temkin | K_T = K, b, T |
//!
//! BET ignores K: its affinity is the C constant entered directly.
//!
//! # Example
//!
//! ```rust
//! use isotherm_rs::curves::SimulationScenario;
//! use isotherm_rs::models::ModelKind;
//!
//! let scenario = SimulationScenario {
//!     model: ModelKind::Freundlich,
//!     max_pressure: 10.0,
//!     ..Default::default()
//! };
//!
//! let curve = scenario.curve().unwrap();
//! assert_eq!(curve.len(), 100);
//! assert_eq!(curve.label(), "Activated Carbon");
//! ```

use crate::curves::{
    AdsorptionSurface, IsothermCurve, PressureRange, TemperatureRange, compare_materials,
    generate_curve, generate_surface,
};
use crate::error::Result;
use crate::models::{Bet, Freundlich, IsothermModel, Langmuir, MaterialProfile, ModelKind, Temkin};
use crate::output::export::{CsvConfig, CsvError, curve_to_csv};
use crate::physics::{OperatingConditions, ThermodynamicParameters};

/// Inputs of the simulation page
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationScenario {
    /// Selected isotherm family
    pub model: ModelKind,

    /// Temperature \[K\]
    pub temperature: f64,

    /// Upper bound of the pressure axis \[bar\]
    pub max_pressure: f64,

    /// Saturation capacity (Langmuir, BET) \[mol/kg\]
    pub q_max: f64,

    /// Adsorption enthalpy ΔH \[kJ/mol\]
    pub enthalpy: f64,

    /// Adsorption entropy ΔS \[J/(mol·K)\]
    pub entropy: f64,

    /// Freundlich heterogeneity exponent
    pub freundlich_n: f64,

    /// BET constant C
    pub bet_c: f64,

    /// BET saturation pressure P₀ \[bar\], must exceed `max_pressure`
    pub bet_p0: f64,

    /// Temkin constant b_T
    pub temkin_b: f64,

    /// Adsorbent used for the main curve
    pub material: MaterialProfile,

    /// Samples of the main curve and the material comparison
    pub curve_samples: usize,

    /// Pressure samples of the surface
    pub surface_pressure_samples: usize,

    /// Temperature axis of the surface
    pub surface_temperatures: TemperatureRange,
}

impl Default for SimulationScenario {
    fn default() -> Self {
        Self {
            model: ModelKind::Langmuir,
            temperature: 298.0,
            max_pressure: 1.0,
            q_max: 10.0,
            enthalpy: -20.0,
            entropy: -60.0,
            freundlich_n: 2.0,
            bet_c: 10.0,
            bet_p0: 2.0,
            temkin_b: 100.0,
            material: MaterialProfile::default(),
            curve_samples: 100,
            surface_pressure_samples: 50,
            surface_temperatures: TemperatureRange::default(),
        }
    }
}

impl SimulationScenario {
    /// Thermodynamic inputs
    pub fn thermodynamics(&self) -> ThermodynamicParameters {
        ThermodynamicParameters::new(self.enthalpy, self.entropy)
    }

    /// Equilibrium constant at the scenario temperature
    pub fn equilibrium_constant(&self) -> Result<f64> {
        self.thermodynamics().equilibrium_constant(self.temperature)
    }

    /// Temperature and pressure window of the main curve
    pub fn conditions(&self) -> Result<OperatingConditions> {
        OperatingConditions::new(
            self.temperature,
            PressureRange::new(self.max_pressure, self.curve_samples)?,
        )
    }

    /// Parameterised isotherm for the selected family
    ///
    /// # Errors
    ///
    /// Any parameter outside its domain, or a non-representable K.
    pub fn build_model(&self) -> Result<IsothermModel> {
        let k = self.equilibrium_constant()?;

        let model = match self.model {
            ModelKind::Langmuir => Langmuir::new(self.q_max, k)?.into(),
            ModelKind::Freundlich => Freundlich::new(k, self.freundlich_n)?.into(),
            ModelKind::Bet => Bet::new(self.q_max, self.bet_c, self.bet_p0)?.into(),
            ModelKind::Temkin => Temkin::new(k, self.temkin_b, self.temperature)?.into(),
        };

        Ok(model)
    }

    /// Main curve, scaled by the selected material
    pub fn curve(&self) -> Result<IsothermCurve> {
        let conditions = self.conditions()?;
        let curve = generate_curve(
            &self.build_model()?,
            conditions.pressure_range(),
            self.material.scale_factor(),
        )?;
        Ok(curve.with_label(self.material.name()))
    }

    /// Materials shown in the comparison: the catalogue, plus the selected
    /// material when it is a custom one
    pub fn comparison_materials(&self) -> Vec<MaterialProfile> {
        let mut materials = MaterialProfile::predefined().to_vec();
        if !materials.contains(&self.material) {
            materials.push(self.material.clone());
        }
        materials
    }

    /// Same model on every comparison material
    pub fn material_comparison(&self) -> Result<Vec<IsothermCurve>> {
        let conditions = self.conditions()?;
        compare_materials(
            &self.build_model()?,
            conditions.pressure_range(),
            &self.comparison_materials(),
        )
    }

    /// Export table of the main curve, written at the scenario temperature
    ///
    /// # Errors
    ///
    /// [`CsvError::Model`] if the curve cannot be built, otherwise the
    /// errors of [`curve_to_csv`].
    pub fn export_csv(&self, config: Option<&CsvConfig>) -> Result<String, CsvError> {
        let curve = self.curve()?;
        curve_to_csv(&curve, self.temperature, config)
    }

    /// Pressure × temperature surface (unscaled)
    ///
    /// Every row recomputes the affinity from thermodynamics, including the
    /// BET C constant.
    pub fn surface(&self) -> Result<AdsorptionSurface> {
        generate_surface(
            &self.build_model()?,
            &self.thermodynamics(),
            &PressureRange::new(self.max_pressure, self.surface_pressure_samples)?,
            &self.surface_temperatures,
        )
    }
}
