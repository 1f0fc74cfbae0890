//! isotherm-rs: Adsorption Isotherm Toolkit
//!
//! Evaluate the classical adsorption isotherms (Langmuir, Freundlich, BET,
//! Temkin), sample them over pressure and temperature, study their
//! sensitivity to each parameter, and run a handful of industrial case-study
//! calculators built on top of them.
//!
//! # Architecture
//!
//! 1. **Models are pure functions of pressure**
//!    - Every isotherm implements [`models::Isotherm`]
//!    - Parameters are validated once, at construction
//!    - Invalid inputs fail with [`IsothermError`], never with NaN
//!
//! 2. **Sampling is separate from evaluation**
//!    - [`curves`] turns a model into curves, surfaces and sweeps
//!    - [`physics`] supplies the temperature dependence (van 't Hoff)
//!
//! # Quick Start
//!
//! ```rust
//! use isotherm_rs::prelude::*;
//!
//! # fn main() -> isotherm_rs::Result<()> {
//! // 1. Equilibrium constant from ΔH = -20 kJ/mol, ΔS = -60 J/(mol·K)
//! let k = ThermodynamicParameters::new(-20.0, -60.0).equilibrium_constant(298.0)?;
//!
//! // 2. Langmuir model with a 10 mol/kg capacity
//! let model = IsothermModel::from(Langmuir::new(10.0, k)?);
//!
//! // 3. Sample 0..1 bar on activated carbon
//! let material = MaterialProfile::default();
//! let curve = generate_curve(&model, &PressureRange::default(), material.scale_factor())?;
//!
//! assert_eq!(curve.len(), 100);
//! assert!(curve.final_adsorption().unwrap() < 10.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Thermodynamics and operating conditions
//! - [`models`]: Isotherm equations, materials, model recommendation
//! - [`curves`]: Curves, surfaces, parameter sweeps, simulation scenario
//! - [`case_studies`]: Gas storage, water treatment, air purification, carbon capture
//! - [`output`]: Plots (PNG/SVG) and CSV export
//!
//! # Features
//!
//! - `parallel`: compute large surfaces row by row with rayon

pub mod error;

// Core modules
pub mod physics;

pub mod models;
pub mod curves;

pub mod case_studies;
pub mod output;

pub use error::{IsothermError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use isotherm_rs::prelude::*;
    //! ```
    pub use crate::error::{IsothermError, Result};
    pub use crate::physics::{OperatingConditions, ThermodynamicParameters, equilibrium_constant};
    pub use crate::models::{Bet,
                            Freundlich,
                            Isotherm,
                            IsothermModel,
                            Langmuir,
                            MaterialProfile,
                            ModelKind,
                            ModelParameter,
                            Temkin};
    pub use crate::curves::{AdsorptionSurface,
                            IsothermCurve,
                            ParameterSweep,
                            PressureRange,
                            SimulationScenario,
                            TemperatureRange,
                            generate_curve,
                            generate_surface,
                            sweep_parameter};
}
