//! Curve sampling
//!
//! Everything that turns an isotherm formula into data a plot or a CSV
//! export can consume:
//!
//! | Item | Output |
//! |------|--------|
//! | [`generate_curve`] | one [`IsothermCurve`] over `[0, p_max]` |
//! | [`compare_materials`] | one curve per [`MaterialProfile`](crate::models::MaterialProfile) |
//! | [`generate_surface`] | [`AdsorptionSurface`] over pressure × temperature |
//! | [`sweep_parameter`] | one [`SweepCurve`] per value of a model parameter |
//! | [`SimulationScenario`] | all of the above from one record of page inputs |
//!
//! All functions are pure: identical inputs produce bit-identical outputs.

pub mod curve;
pub mod generator;
pub mod sampling;
pub mod scenario;
pub mod surface;
pub mod sweep;

pub use curve::IsothermCurve;
pub use generator::{compare_materials, generate_curve};
pub use sampling::{PressureRange, TemperatureRange, linspace};
pub use scenario::SimulationScenario;
pub use surface::{AdsorptionSurface, generate_surface};
pub use sweep::{ParameterSweep, SweepCurve, sweep_parameter};
