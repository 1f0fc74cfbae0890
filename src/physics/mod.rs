//! Thermodynamic layer
//!
//! This module holds everything an isotherm needs from thermodynamics before
//! a single curve can be drawn:
//!
//! - **Constants**: the gas constant used by every formula in the crate
//! - **Operating conditions**: temperature and pressure range of an experiment
//! - **Equilibrium constant**: van't Hoff conversion of (ΔH, ΔS, T) into K
//!
//! # Example
//!
//! ```rust
//! use isotherm_rs::physics::{ThermodynamicParameters, equilibrium_constant};
//!
//! // Physisorption of a light gas on activated carbon
//! let thermo = ThermodynamicParameters::new(-20.0, -60.0);
//! let k = thermo.equilibrium_constant(298.0).unwrap();
//!
//! // Same result through the free function
//! let k_direct = equilibrium_constant(-20.0, -60.0, 298.0).unwrap();
//! assert_eq!(k, k_direct);
//! assert!((k - 2.353).abs() < 1e-3);
//! ```
//!
//! # Units
//!
//! | Quantity | Unit |
//! |----------|------|
//! | Enthalpy ΔH | kJ/mol |
//! | Entropy ΔS | J/(mol·K) |
//! | Temperature | K |
//! | Pressure | bar |

pub mod constants;
pub mod conditions;
pub mod thermo;

pub use constants::GAS_CONSTANT;
pub use conditions::OperatingConditions;
pub use thermo::{ThermodynamicParameters, equilibrium_constant};
