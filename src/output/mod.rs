//! Output of computed isotherms
//!
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots
//! │   ├── config.rs
//! │   ├── isotherm.rs
//! │   └── surface.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use isotherm_rs::curves::SimulationScenario;
//! use isotherm_rs::output::export::{export_curve_csv, CsvConfig};
//! use isotherm_rs::output::visualization::plot_isotherm;
//!
//! let scenario = SimulationScenario::default();
//! let curve = scenario.curve()?;
//!
//! plot_isotherm(&curve, "isotherm.png", None)?;
//! export_curve_csv(&curve, scenario.temperature, "adsorption_results.csv", None)?;
//! ```
//!
//! Both sub-modules take the curve and surface types from [`crate::curves`];
//! neither computes anything on its own.

pub mod export;
pub mod visualization;
