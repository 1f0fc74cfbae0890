//! Visualization of computed isotherms using the `plotters` library
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`) and `PlotError`
//! - **isotherm**: Line plots (adsorption vs pressure)
//! - **surface**: Heat maps (pressure × temperature)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use isotherm_rs::curves::SimulationScenario;
//! use isotherm_rs::output::visualization::{plot_isotherm, plot_surface, PlotConfig};
//!
//! let scenario = SimulationScenario::default();
//!
//! plot_isotherm(&scenario.curve()?, "langmuir.png", None)?;
//!
//! let mut config = PlotConfig::surface("Langmuir on Activated Carbon");
//! config.width = 1280;
//! plot_surface(&scenario.surface()?, "surface.svg", Some(&config))?;
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Module | Function |
//! |----------|--------|----------|
//! | One isotherm | `isotherm` | `plot_isotherm` |
//! | Same model, several materials | `isotherm` | `plot_isotherm_comparison` |
//! | Parameter sensitivity | `isotherm` | `plot_sweep` |
//! | Temperature dependence | `surface` | `plot_surface` |

pub mod config;
pub mod isotherm;
pub mod surface;

pub use config::{NO_TITLE, PlotConfig, PlotError};
pub use isotherm::{plot_isotherm, plot_isotherm_comparison, plot_sweep};
pub use surface::plot_surface;

use std::path::Path;

use crate::curves::IsothermCurve;

/// `.svg` (any case) selects the SVG backend
pub(crate) fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

pub(crate) fn validate_curve(curve: &IsothermCurve) -> Result<(), PlotError> {
    if curve.is_empty() {
        return Err(PlotError::EmptyData(format!("curve '{}'", curve.label())));
    }

    let finite = curve
        .points()
        .all(|(p, q)| p.is_finite() && q.is_finite());
    if !finite {
        return Err(PlotError::InvalidData(format!(
            "NaN or Inf in curve '{}'",
            curve.label()
        )));
    }

    Ok(())
}
