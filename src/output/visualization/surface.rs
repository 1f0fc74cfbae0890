//! Heat map of a pressure × temperature adsorption surface
//!
//! Pressure on the x axis, temperature on the y axis, adsorbed amount as
//! color (blue = low, red = high). A color bar on the right gives the scale.
//!
//! ```rust,ignore
//! use isotherm_rs::output::visualization::{plot_surface, PlotConfig};
//!
//! let surface = scenario.surface()?;
//! plot_surface(&surface, "surface.png", Some(&PlotConfig::surface("Langmuir")))?;
//! ```

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::curves::AdsorptionSurface;
use crate::output::visualization::config::{ADSORPTION_LABEL, PlotConfig, PlotError};
use crate::output::visualization::is_svg;

/// Width of the color bar area in pixels
const COLOR_BAR_WIDTH: u32 = 140;
/// Number of color bar steps
const COLOR_BAR_STEPS: usize = 64;

/// Plot a surface as a heat map
///
/// # Errors
///
/// - [`PlotError::EmptyData`] for an empty grid
/// - [`PlotError::InvalidData`] for NaN/Inf cells
/// - [`PlotError::Backend`] if the image cannot be written
pub fn plot_surface<P: AsRef<Path>>(
    surface: &AdsorptionSurface,
    output_path: P,
    config: Option<&PlotConfig>,
) -> Result<(), PlotError> {
    let values = surface.values();
    if values.is_empty() {
        return Err(PlotError::EmptyData(format!("surface '{}'", surface.label())));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(PlotError::InvalidData(format!(
            "NaN or Inf in surface '{}'",
            surface.label()
        )));
    }

    let default_config = PlotConfig::surface(format!("{} Surface", surface.label()));
    let config = config.unwrap_or(&default_config);
    let output_path = output_path.as_ref();

    let result = if is_svg(output_path) {
        let backend = SVGBackend::new(output_path, (config.width, config.height));
        plot_surface_impl(backend, surface, config)
    } else {
        let backend = BitMapBackend::new(output_path, (config.width, config.height));
        plot_surface_impl(backend, surface, config)
    };

    result.map_err(|e| PlotError::Backend(e.to_string()))
}

/// Cell boundaries around sampled axis values (midpoints, ends mirrored)
fn cell_edges(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let first = values[0];
    let last = values[n - 1];

    if n == 1 || last == first {
        return vec![first - 0.5, last + 0.5];
    }

    let mut edges = Vec::with_capacity(n + 1);
    edges.push(first - (values[1] - first) / 2.0);
    edges.extend(values.windows(2).map(|w| (w[0] + w[1]) / 2.0));
    edges.push(last + (last - values[n - 2]) / 2.0);
    edges
}

/// Blue (0) → red (1)
fn heat_color(fraction: f64) -> HSLColor {
    HSLColor((1.0 - fraction.clamp(0.0, 1.0)) * 0.66, 0.9, 0.5)
}

/// Implementation for heat map plotting with concrete backend
fn plot_surface_impl<DB: DrawingBackend>(
    backend: DB,
    surface: &AdsorptionSurface,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let values = surface.values();
    let q_min = values.min();
    let q_max = values.max();
    let span = q_max - q_min;
    let fraction = |q: f64| if span > 0.0 { (q - q_min) / span } else { 0.0 };

    let x_edges = cell_edges(surface.pressures());
    let y_edges = cell_edges(surface.temperatures());
    let x_range = x_edges[0].max(0.0)..x_edges[x_edges.len() - 1];
    let y_range = y_edges[0]..y_edges[y_edges.len() - 1];

    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let split = config.width.saturating_sub(COLOR_BAR_WIDTH) as i32;
    let (map_area, bar_area) = root.split_horizontally(split);

    // ── Heat map ──────────────────────────────────────────────────────────

    let mut chart = ChartBuilder::on(&map_area)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    let label_format = |v: &f64| format!("{v:.1}");
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_label_formatter(&label_format)
        .y_label_formatter(&label_format)
        .draw()?;

    let n_cols = surface.pressures().len();
    chart.draw_series((0..values.nrows()).flat_map(|i| {
        let y_edges = &y_edges;
        let x_edges = &x_edges;
        (0..n_cols).map(move |j| {
            let color = heat_color(fraction(values[(i, j)]));
            Rectangle::new(
                [(x_edges[j], y_edges[i]), (x_edges[j + 1], y_edges[i + 1])],
                color.filled(),
            )
        })
    }))?;

    // ── Color bar ─────────────────────────────────────────────────────────

    let bar_top = if span > 0.0 { q_max } else { q_min + 1.0 };
    let mut bar = ChartBuilder::on(&bar_area)
        .margin_top(70)
        .margin_bottom(65)
        .margin_right(15)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, q_min..bar_top)?;

    bar.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc(ADSORPTION_LABEL)
        .y_label_formatter(&|v: &f64| format!("{v:.2}"))
        .draw()?;

    let step = (bar_top - q_min) / COLOR_BAR_STEPS as f64;
    bar.draw_series((0..COLOR_BAR_STEPS).map(|k| {
        let low = q_min + step * k as f64;
        Rectangle::new(
            [(0.0, low), (1.0, low + step)],
            heat_color(k as f64 / (COLOR_BAR_STEPS - 1) as f64).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{PressureRange, TemperatureRange, generate_surface};
    use crate::models::{IsothermModel, Langmuir};
    use crate::physics::ThermodynamicParameters;

    fn surface() -> AdsorptionSurface {
        let model = IsothermModel::from(Langmuir::new(10.0, 1.0).unwrap());
        generate_surface(
            &model,
            &ThermodynamicParameters::default(),
            &PressureRange::new(1.0, 20).unwrap(),
            &TemperatureRange::new(273.0, 298.0, 10).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_cell_edges() {
        assert_eq!(cell_edges(&[0.0, 1.0, 2.0]), vec![-0.5, 0.5, 1.5, 2.5]);
        assert_eq!(cell_edges(&[298.0, 298.0]), vec![297.5, 298.5]);
    }

    #[test]
    fn test_heat_color_bounds() {
        let cold = heat_color(0.0);
        let hot = heat_color(1.0);
        assert!(cold.0 > hot.0);
        assert_eq!(heat_color(2.0).0, hot.0);
    }

    #[test]
    fn test_plot_surface_png() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        plot_surface(&surface(), &path, None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_surface_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.svg");

        plot_surface(&surface(), &path, Some(&PlotConfig::surface("Langmuir surface"))).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("<svg"));
    }
}
