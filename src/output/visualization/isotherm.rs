//! Isotherm line plots
//!
//! Adsorbed amount against pressure, for one curve or a family of curves
//! sharing the pressure axis.
//!
//! | Function | Input | Legend |
//! |----------|-------|--------|
//! | [`plot_isotherm`] | one [`IsothermCurve`] | none |
//! | [`plot_isotherm_comparison`] | curves per material | curve labels |
//! | [`plot_sweep`] | [`SweepCurve`]s | `parameter = value` |
//!
//! The backend follows the file extension: `.svg` produces an SVG document,
//! anything else a bitmap (PNG by default).
//!
//! # Example
//!
//! ```rust,ignore
//! use isotherm_rs::output::visualization::{plot_isotherm, PlotConfig};
//!
//! plot_isotherm(&curve, "isotherm.png", None)?;
//! plot_isotherm(&curve, "isotherm.svg", Some(&PlotConfig::isotherm("Langmuir")))?;
//! ```

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::curves::{IsothermCurve, SweepCurve};
use crate::output::visualization::config::{PlotConfig, PlotError};
use crate::output::visualization::{is_svg, validate_curve};

// =================================================================================================
// Public API
// =================================================================================================

/// Plot a single isotherm curve
///
/// # Errors
///
/// - [`PlotError::EmptyData`] if the curve has no samples
/// - [`PlotError::InvalidData`] if it contains NaN/Inf
/// - [`PlotError::Backend`] if the image cannot be written
pub fn plot_isotherm<P: AsRef<Path>>(
    curve: &IsothermCurve,
    output_path: P,
    config: Option<&PlotConfig>,
) -> Result<(), PlotError> {
    validate_curve(curve)?;

    let default_config = PlotConfig::isotherm(curve.label());
    let config = config.unwrap_or(&default_config);

    let series = [Series {
        label: None,
        curve,
        color: config.line_color,
    }];
    render(output_path.as_ref(), &series, config)
}

/// Plot the same model on several materials
///
/// Each curve is drawn in its own color and named by its label in the
/// legend.
pub fn plot_isotherm_comparison<P: AsRef<Path>>(
    curves: &[IsothermCurve],
    output_path: P,
    config: Option<&PlotConfig>,
) -> Result<(), PlotError> {
    if curves.is_empty() {
        return Err(PlotError::EmptyData("no curves to compare".to_string()));
    }
    curves.iter().try_for_each(validate_curve)?;

    let default_config = PlotConfig::comparison(None::<&str>);
    let config = config.unwrap_or(&default_config);

    let series: Vec<Series<'_>> = curves
        .iter()
        .enumerate()
        .map(|(i, curve)| Series {
            label: Some(curve.label()),
            curve,
            color: config.get_series_color(i),
        })
        .collect();
    render(output_path.as_ref(), &series, config)
}

/// Plot the curves of a parameter sweep
pub fn plot_sweep<P: AsRef<Path>>(
    curves: &[SweepCurve],
    output_path: P,
    config: Option<&PlotConfig>,
) -> Result<(), PlotError> {
    if curves.is_empty() {
        return Err(PlotError::EmptyData("sweep produced no curves".to_string()));
    }
    curves.iter().try_for_each(|sc| validate_curve(&sc.curve))?;

    let default_config = PlotConfig::sweep(format!("Sensitivity to {}", curves[0].parameter));
    let config = config.unwrap_or(&default_config);

    let series: Vec<Series<'_>> = curves
        .iter()
        .enumerate()
        .map(|(i, sc)| Series {
            label: Some(sc.label()),
            curve: &sc.curve,
            color: config.get_series_color(i),
        })
        .collect();
    render(output_path.as_ref(), &series, config)
}

// =================================================================================================
// Rendering
// =================================================================================================

struct Series<'a> {
    label: Option<&'a str>,
    curve: &'a IsothermCurve,
    color: RGBColor,
}

fn render(output_path: &Path, series: &[Series<'_>], config: &PlotConfig) -> Result<(), PlotError> {
    let result = if is_svg(output_path) {
        let backend = SVGBackend::new(output_path, (config.width, config.height));
        plot_lines_impl(backend, series, config)
    } else {
        let backend = BitMapBackend::new(output_path, (config.width, config.height));
        plot_lines_impl(backend, series, config)
    };

    result.map_err(|e| PlotError::Backend(e.to_string()))
}

/// Implementation for line plotting with concrete backend
fn plot_lines_impl<DB: DrawingBackend>(
    backend: DB,
    series: &[Series<'_>],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    // Axis ranges: pressure from 0, adsorption from 0 with 10% headroom
    let max_p = series
        .iter()
        .flat_map(|s| s.curve.pressures().iter().copied())
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-10);
    let max_q = series
        .iter()
        .filter_map(|s| s.curve.max_adsorption())
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-10);

    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..max_p, 0.0..(max_q * 1.1))?;

    let label_format = |v: &f64| format!("{v:.2}");

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_label_formatter(&label_format)
        .y_label_formatter(&label_format);

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    let line_width = config.line_width;
    let mut has_legend = false;

    for s in series {
        let color = s.color;
        let drawn = chart.draw_series(LineSeries::new(
            s.curve.points(),
            color.stroke_width(line_width),
        ))?;

        if let Some(label) = s.label {
            has_legend = true;
            drawn.label(label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
            });
        }
    }

    if has_legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{ParameterSweep, PressureRange, compare_materials, generate_curve, sweep_parameter};
    use crate::models::{IsothermModel, Langmuir, MaterialProfile, ModelParameter};

    fn model() -> IsothermModel {
        Langmuir::new(10.0, 2.35).unwrap().into()
    }

    #[test]
    fn test_plot_isotherm_png() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let curve = generate_curve(&model(), &PressureRange::default(), 1.0).unwrap();
        plot_isotherm(&curve, &path, None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_isotherm_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("isotherm.svg");

        let curve = generate_curve(&model(), &PressureRange::default(), 1.0).unwrap();
        plot_isotherm(&curve, &path, Some(&PlotConfig::isotherm("Langmuir"))).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
    }

    #[test]
    fn test_plot_comparison() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comparison.svg");

        let curves = compare_materials(&model(), &PressureRange::default(), &MaterialProfile::predefined()).unwrap();
        plot_isotherm_comparison(&curves, &path, None).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Zeolite"));
    }

    #[test]
    fn test_plot_sweep() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let sweep = ParameterSweep::new(ModelParameter::Affinity, 0.5, 5.0).unwrap();
        let curves = sweep_parameter(&model(), &sweep, &PressureRange::default()).unwrap();
        plot_sweep(&curves, &path, None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_empty_inputs() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            plot_isotherm_comparison(&[], dir.path().join("a.png"), None),
            Err(PlotError::EmptyData(_))
        ));
        assert!(matches!(
            plot_sweep(&[], dir.path().join("b.png"), None),
            Err(PlotError::EmptyData(_))
        ));
    }

    #[test]
    fn test_missing_directory_is_backend_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plot.svg");

        let curve = generate_curve(&model(), &PressureRange::default(), 1.0).unwrap();
        assert!(matches!(plot_isotherm(&curve, &path, None), Err(PlotError::Backend(_))));
    }
}
