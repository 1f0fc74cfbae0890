//! Pressure × temperature adsorption surface
//!
//! For every sampled temperature, the affinity constant is recomputed from
//! thermodynamics (van't Hoff), the isotherm is rebuilt with it, and the
//! whole pressure axis is evaluated. The result is a dense grid:
//!
//! ```text
//!              p_0   p_1   ...   p_m
//!   T_0     [ Q_00  Q_01  ...  Q_0m ]
//!   T_1     [ Q_10  Q_11  ...  Q_1m ]
//!   ...
//!   T_n     [ Q_n0  Q_n1  ...  Q_nm ]
//! ```
//!
//! Rows are independent. With the `parallel` feature and a grid larger than
//! [`PARALLEL_THRESHOLD`] cells they are computed with rayon; the result is
//! identical to the sequential path.

use log::debug;
use nalgebra::DMatrix;

use crate::curves::{IsothermCurve, PressureRange, TemperatureRange};
use crate::error::Result;
use crate::models::{Isotherm, IsothermModel};
use crate::physics::ThermodynamicParameters;

/// Grid size (cells) above which rows are computed in parallel
pub const PARALLEL_THRESHOLD: usize = 10_000;

/// Adsorbed amounts over a pressure × temperature grid
///
/// `values[(i, j)]` is the amount at `temperatures[i]` and `pressures[j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AdsorptionSurface {
    label: String,
    pressures: Vec<f64>,
    temperatures: Vec<f64>,
    values: DMatrix<f64>,
}

impl AdsorptionSurface {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Pressure axis \[bar\] (columns)
    pub fn pressures(&self) -> &[f64] {
        &self.pressures
    }

    /// Temperature axis \[K\] (rows)
    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    /// Grid, rows = temperatures, columns = pressures
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Adsorbed amount at grid indices, `None` when out of bounds
    pub fn get(&self, temperature_index: usize, pressure_index: usize) -> Option<f64> {
        self.values.get((temperature_index, pressure_index)).copied()
    }

    /// Isotherm at one sampled temperature, as a curve
    pub fn isotherm_at(&self, temperature_index: usize) -> Option<IsothermCurve> {
        let temperature = *self.temperatures.get(temperature_index)?;
        let row = self.values.row(temperature_index).iter().copied().collect();

        Some(IsothermCurve::new(
            format!("{} @ {temperature:.1} K", self.label),
            self.pressures.clone(),
            row,
        ))
    }

    /// Largest value of the grid
    pub fn max_adsorption(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// `(temperature, pressure, adsorption)` triples, row by row
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.temperatures.iter().enumerate().flat_map(move |(i, &t)| {
            self.pressures
                .iter()
                .enumerate()
                .map(move |(j, &p)| (t, p, self.values[(i, j)]))
        })
    }
}

/// Evaluate `model` over a pressure × temperature grid
///
/// The model's affinity (Langmuir K, Freundlich K_d, BET C, Temkin K_T) is
/// replaced at each temperature by `thermo.equilibrium_constant(T)`; Temkin
/// also receives the temperature itself. Other parameters are kept.
///
/// # Errors
///
/// Propagates the first error of any cell: non-representable K, a pressure
/// outside the model's domain, or a rejected affinity.
///
/// # Example
///
/// ```rust
/// use isotherm_rs::curves::{PressureRange, TemperatureRange, generate_surface};
/// use isotherm_rs::models::{IsothermModel, Langmuir};
/// use isotherm_rs::physics::ThermodynamicParameters;
///
/// let model = IsothermModel::from(Langmuir::new(10.0, 1.0).unwrap());
/// let surface = generate_surface(
///     &model,
///     &ThermodynamicParameters::default(),
///     &PressureRange::new(1.0, 50).unwrap(),
///     &TemperatureRange::default(),
/// )
/// .unwrap();
///
/// assert_eq!(surface.values().shape(), (50, 50));
/// ```
pub fn generate_surface(
    model: &IsothermModel,
    thermo: &ThermodynamicParameters,
    pressure_range: &PressureRange,
    temperature_range: &TemperatureRange,
) -> Result<AdsorptionSurface> {
    let pressures = pressure_range.pressures();
    let temperatures = temperature_range.temperatures();

    let compute_row = |temperature: f64| -> Result<Vec<f64>> {
        let k = thermo.equilibrium_constant(temperature)?;
        model
            .at_temperature(temperature, k)?
            .adsorption_profile(&pressures)
    };

    let n_rows = temperatures.len();
    let n_cols = pressures.len();

    let rows: Vec<Vec<f64>> = if n_rows * n_cols > PARALLEL_THRESHOLD {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            temperatures
                .par_iter()
                .map(|&t| compute_row(t))
                .collect::<Result<_>>()?
        }
        #[cfg(not(feature = "parallel"))]
        {
            temperatures
                .iter()
                .map(|&t| compute_row(t))
                .collect::<Result<_>>()?
        }
    } else {
        temperatures
            .iter()
            .map(|&t| compute_row(t))
            .collect::<Result<_>>()?
    };

    let values = DMatrix::from_fn(n_rows, n_cols, |i, j| rows[i][j]);

    debug!(
        "{} surface generated: {n_rows} temperatures × {n_cols} pressures",
        model.name()
    );

    Ok(AdsorptionSurface {
        label: model.name().to_string(),
        pressures,
        temperatures,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::generate_curve;
    use crate::error::IsothermError;
    use crate::models::{Bet, Langmuir, ModelParameter, Temkin};
    use approx::assert_relative_eq;

    fn langmuir() -> IsothermModel {
        Langmuir::new(10.0, 1.0).unwrap().into()
    }

    #[test]
    fn test_rows_match_single_curves() {
        let thermo = ThermodynamicParameters::default();
        let pressures = PressureRange::new(1.0, 6).unwrap();
        let temperatures = TemperatureRange::new(273.0, 298.0, 3).unwrap();
        let surface = generate_surface(&langmuir(), &thermo, &pressures, &temperatures).unwrap();

        for (i, &t) in surface.temperatures().iter().enumerate() {
            let k = thermo.equilibrium_constant(t).unwrap();
            let expected = Langmuir::new(10.0, k).unwrap();
            for (j, &p) in surface.pressures().iter().enumerate() {
                assert_relative_eq!(surface.get(i, j).unwrap(), expected.adsorption(p).unwrap());
            }
        }
    }

    #[test]
    fn test_exothermic_adsorption_decreases_with_temperature() {
        let surface = generate_surface(
            &langmuir(),
            &ThermodynamicParameters::default(),
            &PressureRange::new(1.0, 10).unwrap(),
            &TemperatureRange::default(),
        )
        .unwrap();

        let cold = surface.get(0, 9).unwrap();
        let warm = surface.get(49, 9).unwrap();
        assert!(cold > warm);
    }

    #[test]
    fn test_first_column_is_zero() {
        let surface = generate_surface(
            &langmuir(),
            &ThermodynamicParameters::default(),
            &PressureRange::default(),
            &TemperatureRange::default(),
        )
        .unwrap();
        assert!(surface.values().column(0).iter().all(|&q| q == 0.0));
    }

    #[test]
    fn test_temkin_takes_row_temperature() {
        let model: IsothermModel = Temkin::new(2.0, 100.0, 298.0).unwrap().into();
        let thermo = ThermodynamicParameters::default();
        let surface = generate_surface(
            &model,
            &thermo,
            &PressureRange::new(10.0, 3).unwrap(),
            &TemperatureRange::new(273.0, 298.0, 2).unwrap(),
        )
        .unwrap();

        let k = thermo.equilibrium_constant(273.0).unwrap();
        let rebuilt = model
            .with_parameter(ModelParameter::Affinity, k)
            .and_then(|m| m.with_parameter(ModelParameter::Temperature, 273.0))
            .unwrap();
        assert_relative_eq!(surface.get(0, 2).unwrap(), rebuilt.adsorption(10.0).unwrap());
    }

    #[test]
    fn test_large_grid_rows_match_single_curves() {
        // 120 × 101 cells, above PARALLEL_THRESHOLD (rayon with `parallel`)
        let thermo = ThermodynamicParameters::default();
        let pressures = PressureRange::new(5.0, 101).unwrap();
        let temperatures = TemperatureRange::new(250.0, 400.0, 120).unwrap();
        assert!(pressures.samples() * temperatures.samples() > PARALLEL_THRESHOLD);

        for model in [langmuir(), Temkin::new(2.0, 100.0, 298.0).unwrap().into()] {
            let surface = generate_surface(&model, &thermo, &pressures, &temperatures).unwrap();
            assert_eq!(surface.values().shape(), (120, 101));

            for (i, &t) in surface.temperatures().iter().enumerate() {
                let k = thermo.equilibrium_constant(t).unwrap();
                let row_model = model.at_temperature(t, k).unwrap();
                let expected = generate_curve(&row_model, &pressures, 1.0).unwrap();
                let row = surface.isotherm_at(i).unwrap();
                assert_eq!(row.adsorption(), expected.adsorption(), "row {i} at {t} K");
            }
        }
    }

    #[test]
    fn test_bet_domain_error_propagates() {
        let model: IsothermModel = Bet::new(10.0, 10.0, 0.5).unwrap().into();
        let err = generate_surface(
            &model,
            &ThermodynamicParameters::default(),
            &PressureRange::default(),
            &TemperatureRange::default(),
        )
        .unwrap_err();
        assert!(matches!(err, IsothermError::Domain { .. }));
    }

    #[test]
    fn test_isotherm_at_extracts_row() {
        let surface = generate_surface(
            &langmuir(),
            &ThermodynamicParameters::default(),
            &PressureRange::new(1.0, 4).unwrap(),
            &TemperatureRange::new(280.0, 300.0, 2).unwrap(),
        )
        .unwrap();

        let curve = surface.isotherm_at(1).unwrap();
        assert_eq!(curve.label(), "Langmuir @ 300.0 K");
        assert_eq!(curve.len(), 4);
        assert_eq!(curve.adsorption()[3], surface.get(1, 3).unwrap());
        assert!(surface.isotherm_at(2).is_none());
    }

    #[test]
    fn test_points_are_row_major() {
        let surface = generate_surface(
            &langmuir(),
            &ThermodynamicParameters::default(),
            &PressureRange::new(1.0, 3).unwrap(),
            &TemperatureRange::new(280.0, 300.0, 2).unwrap(),
        )
        .unwrap();

        let points: Vec<_> = surface.points().collect();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0].0, 280.0);
        assert_eq!(points[3].0, 300.0);
        assert_eq!(points[4].1, 0.5);
    }
}
