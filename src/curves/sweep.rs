//! Parameter sensitivity sweeps
//!
//! A sweep varies one named parameter of a base model over evenly spaced
//! values and generates one curve per value. Each curve comes from a fresh
//! copy of the base model with only that parameter replaced, so curves do
//! not influence each other.
//!
//! # Example
//!
//! ```rust
//! use isotherm_rs::curves::{ParameterSweep, PressureRange, sweep_parameter};
//! use isotherm_rs::models::{IsothermModel, Langmuir, ModelParameter};
//!
//! let base = IsothermModel::from(Langmuir::new(10.0, 1.0).unwrap());
//! let sweep = ParameterSweep::new(ModelParameter::Affinity, 0.5, 2.5).unwrap();
//!
//! let curves = sweep_parameter(&base, &sweep, &PressureRange::default()).unwrap();
//! assert_eq!(curves.len(), 5);
//! assert_eq!(curves[0].label(), "K = 0.50");
//! ```

use log::debug;

use crate::curves::{IsothermCurve, PressureRange, generate_curve, linspace};
use crate::error::{IsothermError, Result};
use crate::models::{Isotherm, IsothermModel, ModelParameter};

/// Default number of curves in a sweep
pub const DEFAULT_SWEEP_STEPS: usize = 5;

/// Definition of a one-parameter sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSweep {
    parameter: ModelParameter,
    start: f64,
    end: f64,
    steps: usize,
}

impl ParameterSweep {
    /// Sweep `parameter` from `start` to `end` in [`DEFAULT_SWEEP_STEPS`] steps
    ///
    /// # Errors
    ///
    /// [`IsothermError::Domain`] if a bound is not finite.
    pub fn new(parameter: ModelParameter, start: f64, end: f64) -> Result<Self> {
        for (quantity, value) in [("sweep start", start), ("sweep end", end)] {
            if !value.is_finite() {
                return Err(IsothermError::domain(quantity, value, "must be finite"));
            }
        }

        Ok(Self {
            parameter,
            start,
            end,
            steps: DEFAULT_SWEEP_STEPS,
        })
    }

    /// Override the number of curves (at least one)
    pub fn with_steps(mut self, steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(IsothermError::domain(
                "sweep steps",
                0.0,
                "at least one step is required",
            ));
        }
        self.steps = steps;
        Ok(self)
    }

    pub fn parameter(&self) -> ModelParameter {
        self.parameter
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Swept values, `start` and `end` included
    pub fn values(&self) -> Vec<f64> {
        linspace(self.start, self.end, self.steps)
    }
}

/// One curve of a sweep with the parameter value that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SweepCurve {
    pub parameter: ModelParameter,
    pub value: f64,
    pub curve: IsothermCurve,
}

impl SweepCurve {
    pub fn label(&self) -> &str {
        self.curve.label()
    }
}

/// Generate one curve per swept value
///
/// # Errors
///
/// - [`IsothermError::KeyNotFound`] if the base model does not carry the
///   swept parameter
/// - [`IsothermError::Domain`] if a swept value is invalid for the model
///   (e.g. a Freundlich `n <= 0`) or a curve cannot be generated
pub fn sweep_parameter(
    model: &IsothermModel,
    sweep: &ParameterSweep,
    range: &PressureRange,
) -> Result<Vec<SweepCurve>> {
    let parameter = sweep.parameter();

    // Fail fast on a parameter the model does not carry, even for empty sweeps
    model.parameter(parameter)?;

    debug!(
        "{} sweep of {parameter} over [{}, {}] in {} steps",
        model.name(),
        sweep.start(),
        sweep.end(),
        sweep.steps()
    );

    sweep
        .values()
        .into_iter()
        .map(|value| {
            let variant = model.with_parameter(parameter, value)?;
            let curve = generate_curve(&variant, range, 1.0)?
                .with_label(format!("{parameter} = {value:.2}"));

            Ok(SweepCurve {
                parameter,
                value,
                curve,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Freundlich, Langmuir, Temkin};
    use approx::assert_relative_eq;

    fn langmuir() -> IsothermModel {
        Langmuir::new(10.0, 1.0).unwrap().into()
    }

    #[test]
    fn test_default_steps() {
        let sweep = ParameterSweep::new(ModelParameter::MaxCapacity, 5.0, 15.0).unwrap();
        assert_eq!(sweep.steps(), 5);
        assert_eq!(sweep.values(), vec![5.0, 7.5, 10.0, 12.5, 15.0]);
    }

    #[test]
    fn test_each_curve_uses_its_value() {
        let sweep = ParameterSweep::new(ModelParameter::MaxCapacity, 5.0, 15.0).unwrap();
        let range = PressureRange::new(2.0, 3).unwrap();
        let curves = sweep_parameter(&langmuir(), &sweep, &range).unwrap();

        for sc in &curves {
            let expected = Langmuir::new(sc.value, 1.0).unwrap().adsorption(2.0).unwrap();
            assert_relative_eq!(sc.curve.final_adsorption().unwrap(), expected);
        }
        assert_eq!(curves[4].label(), "q_max = 15.00");
    }

    #[test]
    fn test_base_model_is_untouched() {
        let base = langmuir();
        let sweep = ParameterSweep::new(ModelParameter::Affinity, 0.1, 10.0).unwrap();
        sweep_parameter(&base, &sweep, &PressureRange::default()).unwrap();
        assert_eq!(base.parameter(ModelParameter::Affinity).unwrap(), 1.0);
    }

    #[test]
    fn test_foreign_parameter_is_rejected() {
        let sweep = ParameterSweep::new(ModelParameter::Exponent, 1.0, 3.0).unwrap();
        let err = sweep_parameter(&langmuir(), &sweep, &PressureRange::default()).unwrap_err();
        assert!(matches!(err, IsothermError::KeyNotFound { .. }));
    }

    #[test]
    fn test_invalid_swept_value() {
        let model: IsothermModel = Freundlich::new(2.0, 2.0).unwrap().into();
        let sweep = ParameterSweep::new(ModelParameter::Exponent, 0.0, 2.0).unwrap();
        let err = sweep_parameter(&model, &sweep, &PressureRange::default()).unwrap_err();
        assert!(matches!(err, IsothermError::Domain { .. }));
    }

    #[test]
    fn test_temkin_temperature_sweep() {
        let model: IsothermModel = Temkin::new(5.0, 100.0, 298.0).unwrap().into();
        let sweep = ParameterSweep::new(ModelParameter::Temperature, 250.0, 350.0)
            .unwrap()
            .with_steps(3)
            .unwrap();
        let curves = sweep_parameter(&model, &sweep, &PressureRange::new(10.0, 5).unwrap()).unwrap();

        // Q ∝ T at fixed K_T·p
        let ends: Vec<f64> = curves
            .iter()
            .map(|c| c.curve.final_adsorption().unwrap())
            .collect();
        assert!(ends[0] < ends[1] && ends[1] < ends[2]);
    }

    #[test]
    fn test_invalid_sweep_definition() {
        assert!(ParameterSweep::new(ModelParameter::Affinity, f64::NAN, 1.0).is_err());
        let sweep = ParameterSweep::new(ModelParameter::Affinity, 0.0, 1.0).unwrap();
        assert!(sweep.with_steps(0).is_err());
    }
}
