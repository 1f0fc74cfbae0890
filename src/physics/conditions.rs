//! Operating conditions of an adsorption experiment

use crate::curves::PressureRange;
use crate::error::{Result, ensure_positive};

/// Temperature and pressure window at which isotherms are evaluated
///
/// The pressure axis doubles as a concentration axis for liquid-phase
/// systems: every isotherm in [`crate::models`] is a function of a single
/// non-negative "loading" abscissa.
///
/// # Example
///
/// ```rust
/// use isotherm_rs::physics::OperatingConditions;
/// use isotherm_rs::curves::PressureRange;
///
/// let conditions = OperatingConditions::new(298.0, PressureRange::new(1.0, 100).unwrap()).unwrap();
/// assert_eq!(conditions.temperature(), 298.0);
/// assert_eq!(conditions.pressure_range().samples(), 100);
///
/// assert!(OperatingConditions::new(0.0, PressureRange::default()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingConditions {
    /// Temperature \[K\]
    temperature: f64,
    /// Sampled pressure window \[bar\]
    pressure_range: PressureRange,
}

impl OperatingConditions {
    /// Create conditions, rejecting non-positive temperatures
    pub fn new(temperature: f64, pressure_range: PressureRange) -> Result<Self> {
        Ok(Self {
            temperature: ensure_positive("temperature", temperature)?,
            pressure_range,
        })
    }

    /// Temperature \[K\]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Sampled pressure window
    pub fn pressure_range(&self) -> &PressureRange {
        &self.pressure_range
    }
}

impl Default for OperatingConditions {
    /// Room temperature (298 K) over 0–1 bar with 100 samples
    fn default() -> Self {
        Self {
            temperature: 298.0,
            pressure_range: PressureRange::default(),
        }
    }
}
