//! Evenly spaced sampling of pressure and temperature axes

use crate::error::{IsothermError, Result, ensure_positive};

/// Minimum number of samples for any axis (both end points)
pub const MIN_SAMPLES: usize = 2;

/// `samples` evenly spaced values over `[start, end]`, both ends included
///
/// The last value is set to `end` exactly so that floating-point drift never
/// moves the upper bound.
///
/// ```rust
/// use isotherm_rs::curves::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
/// ```
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}

fn check_samples(samples: usize) -> Result<usize> {
    if samples < MIN_SAMPLES {
        Err(IsothermError::domain(
            "sample count",
            samples as f64,
            "at least 2 samples are required",
        ))
    } else {
        Ok(samples)
    }
}

// =================================================================================================
// Pressure Range
// =================================================================================================

/// Pressure window `[0, max]` with a fixed sample count
///
/// # Example
///
/// ```rust
/// use isotherm_rs::curves::PressureRange;
///
/// let range = PressureRange::new(10.0, 11).unwrap();
/// let p = range.pressures();
/// assert_eq!(p.first(), Some(&0.0));
/// assert_eq!(p.last(), Some(&10.0));
/// assert_eq!(p[1], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureRange {
    /// Upper pressure bound \[bar\]
    max: f64,
    samples: usize,
}

impl PressureRange {
    /// # Errors
    ///
    /// [`IsothermError::Domain`] when `max` is not finite and positive,
    /// when fewer than two samples are requested, or when `max` is too small
    /// for the sample step to be a normal float (samples would repeat).
    pub fn new(max: f64, samples: usize) -> Result<Self> {
        let max = ensure_positive("maximum pressure", max)?;
        let samples = check_samples(samples)?;

        if max < f64::MIN_POSITIVE * samples as f64 {
            return Err(IsothermError::domain(
                "maximum pressure",
                max,
                "too small to resolve the requested samples",
            ));
        }

        Ok(Self { max, samples })
    }

    /// Same range with a different upper bound
    pub fn with_max(self, max: f64) -> Result<Self> {
        Self::new(max, self.samples)
    }

    /// Same range with a different sample count
    pub fn with_samples(self, samples: usize) -> Result<Self> {
        Self::new(self.max, samples)
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Sampled pressures, strictly increasing from 0 to `max`
    pub fn pressures(&self) -> Vec<f64> {
        linspace(0.0, self.max, self.samples)
    }
}

impl Default for PressureRange {
    /// 0–1 bar, 100 samples
    fn default() -> Self {
        Self {
            max: 1.0,
            samples: 100,
        }
    }
}

// =================================================================================================
// Temperature Range
// =================================================================================================

/// Temperature window `[min, max]` for surfaces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    /// Lower bound \[K\]
    min: f64,
    /// Upper bound \[K\]
    max: f64,
    samples: usize,
}

impl TemperatureRange {
    /// # Errors
    ///
    /// [`IsothermError::Domain`] when a bound is not strictly positive, when
    /// `min > max`, or when fewer than two samples are requested.
    pub fn new(min: f64, max: f64, samples: usize) -> Result<Self> {
        let min = ensure_positive("minimum temperature", min)?;
        let max = ensure_positive("maximum temperature", max)?;
        if min > max {
            return Err(IsothermError::domain(
                "minimum temperature",
                min,
                "must not exceed the maximum temperature",
            ));
        }

        Ok(Self {
            min,
            max,
            samples: check_samples(samples)?,
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Sampled temperatures from `min` to `max`
    pub fn temperatures(&self) -> Vec<f64> {
        linspace(self.min, self.max, self.samples)
    }
}

impl Default for TemperatureRange {
    /// 273–298 K, 50 samples
    fn default() -> Self {
        Self {
            min: 273.0,
            max: 298.0,
            samples: 50,
        }
    }
}
