//! VOC removal in an adsorbent bed
//!
//! First-order removal kinetics in the contact time τ:
//!
//! $$\text{removal} = 100 \cdot \left(1 - e^{-k \tau}\right)$$
//!
//! with $k = 0.5\,s^{-1}$. The bed pressure drop grows linearly with τ and
//! sets the fan power.

use crate::error::{Result, ensure_finite, ensure_non_negative, ensure_positive};

/// First-order removal rate constant \[1/s\]
pub const RATE_CONSTANT: f64 = 0.5;
/// Pressure drop per second of contact time \[kPa/s\]
pub const PRESSURE_DROP_PER_SECOND: f64 = 0.1;
/// Flow × pressure drop → power conversion (m³/h · kPa → kWh)
pub const POWER_FACTOR: f64 = 0.000278;
/// Electricity price \[$/kWh\]
pub const ELECTRICITY_PRICE: f64 = 0.1;

/// Air purification inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirPurificationInput {
    /// Air flow rate \[m³/h\]
    pub flow_rate: f64,
    /// Inlet VOC concentration \[ppm\]
    pub voc_concentration: f64,
    /// Contact time τ \[s\]
    pub contact_time: f64,
}

impl Default for AirPurificationInput {
    fn default() -> Self {
        Self {
            flow_rate: 1000.0,
            voc_concentration: 100.0,
            contact_time: 3.0,
        }
    }
}

/// Air purification figures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirPurificationResult {
    /// VOC removal \[%\]
    pub removal: f64,
    /// Outlet VOC concentration \[ppm\]
    pub outlet_concentration: f64,
    /// Bed pressure drop \[kPa\]
    pub pressure_drop: f64,
    /// Fan power \[kWh\]
    pub power_consumption: f64,
    /// Electricity cost \[$/h\]
    pub operating_cost: f64,
}

/// VOC removal and fan operating cost
///
/// # Errors
///
/// [`crate::IsothermError::Domain`] if the flow rate or VOC concentration is
/// negative, or if the contact time is not strictly positive.
/// [`crate::IsothermError::Overflow`] if the fan power or its cost is not
/// representable.
///
/// # Example
///
/// ```rust
/// use isotherm_rs::case_studies::{AirPurificationInput, air_purification};
///
/// let result = air_purification(&AirPurificationInput::default()).unwrap();
/// assert!((result.removal - 77.69).abs() < 1e-2);
/// ```
pub fn air_purification(input: &AirPurificationInput) -> Result<AirPurificationResult> {
    let flow = ensure_non_negative("air flow rate", input.flow_rate)?;
    let voc = ensure_non_negative("VOC concentration", input.voc_concentration)?;
    let tau = ensure_positive("contact time", input.contact_time)?;

    let removal = 100.0 * (1.0 - (-RATE_CONSTANT * tau).exp());
    let pressure_drop = ensure_finite("pressure drop", tau * PRESSURE_DROP_PER_SECOND)?;
    let power_consumption = ensure_finite("fan power", flow * pressure_drop * POWER_FACTOR)?;

    Ok(AirPurificationResult {
        removal,
        outlet_concentration: voc * (1.0 - removal / 100.0),
        pressure_drop,
        power_consumption,
        operating_cost: ensure_finite("electricity cost", power_consumption * ELECTRICITY_PRICE)?,
    })
}
