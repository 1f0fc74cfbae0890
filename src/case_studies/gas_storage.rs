//! Hydrogen storage in metal–organic frameworks
//!
//! Capacities are tabulated at the reference conditions 50 bar / 77 K and
//! scaled linearly with pressure and inversely with temperature:
//!
//! $$\text{capacity} = \text{capacity}_{ref} \cdot \frac{p}{50} \cdot \frac{77}{T}$$
//!
//! | MOF | Surface area (m²/g) | Pore volume (cm³/g) | H₂ capacity (wt%) | Price ($/kg) |
//! |-----|---------------------|---------------------|-------------------|--------------|
//! | HKUST-1 | 1800 | 0.86 | 2.3 | 200 |
//! | MOF-5 | 3800 | 1.55 | 4.5 | 300 |
//! | UiO-66 | 1200 | 0.5 | 1.8 | 150 |

use std::fmt;
use std::str::FromStr;

use crate::case_studies::find_by_name;
use crate::error::{IsothermError, Result, ensure_finite, ensure_non_negative, ensure_positive};

/// Reference pressure of the tabulated capacities \[bar\]
pub const REFERENCE_PRESSURE: f64 = 50.0;
/// Reference temperature of the tabulated capacities \[K\]
pub const REFERENCE_TEMPERATURE: f64 = 77.0;
/// wt% → kg/m³ conversion (H₂ density at the reference state)
pub const VOLUMETRIC_FACTOR: f64 = 0.08988;

/// Metal–organic frameworks of the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mof {
    Hkust1,
    Mof5,
    Uio66,
}

impl Mof {
    pub const ALL: [Mof; 3] = [Mof::Hkust1, Mof::Mof5, Mof::Uio66];

    pub fn name(&self) -> &'static str {
        match self {
            Mof::Hkust1 => "HKUST-1",
            Mof::Mof5 => "MOF-5",
            Mof::Uio66 => "UiO-66",
        }
    }

    /// BET surface area \[m²/g\]
    pub fn surface_area(&self) -> f64 {
        match self {
            Mof::Hkust1 => 1800.0,
            Mof::Mof5 => 3800.0,
            Mof::Uio66 => 1200.0,
        }
    }

    /// Pore volume \[cm³/g\]
    pub fn pore_volume(&self) -> f64 {
        match self {
            Mof::Hkust1 => 0.86,
            Mof::Mof5 => 1.55,
            Mof::Uio66 => 0.5,
        }
    }

    /// H₂ capacity at 50 bar / 77 K \[wt%\]
    pub fn reference_capacity(&self) -> f64 {
        match self {
            Mof::Hkust1 => 2.3,
            Mof::Mof5 => 4.5,
            Mof::Uio66 => 1.8,
        }
    }

    /// Material price \[$/kg\]
    pub fn price(&self) -> f64 {
        match self {
            Mof::Hkust1 => 200.0,
            Mof::Mof5 => 300.0,
            Mof::Uio66 => 150.0,
        }
    }
}

impl fmt::Display for Mof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mof {
    type Err = IsothermError;

    fn from_str(s: &str) -> Result<Self> {
        find_by_name("MOF catalogue", &Mof::ALL, s, Mof::name)
    }
}

/// Gas storage inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasStorageInput {
    pub mof: Mof,
    /// Storage temperature \[K\]
    pub temperature: f64,
    /// Storage pressure \[bar\]
    pub pressure: f64,
    /// Hydrogen to store \[kg\]
    pub system_scale: f64,
}

impl Default for GasStorageInput {
    fn default() -> Self {
        Self {
            mof: Mof::Hkust1,
            temperature: REFERENCE_TEMPERATURE,
            pressure: REFERENCE_PRESSURE,
            system_scale: 100.0,
        }
    }
}

/// Gas storage figures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasStorageResult {
    /// Gravimetric capacity \[wt%\]
    pub capacity: f64,
    /// Volumetric capacity \[kg/m³\]
    pub volumetric_capacity: f64,
    /// MOF mass needed for the system scale \[kg\]
    pub mof_required: f64,
    /// Cost of that MOF mass \[$\]
    pub material_cost: f64,
}

/// Storage capacity and material cost for one MOF
///
/// # Errors
///
/// [`IsothermError::Domain`] if `temperature <= 0`, `pressure < 0`,
/// `system_scale < 0`, or if the capacity is zero while hydrogen must be
/// stored. A zero scale at zero capacity needs no material.
/// [`IsothermError::Overflow`] if a vanishing capacity makes the MOF mass
/// (or any other figure) unrepresentable.
///
/// # Example
///
/// ```rust
/// use isotherm_rs::case_studies::{GasStorageInput, gas_storage};
///
/// let result = gas_storage(&GasStorageInput::default()).unwrap();
/// assert_eq!(result.capacity, 2.3);
/// ```
pub fn gas_storage(input: &GasStorageInput) -> Result<GasStorageResult> {
    let temperature = ensure_positive("temperature", input.temperature)?;
    let pressure = ensure_non_negative("pressure", input.pressure)?;
    let scale = ensure_non_negative("system scale", input.system_scale)?;

    let capacity = input.mof.reference_capacity()
        * (pressure / REFERENCE_PRESSURE)
        * (REFERENCE_TEMPERATURE / temperature);

    let mof_required = if scale == 0.0 {
        0.0
    } else if capacity > 0.0 {
        scale / (capacity / 100.0)
    } else {
        return Err(IsothermError::domain(
            "storage capacity",
            capacity,
            "zero capacity cannot hold a positive amount of hydrogen",
        ));
    };

    let mof_required = ensure_finite("MOF mass", mof_required)?;

    Ok(GasStorageResult {
        capacity: ensure_finite("storage capacity", capacity)?,
        volumetric_capacity: ensure_finite("volumetric capacity", capacity * VOLUMETRIC_FACTOR)?,
        mof_required,
        material_cost: ensure_finite("MOF cost", mof_required * input.mof.price())?,
    })
}
