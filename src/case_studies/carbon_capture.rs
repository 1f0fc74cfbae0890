//! CO₂ capture by temperature swing adsorption
//!
//! Mass balance on the flue gas followed by the regeneration energy and
//! sorbent make-up costs:
//!
//! ```text
//! co2_flow     = flue · conc / 100             m³/h
//! captured     = co2_flow · eff / 100 · 1.98   kg/h
//! regen_energy = captured · E_regen / 1000      GJ/h
//! energy_cost  = regen_energy · 8              $/h
//! material     = captured · price / 1000       $/h
//! ```
//!
//! | Adsorbent | Regeneration energy (GJ/t CO₂) | Price ($/kg) |
//! |-----------|--------------------------------|--------------|
//! | Zeolite 13X | 3.2 | 2.0 |
//! | Activated Carbon | 2.4 | 1.5 |
//! | Amine-modified Silica | 2.8 | 3.0 |

use std::fmt;
use std::str::FromStr;

use crate::case_studies::find_by_name;
use crate::error::{IsothermError, Result, ensure_finite, ensure_non_negative, ensure_percentage};

/// CO₂ density at standard conditions \[kg/m³\]
pub const CO2_DENSITY: f64 = 1.98;
/// Price of regeneration heat \[$/GJ\]
pub const ENERGY_PRICE: f64 = 8.0;

/// Sorbents available for carbon capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureAdsorbent {
    Zeolite13X,
    ActivatedCarbon,
    AmineModifiedSilica,
}

impl CaptureAdsorbent {
    pub const ALL: [CaptureAdsorbent; 3] = [
        CaptureAdsorbent::Zeolite13X,
        CaptureAdsorbent::ActivatedCarbon,
        CaptureAdsorbent::AmineModifiedSilica,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CaptureAdsorbent::Zeolite13X => "Zeolite 13X",
            CaptureAdsorbent::ActivatedCarbon => "Activated Carbon",
            CaptureAdsorbent::AmineModifiedSilica => "Amine-modified Silica",
        }
    }

    /// Regeneration energy \[GJ/t CO₂\]
    pub fn regeneration_energy(&self) -> f64 {
        match self {
            CaptureAdsorbent::Zeolite13X => 3.2,
            CaptureAdsorbent::ActivatedCarbon => 2.4,
            CaptureAdsorbent::AmineModifiedSilica => 2.8,
        }
    }

    /// Price \[$/kg\]
    pub fn price(&self) -> f64 {
        match self {
            CaptureAdsorbent::Zeolite13X => 2.0,
            CaptureAdsorbent::ActivatedCarbon => 1.5,
            CaptureAdsorbent::AmineModifiedSilica => 3.0,
        }
    }
}

impl fmt::Display for CaptureAdsorbent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaptureAdsorbent {
    type Err = IsothermError;

    fn from_str(s: &str) -> Result<Self> {
        find_by_name("carbon capture adsorbents", &CaptureAdsorbent::ALL, s, CaptureAdsorbent::name)
    }
}

/// Carbon capture inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonCaptureInput {
    pub adsorbent: CaptureAdsorbent,
    /// Flue gas flow \[m³/h\]
    pub flue_gas_flow: f64,
    /// CO₂ content of the flue gas \[vol%\]
    pub co2_concentration: f64,
    /// Target capture efficiency \[%\]
    pub capture_efficiency: f64,
}

impl Default for CarbonCaptureInput {
    fn default() -> Self {
        Self {
            adsorbent: CaptureAdsorbent::Zeolite13X,
            flue_gas_flow: 10_000.0,
            co2_concentration: 12.0,
            capture_efficiency: 90.0,
        }
    }
}

/// Carbon capture figures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonCaptureResult {
    /// CO₂ in the flue gas \[m³/h\]
    pub co2_flow: f64,
    /// CO₂ captured \[kg/h\]
    pub co2_captured: f64,
    /// Regeneration heat \[GJ/h\]
    pub regeneration_energy: f64,
    /// \[$/h\]
    pub energy_cost: f64,
    /// \[$/h\]
    pub material_cost: f64,
    /// \[$/h\]
    pub total_operating_cost: f64,
}

/// Captured CO₂ and hourly operating cost
///
/// # Errors
///
/// [`IsothermError::Domain`] if the flue gas flow is negative or a
/// percentage lies outside `[0, 100]`, [`IsothermError::Overflow`] if a
/// figure is not representable.
pub fn carbon_capture(input: &CarbonCaptureInput) -> Result<CarbonCaptureResult> {
    let flue = ensure_non_negative("flue gas flow", input.flue_gas_flow)?;
    let concentration = ensure_percentage("CO2 concentration", input.co2_concentration)?;
    let efficiency = ensure_percentage("capture efficiency", input.capture_efficiency)?;

    let co2_flow = ensure_finite("CO2 flow", flue * concentration / 100.0)?;
    let co2_captured = ensure_finite("captured CO2", co2_flow * efficiency / 100.0 * CO2_DENSITY)?;
    let regeneration_energy = ensure_finite(
        "regeneration energy",
        co2_captured * input.adsorbent.regeneration_energy() / 1000.0,
    )?;
    let energy_cost = ensure_finite("energy cost", regeneration_energy * ENERGY_PRICE)?;
    let material_cost = ensure_finite("material cost", co2_captured * input.adsorbent.price() / 1000.0)?;

    Ok(CarbonCaptureResult {
        co2_flow,
        co2_captured,
        regeneration_energy,
        energy_cost,
        material_cost,
        total_operating_cost: ensure_finite("operating cost", energy_cost + material_cost)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_huge_flue_flow_overflows() {
        let input = CarbonCaptureInput {
            flue_gas_flow: 1e308,
            co2_concentration: 100.0,
            capture_efficiency: 100.0,
            ..Default::default()
        };
        assert!(matches!(carbon_capture(&input), Err(IsothermError::Overflow { .. })));
    }

    #[test]
    fn test_default_figures() {
        let result = carbon_capture(&CarbonCaptureInput::default()).unwrap();

        assert_relative_eq!(result.co2_flow, 1200.0);
        assert_relative_eq!(result.co2_captured, 2138.4, max_relative = 1e-12);
        assert_relative_eq!(result.regeneration_energy, 6.84288, max_relative = 1e-12);
        assert_relative_eq!(result.energy_cost, 54.74304, max_relative = 1e-12);
        assert_relative_eq!(result.material_cost, 4.2768, max_relative = 1e-12);
        assert_relative_eq!(result.total_operating_cost, 59.01984, max_relative = 1e-12);
    }

    #[test]
    fn test_adsorbent_table_changes_costs() {
        let carbon = carbon_capture(&CarbonCaptureInput {
            adsorbent: "activated carbon".parse().unwrap(),
            ..Default::default()
        })
        .unwrap();
        let zeolite = carbon_capture(&CarbonCaptureInput::default()).unwrap();

        assert_eq!(carbon.co2_captured, zeolite.co2_captured);
        assert!(carbon.total_operating_cost < zeolite.total_operating_cost);
    }

    #[test]
    fn test_percentages_are_bounded() {
        let too_rich = CarbonCaptureInput {
            co2_concentration: 120.0,
            ..Default::default()
        };
        assert!(carbon_capture(&too_rich).is_err());

        let negative = CarbonCaptureInput {
            capture_efficiency: -5.0,
            ..Default::default()
        };
        assert!(carbon_capture(&negative).is_err());
    }

    #[test]
    fn test_unknown_adsorbent() {
        let err = "MOF-74".parse::<CaptureAdsorbent>().unwrap_err();
        assert_eq!(
            err,
            IsothermError::key_not_found("carbon capture adsorbents", "MOF-74")
        );
    }
}
