//! Contaminant removal from water
//!
//! The dose–response follows a Freundlich uptake factor:
//!
//! $$C = \frac{C_0}{1 + K_F \cdot D^{1/n}}, \qquad \text{removal} = \left(1 - \frac{C}{C_0}\right) \cdot 100$$
//!
//! with $K_F = 20$, $n = 2.5$ and $D$ the adsorbent dose (g/L). The uptake
//! factor is evaluated through [`Freundlich`], with the dose as abscissa.

use std::fmt;
use std::str::FromStr;

use crate::case_studies::find_by_name;
use crate::error::{IsothermError, Result, ensure_finite, ensure_non_negative, ensure_positive};
use crate::models::{Freundlich, Isotherm};

/// Freundlich constant of the dose–response
pub const FREUNDLICH_KF: f64 = 20.0;
/// Freundlich intensity of the dose–response
pub const FREUNDLICH_N: f64 = 2.5;
/// Operating cost per treated volume \[$/m³\]
pub const OPERATING_COST_PER_M3: f64 = 0.2;

/// Adsorbents available for water treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaterAdsorbent {
    ActivatedCarbon,
    IonExchangeResin,
    Zeolite,
}

impl WaterAdsorbent {
    pub const ALL: [WaterAdsorbent; 3] = [
        WaterAdsorbent::ActivatedCarbon,
        WaterAdsorbent::IonExchangeResin,
        WaterAdsorbent::Zeolite,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WaterAdsorbent::ActivatedCarbon => "Activated Carbon",
            WaterAdsorbent::IonExchangeResin => "Ion Exchange Resin",
            WaterAdsorbent::Zeolite => "Zeolite",
        }
    }

    /// Price \[$/kg\]
    pub fn price(&self) -> f64 {
        match self {
            WaterAdsorbent::ActivatedCarbon => 3.0,
            WaterAdsorbent::IonExchangeResin => 10.0,
            WaterAdsorbent::Zeolite => 7.0,
        }
    }
}

impl fmt::Display for WaterAdsorbent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaterAdsorbent {
    type Err = IsothermError;

    fn from_str(s: &str) -> Result<Self> {
        find_by_name("water treatment adsorbents", &WaterAdsorbent::ALL, s, WaterAdsorbent::name)
    }
}

/// Water treatment inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterTreatmentInput {
    pub adsorbent: WaterAdsorbent,
    /// Initial contaminant concentration C₀ \[mg/L\]
    pub initial_concentration: f64,
    /// Adsorbent dose D \[g/L\]
    pub adsorbent_dose: f64,
    /// Treated volume V \[m³/day\]
    pub treatment_volume: f64,
}

impl Default for WaterTreatmentInput {
    fn default() -> Self {
        Self {
            adsorbent: WaterAdsorbent::ActivatedCarbon,
            initial_concentration: 100.0,
            adsorbent_dose: 2.0,
            treatment_volume: 1000.0,
        }
    }
}

/// Water treatment figures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterTreatmentResult {
    /// Residual concentration C \[mg/L\]
    pub final_concentration: f64,
    /// Removal efficiency \[%\]
    pub removal: f64,
    /// Daily adsorbent cost \[$/day\]
    pub adsorbent_cost: f64,
    /// Daily operating cost \[$/day\]
    pub operating_cost: f64,
}

/// Removal efficiency and daily costs
///
/// `adsorbent_cost = D · V · price`: g/L × m³/day is kg/day.
///
/// # Errors
///
/// [`IsothermError::Domain`] if `C0 <= 0`, `D < 0` or `V < 0`;
/// [`IsothermError::Overflow`] if a cost is not representable.
pub fn water_treatment(input: &WaterTreatmentInput) -> Result<WaterTreatmentResult> {
    let c0 = ensure_positive("initial concentration", input.initial_concentration)?;
    let dose = ensure_non_negative("adsorbent dose", input.adsorbent_dose)?;
    let volume = ensure_non_negative("treatment volume", input.treatment_volume)?;

    let uptake_factor = Freundlich::new(FREUNDLICH_KF, FREUNDLICH_N)?.adsorption(dose)?;
    let final_concentration = c0 / (1.0 + uptake_factor);

    Ok(WaterTreatmentResult {
        final_concentration,
        removal: (1.0 - final_concentration / c0) * 100.0,
        adsorbent_cost: ensure_finite("adsorbent cost", dose * volume * input.adsorbent.price())?,
        operating_cost: ensure_finite("operating cost", volume * OPERATING_COST_PER_M3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_figures() {
        let result = water_treatment(&WaterTreatmentInput::default()).unwrap();
        let factor = 20.0 * 2.0_f64.powf(0.4);

        assert_relative_eq!(result.final_concentration, 100.0 / (1.0 + factor));
        assert_relative_eq!(result.removal, 100.0 * factor / (1.0 + factor), max_relative = 1e-12);
        assert_relative_eq!(result.adsorbent_cost, 6000.0);
        assert_relative_eq!(result.operating_cost, 200.0);
    }

    #[test]
    fn test_huge_treatment_cost_overflows() {
        let input = WaterTreatmentInput {
            adsorbent_dose: 1e200,
            treatment_volume: 1e200,
            ..Default::default()
        };
        assert!(matches!(water_treatment(&input), Err(IsothermError::Overflow { .. })));
    }

    #[test]
    fn test_no_dose_removes_nothing() {
        let input = WaterTreatmentInput {
            adsorbent_dose: 0.0,
            ..Default::default()
        };
        let result = water_treatment(&input).unwrap();
        assert_eq!(result.final_concentration, 100.0);
        assert_eq!(result.removal, 0.0);
        assert_eq!(result.adsorbent_cost, 0.0);
    }

    #[test]
    fn test_price_table() {
        let input = WaterTreatmentInput {
            adsorbent: "ion exchange resin".parse().unwrap(),
            ..Default::default()
        };
        assert_relative_eq!(water_treatment(&input).unwrap().adsorbent_cost, 20000.0);
    }

    #[test]
    fn test_removal_increases_with_dose() {
        let low = water_treatment(&WaterTreatmentInput {
            adsorbent_dose: 0.5,
            ..Default::default()
        })
        .unwrap();
        let high = water_treatment(&WaterTreatmentInput {
            adsorbent_dose: 5.0,
            ..Default::default()
        })
        .unwrap();
        assert!(high.removal > low.removal);
        assert!(high.removal < 100.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let zero_c0 = WaterTreatmentInput {
            initial_concentration: 0.0,
            ..Default::default()
        };
        assert!(water_treatment(&zero_c0).is_err());

        let negative_dose = WaterTreatmentInput {
            adsorbent_dose: -1.0,
            ..Default::default()
        };
        assert!(water_treatment(&negative_dose).is_err());

        assert!("Clay".parse::<WaterAdsorbent>().is_err());
    }
}
