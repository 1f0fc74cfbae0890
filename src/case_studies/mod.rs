//! Industrial case-study calculators
//!
//! Four back-of-the-envelope calculators showing where adsorption is used in
//! practice. Each one is a pure function of a declared input record and
//! returns a result record; nothing is stored between calls.
//!
//! | Module | Process | Model |
//! |--------|---------|-------|
//! | [`gas_storage`] | Hydrogen storage in MOFs | Linear pressure / inverse temperature scaling |
//! | [`water_treatment`] | Contaminant removal | Freundlich |
//! | [`air_purification`] | VOC removal | First-order kinetics |
//! | [`carbon_capture`] | CO₂ capture by TSA | Mass and energy balance |
//!
//! Material and adsorbent selections are enums parsed case-insensitively from
//! their display names; unknown names fail with
//! [`IsothermError::KeyNotFound`].
//!
//! All figures are illustrative: constants come from typical literature
//! orders of magnitude, not from a specific plant.

pub mod air_purification;
pub mod carbon_capture;
pub mod gas_storage;
pub mod water_treatment;

pub use air_purification::{AirPurificationInput, AirPurificationResult, air_purification};
pub use carbon_capture::{CaptureAdsorbent, CarbonCaptureInput, CarbonCaptureResult, carbon_capture};
pub use gas_storage::{GasStorageInput, GasStorageResult, Mof, gas_storage};
pub use water_treatment::{
    WaterAdsorbent, WaterTreatmentInput, WaterTreatmentResult, water_treatment,
};

use crate::error::{IsothermError, Result};

/// Available calculators, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStudy {
    GasStorage,
    WaterTreatment,
    AirPurification,
    CarbonCapture,
}

impl CaseStudy {
    pub const ALL: [CaseStudy; 4] = [
        CaseStudy::GasStorage,
        CaseStudy::WaterTreatment,
        CaseStudy::AirPurification,
        CaseStudy::CarbonCapture,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CaseStudy::GasStorage => "Gas Storage",
            CaseStudy::WaterTreatment => "Water Treatment",
            CaseStudy::AirPurification => "Air Purification",
            CaseStudy::CarbonCapture => "Carbon Capture",
        }
    }
}

impl std::str::FromStr for CaseStudy {
    type Err = IsothermError;

    fn from_str(s: &str) -> Result<Self> {
        find_by_name("case studies", &CaseStudy::ALL, s, CaseStudy::name)
    }
}

/// Case-insensitive lookup of `key` among `choices` by display name
pub(crate) fn find_by_name<T: Copy>(
    table: &'static str,
    choices: &[T],
    key: &str,
    name: impl Fn(&T) -> &'static str,
) -> Result<T> {
    let wanted = key.trim();
    choices
        .iter()
        .find(|choice| name(*choice).eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| IsothermError::key_not_found(table, key))
}
