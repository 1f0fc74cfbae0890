//! Adsorbent material profiles
//!
//! A material scales any computed curve linearly by its surface area
//! relative to a 1000 m²/g reference adsorbent. This is a first-order
//! approximation: pore size distribution and surface chemistry are ignored.
//!
//! | Material | Surface area (m²/g) | Pore volume (cm³/g) | Scale |
//! |----------|---------------------|---------------------|-------|
//! | Activated Carbon | 1000 | 0.5 | 1.00 |
//! | Zeolite | 750 | 0.3 | 0.75 |
//! | Silica Gel | 500 | 0.4 | 0.50 |

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{IsothermError, Result, ensure_non_negative};

/// Surface area of the reference adsorbent \[m²/g\]
pub const REFERENCE_SURFACE_AREA: f64 = 1000.0;

/// Adsorbent characteristics used to scale curves
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialProfile {
    name: Cow<'static, str>,
    /// BET surface area \[m²/g\]
    surface_area: f64,
    /// Pore volume \[cm³/g\]
    pore_volume: f64,
}

impl MaterialProfile {
    const fn preset(name: &'static str, surface_area: f64, pore_volume: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            surface_area,
            pore_volume,
        }
    }

    pub const ACTIVATED_CARBON: MaterialProfile =
        MaterialProfile::preset("Activated Carbon", 1000.0, 0.5);
    pub const ZEOLITE: MaterialProfile = MaterialProfile::preset("Zeolite", 750.0, 0.3);
    pub const SILICA_GEL: MaterialProfile = MaterialProfile::preset("Silica Gel", 500.0, 0.4);

    /// Predefined catalogue, in selector order
    pub fn predefined() -> [MaterialProfile; 3] {
        [Self::ACTIVATED_CARBON, Self::ZEOLITE, Self::SILICA_GEL]
    }

    /// User-defined material
    ///
    /// # Errors
    ///
    /// [`IsothermError::Domain`] if surface area or pore volume is negative
    /// or not finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use isotherm_rs::models::MaterialProfile;
    ///
    /// let mof = MaterialProfile::custom("Custom MOF", 2500.0, 1.2).unwrap();
    /// assert_eq!(mof.scale_factor(), 2.5);
    /// ```
    pub fn custom(name: impl Into<String>, surface_area: f64, pore_volume: f64) -> Result<Self> {
        Ok(Self {
            name: Cow::Owned(name.into()),
            surface_area: ensure_non_negative("surface area", surface_area)?,
            pore_volume: ensure_non_negative("pore volume", pore_volume)?,
        })
    }

    /// Find a predefined material by name (case-insensitive)
    ///
    /// # Errors
    ///
    /// [`IsothermError::KeyNotFound`] for names outside the catalogue.
    pub fn lookup(name: &str) -> Result<Self> {
        let key = name.trim();
        Self::predefined()
            .into_iter()
            .find(|m| m.name.eq_ignore_ascii_case(key))
            .ok_or_else(|| IsothermError::key_not_found("materials", name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Surface area \[m²/g\]
    pub fn surface_area(&self) -> f64 {
        self.surface_area
    }

    /// Pore volume \[cm³/g\]
    pub fn pore_volume(&self) -> f64 {
        self.pore_volume
    }

    /// Linear curve multiplier: `surface_area / 1000`
    pub fn scale_factor(&self) -> f64 {
        self.surface_area / REFERENCE_SURFACE_AREA
    }
}

impl Default for MaterialProfile {
    fn default() -> Self {
        Self::ACTIVATED_CARBON
    }
}

impl fmt::Display for MaterialProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} m²/g, {} cm³/g)",
            self.name, self.surface_area, self.pore_volume
        )
    }
}

impl FromStr for MaterialProfile {
    type Err = IsothermError;

    fn from_str(s: &str) -> Result<Self> {
        Self::lookup(s)
    }
}
