//! Model recommendation from qualitative system characteristics
//!
//! A decision table mapping three answers (surface nature, layering, and
//! whether adsorbate interactions matter) to one isotherm family.
//!
//! | Surface | Layering | Interactions | Model |
//! |---------|----------|--------------|-------|
//! | Homogeneous | Monolayer | any | Langmuir |
//! | Homogeneous | Multilayer | any | BET |
//! | Heterogeneous | Monolayer | yes | Temkin |
//! | Heterogeneous | Monolayer | no | Freundlich |
//! | Heterogeneous | Multilayer | any | BET |

use std::str::FromStr;

use crate::error::IsothermError;
use crate::models::ModelKind;

/// Energetic uniformity of the adsorbent surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceNature {
    Homogeneous,
    Heterogeneous,
}

/// Whether adsorption stops at one layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layering {
    Monolayer,
    Multilayer,
}

/// Recommended model with the reason it was picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub kind: ModelKind,
    pub rationale: &'static str,
}

/// Pick an isotherm family for the described system
///
/// # Example
///
/// ```rust
/// use isotherm_rs::models::{Layering, ModelKind, SurfaceNature, recommend};
///
/// let r = recommend(SurfaceNature::Heterogeneous, Layering::Monolayer, true);
/// assert_eq!(r.kind, ModelKind::Temkin);
/// ```
pub fn recommend(surface: SurfaceNature, layering: Layering, interactions: bool) -> Recommendation {
    use Layering::*;
    use SurfaceNature::*;

    match (surface, layering, interactions) {
        (Homogeneous, Monolayer, _) => Recommendation {
            kind: ModelKind::Langmuir,
            rationale: "A homogeneous surface with monolayer coverage matches the Langmuir assumptions.",
        },
        (_, Multilayer, _) => Recommendation {
            kind: ModelKind::Bet,
            rationale: "Multilayer adsorption is described by the BET extension of Langmuir theory.",
        },
        (Heterogeneous, Monolayer, true) => Recommendation {
            kind: ModelKind::Temkin,
            rationale: "Adsorbate-adsorbent interactions on a heterogeneous surface point to Temkin.",
        },
        (Heterogeneous, Monolayer, false) => Recommendation {
            kind: ModelKind::Freundlich,
            rationale: "A heterogeneous surface without strong interactions is well fitted by Freundlich.",
        },
    }
}

impl FromStr for SurfaceNature {
    type Err = IsothermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "homogeneous" => Ok(SurfaceNature::Homogeneous),
            "heterogeneous" => Ok(SurfaceNature::Heterogeneous),
            _ => Err(IsothermError::key_not_found("surface natures", s)),
        }
    }
}

impl FromStr for Layering {
    type Err = IsothermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monolayer" => Ok(Layering::Monolayer),
            "multilayer" => Ok(Layering::Multilayer),
            _ => Err(IsothermError::key_not_found("layering types", s)),
        }
    }
}
