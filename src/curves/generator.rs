//! Curve generation
//!
//! Applies an isotherm pointwise over a sampled pressure window and scales
//! the result by a material factor.
//!
//! # Algorithm
//!
//! ```text
//! pressures = linspace(0, p_max, samples)
//! Q_i       = scale · model.adsorption(pressures[i])
//! ```
//!
//! The first failing sample aborts the whole curve: a curve is either
//! complete or absent.

use log::{debug, warn};

use crate::curves::{IsothermCurve, PressureRange};
use crate::error::{Result, ensure_non_negative};
use crate::models::{Isotherm, MaterialProfile};

/// Sample `model` over `range` and multiply by `material_scale`
///
/// The curve is labelled with the model name.
///
/// # Errors
///
/// - [`crate::IsothermError::Domain`] if `material_scale` is negative or not
///   finite, or if any sampled pressure is outside the model's domain (BET
///   with `P0 <= max`)
/// - [`crate::IsothermError::Overflow`] if a sample is not representable
///
/// # Example
///
/// ```rust
/// use isotherm_rs::curves::{PressureRange, generate_curve};
/// use isotherm_rs::models::Langmuir;
///
/// let model = Langmuir::new(10.0, 2.35).unwrap();
/// let curve = generate_curve(&model, &PressureRange::default(), 0.75).unwrap();
///
/// assert_eq!(curve.len(), 100);
/// assert_eq!(curve.adsorption()[0], 0.0);
/// ```
pub fn generate_curve<M>(model: &M, range: &PressureRange, material_scale: f64) -> Result<IsothermCurve>
where
    M: Isotherm + ?Sized,
{
    let scale = ensure_non_negative("material scale", material_scale)?;
    let pressures = range.pressures();

    let adsorption = model
        .adsorption_profile(&pressures)?
        .into_iter()
        .map(|q| q * scale)
        .collect();

    let clipped = pressures.iter().filter(|&&p| model.is_clipped(p)).count();
    if clipped > 0 {
        warn!(
            "{}: {clipped}/{} samples clipped to zero (logarithm undefined or negative)",
            model.name(),
            pressures.len()
        );
    }

    debug!(
        "{} curve generated: {} samples over [0, {}] bar, scale {scale}",
        model.name(),
        pressures.len(),
        range.max()
    );

    Ok(IsothermCurve::new(model.name(), pressures, adsorption))
}

/// One curve per material over a shared pressure sampling
///
/// Each curve is labelled with the material name and scaled by the
/// material's own factor.
///
/// # Example
///
/// ```rust
/// use isotherm_rs::curves::{PressureRange, compare_materials};
/// use isotherm_rs::models::{Freundlich, MaterialProfile};
///
/// let model = Freundlich::new(2.0, 2.0).unwrap();
/// let curves = compare_materials(&model, &PressureRange::default(), &MaterialProfile::predefined()).unwrap();
///
/// assert_eq!(curves.len(), 3);
/// assert_eq!(curves[1].label(), "Zeolite");
/// ```
pub fn compare_materials<M>(
    model: &M,
    range: &PressureRange,
    materials: &[MaterialProfile],
) -> Result<Vec<IsothermCurve>>
where
    M: Isotherm + ?Sized,
{
    debug!(
        "Comparing {} on {} materials",
        model.name(),
        materials.len()
    );

    materials
        .iter()
        .map(|material| {
            generate_curve(model, range, material.scale_factor())
                .map(|curve| curve.with_label(material.name()))
        })
        .collect()
}
