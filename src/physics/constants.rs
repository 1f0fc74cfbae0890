//! Physical constants shared by the formula library

/// Molar gas constant R \[J/(mol·K)\]
///
/// Kept at four significant digits so that computed values match the
/// textbook worked examples the formulas are taught with.
pub const GAS_CONSTANT: f64 = 8.314;

/// Kilojoules to joules
pub const KJ_TO_J: f64 = 1000.0;
