//! Export of computed curves and surfaces
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format is a new file.
//!
//! # Available formats
//!
//! | Format | Module |
//! |--------|--------|
//! | CSV | [`csv`] |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use isotherm_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//! exporter.export_curve(&curve, 298.0, Path::new("adsorption_results.csv"))?;
//! exporter.export_surface(&surface, Path::new("surface.csv"))?;
//! ```

pub mod csv;

pub use csv::{
    CsvConfig, CsvError, CsvExporter, CsvMetadata, DOWNLOAD_FILE_NAME, curve_to_csv,
    export_curve_csv, export_surface_csv, write_curve_csv, write_surface_csv,
};

use std::path::Path;

use crate::curves::{AdsorptionSurface, IsothermCurve};

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so callers
/// can match on format-specific failures without boxing.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports one curve sampled at `temperature` \[K\].
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is empty or contains non-finite values,
    /// or if the path cannot be written.
    fn export_curve(
        &self,
        curve: &IsothermCurve,
        temperature: f64,
        path: &Path,
    ) -> Result<(), Self::Error>;

    /// Exports a pressure × temperature surface.
    fn export_surface(&self, surface: &AdsorptionSurface, path: &Path) -> Result<(), Self::Error>;
}
