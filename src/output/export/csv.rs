//! CSV export of isotherm curves and surfaces
//!
//! The document has three columns, one row per sample, and a header row:
//!
//! ```csv
//! Pressure,Temperature,Adsorption
//! 0.000000,298.000000,0.000000
//! 0.010101,298.000000,0.452718
//! ...
//! ```
//!
//! A curve is exported at its single temperature; a surface is exported in
//! long format (every temperature × pressure cell becomes a row, temperature
//! major).
//!
//! # Quick Examples
//!
//! ## In-memory document (download button)
//!
//! ```rust
//! use isotherm_rs::curves::{PressureRange, generate_curve};
//! use isotherm_rs::models::Langmuir;
//! use isotherm_rs::output::export::csv::curve_to_csv;
//!
//! let model = Langmuir::new(10.0, 2.35).unwrap();
//! let curve = generate_curve(&model, &PressureRange::new(1.0, 3).unwrap(), 1.0).unwrap();
//!
//! let document = curve_to_csv(&curve, 298.0, None).unwrap();
//! assert!(document.starts_with("Pressure,Temperature,Adsorption\n"));
//! assert_eq!(document.lines().count(), 4);
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! let metadata = CsvMetadata::from_model(&model).with_material("Zeolite");
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_curve_csv(&curve, 298.0, "adsorption_results.csv", Some(&config))?;
//! ```
//!
//! **Output**:
//! ```csv
//! # Adsorption Isotherm Data
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Model: Langmuir
//! # Material: Zeolite
//! # q_max: 10
//! # K: 2.35
//! #
//! Pressure,Temperature,Adsorption
//! ...
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::curves::{AdsorptionSurface, IsothermCurve};
use crate::error::IsothermError;
use crate::models::{Isotherm, IsothermModel};
use crate::output::export::Exporter;

/// File name offered for the in-memory document
pub const DOWNLOAD_FILE_NAME: &str = "adsorption_results.csv";

// =============================================================================
// Errors
// =============================================================================

/// CSV export failures
#[derive(Debug, Error)]
pub enum CsvError {
    /// Nothing to export
    #[error("empty data: {0} contains no samples")]
    Empty(String),

    /// Values that cannot be written (NaN/Inf, inconsistent configuration)
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Underlying writer failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The data could not be computed in the first place
    #[error(transparent)]
    Model(#[from] IsothermError),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use isotherm_rs::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     precision: 3,
///     ..CsvConfig::european()
/// };
/// assert_eq!(config.delimiter, ';');
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal point character (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places (default: 6)
    pub precision: usize,

    /// Write the `#` comment block before the header (default: false)
    pub include_metadata: bool,

    /// Metadata written when `include_metadata` is set
    pub metadata: Option<CsvMetadata>,

    /// Header of the pressure column (default: "Pressure")
    pub pressure_header: String,

    /// Header of the temperature column (default: "Temperature")
    pub temperature_header: String,

    /// Header of the adsorption column (default: "Adsorption")
    pub adsorption_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            pressure_header: "Pressure".to_string(),
            temperature_header: "Temperature".to_string(),
            adsorption_header: "Adsorption".to_string(),
        }
    }
}

impl CsvConfig {
    /// Semicolon delimiter and comma decimal separator
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// 12 decimal places
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Headers carrying their units
    pub fn with_units() -> Self {
        Self {
            pressure_header: "Pressure (bar)".to_string(),
            temperature_header: "Temperature (K)".to_string(),
            adsorption_header: "Adsorption (mol/kg)".to_string(),
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }

    fn validate(&self) -> Result<(), CsvError> {
        if self.delimiter == self.decimal_separator {
            return Err(CsvError::InvalidData(format!(
                "delimiter and decimal separator are both '{}'",
                self.delimiter
            )));
        }
        Ok(())
    }
}

/// Metadata for the `#` comment block
///
/// Only fields that are set are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvMetadata {
    /// Isotherm name (e.g. "Langmuir")
    pub model_name: Option<String>,

    /// Adsorbent name
    pub material: Option<String>,

    /// Model parameters as (name, value)
    pub parameters: Vec<(String, f64)>,

    /// Additional free-form entries
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Model name and every parameter it carries
    ///
    /// ```rust
    /// use isotherm_rs::models::{Freundlich, IsothermModel};
    /// use isotherm_rs::output::export::CsvMetadata;
    ///
    /// let model = IsothermModel::from(Freundlich::new(20.0, 2.5).unwrap());
    /// let metadata = CsvMetadata::from_model(&model);
    ///
    /// assert_eq!(metadata.model_name.as_deref(), Some("Freundlich"));
    /// assert_eq!(metadata.parameters, vec![("K".to_string(), 20.0), ("n".to_string(), 2.5)]);
    /// ```
    pub fn from_model(model: &IsothermModel) -> Self {
        let parameters = model
            .kind()
            .parameters()
            .iter()
            .filter_map(|&p| model.parameter(p).ok().map(|v| (p.name().to_string(), v)))
            .collect();

        Self {
            model_name: Some(model.name().to_string()),
            parameters,
            ..Default::default()
        }
    }

    /// Builder pattern: set material name
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    /// Add custom entry
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write the `#` comment block
fn write_metadata_header<W: Write>(writer: &mut W, metadata: &CsvMetadata) -> io::Result<()> {
    writeln!(writer, "# Adsorption Isotherm Data")?;

    let now = chrono::Utc::now();
    writeln!(writer, "# Generated: {}", now.to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(writer, "# Model: {model}")?;
    }
    if let Some(material) = &metadata.material {
        writeln!(writer, "# Material: {material}")?;
    }
    for (name, value) in &metadata.parameters {
        writeln!(writer, "# {name}: {value}")?;
    }
    for (key, value) in &metadata.custom {
        writeln!(writer, "# {key}: {value}")?;
    }

    writeln!(writer, "#")
}

/// Metadata block (if enabled) and header row
fn write_preamble<W: Write>(writer: &mut W, config: &CsvConfig) -> io::Result<()> {
    if config.include_metadata
        && let Some(metadata) = &config.metadata
    {
        write_metadata_header(writer, metadata)?;
    }

    writeln!(
        writer,
        "{}{d}{}{d}{}",
        config.pressure_header,
        config.temperature_header,
        config.adsorption_header,
        d = config.delimiter
    )
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn write_row<W: Write>(
    writer: &mut W,
    pressure: f64,
    temperature: f64,
    adsorption: f64,
    config: &CsvConfig,
) -> io::Result<()> {
    writeln!(
        writer,
        "{}{d}{}{d}{}",
        format_number(pressure, config),
        format_number(temperature, config),
        format_number(adsorption, config),
        d = config.delimiter
    )
}

fn check_finite(values: &[f64], what: &str) -> Result<(), CsvError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(CsvError::InvalidData(format!(
            "NaN or Inf in {what} at index {i}"
        ))),
        None => Ok(()),
    }
}

fn validate_curve(curve: &IsothermCurve, temperature: f64) -> Result<(), CsvError> {
    if curve.is_empty() {
        return Err(CsvError::Empty(format!("curve '{}'", curve.label())));
    }
    if !temperature.is_finite() {
        return Err(CsvError::InvalidData(format!(
            "temperature {temperature} is not finite"
        )));
    }
    check_finite(curve.pressures(), "pressures")?;
    check_finite(curve.adsorption(), "adsorption")
}

// =============================================================================
// Export Functions
// =============================================================================

/// Write one curve to any writer
///
/// # Arguments
///
/// * `writer` - Destination (file, buffer, socket, ...)
/// * `curve` - Curve to export
/// * `temperature` - Temperature of the curve \[K\], repeated on every row
/// * `config` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - [`CsvError::Empty`] for an empty curve
/// - [`CsvError::InvalidData`] for NaN/Inf values or a delimiter equal to
///   the decimal separator
/// - [`CsvError::Io`] when the writer fails
pub fn write_curve_csv<W: Write>(
    writer: &mut W,
    curve: &IsothermCurve,
    temperature: f64,
    config: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    // ============================= Validation =============================

    validate_curve(curve, temperature)?;

    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);
    config.validate()?;

    // ============================= Write ==================================

    write_preamble(writer, config)?;
    for (pressure, adsorption) in curve.points() {
        write_row(writer, pressure, temperature, adsorption, config)?;
    }

    Ok(())
}

/// Whole document in memory, ready to be offered as [`DOWNLOAD_FILE_NAME`]
pub fn curve_to_csv(
    curve: &IsothermCurve,
    temperature: f64,
    config: Option<&CsvConfig>,
) -> Result<String, CsvError> {
    let mut buffer = Vec::new();
    write_curve_csv(&mut buffer, curve, temperature, config)?;
    String::from_utf8(buffer).map_err(|e| CsvError::InvalidData(e.to_string()))
}

/// Export one curve to a file
///
/// # Example
///
/// ```rust,ignore
/// export_curve_csv(&curve, 298.0, "adsorption_results.csv", None)?;
/// ```
pub fn export_curve_csv<P: AsRef<Path>>(
    curve: &IsothermCurve,
    temperature: f64,
    output_path: P,
    config: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    // Validate before touching the file system
    validate_curve(curve, temperature)?;

    let mut writer = BufWriter::new(File::create(output_path)?);
    write_curve_csv(&mut writer, curve, temperature, config)?;
    writer.flush()?;
    Ok(())
}

/// Write a surface in long format (temperature-major rows)
pub fn write_surface_csv<W: Write>(
    writer: &mut W,
    surface: &AdsorptionSurface,
    config: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    if surface.values().is_empty() {
        return Err(CsvError::Empty(format!("surface '{}'", surface.label())));
    }
    check_finite(surface.values().as_slice(), "surface values")?;

    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);
    config.validate()?;

    write_preamble(writer, config)?;
    for (temperature, pressure, adsorption) in surface.points() {
        write_row(writer, pressure, temperature, adsorption, config)?;
    }

    Ok(())
}

/// Export a surface to a file
pub fn export_surface_csv<P: AsRef<Path>>(
    surface: &AdsorptionSurface,
    output_path: P,
    config: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    let mut buffer = Vec::new();
    write_surface_csv(&mut buffer, surface, config)?;

    let mut file = File::create(output_path)?;
    file.write_all(&buffer)?;
    Ok(())
}

// =============================================================================
// Exporter implementation
// =============================================================================

/// [`Exporter`] writing CSV files with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_curve(
        &self,
        curve: &IsothermCurve,
        temperature: f64,
        path: &Path,
    ) -> Result<(), Self::Error> {
        export_curve_csv(curve, temperature, path, Some(&self.config))
    }

    fn export_surface(&self, surface: &AdsorptionSurface, path: &Path) -> Result<(), Self::Error> {
        export_surface_csv(surface, path, Some(&self.config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
