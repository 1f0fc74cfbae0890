//! Plot configuration shared across visualization modules
//!
//! One [`PlotConfig`] drives every plot kind; the presets only differ in
//! title, axis labels and palette.

use plotters::prelude::*;
use thiserror::Error;

/// Plot failures
#[derive(Debug, Error)]
pub enum PlotError {
    /// Nothing to draw
    #[error("empty data: {0}")]
    EmptyData(String),

    /// Values that cannot be placed on an axis
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Drawing backend or file system failure
    #[error("plot backend error: {0}")]
    Backend(String),
}

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Line color for single-curve plots
/// - `series_colors`: Optional colors for multi-curve plots (one per curve)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust
/// use isotherm_rs::output::visualization::PlotConfig;
///
/// let config = PlotConfig::comparison("Material Comparison");
/// assert_eq!(config.xlabel, "Pressure (bar)");
/// assert_eq!(config.ylabel, "Adsorption (mol/kg)");
/// ```
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Adsorption Isotherm")
    pub title: String,

    /// X-axis label (default: "Pressure (bar)")
    pub xlabel: String,

    /// Y-axis label (default: "Adsorption (mol/kg)")
    pub ylabel: String,

    /// Line color for single-curve plots (default: BLUE)
    pub line_color: RGBColor,

    /// Optional colors for multi-curve plots
    ///
    /// If None, uses the default palette. Curves beyond the list also fall
    /// back to the palette.
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

pub const PRESSURE_LABEL: &str = "Pressure (bar)";
pub const ADSORPTION_LABEL: &str = "Adsorption (mol/kg)";
pub const TEMPERATURE_LABEL: &str = "Temperature (K)";

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Adsorption Isotherm".to_string(),
            xlabel: PRESSURE_LABEL.to_string(),
            ylabel: ADSORPTION_LABEL.to_string(),
            line_color: BLUE,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust
/// use isotherm_rs::output::visualization::{NO_TITLE, PlotConfig};
///
/// let config = PlotConfig::sweep(NO_TITLE);
/// assert_eq!(config.title, "Parameter Sensitivity");
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    fn titled(title: impl IntoOptionalTitle, default_title: &str) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| default_title.to_string()),
            ..Default::default()
        }
    }

    /// Single isotherm curve (default title "Adsorption Isotherm")
    pub fn isotherm(title: impl IntoOptionalTitle) -> Self {
        Self::titled(title, "Adsorption Isotherm")
    }

    /// Material comparison (default title "Material Comparison")
    pub fn comparison(title: impl IntoOptionalTitle) -> Self {
        Self::titled(title, "Material Comparison")
    }

    /// Parameter sweep (default title "Parameter Sensitivity")
    pub fn sweep(title: impl IntoOptionalTitle) -> Self {
        Self::titled(title, "Parameter Sensitivity")
    }

    /// Pressure × temperature heat map (default title "Adsorption Surface")
    ///
    /// The y axis carries the temperature; the adsorbed amount is the color.
    pub fn surface(title: impl IntoOptionalTitle) -> Self {
        Self {
            ylabel: TEMPERATURE_LABEL.to_string(),
            ..Self::titled(title, "Adsorption Surface")
        }
    }

    /// Multi-curve config with custom colors
    pub fn series_colors(colors: Vec<RGBColor>) -> Self {
        Self {
            series_colors: Some(colors),
            ..Default::default()
        }
    }

    /// Get color for curve at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_series_color(&self, index: usize) -> RGBColor {
        if let Some(colors) = &self.series_colors
            && let Some(color) = colors.get(index)
        {
            return *color;
        }

        const PALETTE: [RGBColor; 10] = [
            BLUE,
            RED,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),   // Orange
            RGBColor(128, 0, 128),   // Purple
            RGBColor(255, 192, 203), // Pink
            RGBColor(165, 42, 42),   // Brown
        ];

        PALETTE[index % PALETTE.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert_eq!(config.xlabel, "Pressure (bar)");
        assert!(config.show_grid);
    }

    #[test]
    fn test_isotherm_config_with_str() {
        let config = PlotConfig::isotherm("Langmuir on Zeolite");
        assert_eq!(config.title, "Langmuir on Zeolite");
        assert_eq!(config.ylabel, "Adsorption (mol/kg)");
    }

    #[test]
    fn test_comparison_config_with_string() {
        let config = PlotConfig::comparison(format!("{} isotherm", "BET"));
        assert_eq!(config.title, "BET isotherm");
    }

    #[test]
    fn test_surface_config_default() {
        let config = PlotConfig::surface(NO_TITLE);
        assert_eq!(config.title, "Adsorption Surface");
        assert_eq!(config.xlabel, "Pressure (bar)");
        assert_eq!(config.ylabel, "Temperature (K)");
    }

    #[test]
    fn test_get_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.get_series_color(0), BLUE);
        assert_eq!(config.get_series_color(1), RED);
        assert_eq!(config.get_series_color(10), BLUE); // Wraparound
    }

    #[test]
    fn test_get_series_color_custom() {
        use plotters::style::full_palette::{LIGHTBLUE, LIGHTGREEN, ORANGE};
        let config = PlotConfig::series_colors(vec![ORANGE, LIGHTGREEN, LIGHTBLUE]);
        assert_eq!(config.get_series_color(0), ORANGE);
        assert_eq!(config.get_series_color(2), LIGHTBLUE);
        assert_eq!(config.get_series_color(3), MAGENTA);
    }
}
