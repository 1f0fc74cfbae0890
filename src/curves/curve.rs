//! Sampled isotherm curve

/// Labelled sequence of (pressure, adsorbed amount) samples
///
/// Pressures are strictly increasing; both vectors have the same length.
/// Curves are produced by the generator, never assembled point by point.
#[derive(Debug, Clone, PartialEq)]
pub struct IsothermCurve {
    label: String,
    pressures: Vec<f64>,
    adsorption: Vec<f64>,
}

impl IsothermCurve {
    pub(crate) fn new(label: impl Into<String>, pressures: Vec<f64>, adsorption: Vec<f64>) -> Self {
        debug_assert_eq!(pressures.len(), adsorption.len());
        Self {
            label: label.into(),
            pressures,
            adsorption,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Same curve under a different label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Pressure samples \[bar\]
    pub fn pressures(&self) -> &[f64] {
        &self.pressures
    }

    /// Adsorbed amounts \[mol/kg\]
    pub fn adsorption(&self) -> &[f64] {
        &self.adsorption
    }

    /// Iterator over `(pressure, adsorption)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.pressures
            .iter()
            .copied()
            .zip(self.adsorption.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.pressures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressures.is_empty()
    }

    /// Largest adsorbed amount on the curve, `None` if empty
    pub fn max_adsorption(&self) -> Option<f64> {
        self.adsorption.iter().copied().reduce(f64::max)
    }

    /// Adsorbed amount at the highest sampled pressure
    pub fn final_adsorption(&self) -> Option<f64> {
        self.adsorption.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IsothermCurve {
        IsothermCurve::new("test", vec![0.0, 1.0, 2.0], vec![0.0, 3.0, 2.5])
    }

    #[test]
    fn test_points_pairs_samples() {
        let points: Vec<_> = sample().points().collect();
        assert_eq!(points, vec![(0.0, 0.0), (1.0, 3.0), (2.0, 2.5)]);
    }

    #[test]
    fn test_summary_values() {
        let curve = sample();
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.max_adsorption(), Some(3.0));
        assert_eq!(curve.final_adsorption(), Some(2.5));
    }

    #[test]
    fn test_relabel() {
        assert_eq!(sample().with_label("Zeolite").label(), "Zeolite");
    }

    #[test]
    fn test_empty_curve() {
        let curve = IsothermCurve::new("empty", Vec::new(), Vec::new());
        assert!(curve.is_empty());
        assert_eq!(curve.max_adsorption(), None);
    }
}
