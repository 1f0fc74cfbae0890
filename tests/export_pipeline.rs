//! Integration tests: scenario → curves → CSV files and plots

use isotherm_rs::curves::{SimulationScenario, TemperatureRange};
use isotherm_rs::models::ModelKind;
use isotherm_rs::output::export::{
    CsvConfig, CsvExporter, CsvMetadata, Exporter, curve_to_csv, export_curve_csv,
};
use isotherm_rs::output::visualization::{plot_isotherm_comparison, plot_surface};

fn small_scenario(model: ModelKind) -> SimulationScenario {
    SimulationScenario {
        model,
        curve_samples: 20,
        surface_pressure_samples: 10,
        surface_temperatures: TemperatureRange::new(273.0, 298.0, 5).unwrap(),
        ..Default::default()
    }
}

#[test]
fn test_every_model_exports_a_curve() {
    let dir = tempfile::tempdir().unwrap();

    for kind in ModelKind::ALL {
        let scenario = small_scenario(kind);
        let curve = scenario.curve().unwrap();
        let path = dir.path().join(format!("{}.csv", kind.name()));

        export_curve_csv(&curve, scenario.temperature, &path, None).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Pressure,Temperature,Adsorption");
        assert_eq!(lines.len(), 21, "{}", kind.name());
        assert!(lines[1].starts_with("0.000000,298.000000,"));
    }
}

#[test]
fn test_csv_values_parse_back() {
    let scenario = small_scenario(ModelKind::Langmuir);
    let curve = scenario.curve().unwrap();
    let csv = curve_to_csv(&curve, scenario.temperature, Some(&CsvConfig::high_precision())).unwrap();

    let parsed: Vec<f64> = csv
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(2).unwrap().parse().unwrap())
        .collect();

    for (written, expected) in parsed.iter().zip(curve.adsorption()) {
        assert!((written - expected).abs() < 1e-9);
    }
}

#[test]
fn test_metadata_block_names_model_and_material() {
    let scenario = small_scenario(ModelKind::Bet);
    let model = scenario.build_model().unwrap();
    let metadata = CsvMetadata::from_model(&model).with_material(scenario.material.name());

    let config = CsvConfig::default().with_metadata(metadata);
    let csv = scenario.export_csv(Some(&config)).unwrap();

    assert!(csv.starts_with("# Adsorption Isotherm Data"));
    assert!(csv.contains("# Model: BET"));
    assert!(csv.contains("# Material: Activated Carbon"));
}

#[test]
fn test_exporter_writes_surface_in_long_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surface.csv");

    let surface = small_scenario(ModelKind::Freundlich).surface().unwrap();
    CsvExporter::new(CsvConfig::european())
        .export_surface(&surface, &path)
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1 + 5 * 10);
    assert!(content.lines().nth(1).unwrap().contains(';'));
}

#[test]
fn test_plots_for_a_full_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let scenario = small_scenario(ModelKind::Temkin);

    let comparison = dir.path().join("comparison.svg");
    plot_isotherm_comparison(&scenario.material_comparison().unwrap(), &comparison, None).unwrap();
    assert!(std::fs::read_to_string(&comparison).unwrap().contains("Silica Gel"));

    let heat_map = dir.path().join("surface.png");
    plot_surface(&scenario.surface().unwrap(), &heat_map, None).unwrap();
    assert!(heat_map.exists());
}
