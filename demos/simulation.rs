//! Example: Isotherm Simulation - Langmuir, Freundlich, BET and Temkin
//!
//! Builds every model family from the same thermodynamic inputs, compares
//! them on the three catalogue adsorbents, then maps the temperature
//! dependence of the Langmuir isotherm.
//!
//! **Inputs**:
//! - ΔH = -20 kJ/mol, ΔS = -60 J/(mol·K) → K ≈ 2.35 at 298 K
//! - q_max = 10 mol/kg, n = 2, C = 10, P₀ = 2 bar, b_T = 100
//! - Pressure: 0 to 1 bar
//!
//! **Outputs** (written to the current directory):
//! - `isotherm_<model>.png`, `comparison_<model>.svg`
//! - `surface_langmuir.png`
//! - `adsorption_results.csv`

use isotherm_rs::{
    curves::SimulationScenario,
    models::{Isotherm, MaterialProfile, ModelKind, recommend, Layering, SurfaceNature},
    output::{
        export::{CsvConfig, CsvMetadata, DOWNLOAD_FILE_NAME},
        visualization::{PlotConfig, plot_isotherm, plot_isotherm_comparison, plot_surface},
    },
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Adsorption Isotherm Simulation");
    println!("═══════════════════════════════════════════════════════\n");

    let base = SimulationScenario::default();
    println!("Thermodynamics:");
    println!("  ΔH             : {} kJ/mol", base.enthalpy);
    println!("  ΔS             : {} J/(mol·K)", base.entropy);
    println!("  T              : {} K", base.temperature);
    println!("  K              : {:.4}\n", base.equilibrium_constant()?);

    // ====== Every model family ======

    for kind in ModelKind::ALL {
        let scenario = SimulationScenario { model: kind, ..base.clone() };
        let model = scenario.build_model()?;
        let curve = scenario.curve()?;

        println!("{} ({})", kind.name(), kind.equation());
        println!("  {}", model.description().unwrap_or(kind.summary()));
        println!(
            "  q({:.1} bar) on {} = {:.4} mol/kg",
            scenario.max_pressure,
            scenario.material,
            curve.final_adsorption().unwrap_or(0.0)
        );

        let slug = kind.name().to_lowercase();
        plot_isotherm(
            &curve,
            format!("isotherm_{slug}.png"),
            Some(&PlotConfig::isotherm(format!("{} on {}", kind.name(), scenario.material))),
        )?;
        plot_isotherm_comparison(
            &scenario.material_comparison()?,
            format!("comparison_{slug}.svg"),
            Some(&PlotConfig::comparison(format!("{} - Material Comparison", kind.name()))),
        )?;
    }

    // ====== Custom material ======

    let custom = MaterialProfile::custom("Carbon Molecular Sieve", 1250.0, 0.45)?;
    let scenario = SimulationScenario { material: custom, ..base.clone() };
    println!(
        "\nCustom material '{}' (scale {:.2}): {} comparison curves",
        scenario.material,
        scenario.material.scale_factor(),
        scenario.material_comparison()?.len()
    );

    // ====== Temperature dependence ======

    let start = Instant::now();
    let surface = base.surface()?;
    println!(
        "\nSurface {}×{} computed in {:.2?} (max {:.3} mol/kg)",
        surface.temperatures().len(),
        surface.pressures().len(),
        start.elapsed(),
        surface.max_adsorption().unwrap_or(0.0)
    );
    plot_surface(&surface, "surface_langmuir.png", None)?;

    // ====== Export ======

    let model = base.build_model()?;
    let config = CsvConfig::with_units().with_metadata(
        CsvMetadata::from_model(&model).with_material(base.material.name()),
    );
    std::fs::write(DOWNLOAD_FILE_NAME, base.export_csv(Some(&config))?)?;
    println!("Curve exported to {DOWNLOAD_FILE_NAME}");

    // ====== Which model? ======

    let advice = recommend(SurfaceNature::Heterogeneous, Layering::Monolayer, false);
    println!("\nHeterogeneous monolayer → {}: {}", advice.kind, advice.rationale);

    Ok(())
}
