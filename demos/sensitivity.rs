//! Example: Parameter Sensitivity
//!
//! Sweeps each parameter of the Langmuir and BET isotherms over a range and
//! plots the resulting family of curves.
//!
//! **Sweeps**:
//! - Langmuir q_max: 5 → 20 mol/kg
//! - Langmuir K: 0.5 → 10 1/bar
//! - BET C: 2 → 50
//! - BET P₀: 1.5 → 5 bar
//!
//! Each sweep writes `sweep_<model>_<parameter>.png`.

use isotherm_rs::{
    curves::{ParameterSweep, PressureRange, SimulationScenario, sweep_parameter},
    models::{ModelKind, ModelParameter},
    output::visualization::{PlotConfig, plot_sweep},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Isotherm Parameter Sensitivity");
    println!("═══════════════════════════════════════════════════════\n");

    let range = PressureRange::new(1.0, 200)?;

    let sweeps = [
        (ModelKind::Langmuir, ModelParameter::MaxCapacity, 5.0, 20.0),
        (ModelKind::Langmuir, ModelParameter::Affinity, 0.5, 10.0),
        (ModelKind::Bet, ModelParameter::Affinity, 2.0, 50.0),
        (ModelKind::Bet, ModelParameter::SaturationPressure, 1.5, 5.0),
    ];

    for (kind, parameter, start, end) in sweeps {
        let scenario = SimulationScenario { model: kind, ..Default::default() };
        let model = scenario.build_model()?;
        let sweep = ParameterSweep::new(parameter, start, end)?.with_steps(6)?;

        let curves = sweep_parameter(&model, &sweep, &range)?;

        println!("{} / {}:", kind.name(), parameter);
        for sc in &curves {
            println!(
                "  {:<14} → q(1 bar) = {:.4} mol/kg",
                sc.label(),
                sc.curve.final_adsorption().unwrap_or(0.0)
            );
        }

        let file = format!("sweep_{}_{}.png", kind.name().to_lowercase(), parameter.name());
        plot_sweep(
            &curves,
            &file,
            Some(&PlotConfig::sweep(format!("{} - sensitivity to {}", kind.name(), parameter))),
        )?;
        println!("  → {file}\n");
    }

    // Freundlich has no saturation pressure
    let freundlich = SimulationScenario { model: ModelKind::Freundlich, ..Default::default() }.build_model()?;
    let sweep = ParameterSweep::new(ModelParameter::SaturationPressure, 1.0, 2.0)?;
    if let Err(e) = sweep_parameter(&freundlich, &sweep, &range) {
        println!("Freundlich / P0 rejected: {e}");
    }

    Ok(())
}
