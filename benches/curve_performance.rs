//! Performance benchmarks for curve, surface and sweep generation
//!
//! # What We're Measuring
//!
//! 1. **Single curves**: one model evaluated over N pressures
//!    - Time ∝ samples
//!    - BET and Temkin do slightly more work per point than Langmuir
//!
//! 2. **Surfaces**: one equilibrium constant and one curve per temperature
//!    - Time ∝ temperatures × pressures
//!    - With `--features parallel`, grids above 10 000 cells are split
//!      across rayon workers row by row
//!
//! 3. **Sweeps**: one curve per swept value
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench curve_performance
//!
//! # Surfaces only, sequential vs parallel
//! cargo bench --bench curve_performance surface
//! cargo bench --bench curve_performance --features parallel surface
//! ```

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use isotherm_rs::curves::{
    ParameterSweep, PressureRange, TemperatureRange, generate_curve, generate_surface,
    sweep_parameter,
};
use isotherm_rs::models::{Bet, Freundlich, IsothermModel, Langmuir, ModelParameter, Temkin};
use isotherm_rs::physics::ThermodynamicParameters;

fn models() -> Vec<IsothermModel> {
    vec![
        Langmuir::new(10.0, 2.35).unwrap().into(),
        Freundlich::new(2.35, 2.0).unwrap().into(),
        Bet::new(10.0, 10.0, 2.0).unwrap().into(),
        Temkin::new(2.35, 100.0, 298.0).unwrap().into(),
    ]
}

/// One curve per model at 100, 1 000 and 10 000 samples
fn benchmark_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("Curve generation");

    for model in models() {
        for samples in [100, 1_000, 10_000] {
            let range = PressureRange::new(1.0, samples).unwrap();
            group.bench_with_input(
                BenchmarkId::new(model.kind().name(), samples),
                &range,
                |b, range| b.iter(|| generate_curve(black_box(&model), black_box(range), 1.0).unwrap()),
            );
        }
    }

    group.finish();
}

/// Square Langmuir surfaces, 50² up to 200² cells
fn benchmark_surfaces(c: &mut Criterion) {
    let mut group = c.benchmark_group("Surface generation");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(30);

    let model = IsothermModel::from(Langmuir::new(10.0, 1.0).unwrap());
    let thermo = ThermodynamicParameters::default();

    for side in [50, 100, 200] {
        let pressures = PressureRange::new(1.0, side).unwrap();
        let temperatures = TemperatureRange::new(250.0, 400.0, side).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &side, |b, _| {
            b.iter(|| {
                generate_surface(
                    black_box(&model),
                    black_box(&thermo),
                    black_box(&pressures),
                    black_box(&temperatures),
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

fn benchmark_sweep(c: &mut Criterion) {
    let model = IsothermModel::from(Langmuir::new(10.0, 1.0).unwrap());
    let range = PressureRange::default();
    let sweep = ParameterSweep::new(ModelParameter::Affinity, 0.1, 10.0)
        .unwrap()
        .with_steps(20)
        .unwrap();

    c.bench_function("Affinity sweep (20 curves)", |b| {
        b.iter(|| sweep_parameter(black_box(&model), black_box(&sweep), black_box(&range)).unwrap())
    });
}

criterion_group!(benches, benchmark_curves, benchmark_surfaces, benchmark_sweep);
criterion_main!(benches);
