//! Example: Industrial Case Studies
//!
//! Runs the four calculators for every catalogue material and prints a
//! comparison table for each.

use isotherm_rs::case_studies::{
    AirPurificationInput, CaptureAdsorbent, CarbonCaptureInput, GasStorageInput, Mof,
    WaterAdsorbent, WaterTreatmentInput, air_purification, carbon_capture, gas_storage,
    water_treatment,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Adsorption Case Studies");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Hydrogen storage ======

    println!("Hydrogen storage in MOFs (77 K, 50 bar, 100 kg H₂):");
    println!("  {:<10} {:>10} {:>12} {:>12} {:>14}", "MOF", "wt%", "kg/m³", "MOF [kg]", "Cost [$]");
    for mof in Mof::ALL {
        let r = gas_storage(&GasStorageInput { mof, ..Default::default() })?;
        println!(
            "  {:<10} {:>10.2} {:>12.3} {:>12.1} {:>14.0}",
            mof.name(), r.capacity, r.volumetric_capacity, r.mof_required, r.material_cost
        );
    }

    // ====== Water treatment ======

    println!("\nWater treatment (C₀ = 100 mg/L, 2 g/L, 1000 m³):");
    for adsorbent in WaterAdsorbent::ALL {
        let r = water_treatment(&WaterTreatmentInput { adsorbent, ..Default::default() })?;
        println!(
            "  {:<20} removal {:>6.2}%  C = {:>6.2} mg/L  cost ${:.0} + ${:.0}",
            adsorbent.name(), r.removal, r.final_concentration, r.adsorbent_cost, r.operating_cost
        );
    }

    // ====== Air purification ======

    println!("\nAir purification (1000 m³/h, 100 ppm):");
    for contact_time in [1.0, 3.0, 6.0] {
        let r = air_purification(&AirPurificationInput { contact_time, ..Default::default() })?;
        println!(
            "  τ = {contact_time:.0} s  removal {:>6.2}%  outlet {:>6.2} ppm  ΔP {:.2} kPa  ${:.4}/h",
            r.removal, r.outlet_concentration, r.pressure_drop, r.operating_cost
        );
    }

    // ====== Carbon capture ======

    println!("\nCO₂ capture (10 000 m³/h flue gas, 12% CO₂, 90% capture):");
    for adsorbent in CaptureAdsorbent::ALL {
        let r = carbon_capture(&CarbonCaptureInput { adsorbent, ..Default::default() })?;
        println!(
            "  {:<22} {:>8.1} kg/h  {:>7.2} GJ/h  ${:>8.2}/h",
            adsorbent.name(), r.co2_captured, r.regeneration_energy, r.total_operating_cost
        );
    }

    Ok(())
}
