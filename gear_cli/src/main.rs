//! # Gearcalc CLI Application
//!
//! Terminal front end for the contact-strength design engine: prompts for
//! the transmission parameters, runs the computation, prints a report and
//! records the run in a registry file next to the working directory.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use gear_core::catalog::{
    DetailPurpose, DetailType, GearLocation, HeatType, LoadType, Material, MaterialBrand,
    MaterialCombination, MaterialSpec, PsiBd, ShaftRigidity,
};
use gear_core::errors::GearResult;
use gear_core::records::Registry;
use gear_core::store::{load_registry, save_registry, FileLock};
use gear_core::transmission::{execute, PinionInput, TransmissionInput, WheelInput};

/// Registry file written in the working directory
const REGISTRY_FILE: &str = "computations.gcd";

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() -> ExitCode {
    println!("Gearcalc CLI - Cylindrical Gear Contact-Strength Calculator");
    println!("===========================================================");
    println!();
    println!("Steel 45 (Улучшение) on both gears, symmetric pinion, psi_bd = 0.4.");
    println!();

    let service_hours = prompt_f64("Service life t (hours) [10000]: ", 10_000.0);
    let rpm = prompt_f64("Rotational speed n (rpm) [500]: ", 500.0);
    let gear_ratio = prompt_f64("Gear ratio u [4]: ", 4.0);
    let torque = prompt_f64("Pinion torque T (N*m) [500]: ", 500.0);

    let material = MaterialSpec::new(
        Material::Steel,
        MaterialBrand::Steel45,
        HeatType::Improvement,
    );
    let input = TransmissionInput {
        material_combination: MaterialCombination::SteelSteel,
        shaft_rigidity: ShaftRigidity::Unspecified,
        gear_location: GearLocation::Symmetric,
        service_hours,
        rpm,
        gear_ratio,
        load_type: LoadType::Constant,
        pinion: PinionInput {
            detail_type: DetailType::StraightTooth,
            detail_purpose: DetailPurpose::Driving,
            material,
            load_type: LoadType::Constant,
            psi_bd: PsiBd::R0_4,
            torque,
            gear_location: GearLocation::Symmetric,
        },
        wheel: WheelInput {
            detail_type: DetailType::StraightTooth,
            detail_purpose: DetailPurpose::Driven,
            material,
            load_type: LoadType::Constant,
        },
    };

    println!();
    match execute(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  CONTACT-STRENGTH RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Material: {}", input.pinion.material);
            println!("  t = {:.0} h, n = {:.0} rpm, u = {:.2}", service_hours, rpm, gear_ratio);
            println!("  T = {:.0} N*m, psi_bd = {}", torque, input.pinion.psi_bd);
            println!();
            println!("Coefficients:");
            println!("  K_d     = {:.0}", result.k_d);
            println!("  K_Hbeta = {:.2}", result.k_hbeta);
            println!();
            println!("Per-detail stresses:");
            println!(
                "  Pinion: N_HE = {:.3e}, K_HL = {:.3}, sigma_HP = {:.1} MPa",
                result.pinion.stress.n_he, result.pinion.stress.k_hl, result.pinion.stress.sigma_hp
            );
            println!(
                "  Wheel:  N_HE = {:.3e}, K_HL = {:.3}, sigma_HP = {:.1} MPa",
                result.wheel.n_he, result.wheel.k_hl, result.wheel.sigma_hp
            );
            println!();
            println!("═══════════════════════════════════════");
            println!("  sigma_HP = {:.1} MPa", result.sigma_hp);
            println!("  d_w1     = {:.1} mm", result.pinion.d_w1);
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }

            if let Err(e) = persist(&input, &result) {
                eprintln!("Warning: could not record computation: {}", e);
            } else {
                println!();
                println!("Recorded in {}", REGISTRY_FILE);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

/// Append the computation to the registry file, creating it on first use.
fn persist(
    input: &TransmissionInput,
    result: &gear_core::transmission::TransmissionResult,
) -> GearResult<()> {
    let path = Path::new(REGISTRY_FILE);
    let user = std::env::var("USER").unwrap_or_else(|_| "engineer".to_string());

    let lock = FileLock::acquire(path, user)?;

    let mut registry = if path.exists() {
        load_registry(path)?
    } else {
        Registry::new("", "")
    };
    registry.record(input, result);
    save_registry(&registry, path)?;

    drop(lock);
    Ok(())
}
