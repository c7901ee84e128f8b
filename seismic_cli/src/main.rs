//! # Quake CLI Application
//!
//! Terminal front end for the seismic engine.
//!
//! ## Usage
//!
//! ```text
//! seismic_cli [input.json]
//! ```
//!
//! With a path, reads a `SeismicAnalysisInput` JSON document. Without one,
//! prompts for the hazard values of a reference three-story building.
//! Set `RUST_LOG=debug` to see intermediate values.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use seismic_core::analysis::{analyze, SeismicAnalysis, SeismicAnalysisInput};
use seismic_core::building::{Geometry, Loads, MaterialProperties};
use seismic_core::calculations::SeismicInput;
use seismic_core::errors::{CalcError, CalcResult};
use seismic_core::site::SiteClass;

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_site_class(prompt: &str, default: SiteClass) -> SiteClass {
    match prompt_line(prompt) {
        Some(code) => code.parse().unwrap_or_else(|e: CalcError| {
            println!("  {} - using {}", e, default);
            default
        }),
        None => default,
    }
}

fn read_input(path: &str) -> CalcResult<SeismicAnalysisInput> {
    let json = std::fs::read_to_string(path).map_err(|e| CalcError::Internal {
        message: format!("could not read '{}': {}", path, e),
    })?;
    Ok(serde_json::from_str(&json)?)
}

fn interactive_input() -> SeismicAnalysisInput {
    println!("Reference building: 20 m x 15 m, 3 stories @ 3.5 m");
    println!();

    let ss = prompt_f64("Enter Ss (g) [0.8]: ", 0.8);
    let s1 = prompt_f64("Enter S1 (g) [0.3]: ", 0.3);
    let site_class = prompt_site_class("Enter site class SA-SF [SD]: ", SiteClass::SD);
    let r = prompt_f64("Enter R [8.0]: ", 8.0);

    SeismicAnalysisInput {
        seismic: SeismicInput::new(ss, s1, site_class).with_r(r),
        soil: None,
        geometry: Geometry::new(20.0, 15.0, 3, 3.5),
        loads: Loads::new(5.5, 0.0, 4.0),
        materials: MaterialProperties::new(28.0),
    }
}

fn print_report(analysis: &SeismicAnalysis) {
    let p = &analysis.parameters;
    let t = &analysis.period;
    let v = &analysis.base_shear;

    println!("═══════════════════════════════════════");
    println!("  SEISMIC ELF RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Site ({} - {}):", p.site_class, p.site_class.description());
    println!("  Fa  = {:.3}    Fv  = {:.3}", p.fa, p.fv);
    println!("  SDS = {:.3} g  SD1 = {:.3} g", p.sds, p.sd1);
    println!("  T0  = {:.3} s  Ts  = {:.3} s  TL = {:.0} s", p.t0, p.ts, p.tl);
    println!();
    println!("Period:");
    println!("  hn = {:.2} m, Ct = {}, Cu = {}", t.hn, t.ct, t.cu);
    println!("  Ta = {:.3} s   Tmax = {:.3} s", t.ta, t.tmax);
    println!();
    println!("Base shear:");
    println!("  W  = {:.1} kN", v.seismic_weight);
    println!("  Cs = {:.4} (governs: {})", v.cs, v.governing_limit());
    println!("  V  = {:.2} kN", v.v);
    println!();
    println!("  Floor   h (m)     Fx (kN)    Vx (kN)");
    for (force, story) in analysis.floor_forces.iter().zip(&analysis.story_shears).rev() {
        println!(
            "  {:>5} {:>8.2} {:>11.2} {:>10.2}",
            force.floor, force.height, force.force, story.shear
        );
    }
    println!();
    println!("  Base overturning moment = {:.1} kN·m", analysis.base_overturning_moment());
    println!("═══════════════════════════════════════");
}

fn main() -> ExitCode {
    env_logger::init();

    println!("Quake CLI - Seismic Equivalent Lateral Force");
    println!("============================================");
    println!();

    let input = match std::env::args().nth(1) {
        Some(path) => match read_input(&path) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => interactive_input(),
    };

    match analyze(&input) {
        Ok(analysis) => {
            print_report(&analysis);

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&analysis) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("analysis failed: {}", e.error_code());
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
