// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Spinning Container Example
//!
//! Runs the particle sandbox headlessly for a number of simulated seconds
//! and prints the particle count and kinetic energy as particles pile up
//! and escape through the rotating gap.
//!
//! # Running
//!
//! ```bash
//! # Ten seconds with the default settings
//! cargo run --example spinning_container
//!
//! # Faster spin, wider gap, spawn and exit traces
//! RUST_LOG=physics_sandbox=trace cargo run --example spinning_container -- --spin 2.0 --gap 90 --seconds 20
//! ```

use physics_sandbox::config::{SandboxConfig, SandboxSettings, FIXED_TIMESTEP};
use physics_sandbox::particles::ParticleSandbox;
use tracing_subscriber::EnvFilter;

fn parse_value(args: &[String], i: usize, flag: &str) -> f64 {
    match args.get(i + 1).map(|v| v.parse::<f64>()) {
        Some(Ok(value)) => value,
        _ => {
            eprintln!("Error: {flag} requires a numeric argument");
            std::process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut settings = SandboxSettings::default();
    let mut seconds = 10.0;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--spin" => settings.spin_speed = parse_value(&args, i, "--spin"),
            "--gap" => settings = settings.with_gap_degrees(parse_value(&args, i, "--gap")),
            "--rate" => settings.spawn_rate = parse_value(&args, i, "--rate"),
            "--gravity" => settings.gravity = parse_value(&args, i, "--gravity"),
            "--seconds" => seconds = parse_value(&args, i, "--seconds"),
            other => {
                eprintln!("Warning: ignoring unknown argument '{other}'");
                i += 1;
                continue;
            }
        }
        i += 2;
    }

    if let Err(err) = settings.validate() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    let mut sandbox = match ParticleSandbox::new(SandboxConfig::default()) {
        Ok(sandbox) => sandbox,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    println!("==========================================================");
    println!("       Spinning Container");
    println!("==========================================================");
    println!(
        "Container radius {:.0} px, spin {:.2} rad/s, gap {:.1}°, spawn rate {:.1}/s",
        sandbox.container().radius(),
        settings.spin_speed,
        settings.gap_angle.to_degrees(),
        settings.spawn_rate
    );
    println!();
    println!("  time (s)  particles  kinetic energy");

    let ticks = (seconds / FIXED_TIMESTEP).round() as usize;
    let report_every = (1.0 / FIXED_TIMESTEP).round() as usize;
    for tick in 1..=ticks {
        sandbox.tick(&settings, FIXED_TIMESTEP);
        if tick % report_every == 0 {
            println!(
                "  {:>8.1}  {:>9}  {:>14.1}",
                sandbox.elapsed(),
                sandbox.count(),
                sandbox.kinetic_energy()
            );
        }
    }

    println!();
    if let Some((low, high)) = sandbox.count_history().y_range() {
        println!(
            "Population ranged from {low:.0} to {high:.0} over {} samples",
            sandbox.count_history().len()
        );
    }
}
