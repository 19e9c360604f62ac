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
//! Projectile Range Example
//!
//! Launches one projectile with drag next to its drag-free companion and
//! prints the readout at landing, then sweeps the launch angle to show how
//! drag moves the best angle below 45°.
//!
//! # Running
//!
//! ```bash
//! # Default launch: 100 m/s at 45°, 10 kg ball of radius 0.1 m
//! cargo run --example projectile_range
//!
//! # Custom speed and angle, with launch and landing logs
//! RUST_LOG=physics_sandbox=debug cargo run --example projectile_range -- --speed 60 --angle 30
//! ```

use physics_sandbox::config::{LabConfig, FIXED_TIMESTEP};
use physics_sandbox::projectile::{ideal_range, LaunchConfig, ProjectileLab};
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

fn fly(lab: &mut ProjectileLab, launch: &LaunchConfig) -> Option<(f64, f64, f64)> {
    if let Err(err) = lab.launch(launch) {
        eprintln!("Error: {err}");
        return None;
    }
    while lab.is_running() {
        lab.tick(FIXED_TIMESTEP);
    }
    let readout = lab.readout()?;
    Some((readout.range, readout.max_height, readout.time))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut launch = LaunchConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--speed" => {
                launch.speed = parse_value(&args, i, "--speed");
                i += 2;
            }
            "--angle" => {
                launch.angle_degrees = parse_value(&args, i, "--angle");
                i += 2;
            }
            "--wind" => {
                launch.wind_vx = parse_value(&args, i, "--wind");
                i += 2;
            }
            "--no-drag" => {
                launch.drag_enabled = false;
                i += 1;
            }
            other => {
                eprintln!("Warning: ignoring unknown argument '{other}'");
                i += 1;
            }
        }
    }

    let mut lab = match ProjectileLab::new(LabConfig::default()) {
        Ok(lab) => lab,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    println!("==========================================================");
    println!("       Projectile Range");
    println!("==========================================================");
    println!(
        "Launch: {:.1} m/s at {:.1}°, mass {:.2} kg, radius {:.3} m, drag {}",
        launch.speed,
        launch.angle_degrees,
        launch.mass,
        launch.radius,
        if launch.drag_enabled { "on" } else { "off" }
    );

    let Some((range, max_height, time)) = fly(&mut lab, &launch) else {
        std::process::exit(1);
    };
    println!();
    println!("Landed after {time:.2} s");
    println!("  Range:      {range:.2} m");
    println!("  Max height: {max_height:.2} m");
    if let Some(ideal) = lab.ideal() {
        println!("  Ideal path at landing time: x = {:.2} m", ideal.position().x);
    }
    println!(
        "  Ideal ground-to-ground range: {:.2} m",
        ideal_range(launch.speed, launch.angle_radians(), launch.gravity)
    );

    println!();
    println!("Angle sweep (drag {}):", if launch.drag_enabled { "on" } else { "off" });
    println!("  angle    range (m)");
    let mut best = (0.0, 0.0);
    for degrees in (15..=75).step_by(5) {
        let sweep = launch.with_velocity(launch.speed, degrees as f64);
        if let Some((range, _, _)) = fly(&mut lab, &sweep) {
            println!("  {degrees:>4}°   {range:>9.2}");
            if range > best.1 {
                best = (degrees as f64, range);
            }
        }
    }
    println!();
    println!("Best angle: {:.0}° ({:.2} m)", best.0, best.1);
    println!("Trails recorded: {}", lab.trails().len());
}
