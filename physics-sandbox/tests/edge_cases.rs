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
//! Edge case tests
//!
//! Boundary conditions, rejected configuration and degenerate inputs.

use physics_sandbox::config::{LabConfig, SandboxConfig, SandboxSettings, Viewport, FIXED_TIMESTEP};
use physics_sandbox::integration::validate_timestep;
use physics_sandbox::math::Vec2;
use physics_sandbox::particles::{Container, ContainerContact, Particle, ParticleSandbox};
use physics_sandbox::projectile::{LaunchConfig, Projectile, ProjectileLab, ProjectileParameters};
use physics_sandbox::SandboxError;

#[test]
fn test_launch_angle_bounds() {
    let mut lab = ProjectileLab::new(LabConfig::default()).unwrap();
    assert!(lab.launch(&LaunchConfig::default().with_velocity(10.0, 0.0)).is_ok());
    assert!(lab.launch(&LaunchConfig::default().with_velocity(10.0, 90.0)).is_ok());
    assert_eq!(
        lab.launch(&LaunchConfig::default().with_velocity(10.0, 91.0)),
        Err(SandboxError::AngleOutOfRange { degrees: 91.0 })
    );
    assert!(matches!(
        lab.launch(&LaunchConfig::default().with_velocity(10.0, -1.0)),
        Err(SandboxError::AngleOutOfRange { .. })
    ));
}

#[test]
fn test_rejected_launch_keeps_previous_flight() {
    let mut lab = ProjectileLab::new(LabConfig::default()).unwrap();
    lab.launch_default().unwrap();
    lab.tick(FIXED_TIMESTEP);
    let before = lab.readout().unwrap();

    let bad = LaunchConfig::default().with_body(0.0, 0.1);
    assert!(matches!(lab.launch(&bad), Err(SandboxError::NonPositive { name: "mass", .. })));
    assert_eq!(lab.readout().unwrap(), before);
    assert!(lab.is_running());
}

#[test]
fn test_rejected_environment() {
    let negative_air = LaunchConfig::default().with_air(-1.0, 0.47, 0.0);
    assert!(matches!(negative_air.validate(), Err(SandboxError::Negative { .. })));

    let nan_wind = LaunchConfig::default().with_air(1.225, 0.47, f64::NAN);
    assert!(matches!(nan_wind.validate(), Err(SandboxError::NonFinite { .. })));

    let no_gravity = LaunchConfig::default().with_gravity(0.0);
    assert!(matches!(no_gravity.validate(), Err(SandboxError::NonPositive { .. })));
}

#[test]
fn test_rejected_sandbox_config() {
    let tiny = SandboxConfig::for_viewport(Viewport::new(0.0, 800.0));
    assert!(ParticleSandbox::new(tiny).is_err());

    let mut config = SandboxConfig::default();
    config.sample_interval = 0.0;
    assert!(matches!(
        ParticleSandbox::new(config),
        Err(SandboxError::NonPositive { name: "sample interval", .. })
    ));

    assert!(SandboxSettings::default().with_spawn_rate(-1.0).validate().is_err());
    assert!(SandboxSettings::default().with_gravity(f64::INFINITY).validate().is_err());
}

#[test]
fn test_timestep_validation() {
    assert!(validate_timestep(FIXED_TIMESTEP).is_ok());
    assert_eq!(
        validate_timestep(1e-10),
        Err(SandboxError::TimestepOutOfRange { dt: 1e-10 })
    );
    assert!(matches!(validate_timestep(-0.01), Err(SandboxError::NonPositive { .. })));
    assert!(matches!(validate_timestep(f64::INFINITY), Err(SandboxError::NonFinite { .. })));
}

#[test]
fn test_error_messages_name_the_parameter() {
    let err = LaunchConfig::default().with_body(10.0, -0.5).validate().unwrap_err();
    assert_eq!(err.to_string(), "radius must be positive, got -0.5");
}

#[test]
fn test_zero_dt_is_a_clock_noop() {
    let params = ProjectileParameters::new(1.0, 0.01, 9.81);
    let mut projectile = Projectile::launch(Vec2::new(0.0, 5.0), Vec2::new(3.0, 4.0), params);
    projectile.advance(0.0);
    assert_eq!(projectile.position(), Vec2::new(0.0, 5.0));
    assert_eq!(projectile.time(), 0.0);
    assert!(projectile.is_active());
}

#[test]
fn test_straight_down_launch_lands_at_origin() {
    let params = ProjectileParameters::new(1.0, 0.01, 9.81);
    let mut projectile = Projectile::launch(Vec2::new(0.0, 0.1), Vec2::zero(), params);
    for _ in 0..60 {
        projectile.advance(FIXED_TIMESTEP);
    }
    assert!(!projectile.is_active());
    assert_eq!(projectile.position(), Vec2::new(0.0, 0.0));
}

#[test]
fn test_non_finite_state_propagates_without_panic() {
    let params = ProjectileParameters::new(1.0, 0.01, 9.81);
    let mut projectile = Projectile::launch(Vec2::zero(), Vec2::new(f64::NAN, 10.0), params);
    projectile.advance(FIXED_TIMESTEP);
    assert!(!projectile.state().is_valid());
}

#[test]
fn test_particle_at_container_center_larger_than_container() {
    let container = Container::new(Vec2::zero(), 5.0, 0.5);
    let mut p = Particle::new(Vec2::zero(), Vec2::new(1.0, 1.0), 8.0);
    assert_eq!(container.resolve(&mut p, 0.3), ContainerContact::Clear);
    assert_eq!(p.position, Vec2::zero());
    assert!(p.is_in);
}

#[test]
fn test_full_turn_gap_closes_container() {
    let mut sandbox = ParticleSandbox::new(SandboxConfig::default()).unwrap();
    let center = sandbox.config().container_center;
    let radius = sandbox.config().container_radius;
    let id = sandbox.insert(Particle::new(
        center + Vec2::new(0.0, radius - 8.5),
        Vec2::new(0.0, 100.0),
        8.0,
    ));
    let settings = SandboxSettings::default()
        .with_spawner(false)
        .with_spin_speed(0.0)
        .with_gap_degrees(360.0);
    sandbox.tick(&settings, FIXED_TIMESTEP);
    let p = sandbox.particle(id).unwrap();
    assert!(p.is_in);
    assert!(p.velocity.y < 0.0);
}

#[test]
fn test_empty_sandbox_ticks() {
    let mut sandbox = ParticleSandbox::new(SandboxConfig::default()).unwrap();
    let settings = SandboxSettings::default().with_spawner(false);
    for _ in 0..100 {
        sandbox.tick(&settings, FIXED_TIMESTEP);
    }
    assert_eq!(sandbox.count(), 0);
    assert_eq!(sandbox.kinetic_energy(), 0.0);
    assert!(sandbox.count_history().iter().all(|(_, count)| count == 0.0));
}
