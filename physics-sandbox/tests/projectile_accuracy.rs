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
//! Projectile accuracy tests
//!
//! With drag disabled the RK4 derivative reduces to constant acceleration,
//! so the integrated flight must match the closed-form parabola and land
//! where `v² sin 2θ / g` predicts, within one tick of motion.

use physics_sandbox::config::FIXED_TIMESTEP;
use physics_sandbox::math::Vec2;
use physics_sandbox::projectile::{
    advance_projectile, ideal_flight_time, ideal_max_height, ideal_range, projectile_acceleration,
    IdealProjectile, LaunchConfig, Projectile, ProjectileParameters, ProjectileState,
};

fn launch_velocity(speed: f64, degrees: f64) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()) * speed
}

fn fly(mut projectile: Projectile, dt: f64) -> Projectile {
    let mut ticks = 0;
    while projectile.is_active() {
        projectile.advance(dt);
        ticks += 1;
        assert!(ticks < 1_000_000, "projectile never landed");
    }
    projectile
}

/// 100 m/s at 45° under 9.8 m/s² lands near 1020.4 m after about 14.43 s
#[test]
fn test_ideal_range_scenario() {
    let velocity = launch_velocity(100.0, 45.0);
    let params = ProjectileParameters::new(10.0, 0.0314, 9.8);
    let landed = fly(Projectile::launch(Vec2::zero(), velocity, params), FIXED_TIMESTEP);

    let expected_range = ideal_range(100.0, 45f64.to_radians(), 9.8);
    let expected_time = ideal_flight_time(100.0, 45f64.to_radians(), 9.8);
    assert!((expected_range - 1020.4).abs() < 0.05);
    assert!((expected_time - 14.43).abs() < 0.01);

    let tick_motion = velocity.x * FIXED_TIMESTEP;
    assert!(
        (landed.position().x - expected_range).abs() <= tick_motion,
        "range {} vs {}",
        landed.position().x,
        expected_range
    );
    assert!(landed.time() >= expected_time - 1e-9);
    assert!(landed.time() <= expected_time + FIXED_TIMESTEP + 1e-9);
    assert_eq!(landed.position().y, 0.0);

    let apex = ideal_max_height(100.0, 45f64.to_radians(), 9.8);
    assert!((landed.max_height() - apex).abs() < 0.05);
}

/// RK4 with drag off tracks the closed form at every tick
#[test]
fn test_rk4_matches_ideal_without_drag() {
    let velocity = launch_velocity(60.0, 30.0);
    let params = ProjectileParameters::new(2.0, 0.01, 9.81);
    let mut rk4 = Projectile::launch(Vec2::zero(), velocity, params);
    let mut ideal = IdealProjectile::launch(Vec2::zero(), velocity, 9.81);

    while rk4.is_active() && ideal.is_active() {
        rk4.advance(FIXED_TIMESTEP);
        ideal.advance(FIXED_TIMESTEP);

        let a = rk4.position();
        let b = ideal.position();
        let scale = b.magnitude().max(1.0);
        assert!(a.distance(b) / scale < 1e-3, "diverged at t={}: {:?} vs {:?}", rk4.time(), a, b);
        assert!(rk4.velocity().distance(ideal.velocity()) < 1e-6);
    }
    assert_eq!(rk4.is_active(), ideal.is_active());
}

/// Zero density or zero drag coefficient both reduce to the ideal model
#[test]
fn test_zero_density_or_coefficient_disables_drag() {
    let velocity = launch_velocity(50.0, 60.0);
    let base = ProjectileParameters::new(1.0, 0.05, 9.81);
    let no_air = base.with_drag(0.0, 0.47, 0.0);
    let no_cd = base.with_drag(1.225, 0.0, 0.0);
    let off = base.without_drag();

    let a = fly(Projectile::launch(Vec2::zero(), velocity, no_air), 0.01);
    let b = fly(Projectile::launch(Vec2::zero(), velocity, no_cd), 0.01);
    let c = fly(Projectile::launch(Vec2::zero(), velocity, off), 0.01);
    assert!((a.position().x - c.position().x).abs() < 1e-9);
    assert!((b.position().x - c.position().x).abs() < 1e-9);
}

/// Drag can only lower the apex and shorten the range
#[test]
fn test_drag_reduces_height_and_range() {
    let launch = LaunchConfig::default();
    let velocity = launch.initial_velocity();
    let with_drag = fly(
        Projectile::launch(Vec2::zero(), velocity, launch.parameters()),
        FIXED_TIMESTEP,
    );
    let without = fly(
        Projectile::launch(
            Vec2::zero(),
            velocity,
            launch.with_drag_enabled(false).parameters(),
        ),
        FIXED_TIMESTEP,
    );

    assert!(with_drag.max_height() <= without.max_height());
    assert!(with_drag.position().x < without.position().x);
}

/// A tailwind carries a dragged projectile further than still air
#[test]
fn test_tailwind_extends_range() {
    let launch = LaunchConfig::default().with_velocity(40.0, 45.0);
    let velocity = launch.initial_velocity();
    let still = fly(
        Projectile::launch(Vec2::zero(), velocity, launch.parameters()),
        FIXED_TIMESTEP,
    );
    let tail = fly(
        Projectile::launch(
            Vec2::zero(),
            velocity,
            launch.with_air(1.225, 0.47, 15.0).parameters(),
        ),
        FIXED_TIMESTEP,
    );
    assert!(tail.position().x > still.position().x);
}

/// Moving exactly with the wind leaves only gravity
#[test]
fn test_zero_relative_speed_is_pure_gravity() {
    let params = ProjectileParameters::new(1.0, 0.05, 9.81).with_drag(1.225, 0.47, 7.0);
    let a = projectile_acceleration(Vec2::new(7.0, 0.0), &params);
    assert_eq!(a, Vec2::new(0.0, -9.81));
    assert!(a.is_valid());
}

/// Landed states never change again
#[test]
fn test_advance_after_landing_is_idempotent() {
    let params = ProjectileParameters::new(1.0, 0.01, 9.81);
    let mut state = ProjectileState::new(Vec2::zero(), launch_velocity(20.0, 70.0));
    while state.is_active() {
        state = advance_projectile(&state, &params, FIXED_TIMESTEP);
    }
    let landed = state;
    for _ in 0..10 {
        state = advance_projectile(&state, &params, FIXED_TIMESTEP);
        assert_eq!(state, landed);
    }
    assert_eq!(landed.position().y, 0.0);
}

/// Max height never decreases during a flight
#[test]
fn test_max_height_is_monotonic() {
    let launch = LaunchConfig::default();
    let mut projectile = Projectile::launch(Vec2::zero(), launch.initial_velocity(), launch.parameters());
    let mut previous = projectile.max_height();
    while projectile.is_active() {
        projectile.advance(FIXED_TIMESTEP);
        assert!(projectile.max_height() >= previous);
        assert!(projectile.max_height() >= projectile.position().y);
        previous = projectile.max_height();
    }
}
