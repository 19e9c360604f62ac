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
//! Drag-free reference trajectory
//!
//! Position is evaluated in closed form from the accumulated time rather
//! than integrated, so it carries no integration error:
//!
//! ```text
//! x = vx0 t
//! y = vy0 t - ½ g t²
//! ```
//!
//! The parabola is anchored at the ground origin. The start point passed to
//! [`IdealProjectile::launch`] is only reported until the first tick, so a
//! launch from above the ground runs that height below the drag projectile.
//!
//! It shares the ground rule of the drag projectile: the first tick with
//! y < 0 clamps y to zero and ends the flight.

use crate::math::Vec2;

/// Closed-form projectile without air resistance
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdealProjectile {
    initial_velocity: Vec2,
    gravity: f64,
    position: Vec2,
    time: f64,
    active: bool,
}

impl IdealProjectile {
    /// Launch with `initial_velocity` under `gravity` (m/s², acting in -y)
    ///
    /// `start` is the reported position before the first advance.
    pub fn launch(start: Vec2, initial_velocity: Vec2, gravity: f64) -> Self {
        IdealProjectile {
            initial_velocity,
            gravity,
            position: start,
            time: 0.0,
            active: true,
        }
    }

    /// Advance the clock by `dt` and re-evaluate the parabola
    pub fn advance(&mut self, dt: f64) {
        if !self.active {
            return;
        }

        self.time += dt;
        let t = self.time;
        self.position = Vec2::new(
            self.initial_velocity.x * t,
            self.initial_velocity.y * t - 0.5 * self.gravity * t * t,
        );

        if self.position.y < 0.0 {
            self.position.y = 0.0;
            self.active = false;
        }
    }

    /// Position in meters
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Velocity at the current time, `(vx0, vy0 - g t)`
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(
            self.initial_velocity.x,
            self.initial_velocity.y - self.gravity * self.time,
        )
    }

    /// Launch velocity
    pub fn initial_velocity(&self) -> Vec2 {
        self.initial_velocity
    }

    /// Simulated seconds since launch
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Whether the projectile is still in flight
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Ground-to-ground range `v² sin 2θ / g`
pub fn ideal_range(speed: f64, angle: f64, gravity: f64) -> f64 {
    speed * speed * (2.0 * angle).sin() / gravity
}

/// Ground-to-ground flight time `2 v sin θ / g`
pub fn ideal_flight_time(speed: f64, angle: f64, gravity: f64) -> f64 {
    2.0 * speed * angle.sin() / gravity
}

/// Apex height above the launch point `(v sin θ)² / 2g`
pub fn ideal_max_height(speed: f64, angle: f64, gravity: f64) -> f64 {
    let vy = speed * angle.sin();
    vy * vy / (2.0 * gravity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_closed_form_position() {
        let mut ideal = IdealProjectile::launch(Vec2::zero(), Vec2::new(2.0, 10.0), 10.0);
        ideal.advance(0.5);
        ideal.advance(0.5);
        assert_eq!(ideal.time(), 1.0);
        assert_eq!(ideal.position(), Vec2::new(2.0, 5.0));
        assert_eq!(ideal.velocity(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_start_point_only_until_first_tick() {
        let mut ideal = IdealProjectile::launch(Vec2::new(1.0, 0.5), Vec2::new(1.0, 1.0), 10.0);
        assert_eq!(ideal.position(), Vec2::new(1.0, 0.5));
        ideal.advance(0.1);
        assert!((ideal.position().x - 0.1).abs() < 1e-12);
        assert!((ideal.position().y - (0.1 - 0.05)).abs() < 1e-12);
    }

    #[test]
    fn test_landing_is_terminal() {
        let mut ideal = IdealProjectile::launch(Vec2::zero(), Vec2::new(1.0, 1.0), 10.0);
        for _ in 0..100 {
            ideal.advance(0.01);
        }
        assert!(!ideal.is_active());
        assert_eq!(ideal.position().y, 0.0);

        let landed = ideal;
        ideal.advance(0.01);
        assert_eq!(ideal, landed);
    }

    #[test]
    fn test_analytic_helpers() {
        let range = ideal_range(100.0, FRAC_PI_4, 9.8);
        assert!((range - 1020.408).abs() < 1e-3);

        let t = ideal_flight_time(100.0, FRAC_PI_4, 9.8);
        assert!((t - 14.431).abs() < 1e-3);

        let h = ideal_max_height(100.0, FRAC_PI_4, 9.8);
        assert!((h - 255.102).abs() < 1e-3);
    }
}
