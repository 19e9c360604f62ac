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
//! RK4 projectile under gravity and quadratic drag
//!
//! The state vector is `[x, y, vx, vy]` and its derivative is
//!
//! ```text
//! dx/dt  = vx
//! dy/dt  = vy
//! v_rel  = (vx - wind, vy)
//! dvx/dt = -k |v_rel| v_rel.x / m
//! dvy/dt = -g - k |v_rel| v_rel.y / m
//! ```
//!
//! with `k = ½ ρ A C_d`. At exactly zero relative speed the drag direction
//! is undefined and the derivative falls back to pure gravity.
//!
//! A projectile is terminal once it crosses below the ground: y is clamped
//! to zero, `active` goes false, and every later advance is a no-op.

use super::params::ProjectileParameters;
use crate::forces::quadratic_drag;
use crate::integration::{Integrator, PhaseState, Rk4};
use crate::math::Vec2;

/// Kinematic state of one projectile flight
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileState {
    position: Vec2,
    velocity: Vec2,
    time: f64,
    max_height: f64,
    active: bool,
}

impl ProjectileState {
    /// Fresh in-flight state at `position` moving with `velocity`
    ///
    /// The max-height record starts at zero (ground level).
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        ProjectileState {
            position,
            velocity,
            time: 0.0,
            max_height: 0.0,
            active: true,
        }
    }

    /// Position in meters
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Velocity in m/s
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current speed in m/s
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Simulated seconds since launch
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Highest y reached so far
    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    /// Whether the projectile is still in flight
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether position and velocity are finite
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.velocity.is_valid()
    }
}

/// Acceleration of the projectile at `velocity`
///
/// Depends only on velocity: drag acts on the velocity relative to the wind
/// and gravity is uniform.
pub fn projectile_acceleration(velocity: Vec2, params: &ProjectileParameters) -> Vec2 {
    let relative = Vec2::new(velocity.x - params.effective_wind(), velocity.y);
    if relative.magnitude() == 0.0 {
        return Vec2::new(0.0, -params.gravity);
    }

    let drag = quadratic_drag(relative, params.drag_constant());
    let weight = Vec2::new(0.0, -params.mass * params.gravity);
    (drag + weight) / params.mass
}

/// Advance a projectile state by one RK4 step of `dt`
///
/// Inactive states are returned unchanged. After the step, elapsed time
/// grows by `dt`, the max-height record is raised if exceeded, and a
/// negative y is clamped to the ground and deactivates the state.
pub fn advance_projectile(
    state: &ProjectileState,
    params: &ProjectileParameters,
    dt: f64,
) -> ProjectileState {
    if !state.active {
        return *state;
    }

    let phase = Rk4.step(
        PhaseState::new(state.position, state.velocity),
        dt,
        |_position, velocity| projectile_acceleration(velocity, params),
    );

    let mut next = ProjectileState {
        position: phase.position,
        velocity: phase.velocity,
        time: state.time + dt,
        max_height: state.max_height,
        active: true,
    };

    if next.position.y > next.max_height {
        next.max_height = next.position.y;
    }

    if next.position.y < 0.0 {
        next.position.y = 0.0;
        next.active = false;
    }

    next
}

/// A launched projectile: its parameter snapshot plus evolving state
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    params: ProjectileParameters,
    state: ProjectileState,
}

impl Projectile {
    /// Launch from `position` with `velocity`
    pub fn launch(position: Vec2, velocity: Vec2, params: ProjectileParameters) -> Self {
        tracing::debug!(
            x = position.x,
            y = position.y,
            vx = velocity.x,
            vy = velocity.y,
            mass = params.mass,
            drag = params.drag_constant(),
            wind = params.effective_wind(),
            "projectile launched"
        );
        Projectile {
            params,
            state: ProjectileState::new(position, velocity),
        }
    }

    /// Advance by `dt`; no effect once landed
    pub fn advance(&mut self, dt: f64) {
        let was_active = self.state.active;
        let was_valid = self.state.is_valid();
        self.state = advance_projectile(&self.state, &self.params, dt);

        if was_valid && !self.state.is_valid() {
            tracing::warn!(
                time = self.state.time,
                mass = self.params.mass,
                "projectile state became non-finite"
            );
        }
        if was_active && !self.state.active {
            tracing::debug!(
                time = self.state.time,
                range = self.state.position.x,
                max_height = self.state.max_height,
                "projectile landed"
            );
        }
    }

    /// Parameters captured at launch
    pub fn parameters(&self) -> &ProjectileParameters {
        &self.params
    }

    /// Current state
    pub fn state(&self) -> &ProjectileState {
        &self.state
    }

    /// Position in meters
    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    /// Velocity in m/s
    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    /// Current speed in m/s
    pub fn speed(&self) -> f64 {
        self.state.speed()
    }

    /// Simulated seconds since launch
    pub fn time(&self) -> f64 {
        self.state.time
    }

    /// Highest y reached so far
    pub fn max_height(&self) -> f64 {
        self.state.max_height
    }

    /// Whether the projectile is still in flight
    pub fn is_active(&self) -> bool {
        self.state.active
    }
}
