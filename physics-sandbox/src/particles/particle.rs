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
//! Particle state and dynamics

use crate::forces::{gravity_force, quadratic_drag};
use crate::integration::{Integrator, PhaseState, SemiImplicitEuler};
use crate::math::Vec2;
use std::f64::consts::PI;
use std::fmt;

/// Stable handle to a particle owned by a [`super::ParticleSandbox`]
///
/// Handles are never reused within one sandbox, so a stale handle simply
/// stops resolving once its particle is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(u64);

impl ParticleId {
    /// Create a handle from a raw value
    pub fn new(id: u64) -> Self {
        ParticleId(id)
    }

    /// Get the raw value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Particle({})", self.0)
    }
}

/// A disc in the sandbox
///
/// Mass is fixed at construction as `radius²` (unit areal density); the
/// radius never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Center position in px
    pub position: Vec2,
    /// Velocity in px/s
    pub velocity: Vec2,
    radius: f64,
    mass: f64,
    /// Display color, no physical meaning
    pub color: [u8; 3],
    /// True while the particle is inside the container
    pub is_in: bool,
    /// True while held by the pointer; integration is suspended
    pub is_grabbed: bool,
}

impl Particle {
    /// Default display color
    pub const DEFAULT_COLOR: [u8; 3] = [120, 120, 120];

    /// Create a particle inside the container
    pub fn new(position: Vec2, velocity: Vec2, radius: f64) -> Self {
        Particle {
            position,
            velocity,
            radius,
            mass: radius * radius,
            color: Self::DEFAULT_COLOR,
            is_in: true,
            is_grabbed: false,
        }
    }

    /// Set the display color
    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    /// Radius in px
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Mass, `radius²`
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Area seen by the drag law, `π (r/10)²`
    ///
    /// The factor of ten converts screen pixels to the drag model's scale;
    /// it is deliberately not the disc's pixel area.
    pub fn drag_area(&self) -> f64 {
        let scaled = self.radius / 10.0;
        PI * scaled * scaled
    }

    /// Whether `point` lies strictly inside the disc
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.position.distance(point) < self.radius
    }

    /// Acceleration from gravity and drag relative to `wind`
    ///
    /// Drag vanishes when the air density is zero or the particle moves
    /// exactly with the wind.
    pub fn acceleration(&self, velocity: Vec2, gravity: Vec2, wind: Vec2, air_density: f64) -> Vec2 {
        let mut force = gravity_force(gravity, self.mass);
        if air_density > 0.0 {
            force += quadratic_drag(velocity - wind, 0.5 * air_density * self.drag_area());
        }
        force / self.mass
    }

    /// Advance one semi-implicit Euler step
    ///
    /// Velocity is updated first and position moves with the new velocity.
    /// Grabbed particles are left untouched; the pointer owns them.
    pub fn advance(&mut self, dt: f64, gravity: Vec2, wind: Vec2, air_density: f64) {
        if self.is_grabbed {
            return;
        }
        let next = SemiImplicitEuler.step(
            PhaseState::new(self.position, self.velocity),
            dt,
            |_position, velocity| self.acceleration(velocity, gravity, wind, air_density),
        );
        self.position = next.position;
        self.velocity = next.velocity;
    }
}
