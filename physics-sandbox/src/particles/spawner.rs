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
//! Timed particle spawner
//!
//! Emits particles at a fixed point with a velocity drawn uniformly from
//! `[-variance, variance]` on each axis. A seeded RNG keeps runs
//! reproducible for a given seed.

use super::particle::Particle;
use crate::config::SandboxSettings;
use crate::math::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed-point spawner driven by the sandbox tick
#[derive(Debug, Clone)]
pub struct Spawner {
    position: Vec2,
    particle_radius: f64,
    timer: f64,
    rng: StdRng,
}

impl Spawner {
    /// Create a spawner at `position` emitting particles of `particle_radius`
    pub fn new(position: Vec2, particle_radius: f64, seed: u64) -> Self {
        Spawner {
            position,
            particle_radius,
            timer: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Spawn point
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Seconds accumulated toward the next spawn
    pub fn timer(&self) -> f64 {
        self.timer
    }

    /// Advance the timer and emit a particle when one is due
    ///
    /// The timer only runs while the spawner is active. Once it reaches
    /// `1 / spawn_rate` it resets to zero (the remainder is dropped) and one
    /// particle is emitted. A non-positive rate never emits.
    pub fn update(&mut self, dt: f64, settings: &SandboxSettings) -> Option<Particle> {
        if !settings.spawner_active || settings.spawn_rate <= 0.0 {
            return None;
        }
        self.timer += dt;
        if self.timer >= 1.0 / settings.spawn_rate {
            self.timer = 0.0;
            Some(self.spawn(settings.spawn_velocity_variance))
        } else {
            None
        }
    }

    /// Emit one particle immediately
    pub fn spawn(&mut self, velocity_variance: f64) -> Particle {
        let spread = velocity_variance.abs();
        let velocity = Vec2::new(
            self.rng.gen_range(-spread..=spread),
            self.rng.gen_range(-spread..=spread),
        );
        let color = [
            self.rng.gen_range(50..=200),
            self.rng.gen_range(50..=200),
            self.rng.gen_range(50..=200),
        ];
        Particle::new(self.position, velocity, self.particle_radius).with_color(color)
    }
}
