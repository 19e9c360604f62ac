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
//! Particle sandbox driver
//!
//! Owns the particle set, the spinning container and the spawner, and runs
//! one ordered pass per tick:
//!
//! 1. the spawner timer advances and may emit a particle,
//! 2. the container rotates,
//! 3. each non-grabbed particle in order is integrated, resolved against the
//!    wall, then resolved against every later non-grabbed particle,
//! 4. particles that left through the gap and the viewport are compacted
//!    out, except one held by the pointer.
//!
//! Pairs are visited once in a fixed nested order with no relaxation
//! iterations, so deep stacks settle slightly inexactly.

use super::collision::resolve_particle_collision;
use super::container::{Container, ContainerContact};
use super::particle::{Particle, ParticleId};
use super::spawner::Spawner;
use crate::config::{SandboxConfig, SandboxSettings};
use crate::error::Result;
use crate::integration::kinetic_energy;
use crate::math::Vec2;
use crate::telemetry::SampleSeries;

/// Driver for the spinning-container sandbox
#[derive(Debug, Clone)]
pub struct ParticleSandbox {
    config: SandboxConfig,
    container: Container,
    spawner: Spawner,
    particles: Vec<(ParticleId, Particle)>,
    next_id: u64,
    grabbed: Option<ParticleId>,
    running: bool,
    elapsed: f64,
    sample_timer: f64,
    count_history: SampleSeries,
}

impl ParticleSandbox {
    /// Create an empty, running sandbox
    pub fn new(config: SandboxConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "rejected sandbox configuration");
            return Err(err);
        }
        let container = Container::new(
            config.container_center,
            config.container_radius,
            SandboxSettings::default().gap_angle,
        );
        let spawner = Spawner::new(config.spawn_position, config.particle_radius, config.seed);
        let count_history = SampleSeries::new(config.history_capacity);
        Ok(ParticleSandbox {
            config,
            container,
            spawner,
            particles: Vec::new(),
            next_id: 0,
            grabbed: None,
            running: true,
            elapsed: 0.0,
            sample_timer: 0.0,
            count_history,
        })
    }

    /// Add a particle at the end of the update order
    pub fn insert(&mut self, particle: Particle) -> ParticleId {
        let id = ParticleId::new(self.next_id);
        self.next_id += 1;
        self.particles.push((id, particle));
        id
    }

    /// Advance one tick with the settings snapshot taken by the host
    pub fn tick(&mut self, settings: &SandboxSettings, dt: f64) {
        if !self.running {
            return;
        }

        self.container.set_gap_angle(settings.gap_angle);

        if let Some(particle) = self.spawner.update(dt, settings) {
            let id = self.insert(particle);
            tracing::trace!(%id, count = self.particles.len(), "spawned particle");
        }

        self.container.rotate(settings.spin_speed, dt);

        let gravity = settings.gravity_vector();
        for i in 0..self.particles.len() {
            let (head, tail) = self.particles.split_at_mut(i + 1);
            let (id, particle) = &mut head[i];
            if particle.is_grabbed {
                continue;
            }

            particle.advance(dt, gravity, settings.wind, settings.air_density);

            if self.container.resolve(particle, settings.spin_speed) == ContainerContact::Escaped {
                tracing::trace!(%id, "particle left through the gap");
            }

            for (_, other) in tail.iter_mut().filter(|(_, other)| !other.is_grabbed) {
                resolve_particle_collision(particle, other);
            }
        }

        let exited: Vec<usize> = self
            .particles
            .iter()
            .enumerate()
            .filter(|(_, (_, p))| {
                !p.is_grabbed && !p.is_in && !self.config.viewport.contains(p.position)
            })
            .map(|(index, _)| index)
            .collect();
        if !exited.is_empty() {
            for &index in exited.iter().rev() {
                self.particles.remove(index);
            }
            tracing::trace!(
                removed = exited.len(),
                remaining = self.particles.len(),
                "compacted exited particles"
            );
        }

        self.elapsed += dt;
        self.sample_timer += dt;
        if self.sample_timer >= self.config.sample_interval {
            self.sample_timer = 0.0;
            self.count_history.push(self.elapsed, self.particles.len() as f64);
        }
    }

    /// Grab the top-most particle under `point`
    ///
    /// Later particles are drawn on top, so the scan runs newest first. Any
    /// previous grab is released.
    pub fn grab(&mut self, point: Vec2) -> Option<ParticleId> {
        self.release();
        let (id, particle) = self
            .particles
            .iter_mut()
            .rev()
            .find(|(_, p)| p.contains_point(point))?;
        particle.is_grabbed = true;
        particle.velocity = Vec2::zero();
        self.grabbed = Some(*id);
        tracing::debug!(%id, x = point.x, y = point.y, "grabbed particle");
        Some(*id)
    }

    /// Move the grabbed particle to `point`
    ///
    /// Velocity becomes the pointer displacement `delta` scaled by the grab
    /// gain so a release flings the particle. Returns `false` when nothing is
    /// held.
    pub fn drag(&mut self, point: Vec2, delta: Vec2) -> bool {
        let gain = self.config.grab_velocity_gain;
        let Some(particle) = self.grabbed_particle_mut() else {
            return false;
        };
        particle.position = point;
        particle.velocity = delta * gain;
        true
    }

    /// Let go of the grabbed particle
    pub fn release(&mut self) -> Option<ParticleId> {
        if let Some(particle) = self.grabbed_particle_mut() {
            particle.is_grabbed = false;
        }
        let id = self.grabbed.take()?;
        tracing::debug!(%id, "released particle");
        Some(id)
    }

    fn grabbed_particle_mut(&mut self) -> Option<&mut Particle> {
        let id = self.grabbed?;
        self.particles
            .iter_mut()
            .find(|(pid, _)| *pid == id)
            .map(|(_, p)| p)
    }

    /// Flip between running and paused, returning the new running state
    pub fn toggle_pause(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Remove every particle, drop any grab and clear the count history
    pub fn clear(&mut self) {
        let removed = self.particles.len();
        self.particles.clear();
        self.grabbed = None;
        self.count_history.clear();
        self.sample_timer = 0.0;
        tracing::debug!(removed, "cleared sandbox");
    }

    /// Particles in update order
    pub fn particles(&self) -> impl Iterator<Item = (ParticleId, &Particle)> + '_ {
        self.particles.iter().map(|(id, p)| (*id, p))
    }

    /// Look up a particle by handle
    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles
            .iter()
            .find(|(pid, _)| *pid == id)
            .map(|(_, p)| p)
    }

    /// Handles in update order
    pub fn ids(&self) -> Vec<ParticleId> {
        self.particles.iter().map(|(id, _)| *id).collect()
    }

    /// Number of live particles
    pub fn count(&self) -> usize {
        self.particles.len()
    }

    /// The spinning container
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// The spawner
    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    /// Whether ticks advance the simulation
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Simulated seconds since creation
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// `(elapsed, count)` samples
    pub fn count_history(&self) -> &SampleSeries {
        &self.count_history
    }

    /// Handle of the held particle
    pub fn grabbed(&self) -> Option<ParticleId> {
        self.grabbed
    }

    /// Total kinetic energy of all particles
    pub fn kinetic_energy(&self) -> f64 {
        self.particles
            .iter()
            .map(|(_, p)| kinetic_energy(p.velocity, p.mass()))
            .sum()
    }

    /// Configuration the sandbox was built with
    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FIXED_TIMESTEP;
    use crate::error::SandboxError;

    fn quiet() -> SandboxSettings {
        SandboxSettings::default().with_spawner(false)
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = SandboxConfig::default();
        config.container_radius = -1.0;
        assert!(matches!(
            ParticleSandbox::new(config),
            Err(SandboxError::NonPositive { .. })
        ));
    }

    #[test]
    fn test_spawns_one_particle_per_second() {
        let mut sandbox = ParticleSandbox::new(SandboxConfig::default()).unwrap();
        let settings = SandboxSettings::default();
        for _ in 0..61 {
            sandbox.tick(&settings, FIXED_TIMESTEP);
        }
        assert_eq!(sandbox.count(), 1);
        let (_, p) = sandbox.particles().next().unwrap();
        assert!(p.is_in);
    }

    #[test]
    fn test_paused_tick_changes_nothing() {
        let mut sandbox = ParticleSandbox::new(SandboxConfig::default()).unwrap();
        let id = sandbox.insert(Particle::new(Vec2::new(500.0, 400.0), Vec2::new(3.0, 0.0), 8.0));
        assert!(!sandbox.toggle_pause());
        sandbox.tick(&SandboxSettings::default(), FIXED_TIMESTEP);
        assert_eq!(sandbox.particle(id).unwrap().position, Vec2::new(500.0, 400.0));
        assert_eq!(sandbox.elapsed(), 0.0);
        assert_eq!(sandbox.container().angle(), 0.0);
    }

    #[test]
    fn test_exited_particle_outside_viewport_is_removed() {
        let mut sandbox = ParticleSandbox::new(SandboxConfig::default()).unwrap();
        let mut gone = Particle::new(Vec2::new(-50.0, 400.0), Vec2::zero(), 8.0);
        gone.is_in = false;
        let mut lingering = Particle::new(Vec2::new(950.0, 400.0), Vec2::zero(), 8.0);
        lingering.is_in = false;
        sandbox.insert(gone);
        let kept = sandbox.insert(lingering);

        sandbox.tick(&quiet().with_gravity(0.0), FIXED_TIMESTEP);
        assert_eq!(sandbox.ids(), vec![kept]);
    }

    #[test]
    fn test_grab_drag_release() {
        let mut sandbox = ParticleSandbox::new(SandboxConfig::default()).unwrap();
        let id = sandbox.insert(Particle::new(Vec2::new(500.0, 400.0), Vec2::new(10.0, 0.0), 8.0));

        assert_eq!(sandbox.grab(Vec2::new(600.0, 400.0)), None);
        assert_eq!(sandbox.grab(Vec2::new(502.0, 400.0)), Some(id));
        assert_eq!(sandbox.particle(id).unwrap().velocity, Vec2::zero());

        sandbox.tick(&quiet(), FIXED_TIMESTEP);
        assert_eq!(sandbox.particle(id).unwrap().position, Vec2::new(500.0, 400.0));

        assert!(sandbox.drag(Vec2::new(510.0, 405.0), Vec2::new(1.0, 2.0)));
        let p = sandbox.particle(id).unwrap();
        assert_eq!(p.position, Vec2::new(510.0, 405.0));
        assert_eq!(p.velocity, Vec2::new(5.0, 10.0));

        assert_eq!(sandbox.release(), Some(id));
        assert!(!sandbox.particle(id).unwrap().is_grabbed);
        assert!(!sandbox.drag(Vec2::zero(), Vec2::zero()));
        assert_eq!(sandbox.release(), None);
    }

    #[test]
    fn test_grab_prefers_newest() {
        let mut sandbox = ParticleSandbox::new(SandboxConfig::default()).unwrap();
        let older = sandbox.insert(Particle::new(Vec2::new(500.0, 400.0), Vec2::zero(), 8.0));
        let newer = sandbox.insert(Particle::new(Vec2::new(504.0, 400.0), Vec2::zero(), 8.0));
        assert_eq!(sandbox.grab(Vec2::new(502.0, 400.0)), Some(newer));
        assert!(!sandbox.particle(older).unwrap().is_grabbed);
    }

    #[test]
    fn test_held_exited_particle_survives_until_released() {
        let mut sandbox = ParticleSandbox::new(SandboxConfig::default()).unwrap();
        let mut outside = Particle::new(Vec2::new(1200.0, 400.0), Vec2::zero(), 8.0);
        outside.is_in = false;
        let id = sandbox.insert(outside);
        assert_eq!(sandbox.grab(Vec2::new(1200.0, 400.0)), Some(id));

        for _ in 0..5 {
            sandbox.tick(&quiet(), FIXED_TIMESTEP);
        }
        assert_eq!(sandbox.ids(), vec![id]);
        assert_eq!(sandbox.grabbed(), Some(id));

        sandbox.release();
        sandbox.tick(&quiet(), FIXED_TIMESTEP);
        assert_eq!(sandbox.count(), 0);
    }

    #[test]
    fn test_clear_resets_particles_grab_and_history() {
        let mut sandbox = ParticleSandbox::new(SandboxConfig::default()).unwrap();
        sandbox.insert(Particle::new(Vec2::new(500.0, 400.0), Vec2::zero(), 8.0));
        sandbox.grab(Vec2::new(500.0, 400.0));
        for _ in 0..40 {
            sandbox.tick(&quiet(), FIXED_TIMESTEP);
        }
        assert!(!sandbox.count_history().is_empty());

        sandbox.clear();
        assert_eq!(sandbox.count(), 0);
        assert_eq!(sandbox.grabbed(), None);
        assert!(sandbox.count_history().is_empty());
    }

    #[test]
    fn test_count_sampled_every_half_second() {
        let mut sandbox = ParticleSandbox::new(SandboxConfig::default()).unwrap();
        sandbox.insert(Particle::new(Vec2::new(500.0, 400.0), Vec2::zero(), 8.0));
        for _ in 0..31 {
            sandbox.tick(&quiet(), FIXED_TIMESTEP);
        }
        assert_eq!(sandbox.count_history().len(), 1);
        let (t, count) = sandbox.count_history().last().unwrap();
        assert!(t >= 0.5 - 1e-9);
        assert_eq!(count, 1.0);
    }

    #[test]
    fn test_container_rotates_with_spin() {
        let mut sandbox = ParticleSandbox::new(SandboxConfig::default()).unwrap();
        sandbox.tick(&quiet().with_spin_speed(0.6), 0.5);
        assert!((sandbox.container().angle() - 0.3).abs() < 1e-12);
        sandbox.tick(&quiet().with_spin_speed(-0.6).with_gap_degrees(90.0), 1.0);
        assert!((sandbox.container().angle() - (std::f64::consts::TAU - 0.3)).abs() < 1e-12);
        assert!((sandbox.container().gap_angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
