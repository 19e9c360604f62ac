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
//! Configuration for the projectile lab and the particle sandbox
//!
//! Two kinds of configuration exist:
//!
//! - **Construction config** ([`LabConfig`], [`SandboxConfig`]): fixed for
//!   the lifetime of a driver, validated once when the driver is built.
//! - **Per-tick settings** ([`SandboxSettings`]): the values a host UI lets
//!   the user change while the simulation runs. The host snapshots them and
//!   passes them by value into every tick; physics code never reads shared
//!   widget state.
//!
//! Launch parameters live in [`crate::projectile::LaunchConfig`] and are
//! snapshotted at launch time instead.

use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, Result};
use crate::math::Vec2;
use crate::projectile::LaunchConfig;
use std::f64::consts::PI;

/// Logical timestep of one frame (60 FPS)
pub const FIXED_TIMESTEP: f64 = 1.0 / 60.0;

/// Default sandbox gravity in pixels per second squared (screen y points down)
pub const DEFAULT_GRAVITY_PX: f64 = 300.0;

/// Multiplier from pointer displacement per event to thrown particle velocity
pub const DEFAULT_GRAB_VELOCITY_GAIN: f64 = 5.0;

/// Rectangular simulation area with its top-left corner at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    /// Center point, rounded down to whole pixels
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }

    /// Half-open containment test: left and top edges inside, right and
    /// bottom edges outside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }

    /// Validate the extents
    pub fn validate(&self) -> Result<()> {
        ensure_positive("viewport width", self.width)?;
        ensure_positive("viewport height", self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(1000.0, 800.0)
    }
}

/// Construction-time configuration of the projectile lab
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabConfig {
    /// Launch settings used by [`crate::projectile::ProjectileLab::launch_default`]
    pub launch: LaunchConfig,
    /// Point the projectile leaves from, in meters
    pub launch_point: Vec2,
    /// Multiplier applied to the caller's dt on every tick
    pub time_scale: f64,
    /// Radius of the hit zone around a placed target, in meters
    pub target_radius: f64,
    /// Maximum number of (time, altitude) samples retained
    pub history_capacity: usize,
}

impl Default for LabConfig {
    fn default() -> Self {
        LabConfig {
            launch: LaunchConfig::default(),
            launch_point: Vec2::new(0.0, 0.1),
            time_scale: 1.0,
            target_radius: 2.0,
            history_capacity: 200,
        }
    }
}

impl LabConfig {
    /// Set the default launch settings
    pub fn with_launch(mut self, launch: LaunchConfig) -> Self {
        self.launch = launch;
        self
    }

    /// Set the launch point
    pub fn with_launch_point(mut self, point: Vec2) -> Self {
        self.launch_point = point;
        self
    }

    /// Set the time scale multiplier
    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Set the target hit radius
    pub fn with_target_radius(mut self, radius: f64) -> Self {
        self.target_radius = radius;
        self
    }

    /// Validate every field
    pub fn validate(&self) -> Result<()> {
        self.launch.validate()?;
        ensure_finite("launch point x", self.launch_point.x)?;
        ensure_finite("launch point y", self.launch_point.y)?;
        ensure_positive("time scale", self.time_scale)?;
        ensure_positive("target radius", self.target_radius)?;
        ensure_positive("history capacity", self.history_capacity as f64)
    }
}

/// Construction-time configuration of the particle sandbox
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SandboxConfig {
    /// Simulation area; exited particles are removed once outside it
    pub viewport: Viewport,
    /// Center of the container
    pub container_center: Vec2,
    /// Radius of the container wall
    pub container_radius: f64,
    /// Fixed point new particles appear at
    pub spawn_position: Vec2,
    /// Radius of spawned particles
    pub particle_radius: f64,
    /// Multiplier from pointer displacement to thrown velocity
    pub grab_velocity_gain: f64,
    /// Seconds between particle-count samples
    pub sample_interval: f64,
    /// Maximum number of (time, count) samples retained
    pub history_capacity: usize,
    /// Seed for spawn velocities and colors
    pub seed: u64,
}

impl SandboxConfig {
    /// Layout derived from a viewport: container centered with a 40 px
    /// margin, spawn point halfway between center and top of the wall
    pub fn for_viewport(viewport: Viewport) -> Self {
        let center = viewport.center();
        let container_radius = (viewport.height / 2.0).floor() - 40.0;
        let spawn_position = Vec2::new(center.x, center.y - (container_radius / 2.0).floor());
        SandboxConfig {
            viewport,
            container_center: center,
            container_radius,
            spawn_position,
            particle_radius: 8.0,
            grab_velocity_gain: DEFAULT_GRAB_VELOCITY_GAIN,
            sample_interval: 0.5,
            history_capacity: 200,
            seed: 0x5eed,
        }
    }

    /// Set the particle radius
    pub fn with_particle_radius(mut self, radius: f64) -> Self {
        self.particle_radius = radius;
        self
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the spawn point
    pub fn with_spawn_position(mut self, position: Vec2) -> Self {
        self.spawn_position = position;
        self
    }

    /// Validate every field
    pub fn validate(&self) -> Result<()> {
        self.viewport.validate()?;
        ensure_finite("container center x", self.container_center.x)?;
        ensure_finite("container center y", self.container_center.y)?;
        ensure_positive("container radius", self.container_radius)?;
        ensure_finite("spawn x", self.spawn_position.x)?;
        ensure_finite("spawn y", self.spawn_position.y)?;
        ensure_positive("particle radius", self.particle_radius)?;
        ensure_finite("grab velocity gain", self.grab_velocity_gain)?;
        ensure_positive("sample interval", self.sample_interval)?;
        ensure_positive("history capacity", self.history_capacity as f64)
    }
}

impl Default for SandboxConfig {
    fn default() -> Self {
        SandboxConfig::for_viewport(Viewport::default())
    }
}

/// Sandbox knobs snapshotted by the host once per tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SandboxSettings {
    /// Downward gravity in px/s²
    pub gravity: f64,
    /// Container angular velocity in rad/s (negative spins clockwise on screen)
    pub spin_speed: f64,
    /// Angular width of the escape gap in radians
    pub gap_angle: f64,
    /// Particles spawned per second
    pub spawn_rate: f64,
    /// Half-width of the uniform spawn velocity range per axis
    pub spawn_velocity_variance: f64,
    /// Whether the spawner runs
    pub spawner_active: bool,
    /// Wind velocity the drag acts relative to
    pub wind: Vec2,
    /// Air density; zero disables particle drag
    pub air_density: f64,
}

impl Default for SandboxSettings {
    fn default() -> Self {
        SandboxSettings {
            gravity: DEFAULT_GRAVITY_PX,
            spin_speed: 0.5,
            gap_angle: 60.0 * PI / 180.0,
            spawn_rate: 1.0,
            spawn_velocity_variance: 20.0,
            spawner_active: true,
            wind: Vec2::zero(),
            air_density: 0.0,
        }
    }
}

impl SandboxSettings {
    /// Set gravity in px/s²
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the container spin in rad/s
    pub fn with_spin_speed(mut self, spin_speed: f64) -> Self {
        self.spin_speed = spin_speed;
        self
    }

    /// Set the gap width in degrees
    pub fn with_gap_degrees(mut self, degrees: f64) -> Self {
        self.gap_angle = degrees.to_radians();
        self
    }

    /// Set the spawn rate in particles per second
    pub fn with_spawn_rate(mut self, rate: f64) -> Self {
        self.spawn_rate = rate;
        self
    }

    /// Set the spawn velocity variance
    pub fn with_spawn_velocity_variance(mut self, variance: f64) -> Self {
        self.spawn_velocity_variance = variance;
        self
    }

    /// Enable or disable the spawner
    pub fn with_spawner(mut self, active: bool) -> Self {
        self.spawner_active = active;
        self
    }

    /// Set wind and air density for particle drag
    pub fn with_air(mut self, wind: Vec2, air_density: f64) -> Self {
        self.wind = wind;
        self.air_density = air_density;
        self
    }

    /// Gravity as a vector (screen coordinates, +y down)
    pub fn gravity_vector(&self) -> Vec2 {
        Vec2::new(0.0, self.gravity)
    }

    /// Validate every field
    pub fn validate(&self) -> Result<()> {
        ensure_finite("gravity", self.gravity)?;
        ensure_finite("spin speed", self.spin_speed)?;
        ensure_non_negative("gap angle", self.gap_angle)?;
        ensure_non_negative("spawn rate", self.spawn_rate)?;
        ensure_non_negative("spawn velocity variance", self.spawn_velocity_variance)?;
        ensure_finite("wind x", self.wind.x)?;
        ensure_finite("wind y", self.wind.y)?;
        ensure_non_negative("air density", self.air_density)
    }
}
