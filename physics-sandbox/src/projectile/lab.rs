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
//! Projectile lab driver
//!
//! Owns at most one drag projectile and one ideal companion at a time,
//! records trails and an altitude history, and checks a user-placed target.
//! The host calls [`ProjectileLab::tick`] once per frame with the fixed
//! frame dt; the lab applies its time scale on top.

use super::drag::Projectile;
use super::ideal::IdealProjectile;
use super::params::LaunchConfig;
use crate::config::LabConfig;
use crate::error::{ensure_positive, Result};
use crate::math::Vec2;
use crate::telemetry::SampleSeries;

/// Numbers shown for the most recent launch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchReadout {
    /// Seconds since launch
    pub time: f64,
    /// Highest altitude reached
    pub max_height: f64,
    /// Horizontal distance from the origin
    pub range: f64,
    /// Current speed
    pub speed: f64,
    /// Whether the target was hit; `None` when no target is placed
    pub hit_target: Option<bool>,
}

/// Driver for the projectile lab
#[derive(Debug, Clone)]
pub struct ProjectileLab {
    config: LabConfig,
    running: bool,
    projectile: Option<Projectile>,
    ideal: Option<IdealProjectile>,
    trails: Vec<Vec<Vec2>>,
    ideal_trails: Vec<Vec<Vec2>>,
    altitude: SampleSeries,
    target: Option<Vec2>,
    hit_target: bool,
}

impl ProjectileLab {
    /// Create an idle lab
    pub fn new(config: LabConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "rejected lab configuration");
            return Err(err);
        }
        let altitude = SampleSeries::new(config.history_capacity);
        Ok(ProjectileLab {
            config,
            running: false,
            projectile: None,
            ideal: None,
            trails: Vec::new(),
            ideal_trails: Vec::new(),
            altitude,
            target: None,
            hit_target: false,
        })
    }

    /// Launch with the configured default launch settings
    pub fn launch_default(&mut self) -> Result<()> {
        let launch = self.config.launch;
        self.launch(&launch)
    }

    /// Launch a new projectile, replacing any previous one
    ///
    /// Every parameter is copied out of `launch`; later changes to the
    /// caller's settings do not reach the flight in progress.
    pub fn launch(&mut self, launch: &LaunchConfig) -> Result<()> {
        if let Err(err) = launch.validate() {
            tracing::warn!(%err, "rejected launch");
            return Err(err);
        }

        let origin = self.config.launch_point;
        let velocity = launch.initial_velocity();

        self.altitude.clear();
        self.hit_target = false;

        self.projectile = Some(Projectile::launch(origin, velocity, launch.parameters()));
        self.trails.push(Vec::new());

        self.ideal = if launch.show_ideal {
            self.ideal_trails.push(Vec::new());
            Some(IdealProjectile::launch(origin, velocity, launch.gravity))
        } else {
            None
        };

        self.running = true;
        Ok(())
    }

    /// Advance one frame of `dt` seconds, scaled by the time scale
    pub fn tick(&mut self, dt: f64) {
        if !self.running {
            return;
        }
        let dt = dt * self.config.time_scale;

        let mut in_flight = false;
        if let Some(projectile) = self.projectile.as_mut().filter(|p| p.is_active()) {
            in_flight = true;
            projectile.advance(dt);

            let position = projectile.position();
            if let Some(trail) = self.trails.last_mut() {
                trail.push(position);
            }
            self.altitude.push(projectile.time(), position.y);

            if let Some(target) = self.target {
                if !self.hit_target && position.distance(target) <= self.config.target_radius {
                    self.hit_target = true;
                    tracing::debug!(time = projectile.time(), "target hit");
                }
            }
        }

        if let Some(ideal) = self.ideal.as_mut().filter(|p| p.is_active()) {
            ideal.advance(dt);
            if let Some(trail) = self.ideal_trails.last_mut() {
                trail.push(ideal.position());
            }
        }

        // The drag projectile alone decides when a run is over
        if !in_flight {
            self.running = false;
        }
    }

    /// Stop and forget the current launch and target; trails are kept
    pub fn reset(&mut self) {
        self.running = false;
        self.projectile = None;
        self.ideal = None;
        self.target = None;
        self.hit_target = false;
        self.altitude.clear();
    }

    /// Drop every recorded trail
    pub fn clear_trails(&mut self) {
        self.trails.clear();
        self.ideal_trails.clear();
    }

    /// Place or remove the target; placing always clears the hit flag
    pub fn set_target(&mut self, target: Option<Vec2>) {
        self.target = target;
        self.hit_target = false;
    }

    /// Change the time scale applied on every tick
    pub fn set_time_scale(&mut self, time_scale: f64) -> Result<()> {
        ensure_positive("time scale", time_scale)?;
        self.config.time_scale = time_scale;
        Ok(())
    }

    /// Current time scale
    pub fn time_scale(&self) -> f64 {
        self.config.time_scale
    }

    /// Whether a launch is in progress
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Drag projectile of the latest launch
    pub fn projectile(&self) -> Option<&Projectile> {
        self.projectile.as_ref()
    }

    /// Ideal companion of the latest launch, if shown
    pub fn ideal(&self) -> Option<&IdealProjectile> {
        self.ideal.as_ref()
    }

    /// One point list per drag launch, oldest first
    pub fn trails(&self) -> &[Vec<Vec2>] {
        &self.trails
    }

    /// One point list per ideal launch, oldest first
    pub fn ideal_trails(&self) -> &[Vec<Vec2>] {
        &self.ideal_trails
    }

    /// (time, altitude) samples of the current launch
    pub fn altitude_history(&self) -> &SampleSeries {
        &self.altitude
    }

    /// Placed target, if any
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    /// Whether the current launch passed within the target radius
    pub fn hit_target(&self) -> bool {
        self.hit_target
    }

    /// Configuration the lab was built with
    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    /// Data readout for the latest launch
    pub fn readout(&self) -> Option<LaunchReadout> {
        let projectile = self.projectile.as_ref()?;
        Some(LaunchReadout {
            time: projectile.time(),
            max_height: projectile.max_height(),
            range: projectile.position().x,
            speed: projectile.speed(),
            hit_target: self.target.map(|_| self.hit_target),
        })
    }
}
