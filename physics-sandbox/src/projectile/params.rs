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
//! Launch-time parameter snapshots

use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, Result, SandboxError};
use crate::forces::drag_constant;
use crate::math::Vec2;
use std::f64::consts::PI;

/// Standard gravity in m/s²
pub const DEFAULT_GRAVITY: f64 = 9.81;

/// Sea-level air density in kg/m³
pub const DEFAULT_AIR_DENSITY: f64 = 1.225;

/// Drag coefficient of a smooth sphere
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.47;

/// Physical parameters of one launched projectile
///
/// Captured at launch and never changed afterwards, so moving a slider
/// mid-flight only affects the next launch.
///
/// Drag is gated by `drag_enabled` rather than by zeroing the physical
/// values. When drag is disabled the wind is ignored as well, since wind
/// only acts on the projectile through drag.
///
/// The integrator divides by `mass`; a zero mass produces NaN/Inf state
/// and is the caller's responsibility to avoid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileParameters {
    /// Mass in kg
    pub mass: f64,
    /// Reference (cross-section) area in m²
    pub area: f64,
    /// Gravitational acceleration magnitude in m/s², acting in -y
    pub gravity: f64,
    /// Air density in kg/m³
    pub air_density: f64,
    /// Dimensionless drag coefficient
    pub drag_coefficient: f64,
    /// Horizontal wind velocity in m/s
    pub wind_vx: f64,
    /// Whether drag (and therefore wind) acts at all
    pub drag_enabled: bool,
}

impl ProjectileParameters {
    /// Drag-free parameters
    pub fn new(mass: f64, area: f64, gravity: f64) -> Self {
        ProjectileParameters {
            mass,
            area,
            gravity,
            air_density: 0.0,
            drag_coefficient: 0.0,
            wind_vx: 0.0,
            drag_enabled: false,
        }
    }

    /// Enable drag with the given air and wind
    pub fn with_drag(mut self, air_density: f64, drag_coefficient: f64, wind_vx: f64) -> Self {
        self.air_density = air_density;
        self.drag_coefficient = drag_coefficient;
        self.wind_vx = wind_vx;
        self.drag_enabled = true;
        self
    }

    /// Turn drag off while keeping the stored air values
    pub fn without_drag(mut self) -> Self {
        self.drag_enabled = false;
        self
    }

    /// Lumped drag constant `½ ρ A C_d`, zero when drag is disabled
    pub fn drag_constant(&self) -> f64 {
        if self.drag_enabled {
            drag_constant(self.air_density, self.area, self.drag_coefficient)
        } else {
            0.0
        }
    }

    /// Horizontal wind the drag acts relative to, zero when drag is disabled
    pub fn effective_wind(&self) -> f64 {
        if self.drag_enabled {
            self.wind_vx
        } else {
            0.0
        }
    }

    /// Validate the physical parameters
    pub fn validate(&self) -> Result<()> {
        ensure_positive("mass", self.mass)?;
        ensure_positive("area", self.area)?;
        ensure_positive("gravity", self.gravity)?;
        ensure_non_negative("air density", self.air_density)?;
        ensure_non_negative("drag coefficient", self.drag_coefficient)?;
        ensure_finite("wind", self.wind_vx)
    }
}

/// Launch settings as a user enters them: speed and elevation angle plus
/// the body and environment
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaunchConfig {
    /// Muzzle speed in m/s
    pub speed: f64,
    /// Elevation above the horizon in degrees, within [0, 90]
    pub angle_degrees: f64,
    /// Mass in kg
    pub mass: f64,
    /// Radius of the spherical body in m
    pub radius: f64,
    /// Gravitational acceleration in m/s²
    pub gravity: f64,
    /// Air density in kg/m³
    pub air_density: f64,
    /// Drag coefficient
    pub drag_coefficient: f64,
    /// Horizontal wind in m/s
    pub wind_vx: f64,
    /// Whether air drag is simulated
    pub drag_enabled: bool,
    /// Whether the drag-free comparison projectile is launched alongside
    pub show_ideal: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        LaunchConfig {
            speed: 100.0,
            angle_degrees: 45.0,
            mass: 10.0,
            radius: 0.1,
            gravity: DEFAULT_GRAVITY,
            air_density: DEFAULT_AIR_DENSITY,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            wind_vx: 0.0,
            drag_enabled: true,
            show_ideal: true,
        }
    }
}

impl LaunchConfig {
    /// Set speed and angle
    pub fn with_velocity(mut self, speed: f64, angle_degrees: f64) -> Self {
        self.speed = speed;
        self.angle_degrees = angle_degrees;
        self
    }

    /// Set mass and radius
    pub fn with_body(mut self, mass: f64, radius: f64) -> Self {
        self.mass = mass;
        self.radius = radius;
        self
    }

    /// Set gravity
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set air density, drag coefficient and wind
    pub fn with_air(mut self, air_density: f64, drag_coefficient: f64, wind_vx: f64) -> Self {
        self.air_density = air_density;
        self.drag_coefficient = drag_coefficient;
        self.wind_vx = wind_vx;
        self
    }

    /// Toggle air drag
    pub fn with_drag_enabled(mut self, enabled: bool) -> Self {
        self.drag_enabled = enabled;
        self
    }

    /// Toggle the ideal comparison projectile
    pub fn with_ideal(mut self, show: bool) -> Self {
        self.show_ideal = show;
        self
    }

    /// Launch angle in radians
    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees.to_radians()
    }

    /// Initial velocity `(v cos θ, v sin θ)`
    pub fn initial_velocity(&self) -> Vec2 {
        Vec2::from_angle(self.angle_radians()) * self.speed
    }

    /// Cross-section area `π r²`
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Snapshot of the physical parameters for one flight
    pub fn parameters(&self) -> ProjectileParameters {
        let params = ProjectileParameters::new(self.mass, self.area(), self.gravity).with_drag(
            self.air_density,
            self.drag_coefficient,
            self.wind_vx,
        );
        if self.drag_enabled {
            params
        } else {
            params.without_drag()
        }
    }

    /// Validate the launch settings
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("speed", self.speed)?;
        ensure_finite("launch angle", self.angle_degrees)?;
        if !(0.0..=90.0).contains(&self.angle_degrees) {
            return Err(SandboxError::AngleOutOfRange {
                degrees: self.angle_degrees,
            });
        }
        ensure_positive("radius", self.radius)?;
        self.parameters().validate()
    }
}
