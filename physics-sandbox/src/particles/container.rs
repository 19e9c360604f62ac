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
//! Rotating circular container with an escape gap
//!
//! The wall is a circle of fixed radius whose rotation angle advances with
//! the spin speed every tick. An arc of the wall centered on the rotation
//! angle is missing; a particle touching the wall inside that arc leaves
//! the container permanently instead of bouncing.
//!
//! Gap endpoints are reduced to `[0, 2π)` while the particle angle is the raw
//! `atan2` value in `(-π, π]`. The two ranges are compared as they are, so a
//! gap in the lower half of the screen (`angle > π`) only catches particles
//! when it wraps through zero, and any negative angle counts as inside a
//! wrapping gap.

use super::particle::Particle;
use crate::math::Vec2;
use std::f64::consts::TAU;

/// Normal restitution of the container wall
pub const WALL_RESTITUTION: f64 = 0.85;

/// Outcome of one container collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerContact {
    /// Particle had already left; not considered
    Outside,
    /// Not touching the wall
    Clear,
    /// Touched the wall inside the gap and left the container
    Escaped,
    /// Pushed back onto the wall and its outward velocity reflected
    Bounced,
    /// Pushed back onto the wall while already moving inward
    Contact,
}

/// Angular interval of the gap, endpoints in `[0, 2π)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapArc {
    start: f64,
    end: f64,
}

impl GapArc {
    /// Gap of angular `width` centered on `angle`
    ///
    /// A width of exactly 2π gives `start == end`, which closes the gap to a
    /// single angle.
    pub fn centered(angle: f64, width: f64) -> Self {
        let half = width / 2.0;
        GapArc {
            start: (angle - half).rem_euclid(TAU),
            end: (angle + half).rem_euclid(TAU),
        }
    }

    /// Start of the arc
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End of the arc
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Whether the `atan2` angle lies in the gap
    ///
    /// When the arc wraps past zero (`start > end`) membership is
    /// `angle >= start || angle <= end`; otherwise `start <= angle <= end`.
    /// `angle` is compared unreduced.
    pub fn contains(&self, angle: f64) -> bool {
        if self.start > self.end {
            angle >= self.start || angle <= self.end
        } else {
            self.start <= angle && angle <= self.end
        }
    }
}

/// Resolve one particle against the container wall
///
/// Particles that already left (`is_in == false`) are never reconsidered.
/// A particle is in contact when `|pos - center| + r > radius`. In the gap
/// it escapes; elsewhere it is projected back onto the wall and, if moving
/// outward relative to the spinning wall, its normal velocity is reflected
/// with [`WALL_RESTITUTION`] while the wall's tangential speed
/// `radius * spin_speed` is carried into the result.
pub fn resolve_container_collision(
    particle: &mut Particle,
    center: Vec2,
    radius: f64,
    container_angle: f64,
    gap_angle: f64,
    spin_speed: f64,
) -> ContainerContact {
    if !particle.is_in {
        return ContainerContact::Outside;
    }

    let offset = particle.position - center;
    let distance = offset.magnitude();
    if distance + particle.radius() <= radius {
        return ContainerContact::Clear;
    }
    // Only reachable when the particle is wider than the container; the
    // contact normal is undefined at the exact center.
    let Some(normal) = offset.normalized() else {
        return ContainerContact::Clear;
    };

    if GapArc::centered(container_angle, gap_angle).contains(offset.angle()) {
        particle.is_in = false;
        return ContainerContact::Escaped;
    }

    particle.is_in = true;
    particle.position = center + normal * (radius - particle.radius());

    let wall_velocity = normal.perp() * (radius * spin_speed);
    let relative = particle.velocity - wall_velocity;
    let normal_speed = relative.dot(normal);

    if normal_speed > 0.0 {
        let reflected = relative - normal * ((1.0 + WALL_RESTITUTION) * normal_speed);
        particle.velocity = reflected + wall_velocity;
        ContainerContact::Bounced
    } else {
        ContainerContact::Contact
    }
}

/// The spinning wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    center: Vec2,
    radius: f64,
    angle: f64,
    gap_angle: f64,
}

impl Container {
    /// Create a container with rotation angle zero
    pub fn new(center: Vec2, radius: f64, gap_angle: f64) -> Self {
        Container {
            center,
            radius,
            angle: 0.0,
            gap_angle,
        }
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Wall radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Rotation angle in `[0, 2π)`
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Angular width of the gap
    pub fn gap_angle(&self) -> f64 {
        self.gap_angle
    }

    /// Change the gap width
    pub fn set_gap_angle(&mut self, gap_angle: f64) {
        self.gap_angle = gap_angle;
    }

    /// Current gap arc
    pub fn gap(&self) -> GapArc {
        GapArc::centered(self.angle, self.gap_angle)
    }

    /// Rotate by `spin_speed * dt`, wrapping into `[0, 2π)`
    pub fn rotate(&mut self, spin_speed: f64, dt: f64) {
        self.angle = (self.angle + spin_speed * dt).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if self.angle >= TAU {
            self.angle = 0.0;
        }
    }

    /// Resolve `particle` against this wall
    pub fn resolve(&self, particle: &mut Particle, spin_speed: f64) -> ContainerContact {
        resolve_container_collision(
            particle,
            self.center,
            self.radius,
            self.angle,
            self.gap_angle,
            spin_speed,
        )
    }
}
