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
//! Fixed-step numerical integration
//!
//! Both simulations advance second-order systems `x'' = a(x, x')` in the
//! plane. The state is a [`PhaseState`] (position and velocity) and the
//! dynamics are supplied as an acceleration closure, so the same kernels
//! serve the projectile and the particles.
//!
//! # Integrators
//!
//! - **RK4**: classical fourth-order Runge-Kutta, used for projectiles where
//!   the quadratic drag nonlinearity needs the accuracy
//! - **Semi-implicit Euler**: velocity first, then position from the new
//!   velocity, used for the particle sandbox
//!
//! # Timestep
//!
//! The caller always supplies dt. No clamping or smoothing happens here;
//! [`validate_timestep`] is an advisory check for configuration code.

use crate::error::{Result, SandboxError};
use crate::math::Vec2;

mod euler;
mod rk4;

pub use euler::SemiImplicitEuler;
pub use rk4::Rk4;

/// Smallest timestep accepted by [`validate_timestep`]
pub const MIN_TIMESTEP: f64 = 1e-9;

/// Largest timestep accepted by [`validate_timestep`]
pub const MAX_TIMESTEP: f64 = 1.0;

/// Position and velocity of a point body
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseState {
    /// Position
    pub position: Vec2,
    /// Velocity
    pub velocity: Vec2,
}

impl PhaseState {
    /// Create a new phase state
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        PhaseState { position, velocity }
    }

    /// Check that both vectors are finite
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.velocity.is_valid()
    }
}

/// Trait for fixed-step integration schemes
///
/// `acceleration` receives the position and velocity at an evaluation point
/// and returns the acceleration there.
pub trait Integrator {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Advance `state` by `dt`
    fn step<F>(&self, state: PhaseState, dt: f64, acceleration: F) -> PhaseState
    where
        F: FnMut(Vec2, Vec2) -> Vec2;
}

/// Kinetic energy `½ m |v|²`
pub fn kinetic_energy(velocity: Vec2, mass: f64) -> f64 {
    0.5 * mass * velocity.magnitude_squared()
}

/// Validate a timestep for the fixed-step integrators
///
/// Extremely small steps lose precision in f64 accumulation while steps
/// above one second make the explicit schemes visibly inaccurate.
pub fn validate_timestep(dt: f64) -> Result<()> {
    if !dt.is_finite() {
        return Err(SandboxError::NonFinite { name: "timestep", value: dt });
    }
    if dt <= 0.0 {
        return Err(SandboxError::NonPositive { name: "timestep", value: dt });
    }
    if !(MIN_TIMESTEP..=MAX_TIMESTEP).contains(&dt) {
        return Err(SandboxError::TimestepOutOfRange { dt });
    }
    Ok(())
}
