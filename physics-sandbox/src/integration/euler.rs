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
//! Semi-implicit (symplectic) Euler integrator
//!
//! ```text
//! v(t + dt) = v(t) + a(x(t), v(t))*dt
//! x(t + dt) = x(t) + v(t + dt)*dt
//! ```
//!
//! Position uses the *updated* velocity. Compared with explicit Euler this
//! keeps oscillatory energy bounded instead of growing, which matters for
//! particles resting on the container wall under strong gravity.

use super::{Integrator, PhaseState};
use crate::math::Vec2;

/// First-order semi-implicit Euler, one acceleration evaluation per step
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn name(&self) -> &str {
        "Semi-implicit Euler"
    }

    fn step<F>(&self, state: PhaseState, dt: f64, mut acceleration: F) -> PhaseState
    where
        F: FnMut(Vec2, Vec2) -> Vec2,
    {
        let accel = acceleration(state.position, state.velocity);
        let velocity = state.velocity + accel * dt;
        let position = state.position + velocity * dt;
        PhaseState::new(position, velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_uses_new_velocity() {
        let start = PhaseState::new(Vec2::zero(), Vec2::zero());
        let next = SemiImplicitEuler.step(start, 0.5, |_x, _v| Vec2::new(0.0, 2.0));

        assert_eq!(next.velocity, Vec2::new(0.0, 1.0));
        // Explicit Euler would leave the position at zero
        assert_eq!(next.position, Vec2::new(0.0, 0.5));
    }

    #[test]
    fn test_single_evaluation() {
        let mut calls = 0;
        SemiImplicitEuler.step(PhaseState::default(), 0.1, |_x, _v| {
            calls += 1;
            Vec2::zero()
        });
        assert_eq!(calls, 1);
        assert_eq!(SemiImplicitEuler.name(), "Semi-implicit Euler");
    }
}
