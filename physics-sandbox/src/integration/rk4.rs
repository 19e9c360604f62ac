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
//! Runge-Kutta 4th order (RK4) integrator
//!
//! # Algorithm
//!
//! ```text
//! k1 = f(y)
//! k2 = f(y + k1*dt/2)
//! k3 = f(y + k2*dt/2)
//! k4 = f(y + k3*dt)
//! y(t + dt) = y(t) + (k1 + 2*k2 + 2*k3 + k4)*dt/6
//! ```
//!
//! For the second-order system the derivative of the phase state is
//! `(v, a(x, v))`. The dynamics here are autonomous, so the stage times
//! `t + dt/2` and `t + dt` never enter the evaluation.
//!
//! # Properties
//!
//! - **Fourth-order accurate**: Local error O(dt⁵), global error O(dt⁴)
//! - **Exact for constant acceleration** up to rounding, since the motion is
//!   a quadratic polynomial in time
//! - **Four evaluations per step**
//!
//! # References
//!
//! - Butcher, J. C. (2016). Numerical Methods for Ordinary Differential Equations
//!   (3rd ed.). Wiley. Chapter 3.
//! - Press, W. H., Teukolsky, S. A., Vetterling, W. T., & Flannery, B. P. (2007).
//!   Numerical Recipes: The Art of Scientific Computing (3rd ed.). Cambridge
//!   University Press. Section 17.1.

use super::{Integrator, PhaseState};
use crate::math::Vec2;

/// Classical RK4 with fixed 1:2:2:1 weighting
///
/// # Example
///
/// ```
/// use physics_sandbox::integration::{Integrator, PhaseState, Rk4};
/// use physics_sandbox::math::Vec2;
///
/// let start = PhaseState::new(Vec2::zero(), Vec2::new(1.0, 0.0));
/// let next = Rk4.step(start, 3.0, |_x, _v| Vec2::new(0.0, -2.0));
/// assert_eq!(next.position, Vec2::new(3.0, -9.0));
/// assert_eq!(next.velocity, Vec2::new(1.0, -6.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk4;

/// Derivative of a phase state: `(dx/dt, dv/dt)` packed as a `PhaseState`
fn derivative<F>(state: PhaseState, acceleration: &mut F) -> PhaseState
where
    F: FnMut(Vec2, Vec2) -> Vec2,
{
    PhaseState::new(state.velocity, acceleration(state.position, state.velocity))
}

/// `state + slope * h`
fn offset(state: PhaseState, slope: PhaseState, h: f64) -> PhaseState {
    PhaseState::new(
        state.position + slope.position * h,
        state.velocity + slope.velocity * h,
    )
}

impl Integrator for Rk4 {
    fn name(&self) -> &str {
        "Runge-Kutta 4"
    }

    fn step<F>(&self, state: PhaseState, dt: f64, mut acceleration: F) -> PhaseState
    where
        F: FnMut(Vec2, Vec2) -> Vec2,
    {
        let dt_2 = dt * 0.5;
        let dt_6 = dt / 6.0;

        let k1 = derivative(state, &mut acceleration);
        let k2 = derivative(offset(state, k1, dt_2), &mut acceleration);
        let k3 = derivative(offset(state, k2, dt_2), &mut acceleration);
        let k4 = derivative(offset(state, k3, dt), &mut acceleration);

        PhaseState::new(
            state.position
                + (k1.position + k2.position * 2.0 + k3.position * 2.0 + k4.position) * dt_6,
            state.velocity
                + (k1.velocity + k2.velocity * 2.0 + k3.velocity * 2.0 + k4.velocity) * dt_6,
        )
    }
}
