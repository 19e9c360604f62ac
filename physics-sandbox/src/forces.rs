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
//! Force laws shared by the projectile and particle models
//!
//! Both simulations combine uniform gravity with quadratic air drag acting
//! against the velocity relative to the wind. Forces are returned in the
//! caller's units; dividing by mass is left to the integrator's
//! acceleration function.

use crate::math::Vec2;

/// Weight of a body of `mass` in a uniform gravity field
pub fn gravity_force(gravity: Vec2, mass: f64) -> Vec2 {
    gravity * mass
}

/// Lumped quadratic drag constant `k = ½ ρ A C_d`
///
/// The drag magnitude is then `k |v_rel|²`.
pub fn drag_constant(air_density: f64, area: f64, drag_coefficient: f64) -> f64 {
    0.5 * air_density * area * drag_coefficient
}

/// Quadratic drag opposing `relative_velocity`
///
/// Returns zero when the relative speed is exactly zero, where the drag
/// direction is undefined.
///
/// # Examples
///
/// ```
/// use physics_sandbox::forces::quadratic_drag;
/// use physics_sandbox::math::Vec2;
///
/// let f = quadratic_drag(Vec2::new(2.0, 0.0), 0.5);
/// assert_eq!(f, Vec2::new(-2.0, 0.0));
/// assert_eq!(quadratic_drag(Vec2::zero(), 0.5), Vec2::zero());
/// ```
pub fn quadratic_drag(relative_velocity: Vec2, drag_constant: f64) -> Vec2 {
    let speed = relative_velocity.magnitude();
    if speed == 0.0 {
        return Vec2::zero();
    }
    let magnitude = drag_constant * speed * speed;
    relative_velocity * (-magnitude / speed)
}
