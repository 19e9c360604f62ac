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
//! Projectile motion with quadratic drag and wind
//!
//! A launched [`Projectile`] is advanced with RK4 under gravity and
//! quadratic air drag relative to a horizontal wind. An [`IdealProjectile`]
//! follows the closed-form drag-free parabola from the same launch and
//! serves as a visual baseline. [`ProjectileLab`] drives one launch at a
//! time the way the interactive lab does.
//!
//! Units are SI: meters, seconds, kilograms. +y points up and the ground is
//! the line `y = 0`.

mod drag;
mod ideal;
mod lab;
mod params;

pub use drag::{advance_projectile, projectile_acceleration, Projectile, ProjectileState};
pub use ideal::{ideal_flight_time, ideal_max_height, ideal_range, IdealProjectile};
pub use lab::{LaunchReadout, ProjectileLab};
pub use params::{LaunchConfig, ProjectileParameters};
