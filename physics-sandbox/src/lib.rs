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
//! # Physics Sandbox
//!
//! Numerical core of an educational physics sandbox with two simulations:
//!
//! - **Projectile lab**: a projectile launched at a speed and angle, advanced
//!   with fourth-order Runge-Kutta under gravity and quadratic air drag
//!   relative to a horizontal wind, shown next to the drag-free closed-form
//!   parabola.
//! - **Spinning container**: disc particles integrated with semi-implicit
//!   Euler inside a rotating circular wall with an angular gap, colliding
//!   elastically with each other and escaping through the gap.
//!
//! Everything runs on a single thread at a fixed timestep supplied by the
//! host frame loop. Rendering and input are left to the host; the drivers
//! ([`projectile::ProjectileLab`], [`particles::ParticleSandbox`]) take
//! parameter snapshots and expose read accessors for drawing.
//!
//! ## Example
//!
//! ```rust
//! use physics_sandbox::config::{LabConfig, FIXED_TIMESTEP};
//! use physics_sandbox::projectile::{LaunchConfig, ProjectileLab};
//!
//! let mut lab = ProjectileLab::new(LabConfig::default()).unwrap();
//! lab.launch(&LaunchConfig::default().with_drag_enabled(false)).unwrap();
//! while lab.is_running() {
//!     lab.tick(FIXED_TIMESTEP);
//! }
//!
//! let readout = lab.readout().unwrap();
//! assert!((readout.range - 1019.4).abs() < 2.0);
//! ```

#![warn(missing_docs)]

/// Fixed timestep, driver configuration and defaults
pub mod config;

/// Error type for rejected configuration
pub mod error;

/// Force laws shared by both simulations
pub mod forces;

/// Numerical integration methods
pub mod integration;

/// 2D vector math
pub mod math;

/// Particles, the spinning container and the sandbox driver
pub mod particles;

/// Drag and ideal projectiles and the lab driver
pub mod projectile;

/// Bounded sample histories for graphs
pub mod telemetry;

pub use error::{Result, SandboxError};
pub use math::Vec2;
