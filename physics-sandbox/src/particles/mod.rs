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
//! Spinning-container particle sandbox
//!
//! Particles fall under gravity inside a rotating circular wall with an
//! angular gap. They bounce off the wall, collide elastically with each
//! other, and leave for good once they pass through the gap.
//!
//! Coordinates are screen pixels with +y pointing down, so positive
//! gravity pulls particles toward the bottom of the viewport.

mod collision;
mod container;
mod particle;
mod sandbox;
mod spawner;

pub use collision::resolve_particle_collision;
pub use container::{resolve_container_collision, Container, ContainerContact, GapArc, WALL_RESTITUTION};
pub use particle::{Particle, ParticleId};
pub use sandbox::ParticleSandbox;
pub use spawner::Spawner;
