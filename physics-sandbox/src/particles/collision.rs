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
//! Pairwise elastic collisions between particles
//!
//! Overlapping discs are pushed apart along the line of centers, half the
//! overlap each regardless of mass, then the normal velocity components are
//! exchanged with the 1-D elastic formula for unequal masses:
//!
//! ```text
//! v1n' = (v1n (m1 - m2) + 2 m2 v2n) / (m1 + m2)
//! v2n' = (v2n (m2 - m1) + 2 m1 v1n) / (m1 + m2)
//! ```
//!
//! Tangential components pass through unchanged. The exchange happens on
//! any contact, whether or not the pair is approaching.

use super::particle::Particle;

/// Resolve a contact between `a` and `b`
///
/// Returns `false` without touching either particle when they do not touch
/// (`distance > r_a + r_b`) or when their centers coincide, where the
/// contact normal is undefined. Grabbed particles are filtered out by the
/// caller, not here.
pub fn resolve_particle_collision(a: &mut Particle, b: &mut Particle) -> bool {
    let offset = a.position - b.position;
    let distance = offset.magnitude();
    let reach = a.radius() + b.radius();
    if distance == 0.0 || distance > reach {
        return false;
    }

    let normal = offset / distance;
    let overlap = reach - distance;
    a.position += normal * (0.5 * overlap);
    b.position -= normal * (0.5 * overlap);

    let tangent = normal.perp();
    let v1n = a.velocity.dot(normal);
    let v2n = b.velocity.dot(normal);
    let v1t = a.velocity.dot(tangent);
    let v2t = b.velocity.dot(tangent);

    let m1 = a.mass();
    let m2 = b.mass();
    let total = m1 + m2;
    let v1n_new = (v1n * (m1 - m2) + 2.0 * m2 * v2n) / total;
    let v2n_new = (v2n * (m2 - m1) + 2.0 * m1 * v1n) / total;

    a.velocity = normal * v1n_new + tangent * v1t;
    b.velocity = normal * v2n_new + tangent * v2t;
    true
}
