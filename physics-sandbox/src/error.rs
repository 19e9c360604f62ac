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
//! Error types for configuration and driver validation
//!
//! The numeric kernels never fail: degenerate inputs take guarded branches
//! instead. Errors only surface where a driver accepts caller configuration.

use thiserror::Error;

/// Errors reported when validating launch or sandbox configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SandboxError {
    /// A quantity that must be strictly positive was zero or negative
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending parameter
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// A quantity that may be zero was negative
    #[error("{name} must not be negative, got {value}")]
    Negative {
        /// Name of the offending parameter
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// A parameter was NaN or infinite
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending parameter
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Launch angle outside the supported quarter circle
    #[error("launch angle must be within [0, 90] degrees, got {degrees}")]
    AngleOutOfRange {
        /// Rejected angle in degrees
        degrees: f64,
    },

    /// Timestep outside the range where the fixed-step integrators behave
    #[error("timestep {dt} s is outside the supported range [1e-9, 1.0]")]
    TimestepOutOfRange {
        /// Rejected timestep in seconds
        dt: f64,
    },
}

/// Result alias for validation
pub type Result<T> = std::result::Result<T, SandboxError>;

/// Require `value` to be finite and strictly positive
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value <= 0.0 {
        return Err(SandboxError::NonPositive { name, value });
    }
    Ok(())
}

/// Require `value` to be finite and not negative
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(SandboxError::Negative { name, value });
    }
    Ok(())
}

/// Require `value` to be finite
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SandboxError::NonFinite { name, value });
    }
    Ok(())
}
