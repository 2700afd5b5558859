// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors reported by the validating helpers (`try_*`).
///
/// The plain helpers never fail; they follow IEEE-754 and let NaN/Infinity
/// flow through.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// Lower bound above the upper bound, or either bound is NaN.
    #[error("invalid range: [{low}, {high}]")]
    InvalidRange {
        /// Requested lower bound.
        low: f64,
        /// Requested upper bound.
        high: f64,
    },
}
