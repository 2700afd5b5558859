// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::f64::consts::{FRAC_PI_2, PI};

/// Degrees to radians scale factor (`π / 180`).
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Radians to degrees scale factor (`180 / π`).
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// One full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;

/// One quarter turn in radians.
pub const ETA: f64 = FRAC_PI_2;

/// Default tolerance for float comparisons.
pub const EPSILON: f64 = 1e-6;

/// Decimal digits [`crate::to_be_close_to`] checks when the caller has no
/// opinion.
pub const DEFAULT_PRECISION: i32 = 2;
