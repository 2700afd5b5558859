// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::consts::{DEG_TO_RAD, RAD_TO_DEG};

/// Converts degrees to radians.
pub fn deg_to_rad(angle: f64) -> f64 {
    angle * DEG_TO_RAD
}

/// Converts radians to degrees.
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}
