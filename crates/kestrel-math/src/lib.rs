// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! kestrel-math: small numeric helpers shared by Kestrel gameplay code.
//!
//! Everything here is a free function over `f64`/`u32`/`i32`. The random
//! helpers never reach for a global generator; callers hand in a
//! [`RandomSource`] (a seeded [`Prng`] for reproducible timelines, or
//! [`ThreadRandom`] when any entropy will do).
#![forbid(unsafe_code)]

mod angle;
mod bits;
mod consts;
mod error;
mod prng;
mod random;
mod scalar;

pub use angle::{deg_to_rad, rad_to_deg};
pub use bits::{checked_next_power_of_two, is_power_of_four, is_power_of_two, next_power_of_two};
pub use consts::{DEFAULT_PRECISION, DEG_TO_RAD, EPSILON, ETA, RAD_TO_DEG, TAU};
pub use error::MathError;
pub use prng::Prng;
pub use random::{random, random_float, weighted_random, RandomSource, ThreadRandom};
pub use scalar::{clamp, round, square, to_be_close_to, try_clamp};
