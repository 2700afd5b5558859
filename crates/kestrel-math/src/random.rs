// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Uniform and biased random draws over an injected [`RandomSource`].

use rand::Rng;

/// Producer of uniform floats in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Unseeded source backed by the thread-local generator from `rand`.
///
/// Each thread draws from its own generator, so the value can be freely
/// copied across threads. Use [`crate::Prng`] when the sequence must replay.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Returns an integer in `[min, max)`, computed as `trunc(u * (max - min)) + min`.
///
/// With `min == max` the result is `min`. With `min > max` the draw lands in
/// `(max, min]`.
pub fn random<R: RandomSource + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    scale_to_int(rng.next_f64(), min, max)
}

/// Returns a float in `[min, max)`.
pub fn random_float<R: RandomSource + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.next_f64() * (max - min) + min
}

/// Same as [`random`] but squares the sample first, so results cluster near
/// `min`.
pub fn weighted_random<R: RandomSource + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    let sample = rng.next_f64();
    scale_to_int(sample * sample, min, max)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn scale_to_int(sample: f64, min: i32, max: i32) -> i32 {
    let span = i64::from(max) - i64::from(min);
    let mut offset = (sample * span as f64).trunc() as i64;
    // A sample just below 1.0 can round up to the full span for wide ranges.
    if span != 0 && offset.abs() >= span.abs() {
        offset -= span.signum();
    }
    i32::try_from(i64::from(min) + offset).unwrap_or(min)
}
