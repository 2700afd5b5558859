// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bit tricks over the 32-bit unsigned range (texture sizes, buffer
//! capacities, grid dimensions).

/// Bits at odd positions (1, 3, 5, ...). A power of four never sets one.
const ODD_BITS: u32 = 0xAAAA_AAAA;

/// Largest power of two representable in a `u32`.
const TOP_BIT: u32 = 1 << 31;

/// Returns `true` when `val` has at most one bit set (`val & (val - 1) == 0`).
///
/// Zero passes the test as well. Callers that need "strictly a power of two"
/// should use [`u32::is_power_of_two`] instead.
pub const fn is_power_of_two(val: u32) -> bool {
    val & val.wrapping_sub(1) == 0
}

/// Returns `true` when `val == 4^k` for some `k >= 0`.
pub const fn is_power_of_four(val: u32) -> bool {
    match val {
        0 | 2 | 3 => false,
        1 => true,
        _ => is_power_of_two(val) && val & ODD_BITS == 0,
    }
}

/// Smallest power of two `>= val`, by smearing the highest set bit rightwards.
///
/// Defined for `1..=2^31`. Outside that range the arithmetic wraps: `0` and
/// anything above `2^31` both come back as `0`. See
/// [`checked_next_power_of_two`] for a variant that says so explicitly.
pub const fn next_power_of_two(val: u32) -> u32 {
    let mut v = val.wrapping_sub(1);
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v.wrapping_add(1)
}

/// Like [`next_power_of_two`] but returns `None` outside `1..=2^31`.
pub const fn checked_next_power_of_two(val: u32) -> Option<u32> {
    if val == 0 || val > TOP_BIT {
        None
    } else {
        Some(next_power_of_two(val))
    }
}
