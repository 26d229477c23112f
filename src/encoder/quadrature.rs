//! Gray-code conversion and step decoding.
//!
//! The A/B pair is folded into a 2-bit code that counts 0, 1, 2, 3 for a
//! clockwise turn:
//!
//! | A | B | code |
//! |---|---|------|
//! | 0 | 0 | 0    |
//! | 0 | 1 | 1    |
//! | 1 | 1 | 2    |
//! | 1 | 0 | 3    |

/// Fold raw pin levels into the 2-bit position code.
///
/// bit1 = A, bit0 = A XOR B.
#[inline]
pub const fn gray_code(a_high: bool, b_high: bool) -> u8 {
    let a = a_high as u8;
    ((a << 1) | a) ^ (b_high as u8)
}

/// Signed movement between two codes.
///
/// The difference is taken modulo 4, so the 3 -> 0 and 0 -> 3 wraps come out
/// as +1 and -1. A difference of 2 means a state was skipped; the direction
/// is unrecoverable and it is always reported as -2.
#[inline]
pub const fn step_delta(last: u8, current: u8) -> i8 {
    let raw = current.wrapping_sub(last);
    (raw & 1) as i8 - (raw & 2) as i8
}
