//! Unit types for timing quantities.
//!
//! All time thresholds are counted in service ticks, not wall-clock time. With
//! the usual 1 ms timer one tick is one millisecond.

use core::ops::Add;

use serde::Deserialize;

/// A number of `service()` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Ticks(pub u16);

impl Ticks {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// How many whole `interval`s fit in this span, `None` for a zero interval.
    ///
    /// Used to turn tick thresholds into button sample counts.
    #[inline]
    pub const fn intervals_of(self, interval: Ticks) -> Option<u16> {
        self.0.checked_div(interval.0)
    }
}

impl Add for Ticks {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intervals_truncate() {
        assert_eq!(Ticks(1200).intervals_of(Ticks(20)), Some(60));
        assert_eq!(Ticks(1210).intervals_of(Ticks(20)), Some(60));
        assert_eq!(Ticks(19).intervals_of(Ticks(20)), Some(0));
    }

    #[test]
    fn test_zero_interval_does_not_divide() {
        assert_eq!(Ticks(150).intervals_of(Ticks(0)), None);
    }

    #[test]
    fn test_add_saturates() {
        assert_eq!(Ticks(1200) + Ticks(200), Ticks(1400));
        assert_eq!(Ticks(u16::MAX) + Ticks(1), Ticks(u16::MAX));
    }
}
