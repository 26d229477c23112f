//! Button states reported by [`DebouncedButton`](super::DebouncedButton).

use core::fmt;

/// Debounced button state.
///
/// `Closed` is a level that repeats on every read while the button is down.
/// All other non-`Open` states are one-shot reports cleared by the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Not pressed, nothing to report.
    #[default]
    Open,
    /// Pressed, not yet long enough to count as held.
    Closed,
    /// Pressed for at least the hold time.
    Held,
    /// Still held; reported once per repeat interval. Replaces `Held` when enabled.
    LongPressRepeat,
    /// Let go after `Held` or `LongPressRepeat`.
    Released,
    /// Let go before the hold time.
    Clicked,
    /// Second click inside the double-click window.
    DoubleClicked,
}

impl ButtonState {
    /// State name for display/debugging.
    pub const fn name(self) -> &'static str {
        match self {
            ButtonState::Open => "Open",
            ButtonState::Closed => "Closed",
            ButtonState::Held => "Held",
            ButtonState::LongPressRepeat => "LongPressRepeat",
            ButtonState::Released => "Released",
            ButtonState::Clicked => "Clicked",
            ButtonState::DoubleClicked => "DoubleClicked",
        }
    }

    /// Whether this is a gesture worth acting on, i.e. neither `Open` nor `Closed`.
    pub const fn is_event(self) -> bool {
        !matches!(self, ButtonState::Open | ButtonState::Closed)
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
