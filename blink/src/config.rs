/// Ticks per millisecond of the reference 312.5 kHz countdown, truncated.
///
/// Truncation makes every period about 0.16% short, which nobody watching an
/// LED will notice.
pub const REFERENCE_TICKS_PER_MS: u32 = 312;

/// The reference countdown is a 23-bit down-counter.
pub const REFERENCE_MAX_TICKS: u32 = 0x7F_FFFF;

/// Convert milliseconds to countdown ticks.
///
/// The result is clamped to `1..=max_ticks`: a zero duration becomes the
/// shortest program the hardware accepts and anything out of range runs at
/// the longest.
pub const fn ms_to_ticks(ms: u32, ticks_per_ms: u32, max_ticks: u32) -> u32 {
    let ticks = ms.saturating_mul(ticks_per_ms);
    if ticks == 0 {
        1
    } else if ticks > max_ticks {
        max_ticks
    } else {
        ticks
    }
}

/// On and off phase lengths in countdown ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkConfig {
    pub on_ticks: u32,
    pub off_ticks: u32,
}

impl BlinkConfig {
    pub const fn from_millis(on_ms: u32, off_ms: u32, ticks_per_ms: u32, max_ticks: u32) -> Self {
        Self {
            on_ticks: ms_to_ticks(on_ms, ticks_per_ms, max_ticks),
            off_ticks: ms_to_ticks(off_ms, ticks_per_ms, max_ticks),
        }
    }

    /// Length of the phase that is lit (`true`) or dark (`false`).
    pub const fn phase_ticks(&self, lit: bool) -> u32 {
        if lit {
            self.on_ticks
        } else {
            self.off_ticks
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(ms: u32) -> u32 {
        ms_to_ticks(ms, REFERENCE_TICKS_PER_MS, REFERENCE_MAX_TICKS)
    }

    #[test]
    fn one_second_is_312000_ticks() {
        assert_eq!(reference(1000), 312_000);
        assert_eq!(reference(250), 78_000);
    }

    #[test]
    fn zero_clamps_to_one_tick() {
        assert_eq!(reference(0), 1);
        assert_eq!(BlinkConfig::from_millis(0, 0, 312, 100), BlinkConfig { on_ticks: 1, off_ticks: 1 });
    }

    #[test]
    fn long_durations_clamp_to_the_counter_width() {
        // 26843 ms is the last whole millisecond that fits in 23 bits.
        assert_eq!(reference(26_843), 8_375_016);
        assert_eq!(reference(26_900), REFERENCE_MAX_TICKS);
        assert_eq!(ms_to_ticks(u32::MAX, 312, u32::MAX), u32::MAX);
    }

    #[test]
    fn phase_ticks_picks_the_half() {
        let cfg = BlinkConfig::from_millis(333, 1000, REFERENCE_TICKS_PER_MS, REFERENCE_MAX_TICKS);
        assert_eq!(cfg.phase_ticks(true), 103_896);
        assert_eq!(cfg.phase_ticks(false), 312_000);
    }
}
