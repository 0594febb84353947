//! Hardware-imposed bounds for tone parameters.
//!
//! These checks are the single source of truth for acceptance: every setter,
//! the combined beep form, and the builder route through them before any
//! state is mutated.

/// Highest tone frequency the generator can produce, in Hz.
pub const MAX_FREQUENCY_HZ: u32 = 8192;

/// Longest beep the 10 ms wire resolution can express, in milliseconds.
pub const MAX_DURATION_MS: u32 = 2550;

/// True iff `hz` is a frequency the device accepts (1..=8192).
#[inline]
pub const fn frequency_valid(hz: u32) -> bool {
    hz > 0 && hz <= MAX_FREQUENCY_HZ
}

/// True iff `ms` is a duration the device accepts (0..=2550).
#[inline]
pub const fn duration_ms_valid(ms: u32) -> bool {
    ms <= MAX_DURATION_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_bounds() {
        assert!(!frequency_valid(0));
        assert!(frequency_valid(1));
        assert!(frequency_valid(440));
        assert!(frequency_valid(MAX_FREQUENCY_HZ));
        assert!(!frequency_valid(MAX_FREQUENCY_HZ + 1));
        assert!(!frequency_valid(u32::MAX));
    }

    #[test]
    fn duration_bounds() {
        assert!(duration_ms_valid(0));
        assert!(duration_ms_valid(1000));
        assert!(duration_ms_valid(MAX_DURATION_MS));
        assert!(!duration_ms_valid(MAX_DURATION_MS + 1));
        assert!(!duration_ms_valid(u32::MAX));
    }
}
