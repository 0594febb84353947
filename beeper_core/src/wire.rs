//! Wire command encoding for the tone generator.
//!
//! The peripheral accepts one fixed 3-byte command: a 16-bit tone period in
//! device ticks (high byte first) followed by the duration in 10 ms units.

/// Device tick rate the period field is expressed against, in Hz.
pub const TICK_RATE_HZ: u32 = 100_000;

/// Fixed size of the command payload.
pub const WIRE_COMMAND_LEN: usize = 3;

/// Encode a tone into the 3-byte wire command.
///
/// `period = TICK_RATE_HZ / frequency_hz` (floor), clamped into the 16-bit
/// period field and split into high/low bytes; the duration is floored to
/// 10 ms units and clamped into its 8-bit field. Both clamps are hardware
/// limits, not validation failures, so out-of-range inputs saturate silently
/// rather than wrap or error.
///
/// Caller contract: `frequency_hz` has already passed
/// [`crate::limits::frequency_valid`]. Zero is a contract violation, not a
/// handled case.
pub fn encode_tone(frequency_hz: u32, duration_ms: u32) -> [u8; WIRE_COMMAND_LEN] {
    debug_assert!(frequency_hz != 0, "encode_tone: unvalidated zero frequency");
    let period = (TICK_RATE_HZ / frequency_hz).min(0xFFFF);
    let units = (duration_ms / 10).min(0xFF);
    [(period / 256) as u8, (period % 256) as u8, units as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_tone_encodes_to_known_bytes() {
        // 100000 / 440 = 227 = 0x00E3; 1000 ms / 10 = 100 = 0x64
        assert_eq!(encode_tone(440, 1000), [0x00, 0xE3, 0x64]);
    }

    #[test]
    fn low_frequency_saturates_period_field() {
        // 100000 ticks at 1 Hz exceeds 16 bits
        assert_eq!(encode_tone(1, 1000), [0xFF, 0xFF, 0x64]);
        // 2 Hz fits again: 50000 = 0xC350
        assert_eq!(encode_tone(2, 1000), [0xC3, 0x50, 0x64]);
    }

    #[test]
    fn long_duration_saturates_units_field() {
        assert_eq!(encode_tone(440, 3000)[2], 0xFF);
        assert_eq!(encode_tone(440, u32::MAX)[2], 0xFF);
    }

    #[test]
    fn duration_floors_to_ten_ms_units() {
        assert_eq!(encode_tone(440, 0)[2], 0);
        assert_eq!(encode_tone(440, 9)[2], 0);
        assert_eq!(encode_tone(440, 10)[2], 1);
        assert_eq!(encode_tone(440, 2550)[2], 255);
    }

    #[test]
    fn highest_valid_frequency_keeps_a_nonzero_period() {
        assert_eq!(encode_tone(8192, 100), [0x00, 0x0C, 0x0A]);
    }
}
