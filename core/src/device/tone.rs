//! Tone generator (spec.md §4.6).
//!
//! Subscribes to VIA Timer 1 reloads: while PB7-output mode is enabled, each
//! reload flips the square wave and sets its half-period from the current
//! T1 latch. The generator owns no audio backend — it produces a frequency
//! (or silence) that a host audio layer samples into a stream.

const SYSTEM_CLOCK_HZ: u32 = 1_000_000;

pub struct ToneGenerator {
    enabled: bool,
    latch: u16,
}

impl ToneGenerator {
    pub fn new() -> Self {
        Self {
            enabled: false,
            latch: 0,
        }
    }

    /// Called once per machine step with the VIA's PB7-output enable state
    /// (ACR bit 7) and its current T1 latch value.
    pub fn update(&mut self, pb7_output_enabled: bool, t1_latch: u16) {
        self.enabled = pb7_output_enabled;
        self.latch = t1_latch;
    }

    /// Current output frequency in Hz, or `None` when silent.
    ///
    /// frequency = system clock / (2 * (T1 latch + 2)), per spec.md §4.6.
    pub fn frequency_hz(&self) -> Option<f32> {
        if !self.enabled {
            return None;
        }
        let period = 2 * (self.latch as u32 + 2);
        if period == 0 {
            return None;
        }
        Some(SYSTEM_CLOCK_HZ as f32 / period as f32)
    }
}

impl Default for ToneGenerator {
    fn default() -> Self {
        Self::new()
    }
}
