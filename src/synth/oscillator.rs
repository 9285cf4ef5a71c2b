use super::prelude::TAU;

/// Sine oscillator with a normalised phase accumulator.
#[derive(Clone, Debug)]
pub struct SineOscillator {
    phase: f32,
    freq_hz: f32,
    sample_rate: f32,
    phase_increment: f32, // Pre-calculate for efficiency
}

impl SineOscillator {
    pub fn new(freq_hz: f32) -> Self {
        Self {
            phase: 0.0,
            freq_hz,
            sample_rate: 0.0,
            phase_increment: 0.0,
        }
    }

    pub fn prepare(&mut self, sample_rate: f64) {
        debug_assert!(sample_rate > 0.0, "sample rate must be positive");
        self.sample_rate = sample_rate as f32;
        self.set_frequency(self.freq_hz);
        self.reset();
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let val = (self.phase * TAU).sin();
        self.phase += self.phase_increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0; // Wrap phase [0.0, 1.0)
        }
        val
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    pub fn set_frequency(&mut self, freq_hz: f32) {
        self.freq_hz = freq_hz;
        self.phase_increment = if self.sample_rate > 0.0 {
            freq_hz / self.sample_rate
        } else {
            0.0
        };
    }

    pub fn frequency(&self) -> f32 {
        self.freq_hz
    }
}
