use super::prelude::PI;

/// States smaller than this are flushed by `snap_to_zero`.
const SNAP_THRESHOLD: f32 = 1e-8;

/// Topology-preserving-transform state-variable filter, band-pass output.
///
/// Stays stable while the cutoff is moved every block. Peak gain at the
/// centre frequency equals the resonance.
#[derive(Clone, Debug)]
pub struct ResonantFilter {
    cutoff: f32,
    resonance: f32,
    sample_rate: f32,
    // Coefficients
    g: f32,
    r2: f32,
    h: f32,
    // Integrator states
    s1: f32,
    s2: f32,
}

impl ResonantFilter {
    pub fn bandpass(cutoff: f32, resonance: f32) -> Self {
        Self {
            cutoff,
            resonance,
            ..Default::default()
        }
    }

    /// Binds the filter to a sample rate and clears its state.
    pub fn prepare(&mut self, sample_rate: f64) {
        debug_assert!(sample_rate > 0.0, "sample rate must be positive");
        self.sample_rate = sample_rate as f32;
        self.update_coefficients();
        self.reset();
    }

    pub fn set_cutoff_frequency(&mut self, cutoff: f32) {
        self.cutoff = cutoff;
        self.update_coefficients();
    }

    pub fn set_resonance(&mut self, resonance: f32) {
        self.resonance = resonance;
        self.update_coefficients();
    }

    pub fn cutoff_frequency(&self) -> f32 {
        self.cutoff
    }

    pub fn resonance(&self) -> f32 {
        self.resonance
    }

    fn update_coefficients(&mut self) {
        if self.sample_rate <= 0.0 {
            return;
        }
        // tan() blows up at Nyquist
        let cutoff = self.cutoff.clamp(0.0, self.sample_rate * 0.49);
        self.g = (PI * cutoff / self.sample_rate).tan();
        self.r2 = 1.0 / self.resonance.max(1e-3);
        self.h = 1.0 / (1.0 + self.r2 * self.g + self.g * self.g);
    }

    #[inline]
    pub fn process_sample(&mut self, input: f32) -> f32 {
        let hp = self.h * (input - (self.r2 + self.g) * self.s1 - self.s2);

        let bp = self.g * hp + self.s1;
        self.s1 = self.g * hp + bp;

        let lp = self.g * bp + self.s2;
        self.s2 = self.g * bp + lp;

        bp
    }

    /// Flushes integrator states that have decayed into denormal territory.
    pub fn snap_to_zero(&mut self) {
        if self.s1.abs() < SNAP_THRESHOLD {
            self.s1 = 0.0;
        }
        if self.s2.abs() < SNAP_THRESHOLD {
            self.s2 = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.s1 = 0.0;
        self.s2 = 0.0;
    }
}

impl Default for ResonantFilter {
    fn default() -> Self {
        Self {
            cutoff: 1000.0,
            resonance: 1.0 / core::f32::consts::SQRT_2,
            sample_rate: 0.0,
            g: 0.0,
            r2: 0.0,
            h: 1.0,
            s1: 0.0,
            s2: 0.0,
        }
    }
}
