use core::f64::consts::PI;

/// Outputs below this are flushed to zero.
const SNAP_THRESHOLD: f32 = 1e-5;

/// One-pole low-pass that runs at block rate.
///
/// Each call to [`process_sample`](Self::process_sample) stands for one whole
/// audio block, so the cutoff is prewarped against `sample_rate / block_size`
/// rather than the audio sample rate.
#[derive(Clone, Debug, Default)]
pub struct ModulationSmoother {
    coeff: f32,
    last_output: f32,
}

impl ModulationSmoother {
    pub fn new(cutoff: f32, block_size: usize, sample_rate: f64) -> Self {
        let mut smoother = Self::default();
        smoother.prepare(cutoff, block_size, sample_rate);
        smoother
    }

    pub fn prepare(&mut self, cutoff: f32, block_size: usize, sample_rate: f64) {
        debug_assert!(sample_rate > 0.0, "sample rate must be positive");
        debug_assert!(block_size > 0, "block size must be positive");
        let block_rate = sample_rate / block_size as f64;
        let c0 = (PI * cutoff as f64 / block_rate).tan();
        self.coeff = (c0 / (1.0 + c0)) as f32;
        self.last_output = 0.0;
    }

    #[inline]
    pub fn process_sample(&mut self, input: f32) -> f32 {
        let output = (1.0 - self.coeff) * self.last_output + self.coeff * input;
        self.last_output = if output < SNAP_THRESHOLD { 0.0 } else { output };
        self.last_output
    }

    pub fn coeff(&self) -> f32 {
        self.coeff
    }

    pub fn reset(&mut self) {
        self.last_output = 0.0;
    }
}
