use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SpecError {
    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),
    #[error("block size must be at least one sample")]
    InvalidBlockSize,
}

/// Format the engine is prepared for. Every block-rate coefficient derives from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessSpec {
    pub sample_rate: f64,
    pub block_size: usize,
}

impl ProcessSpec {
    pub fn new(sample_rate: f64, block_size: usize) -> Result<Self, SpecError> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(SpecError::InvalidSampleRate(sample_rate));
        }
        if block_size == 0 {
            return Err(SpecError::InvalidBlockSize);
        }
        Ok(Self {
            sample_rate,
            block_size,
        })
    }

    /// Rate at which the host calls `process`, in blocks per second.
    pub fn block_rate(&self) -> f64 {
        self.sample_rate / self.block_size as f64
    }
}

/// Planar stereo view handed to the engine for one block.
pub struct StereoBufferMut<'a> {
    pub left: &'a mut [f32],
    pub right: &'a mut [f32],
}

impl<'a> StereoBufferMut<'a> {
    pub fn new(left: &'a mut [f32], right: &'a mut [f32]) -> Self {
        debug_assert_eq!(left.len(), right.len(), "stereo channels differ in length");
        Self { left, right }
    }

    pub fn len(&self) -> usize {
        self.left.len().min(self.right.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.left.fill(0.0);
        self.right.fill(0.0);
    }

    /// Adds a mono sample at `index`, split by a `(left, right)` gain pair.
    #[inline]
    pub fn add_panned(&mut self, index: usize, sample: f32, gains: (f32, f32)) {
        self.left[index] += sample * gains.0;
        self.right[index] += sample * gains.1;
    }

    pub fn apply_gain(&mut self, gain: f32) {
        for sample in self.left.iter_mut().chain(self.right.iter_mut()) {
            *sample *= gain;
        }
    }
}
