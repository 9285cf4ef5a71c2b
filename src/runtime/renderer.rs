use crate::synth::{
    AudioProcessor, ControlParameters, Engine, ParamEvent, ProcessSpec, SpecError,
};

/// Drives an [`Engine`] from a host that hands out interleaved buffers of any length.
///
/// Host buffers are cut into engine blocks of at most `block_size` frames and
/// rendered through preallocated planar scratch, so rendering never allocates.
pub struct BlockRenderer {
    engine: Engine,
    params: ControlParameters,
    left: Vec<f32>,
    right: Vec<f32>,
    block_size: usize,
}

impl BlockRenderer {
    pub fn new(engine: Engine, params: ControlParameters, block_size: usize) -> Self {
        Self {
            engine,
            params: params.clamped(),
            left: vec![0.0; block_size],
            right: vec![0.0; block_size],
            block_size,
        }
    }

    /// Prepares the engine for `sample_rate` at this renderer's block size.
    pub fn prepare(&mut self, sample_rate: f64) -> Result<ProcessSpec, SpecError> {
        let spec = ProcessSpec::new(sample_rate, self.block_size)?;
        self.left.resize(spec.block_size, 0.0);
        self.right.resize(spec.block_size, 0.0);
        AudioProcessor::prepare(&mut self.engine, spec);
        Ok(spec)
    }

    pub fn set_block_size(&mut self, block_size: usize) {
        self.block_size = block_size;
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn is_prepared(&self) -> bool {
        self.engine.is_prepared()
    }

    pub fn params(&self) -> &ControlParameters {
        &self.params
    }

    pub fn set_params(&mut self, params: ControlParameters) {
        self.params = params.clamped();
    }

    pub fn apply(&mut self, event: &ParamEvent) {
        event.apply(&mut self.params);
    }

    pub fn reset(&mut self) {
        AudioProcessor::reset(&mut self.engine);
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Fills `output` with interleaved frames of `channels` samples each.
    ///
    /// Channel 0 gets the left signal and channel 1 the right; any further
    /// channels stay silent. A mono output carries the left signal alone:
    /// the pan law inverts the left gain, so summing the pair would cancel
    /// every centred source.
    pub fn render_interleaved(&mut self, output: &mut [f32], channels: usize) {
        if channels == 0 || !self.engine.is_prepared() {
            output.fill(0.0);
            return;
        }
        let block_samples = self.left.len() * channels;
        for chunk in output.chunks_mut(block_samples) {
            let frames = chunk.len() / channels;
            let left = &mut self.left[..frames];
            let right = &mut self.right[..frames];
            self.engine.process(left, right, &self.params);

            for (i, frame) in chunk.chunks_mut(channels).enumerate() {
                if frame.len() < channels {
                    frame.fill(0.0);
                    continue;
                }
                frame[0] = left[i];
                if channels > 1 {
                    frame[1] = right[i];
                    frame[2..].fill(0.0);
                }
            }
        }
    }
}
