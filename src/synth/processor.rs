use super::context::{ProcessSpec, StereoBufferMut};
use super::params::ControlParameters;

/// The lifecycle a host drives: configure once, then one call per audio block.
pub trait AudioProcessor {
    /// (Re)initialises every coefficient and clears all state to silence.
    fn prepare(&mut self, spec: ProcessSpec);

    /// Overwrites `buffer` with the next block. Must only be called after `prepare`.
    fn process(&mut self, buffer: StereoBufferMut<'_>, params: &ControlParameters);

    /// Clears runtime state without touching coefficients.
    fn reset(&mut self);
}
