mod distant;
mod howl;
mod whistle;

pub use self::distant::DistantLayer;
pub use self::howl::{howl_envelope_target, HowlLayer};
pub use self::whistle::{whistle_amp_mod, WhistleLayer};

use super::context::{ProcessSpec, StereoBufferMut};
use super::noise::NoiseSource;
use super::params::ControlParameters;

/// One additive stereo contribution to the wind.
///
/// `process` adds into `buffer` without clearing it; block-rate settings are
/// pushed in by the engine before it is called.
pub trait LayerProcessor {
    fn prepare(&mut self, spec: &ProcessSpec);
    fn process(
        &mut self,
        buffer: &mut StereoBufferMut<'_>,
        noise: &mut NoiseSource,
        params: &ControlParameters,
    );
    fn reset(&mut self);
}
