use super::LayerProcessor;
use crate::synth::context::{ProcessSpec, StereoBufferMut};
use crate::synth::filter::ResonantFilter;
use crate::synth::noise::NoiseSource;
use crate::synth::panner::pan;
use crate::synth::params::ControlParameters;

const INITIAL_CUTOFF: f32 = 10.0;
const INITIAL_RESONANCE: f32 = 1.0;

/// Broadband rumble: bandpassed noise whose centre tracks the current wind speed.
///
/// This is the reference source, so it reads the undelayed wind speed.
#[derive(Clone, Debug)]
pub struct DistantLayer {
    filter: ResonantFilter,
}

impl DistantLayer {
    pub fn new() -> Self {
        Self {
            filter: ResonantFilter::bandpass(INITIAL_CUTOFF, INITIAL_RESONANCE),
        }
    }

    pub fn update(&mut self, wind_speed: f32, intensity: f32, resonance: f32) {
        self.filter.set_cutoff_frequency(wind_speed * intensity);
        self.filter.set_resonance(resonance);
    }

    pub fn filter(&self) -> &ResonantFilter {
        &self.filter
    }
}

impl Default for DistantLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerProcessor for DistantLayer {
    fn prepare(&mut self, spec: &ProcessSpec) {
        self.filter.set_cutoff_frequency(INITIAL_CUTOFF);
        self.filter.set_resonance(INITIAL_RESONANCE);
        self.filter.prepare(spec.sample_rate);
    }

    fn process(
        &mut self,
        buffer: &mut StereoBufferMut<'_>,
        noise: &mut NoiseSource,
        params: &ControlParameters,
    ) {
        let amplitude = params.dist_amplitude;
        let gains = pan(params.dist_pan);

        for i in 0..buffer.len() {
            let output = self.filter.process_sample(noise.next()) * amplitude;
            buffer.add_panned(i, output, gains);
        }

        self.filter.snap_to_zero();
    }

    fn reset(&mut self) {
        self.filter.reset();
    }
}
