use super::LayerProcessor;
use crate::synth::context::{ProcessSpec, StereoBufferMut};
use crate::synth::filter::ResonantFilter;
use crate::synth::noise::NoiseSource;
use crate::synth::panner::pan;
use crate::synth::params::ControlParameters;

const WHISTLE_RESONANCE: f32 = 60.0;
const INITIAL_CUTOFF: f32 = 1000.0;

/// Whistle gain for a wind speed: silent up to 5, then quadratic in the excess.
#[inline]
pub fn whistle_amp_mod(wind_speed: f32) -> f32 {
    let excess = (wind_speed * 0.02 - 0.1).max(0.0);
    excess * excess
}

#[derive(Clone, Debug)]
struct WhistleVoice {
    filter: ResonantFilter,
    base_cutoff: f32,
    cutoff_per_speed: f32,
    amp_mod: f32,
}

impl WhistleVoice {
    fn new(base_cutoff: f32, cutoff_per_speed: f32) -> Self {
        Self {
            filter: ResonantFilter::bandpass(INITIAL_CUTOFF, WHISTLE_RESONANCE),
            base_cutoff,
            cutoff_per_speed,
            amp_mod: 0.0,
        }
    }

    fn update(&mut self, wind_speed: f32) {
        self.filter
            .set_cutoff_frequency(wind_speed * self.cutoff_per_speed + self.base_cutoff);
        self.amp_mod = whistle_amp_mod(wind_speed);
    }
}

/// Two narrow resonances that only sound once the delayed wind speed passes a threshold.
#[derive(Clone, Debug)]
pub struct WhistleLayer {
    voices: [WhistleVoice; 2],
}

impl WhistleLayer {
    pub fn new() -> Self {
        Self {
            voices: [WhistleVoice::new(600.0, 8.0), WhistleVoice::new(1000.0, 20.0)],
        }
    }

    /// Retunes both voices from their taps' delayed wind speeds.
    pub fn update(&mut self, wind_speeds: [f32; 2]) {
        for (voice, speed) in self.voices.iter_mut().zip(wind_speeds) {
            voice.update(speed);
        }
    }

    pub fn cutoffs(&self) -> [f32; 2] {
        [
            self.voices[0].filter.cutoff_frequency(),
            self.voices[1].filter.cutoff_frequency(),
        ]
    }

    pub fn amp_mods(&self) -> [f32; 2] {
        [self.voices[0].amp_mod, self.voices[1].amp_mod]
    }
}

impl Default for WhistleLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerProcessor for WhistleLayer {
    fn prepare(&mut self, spec: &ProcessSpec) {
        for voice in self.voices.iter_mut() {
            voice.filter.set_cutoff_frequency(INITIAL_CUTOFF);
            voice.filter.set_resonance(WHISTLE_RESONANCE);
            voice.filter.prepare(spec.sample_rate);
            voice.amp_mod = 0.0;
        }
    }

    fn process(
        &mut self,
        buffer: &mut StereoBufferMut<'_>,
        noise: &mut NoiseSource,
        params: &ControlParameters,
    ) {
        let amplitude = params.whistle_amplitude;
        let gains1 = pan(params.whistle_pan1);
        let gains2 = pan(params.whistle_pan2);
        let [voice1, voice2] = &mut self.voices;
        let gain1 = amplitude * voice1.amp_mod;
        let gain2 = amplitude * voice2.amp_mod;

        for i in 0..buffer.len() {
            let input = noise.next();
            let output1 = voice1.filter.process_sample(input) * gain1;
            let output2 = voice2.filter.process_sample(input) * gain2;
            buffer.add_panned(i, output1, gains1);
            buffer.add_panned(i, output2, gains2);
        }

        voice1.filter.snap_to_zero();
        voice2.filter.snap_to_zero();
    }

    fn reset(&mut self) {
        for voice in self.voices.iter_mut() {
            voice.filter.reset();
            voice.amp_mod = 0.0;
        }
    }
}
