use super::LayerProcessor;
use crate::synth::context::{ProcessSpec, StereoBufferMut};
use crate::synth::filter::ResonantFilter;
use crate::synth::noise::NoiseSource;
use crate::synth::oscillator::SineOscillator;
use crate::synth::panner::pan;
use crate::synth::params::ControlParameters;
use crate::synth::prelude::TAU;
use crate::synth::smoother::ModulationSmoother;

const HOWL_RESONANCE: f32 = 40.0;

#[derive(Clone, Copy, Debug)]
struct HowlVoiceConfig {
    /// Window of `wind_speed * 0.02` the envelope responds to.
    lower: f32,
    upper: f32,
    smoother_cutoff: f32,
    osc_scale: f32,
    osc_offset: f32,
    center: f32,
}

const HOWL_VOICES: [HowlVoiceConfig; 2] = [
    HowlVoiceConfig {
        lower: 0.35,
        upper: 0.6,
        smoother_cutoff: 0.5,
        osc_scale: 200.0,
        osc_offset: 30.0,
        center: 400.0,
    },
    HowlVoiceConfig {
        lower: 0.25,
        upper: 0.5,
        smoother_cutoff: 0.4,
        osc_scale: 100.0,
        osc_offset: 20.0,
        center: 200.0,
    },
];

/// Unsmoothed howl envelope: a raised-cosine bump over the clamped speed window.
///
/// Zero at both edges of the window and one at its midpoint.
#[inline]
pub fn howl_envelope_target(wind_speed: f32, lower: f32, upper: f32) -> f32 {
    let position = (wind_speed * 0.02).clamp(lower, upper) - lower;
    (TAU * (position * 2.0 - 0.25)).cos()
}

#[derive(Clone, Debug)]
struct HowlVoice {
    config: HowlVoiceConfig,
    filter: ResonantFilter,
    oscillator: SineOscillator,
    smoother: ModulationSmoother,
    envelope: f32,
}

impl HowlVoice {
    fn new(config: HowlVoiceConfig) -> Self {
        Self {
            config,
            filter: ResonantFilter::bandpass(config.center, HOWL_RESONANCE),
            oscillator: SineOscillator::new(config.osc_offset),
            smoother: ModulationSmoother::default(),
            envelope: 0.0,
        }
    }

    fn update(&mut self, wind_speed: f32) {
        let target = howl_envelope_target(wind_speed, self.config.lower, self.config.upper);
        self.envelope = self.smoother.process_sample(target);
        self.oscillator
            .set_frequency(self.envelope * self.config.osc_scale + self.config.osc_offset);
    }
}

/// Two low resonances, each tremoloed by a slow sine whose rate and depth
/// follow a smoothed envelope of the delayed wind speed.
#[derive(Clone, Debug)]
pub struct HowlLayer {
    voices: [HowlVoice; 2],
}

impl HowlLayer {
    pub fn new() -> Self {
        Self {
            voices: HOWL_VOICES.map(HowlVoice::new),
        }
    }

    /// Advances both envelopes by one block.
    pub fn update(&mut self, wind_speeds: [f32; 2]) {
        for (voice, speed) in self.voices.iter_mut().zip(wind_speeds) {
            voice.update(speed);
        }
    }

    pub fn envelopes(&self) -> [f32; 2] {
        [self.voices[0].envelope, self.voices[1].envelope]
    }

    pub fn oscillator_frequencies(&self) -> [f32; 2] {
        [
            self.voices[0].oscillator.frequency(),
            self.voices[1].oscillator.frequency(),
        ]
    }
}

impl Default for HowlLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerProcessor for HowlLayer {
    fn prepare(&mut self, spec: &ProcessSpec) {
        for voice in self.voices.iter_mut() {
            let config = voice.config;
            voice.filter.set_cutoff_frequency(config.center);
            voice.filter.set_resonance(HOWL_RESONANCE);
            voice.filter.prepare(spec.sample_rate);
            voice.oscillator.set_frequency(config.osc_offset);
            voice.oscillator.prepare(spec.sample_rate);
            voice
                .smoother
                .prepare(config.smoother_cutoff, spec.block_size, spec.sample_rate);
            voice.envelope = 0.0;
        }
    }

    fn process(
        &mut self,
        buffer: &mut StereoBufferMut<'_>,
        noise: &mut NoiseSource,
        params: &ControlParameters,
    ) {
        let amplitude = params.howl_amplitude;
        let gains1 = pan(params.howl_pan1);
        let gains2 = pan(params.howl_pan2);
        let [voice1, voice2] = &mut self.voices;
        let gain1 = amplitude * voice1.envelope;
        let gain2 = amplitude * voice2.envelope;

        for i in 0..buffer.len() {
            let input = noise.next();
            let output1 =
                voice1.filter.process_sample(input) * gain1 * voice1.oscillator.next_sample();
            let output2 =
                voice2.filter.process_sample(input) * gain2 * voice2.oscillator.next_sample();
            buffer.add_panned(i, output1, gains1);
            buffer.add_panned(i, output2, gains2);
        }

        voice1.filter.snap_to_zero();
        voice2.filter.snap_to_zero();
    }

    fn reset(&mut self) {
        for voice in self.voices.iter_mut() {
            voice.filter.reset();
            voice.oscillator.reset();
            voice.smoother.reset();
            voice.envelope = 0.0;
        }
    }
}
