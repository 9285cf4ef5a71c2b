use super::context::{ProcessSpec, StereoBufferMut};
use super::layers::{DistantLayer, HowlLayer, LayerProcessor, WhistleLayer};
use super::noise::NoiseSource;
use super::params::ControlParameters;
use super::processor::AudioProcessor;
use super::propagation::{DelayTap, WindSpeedHistory};

/// The wind synthesizer: three noise layers driven by one wind-speed control.
///
/// Block-rate work (history write, tap reads, filter retuning, envelope
/// smoothing) happens once at the top of every `process` call; the layers then
/// render sample by sample into the same stereo buffer, which is finally
/// scaled by the master gain.
pub struct Engine {
    spec: Option<ProcessSpec>,
    noise: NoiseSource,
    history: WindSpeedHistory,
    whistle_taps: [DelayTap; 2],
    howl_taps: [DelayTap; 2],
    distant: DistantLayer,
    whistle: WhistleLayer,
    howl: HowlLayer,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_noise(NoiseSource::from_entropy())
    }

    /// Engine whose noise sequence is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_noise(NoiseSource::seeded(seed))
    }

    fn with_noise(noise: NoiseSource) -> Self {
        Self {
            spec: None,
            noise,
            history: WindSpeedHistory::new(),
            whistle_taps: [DelayTap::default(); 2],
            howl_taps: [DelayTap::default(); 2],
            distant: DistantLayer::new(),
            whistle: WhistleLayer::new(),
            howl: HowlLayer::new(),
        }
    }

    /// Shorthand for [`AudioProcessor::prepare`]. Both values must be positive.
    pub fn prepare(&mut self, sample_rate: f64, block_size: usize) {
        debug_assert!(sample_rate > 0.0, "sample rate must be positive");
        debug_assert!(block_size > 0, "block size must be positive");
        AudioProcessor::prepare(
            self,
            ProcessSpec {
                sample_rate,
                block_size,
            },
        );
    }

    /// Shorthand for [`AudioProcessor::process`] over two planar channels.
    pub fn process(&mut self, left: &mut [f32], right: &mut [f32], params: &ControlParameters) {
        AudioProcessor::process(self, StereoBufferMut::new(left, right), params);
    }

    pub fn is_prepared(&self) -> bool {
        self.spec.is_some()
    }

    pub fn spec(&self) -> Option<ProcessSpec> {
        self.spec
    }

    pub fn history(&self) -> &WindSpeedHistory {
        &self.history
    }

    pub fn whistle_taps(&self) -> &[DelayTap; 2] {
        &self.whistle_taps
    }

    pub fn howl_taps(&self) -> &[DelayTap; 2] {
        &self.howl_taps
    }

    pub fn distant(&self) -> &DistantLayer {
        &self.distant
    }

    pub fn whistle(&self) -> &WhistleLayer {
        &self.whistle
    }

    pub fn howl(&self) -> &HowlLayer {
        &self.howl
    }

    fn update_settings(&mut self, params: &ControlParameters) {
        let wind_speed = params.wind_speed;
        self.history.push(wind_speed);

        let whistle_pans = [params.whistle_pan1, params.whistle_pan2];
        let howl_pans = [params.howl_pan1, params.howl_pan2];

        self.distant
            .update(wind_speed, params.dist_intensity, params.dist_resonance);

        let history = &self.history;
        let mut whistle_speeds = [0.0; 2];
        for ((tap, pan), speed) in self
            .whistle_taps
            .iter_mut()
            .zip(whistle_pans)
            .zip(whistle_speeds.iter_mut())
        {
            *speed = tap.update(history, pan);
        }
        let mut howl_speeds = [0.0; 2];
        for ((tap, pan), speed) in self
            .howl_taps
            .iter_mut()
            .zip(howl_pans)
            .zip(howl_speeds.iter_mut())
        {
            *speed = tap.update(history, pan);
        }

        self.whistle.update(whistle_speeds);
        self.howl.update(howl_speeds);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioProcessor for Engine {
    fn prepare(&mut self, spec: ProcessSpec) {
        log::debug!(
            "Preparing wind engine: {} Hz, {} samples per block",
            spec.sample_rate,
            spec.block_size
        );
        self.distant.prepare(&spec);
        self.whistle.prepare(&spec);
        self.howl.prepare(&spec);
        self.history.reset();
        self.whistle_taps.iter_mut().for_each(DelayTap::reset);
        self.howl_taps.iter_mut().for_each(DelayTap::reset);
        self.spec = Some(spec);
    }

    fn process(&mut self, mut buffer: StereoBufferMut<'_>, params: &ControlParameters) {
        debug_assert!(self.is_prepared(), "process called before prepare");
        buffer.clear();

        self.update_settings(params);
        self.distant.process(&mut buffer, &mut self.noise, params);
        self.whistle.process(&mut buffer, &mut self.noise, params);
        self.howl.process(&mut buffer, &mut self.noise, params);

        buffer.apply_gain(params.master_gain);
    }

    fn reset(&mut self) {
        self.distant.reset();
        self.whistle.reset();
        self.howl.reset();
        self.history.reset();
        self.whistle_taps.iter_mut().for_each(DelayTap::reset);
        self.howl_taps.iter_mut().for_each(DelayTap::reset);
    }
}
