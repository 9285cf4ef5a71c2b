#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one knob of [`ControlParameters`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamId {
    MasterGain,
    WindSpeed,
    DistAmplitude,
    DistIntensity,
    DistResonance,
    DistPan,
    WhistleAmplitude,
    WhistlePan1,
    WhistlePan2,
    HowlAmplitude,
    HowlPan1,
    HowlPan2,
}

impl ParamId {
    pub const ALL: [ParamId; 12] = [
        ParamId::MasterGain,
        ParamId::WindSpeed,
        ParamId::DistAmplitude,
        ParamId::DistIntensity,
        ParamId::DistResonance,
        ParamId::DistPan,
        ParamId::WhistleAmplitude,
        ParamId::WhistlePan1,
        ParamId::WhistlePan2,
        ParamId::HowlAmplitude,
        ParamId::HowlPan1,
        ParamId::HowlPan2,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            ParamId::MasterGain => "Master Gain",
            ParamId::WindSpeed => "Wind Speed",
            ParamId::DistAmplitude => "Distant Gain",
            ParamId::DistIntensity => "Distant Intensity",
            ParamId::DistResonance => "Distant Resonance",
            ParamId::DistPan => "Distant Pan",
            ParamId::WhistleAmplitude => "Whistle Gain",
            ParamId::WhistlePan1 => "Whistle Pan1",
            ParamId::WhistlePan2 => "Whistle Pan2",
            ParamId::HowlAmplitude => "Howl Gain",
            ParamId::HowlPan1 => "Howl Pan1",
            ParamId::HowlPan2 => "Howl Pan2",
        }
    }

    /// Inclusive `(min, max)` the host clamps this knob into.
    pub fn range(self) -> (f32, f32) {
        match self {
            ParamId::MasterGain => (0.0, 1.0),
            ParamId::WindSpeed => (0.01, 40.0),
            ParamId::DistAmplitude | ParamId::WhistleAmplitude | ParamId::HowlAmplitude => {
                (0.0001, 1.5)
            }
            ParamId::DistIntensity => (1.0, 50.0),
            ParamId::DistResonance => (0.1, 50.0),
            ParamId::DistPan
            | ParamId::WhistlePan1
            | ParamId::WhistlePan2
            | ParamId::HowlPan1
            | ParamId::HowlPan2 => (0.0, 1.0),
        }
    }

    pub fn default_value(self) -> f32 {
        ControlParameters::default().get(self)
    }

    pub fn clamp(self, value: f32) -> f32 {
        let (min, max) = self.range();
        if value.is_nan() {
            return self.default_value();
        }
        value.clamp(min, max)
    }

    /// Maps a 0..1 controller position linearly onto the range.
    pub fn denormalize(self, normalized: f32) -> f32 {
        let (min, max) = self.range();
        let t = normalized.clamp(0.0, 1.0);
        min * (1.0 - t) + max * t
    }
}

/// Knob values for one block. Copied in by the host every `process` call.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ControlParameters {
    pub master_gain: f32,
    pub wind_speed: f32,
    pub dist_amplitude: f32,
    pub dist_intensity: f32,
    pub dist_resonance: f32,
    pub dist_pan: f32,
    pub whistle_amplitude: f32,
    pub whistle_pan1: f32,
    pub whistle_pan2: f32,
    pub howl_amplitude: f32,
    pub howl_pan1: f32,
    pub howl_pan2: f32,
}

impl ControlParameters {
    pub fn get(&self, id: ParamId) -> f32 {
        match id {
            ParamId::MasterGain => self.master_gain,
            ParamId::WindSpeed => self.wind_speed,
            ParamId::DistAmplitude => self.dist_amplitude,
            ParamId::DistIntensity => self.dist_intensity,
            ParamId::DistResonance => self.dist_resonance,
            ParamId::DistPan => self.dist_pan,
            ParamId::WhistleAmplitude => self.whistle_amplitude,
            ParamId::WhistlePan1 => self.whistle_pan1,
            ParamId::WhistlePan2 => self.whistle_pan2,
            ParamId::HowlAmplitude => self.howl_amplitude,
            ParamId::HowlPan1 => self.howl_pan1,
            ParamId::HowlPan2 => self.howl_pan2,
        }
    }

    fn slot(&mut self, id: ParamId) -> &mut f32 {
        match id {
            ParamId::MasterGain => &mut self.master_gain,
            ParamId::WindSpeed => &mut self.wind_speed,
            ParamId::DistAmplitude => &mut self.dist_amplitude,
            ParamId::DistIntensity => &mut self.dist_intensity,
            ParamId::DistResonance => &mut self.dist_resonance,
            ParamId::DistPan => &mut self.dist_pan,
            ParamId::WhistleAmplitude => &mut self.whistle_amplitude,
            ParamId::WhistlePan1 => &mut self.whistle_pan1,
            ParamId::WhistlePan2 => &mut self.whistle_pan2,
            ParamId::HowlAmplitude => &mut self.howl_amplitude,
            ParamId::HowlPan1 => &mut self.howl_pan1,
            ParamId::HowlPan2 => &mut self.howl_pan2,
        }
    }

    /// Sets one knob, clamped into its declared range.
    pub fn set(&mut self, id: ParamId, value: f32) {
        *self.slot(id) = id.clamp(value);
    }

    /// Copy with every knob clamped into its declared range.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for id in ParamId::ALL {
            out.set(id, self.get(id));
        }
        out
    }

    /// Every knob at the bottom of its range.
    pub fn minimum() -> Self {
        let mut out = Self::default();
        for id in ParamId::ALL {
            *out.slot(id) = id.range().0;
        }
        out
    }
}

impl Default for ControlParameters {
    fn default() -> Self {
        Self {
            master_gain: 0.5,
            wind_speed: 1.0,
            dist_amplitude: 0.75,
            dist_intensity: 30.0,
            dist_resonance: 1.0,
            dist_pan: 0.5,
            whistle_amplitude: 0.75,
            whistle_pan1: 0.5,
            whistle_pan2: 0.5,
            howl_amplitude: 0.75,
            howl_pan1: 0.5,
            howl_pan2: 0.5,
        }
    }
}

/// A single knob change travelling from a controller to the audio thread.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamEvent {
    Set { id: ParamId, value: f32 },
    Nudge { id: ParamId, delta: f32 },
}

impl ParamEvent {
    pub fn apply(&self, params: &mut ControlParameters) {
        match *self {
            ParamEvent::Set { id, value } => params.set(id, value),
            ParamEvent::Nudge { id, delta } => params.set(id, params.get(id) + delta),
        }
    }
}
