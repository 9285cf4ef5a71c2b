use crate::synth::{ParamEvent, ParamId};

#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
mod keyboard;
#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
mod midi;
#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
pub use self::keyboard::{key_action, KeyAction, KeyboardHandler};
#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
pub use self::midi::{MidiError, MidiHandler};

/// First controller number of the block of ten per-layer knobs.
const LAYER_CC_BASE: u8 = 20;

/// Knob a MIDI controller number drives: CC 1 wind speed, CC 7 master gain,
/// CC 20-29 the layer knobs in declaration order.
pub fn cc_to_param(cc: u8) -> Option<ParamId> {
    match cc {
        1 => Some(ParamId::WindSpeed),
        7 => Some(ParamId::MasterGain),
        LAYER_CC_BASE..=29 => ParamId::ALL
            .iter()
            .copied()
            .filter(|id| !matches!(id, ParamId::WindSpeed | ParamId::MasterGain))
            .nth((cc - LAYER_CC_BASE) as usize),
        _ => None,
    }
}

/// Translates a raw three-byte MIDI message. Anything but a mapped Control Change is ignored.
pub fn midi_message_to_event(status: u8, data1: u8, data2: u8) -> Option<ParamEvent> {
    if status & 0xF0 != 0xB0 {
        return None;
    }
    let id = cc_to_param(data1)?;
    let normalized = f32::from(data2.min(127)) / 127.0;
    Some(ParamEvent::Set {
        id,
        value: id.denormalize(normalized),
    })
}

/// Wind speed selected by digit key `digit` (1-9), spread evenly up to the maximum.
pub fn wind_speed_preset(digit: u8) -> Option<f32> {
    if !(1..=9).contains(&digit) {
        return None;
    }
    let (_, max) = ParamId::WindSpeed.range();
    Some(max * f32::from(digit) / 9.0)
}
