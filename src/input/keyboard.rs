use super::wind_speed_preset;
use crate::synth::{ParamEvent, ParamId};
use device_query::{DeviceQuery, DeviceState, Keycode};
use std::collections::HashSet;
use std::sync::mpsc::Sender;

const WIND_SPEED_STEP: f32 = 0.5;
const MASTER_GAIN_STEP: f32 = 0.05;

/// What a single key press asks the runtime to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    Param(ParamEvent),
    Quit,
}

/// Arrows nudge wind speed and master gain, 1-9 pick a wind speed, Escape quits.
pub fn key_action(key: &Keycode) -> Option<KeyAction> {
    let nudge = |id, delta| Some(KeyAction::Param(ParamEvent::Nudge { id, delta }));
    match key {
        Keycode::Escape => Some(KeyAction::Quit),
        Keycode::Up => nudge(ParamId::WindSpeed, WIND_SPEED_STEP),
        Keycode::Down => nudge(ParamId::WindSpeed, -WIND_SPEED_STEP),
        Keycode::Right => nudge(ParamId::MasterGain, MASTER_GAIN_STEP),
        Keycode::Left => nudge(ParamId::MasterGain, -MASTER_GAIN_STEP),
        _ => {
            let value = wind_speed_preset(digit(key)?)?;
            Some(KeyAction::Param(ParamEvent::Set {
                id: ParamId::WindSpeed,
                value,
            }))
        }
    }
}

fn digit(key: &Keycode) -> Option<u8> {
    let digit = match key {
        Keycode::Key1 => 1,
        Keycode::Key2 => 2,
        Keycode::Key3 => 3,
        Keycode::Key4 => 4,
        Keycode::Key5 => 5,
        Keycode::Key6 => 6,
        Keycode::Key7 => 7,
        Keycode::Key8 => 8,
        Keycode::Key9 => 9,
        _ => return None,
    };
    Some(digit)
}

pub struct KeyboardHandler {
    device_state: DeviceState,
    pressed: HashSet<Keycode>,
    param_sender: Sender<ParamEvent>,
}

impl KeyboardHandler {
    pub fn new(param_sender: Sender<ParamEvent>) -> Self {
        Self {
            device_state: DeviceState::new(),
            pressed: HashSet::new(),
            param_sender,
        }
    }

    /// Sends events for newly pressed keys. Returns `true` once Escape is pressed.
    pub fn update(&mut self) -> bool {
        let keys: HashSet<Keycode> = self.device_state.get_keys().into_iter().collect();
        let mut quit = false;

        for key in keys.difference(&self.pressed) {
            match key_action(key) {
                Some(KeyAction::Param(event)) => {
                    log::debug!("Key '{:?}' pressed - {:?}", key, event);
                    if let Err(e) = self.param_sender.send(event) {
                        log::error!("Error sending parameter event: {}", e);
                    }
                }
                Some(KeyAction::Quit) => quit = true,
                None => {}
            }
        }

        self.pressed = keys;
        quit
    }
}
