use super::BlockRenderer;
use crate::audio::{AudioBackend, BackendError, CpalBackend};
use crate::config::WindConfig;
use crate::input::{KeyboardHandler, MidiHandler};
use crate::synth::{Engine, ParamEvent, ProcessSpec, SpecError};
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Native runtime for desktop/CPAL backends.
pub struct NativeWind {
    renderer: BlockRenderer,
    param_receiver: Receiver<ParamEvent>,
}

impl NativeWind {
    pub fn new(param_receiver: Receiver<ParamEvent>, config: &WindConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => Engine::with_seed(seed),
            None => Engine::new(),
        };
        Self {
            renderer: BlockRenderer::new(engine, config.params, config.block_size),
            param_receiver,
        }
    }

    pub fn prepare(&mut self, sample_rate: f64) -> Result<ProcessSpec, SpecError> {
        let spec = self.renderer.prepare(sample_rate)?;
        log::info!(
            "Wind engine ready at {} Hz, {} samples per block",
            spec.sample_rate,
            spec.block_size
        );
        Ok(spec)
    }

    pub fn process(&mut self, output: &mut [f32], channels: usize) {
        self.process_param_events();
        self.renderer.render_interleaved(output, channels);
    }

    fn process_param_events(&mut self) {
        while let Ok(event) = self.param_receiver.try_recv() {
            self.renderer.apply(&event);
        }
    }
}

pub fn start(config: WindConfig) -> Result<(), BackendError> {
    let (param_tx, param_rx) = channel();

    let wind = Arc::new(Mutex::new(NativeWind::new(param_rx, &config)));

    let mut audio_backend = CpalBackend::new(wind);
    audio_backend.start()?;

    let mut keyboard_handler = config
        .keyboard_enabled
        .then(|| KeyboardHandler::new(param_tx.clone()));
    let mut midi_handler = config.midi_enabled.then(|| MidiHandler::new(param_tx));

    log::info!("Arrows: wind speed / master gain, 1-9: wind speed presets, Esc: quit");
    loop {
        if let Some(keyboard) = keyboard_handler.as_mut() {
            if keyboard.update() {
                break;
            }
        }
        if let Some(midi) = midi_handler.as_mut() {
            midi.update();
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    audio_backend.stop()?;
    log::info!("Audio stopped");
    Ok(())
}
