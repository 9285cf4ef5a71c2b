use super::BlockRenderer;
use crate::synth::{ControlParameters, Engine, ParamEvent, ParamId};
use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

const CHANNELS: usize = 2;

/// WASM wind runtime (no threads, no channels, direct API)
#[wasm_bindgen]
pub struct WasmWind {
    renderer: BlockRenderer,
    temp_buffer: Vec<f32>,
}

#[wasm_bindgen]
impl WasmWind {
    #[wasm_bindgen(constructor)]
    pub fn new(sample_rate: f64, block_size: usize) -> Result<WasmWind, JsError> {
        let mut renderer =
            BlockRenderer::new(Engine::new(), ControlParameters::default(), block_size);
        renderer.prepare(sample_rate)?;
        Ok(WasmWind {
            renderer,
            temp_buffer: Vec::new(),
        })
    }

    /// Render `length` interleaved stereo frames into a JS-friendly Float32Array
    #[wasm_bindgen]
    pub fn render(&mut self, length: usize) -> Float32Array {
        let samples = length * CHANNELS;
        if self.temp_buffer.len() != samples {
            self.temp_buffer = vec![0.0; samples];
        }
        self.renderer
            .render_interleaved(&mut self.temp_buffer, CHANNELS);

        Float32Array::from(self.temp_buffer.as_slice())
    }

    /// Sets the knob at `index` (declaration order), clamped into its range.
    #[wasm_bindgen]
    pub fn set_param(&mut self, index: usize, value: f32) {
        match ParamId::from_index(index) {
            Some(id) => self.renderer.apply(&ParamEvent::Set { id, value }),
            None => web_sys::console::warn_1(&format!("Unknown parameter index {}", index).into()),
        }
    }

    /// Replaces every knob from a `{ windSpeed, masterGain, ... }` object.
    #[wasm_bindgen]
    pub fn set_params(&mut self, params: JsValue) -> Result<(), JsError> {
        let params: ControlParameters = serde_wasm_bindgen::from_value(params)?;
        self.renderer.set_params(params);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn params(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(self.renderer.params())?)
    }

    #[wasm_bindgen]
    pub fn prepare(&mut self, sample_rate: f64, block_size: usize) -> Result<(), JsError> {
        self.renderer.set_block_size(block_size);
        self.renderer.prepare(sample_rate)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.renderer.reset();
    }
}
