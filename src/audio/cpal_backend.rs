use super::{AudioBackend, BackendError};
use crate::runtime::NativeWind;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream};
use std::sync::{Arc, Mutex};

pub struct CpalBackend {
    stream: Option<Stream>,
    wind: Arc<Mutex<NativeWind>>,
}

impl CpalBackend {
    pub fn new(wind: Arc<Mutex<NativeWind>>) -> Self {
        Self { stream: None, wind }
    }

    fn select_output_device(&self, host: &cpal::Host) -> Result<cpal::Device, BackendError> {
        if cfg!(target_os = "linux") {
            self.select_linux_output_device(host)
        } else {
            host.default_output_device().ok_or(BackendError::NoDevice)
        }
    }

    fn select_linux_output_device(&self, host: &cpal::Host) -> Result<cpal::Device, BackendError> {
        let mut device_names = Vec::new();

        for device in host.devices()? {
            let name = device.name().unwrap_or_default();
            if name.to_lowercase().starts_with("default:")
                || name.to_lowercase().contains("pipewire")
            {
                device_names.push(name);
            }
        }

        if device_names.is_empty() {
            return host.default_output_device().ok_or(BackendError::NoDevice);
        }

        log::info!("Available output devices:");
        for (i, name) in device_names.iter().enumerate() {
            log::info!("{}. {}", i + 1, name);
        }

        println!("Select device (default 1): ");
        let mut choice = String::new();
        std::io::stdin().read_line(&mut choice)?;
        let choice = choice
            .trim()
            .parse::<usize>()
            .unwrap_or(1)
            .saturating_sub(1);

        let selected_name = device_names
            .get(choice)
            .ok_or(BackendError::InvalidSelection)?;

        host.devices()?
            .find(|d| d.name().map(|n| n == *selected_name).unwrap_or(false))
            .ok_or(BackendError::NoDevice)
    }

    fn build_stream(&mut self) -> Result<Stream, BackendError> {
        let host = cpal::default_host();
        let device = self.select_output_device(&host)?;
        log::info!("Selected device: {}", device.name().unwrap_or_default());

        let supported_config = device.default_output_config()?;
        let sample_format = supported_config.sample_format();
        if sample_format != SampleFormat::F32 {
            return Err(BackendError::UnsupportedFormat(sample_format));
        }
        let stream_config: cpal::StreamConfig = supported_config.into();

        let sample_rate = stream_config.sample_rate.0;
        let channels = stream_config.channels as usize;
        {
            let mut wind = self.wind.lock().map_err(|_| BackendError::Poisoned)?;
            wind.prepare(sample_rate as f64)?;
        }

        let wind = self.wind.clone();
        let stream = device.build_output_stream(
            &stream_config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| match wind.lock() {
                Ok(mut wind) => wind.process(data, channels),
                Err(_) => data.fill(0.0),
            },
            |err| log::error!("Stream error: {}", err),
            None,
        )?;

        Ok(stream)
    }
}

impl AudioBackend for CpalBackend {
    type Error = BackendError;

    fn start(&mut self) -> Result<(), BackendError> {
        let stream = self.build_stream()?;
        stream.play()?;
        self.stream = Some(stream);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), BackendError> {
        if let Some(stream) = &self.stream {
            stream.pause()?;
        }
        Ok(())
    }
}
