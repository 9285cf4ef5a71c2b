use crate::synth::SpecError;
use cpal::SampleFormat;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("no output device available")]
    NoDevice,
    #[error("invalid device selection")]
    InvalidSelection,
    #[error("unsupported sample format {0:?}")]
    UnsupportedFormat(SampleFormat),
    #[error("wind engine lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Devices(#[from] cpal::DevicesError),
    #[error(transparent)]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),
    #[error(transparent)]
    Build(#[from] cpal::BuildStreamError),
    #[error(transparent)]
    Play(#[from] cpal::PlayStreamError),
    #[error(transparent)]
    Pause(#[from] cpal::PauseStreamError),
    #[error(transparent)]
    Spec(#[from] SpecError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
