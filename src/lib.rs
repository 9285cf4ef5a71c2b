pub mod audio;
#[cfg(feature = "serde")]
pub mod config;
pub mod input;
pub mod runtime;
pub mod synth;
