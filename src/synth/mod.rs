pub mod context;
pub mod engine;
pub mod filter;
pub mod layers;
pub mod noise;
pub mod oscillator;
pub mod panner;
pub mod params;
pub mod prelude;
pub mod processor;
pub mod propagation;
pub mod smoother;

pub use self::context::{ProcessSpec, SpecError, StereoBufferMut};
pub use self::engine::Engine;
pub use self::params::{ControlParameters, ParamEvent, ParamId};
pub use self::processor::AudioProcessor;
