#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
mod cpal_backend;
#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
mod error;
#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
pub use self::cpal_backend::CpalBackend;
#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
pub use self::error::BackendError;

pub trait AudioBackend {
    type Error;

    fn start(&mut self) -> Result<(), Self::Error>;
    fn stop(&mut self) -> Result<(), Self::Error>;
}
