mod renderer;
pub use renderer::BlockRenderer;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use wasm::WasmWind;

#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
pub mod native;
#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
pub use native::NativeWind;
