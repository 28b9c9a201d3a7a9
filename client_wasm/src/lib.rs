//! Browser client for the paddle ball game
//!
//! Canvas 2D rendering, mouse input and the `requestAnimationFrame` loop.
//! The DOM parts only build for `wasm32`; the input mapping and error types
//! are plain Rust so they can be tested natively.

pub mod error;
pub mod input;
pub mod session;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use error::ClientError;

#[cfg(target_arch = "wasm32")]
pub use app::{start, stop, DEFAULT_CANVAS_ID};
