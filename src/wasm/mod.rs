//! WebAssembly bindings for the bus decoder.
//!
//! This module lets a browser front end hand a textual capture to the
//! decoder and receive annotations back, either as a list or one at a time
//! through a JavaScript callback.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::TraceDecoder;
