//! Synthesis engine — per-channel waveforms evaluated over a cell grid.
//!
//! Everything here is plain Rust with no host dependencies, so the same code
//! drives the browser canvas (via WASM) and the offline renderer used in
//! tests.

pub mod animation;
pub mod grid;
pub mod mirror;
pub mod renderer;
pub mod shaper;
pub mod signal;
