pub mod config;
pub mod pudelko;

pub use pudelko::{FormatSpec, Pudelko, PudelkoError, Unit};

#[cfg(target_arch = "wasm32")]
pub mod wasm;
