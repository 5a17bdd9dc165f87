//! Inkpane Application
//!
//! Browser shell for the editor: startup configuration, the 2D canvas
//! painter and the DOM event wiring.

pub mod ids;
pub mod params;

pub use params::{UrlParams, apply_params, load_config, parse_params};

#[cfg(target_arch = "wasm32")]
mod canvas2d;
#[cfg(target_arch = "wasm32")]
mod shell;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
