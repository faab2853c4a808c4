#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

// Scene generation, camera math and page rules are plain Rust so they can be
// tested on the host; only the browser glue is wasm-specific.

pub mod config;
pub mod error;
pub mod page;
pub mod particles;
pub mod view;

pub use config::GalaxyConfig;
pub use error::GalaxyError;
pub use view::ViewState;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
