//! Browser capability bridge used by `platform_host_web` adapters.
//!
//! Calls route to target-specific implementations so callers keep a single API.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn navigate_to(url: &str) -> Result<(), String> {
    imp::navigate_to(url).await
}

pub fn viewport_size() -> Option<(f64, f64)> {
    imp::viewport_size()
}
