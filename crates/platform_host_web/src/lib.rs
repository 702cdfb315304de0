//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Navigation requests go through `bridge`, which routes to `window.location` on `wasm32`
//! and to an inert fallback everywhere else so host-side tests can exercise callers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Adapter factories used by runtime wiring.
pub mod adapters;
mod bridge;
pub mod external_url;

pub use adapters::{external_url_service, viewport_size};
pub use external_url::WebExternalUrlService;
