//! Portfolio site: routing, document metadata, and the home page that switches between the
//! desktop session and the single-page website.

mod home;
mod web_app;
mod website;

pub use home::{HomePage, ViewMode};
pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
/// Mounts [`SiteApp`] into `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
