use platform_host::ExternalUrlService;

use crate::{bridge, WebExternalUrlService};

/// Fallback viewport used when no browser window is available.
pub const FALLBACK_VIEWPORT: (f64, f64) = (1024.0, 768.0);

/// Returns the external URL service for the active build target.
pub fn external_url_service() -> impl ExternalUrlService + Copy + 'static {
    WebExternalUrlService
}

/// Returns the window's inner `(width, height)` in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    bridge::viewport_size().unwrap_or(FALLBACK_VIEWPORT)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn viewport_falls_back_off_browser() {
        assert_eq!(viewport_size(), FALLBACK_VIEWPORT);
    }
}
