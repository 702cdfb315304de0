//! External URL host-service adapter for browser contexts.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter that hands the URL to the current window's location.
///
/// `mailto:` links open the user's mail client without leaving the page; `http(s)` links
/// replace the current document.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if url.trim().is_empty() {
                return Err("refusing to navigate to an empty URL".to_string());
            }
            bridge::navigate_to(url).await
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_url_is_rejected_before_reaching_the_bridge() {
        assert_eq!(
            block_on(WebExternalUrlService.open_url("  ")),
            Err("refusing to navigate to an empty URL".to_string())
        );
    }

    #[test]
    fn non_wasm_navigation_is_unsupported() {
        let result = block_on(WebExternalUrlService.open_url("mailto:someone@example.com"));
        assert!(result.is_err());
    }
}
