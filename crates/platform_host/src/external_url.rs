//! External URL host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for leaving the page: external links and `mailto:` deep links.
pub trait ExternalUrlService {
    /// Navigates to `url` using the host's external navigation mechanism.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Default)]
/// In-memory service that records every requested URL instead of navigating.
pub struct RecordingExternalUrlService {
    opened: RefCell<Vec<String>>,
}

impl RecordingExternalUrlService {
    /// Returns the URLs requested so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for RecordingExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn recording_service_keeps_request_order() {
        let service = RecordingExternalUrlService::default();
        block_on(service.open_url("mailto:a@example.com")).expect("record first");
        block_on(service.open_url("https://example.com")).expect("record second");
        assert_eq!(
            service.opened(),
            vec![
                "mailto:a@example.com".to_string(),
                "https://example.com".to_string()
            ]
        );
    }

    #[test]
    fn noop_service_always_succeeds() {
        assert_eq!(block_on(NoopExternalUrlService.open_url("x")), Ok(()));
    }
}
