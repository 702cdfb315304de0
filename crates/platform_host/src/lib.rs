//! Typed host-service contracts shared by the desktop runtime, mini-apps, and browser adapters.
//!
//! This crate is the API boundary for the two host capabilities the portfolio needs: navigating
//! to URLs outside the page (including `mailto:` deep links) and reading the wall clock. Concrete
//! browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clock;
pub mod external_url;

pub use clock::WallClockSnapshot;
pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService,
};
