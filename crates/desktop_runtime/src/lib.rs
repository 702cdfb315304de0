//! Desktop session controller for the portfolio: lock gate, window registry, frame interaction,
//! and the Leptos shell that renders them.
//!
//! State lives in [`DesktopState`] and [`InteractionState`] and changes only through
//! [`reduce_desktop`]. The [`DesktopProvider`] owns one session per mount.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod apps;
pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
