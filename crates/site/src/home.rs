//! `/` route: the desktop session or the single-page website, switchable at runtime.

use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;

use crate::website::WebsiteHome;

/// Viewports narrower than this open in website mode.
pub const WEBSITE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which rendition of the home page is mounted.
pub enum ViewMode {
    /// Locked desktop session with windows and icons.
    Desktop,
    /// Scrolling single-page website.
    Website,
}

impl ViewMode {
    /// Mode chosen on first mount for a viewport `width` in CSS pixels.
    pub fn initial_for_width(width: f64) -> Self {
        if width < WEBSITE_BREAKPOINT_PX {
            Self::Website
        } else {
            Self::Desktop
        }
    }

    /// Stable token for the `data-view-mode` hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Website => "website",
        }
    }
}

#[component]
/// Home page. Switching to the desktop mounts a fresh, locked session.
pub fn HomePage() -> impl IntoView {
    let (width, _) = platform_host_web::viewport_size();
    let requested = create_rw_signal(ViewMode::initial_for_width(width));
    let mode = create_memo(move |_| requested.get());

    let show_desktop = Callback::new(move |_| requested.set(ViewMode::Desktop));
    let show_website = Callback::new(move |_| requested.set(ViewMode::Website));

    view! {
        <div class="site-home" data-view-mode=move || mode.get().token()>
            {move || match mode.get() {
                ViewMode::Desktop => view! {
                    <DesktopProvider>
                        <DesktopShell on_switch_view=show_website />
                    </DesktopProvider>
                }
                .into_view(),
                ViewMode::Website => view! { <WebsiteHome on_switch_view=show_desktop /> }.into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn narrow_viewports_start_on_the_website() {
        assert_eq!(ViewMode::initial_for_width(375.0), ViewMode::Website);
        assert_eq!(ViewMode::initial_for_width(767.9), ViewMode::Website);
        assert_eq!(ViewMode::initial_for_width(768.0), ViewMode::Desktop);
        assert_eq!(ViewMode::initial_for_width(1440.0), ViewMode::Desktop);
    }

    #[test]
    fn host_fallback_viewport_opens_the_desktop() {
        let (width, _) = platform_host_web::viewport_size();
        assert_eq!(ViewMode::initial_for_width(width), ViewMode::Desktop);
    }
}
