//! Single-page website mode: sticky header, hero, about, skills, featured projects, contact, and
//! footer.
//!
//! Scroll position drives two pieces of header state: the opaque "scrolled" style and the
//! highlighted nav link. Both are derived by [`ScrollState::observe`] from plain numbers so the
//! rules stay testable off-browser.

mod carousel;
mod footer;
mod header;
mod sections;

use leptos::*;
use system_ui::{ButtonVariant, IconButton, IconName};

use self::{
    footer::SiteFooter,
    header::SiteHeader,
    sections::{AboutSection, ContactSection, Hero, ProjectsSection, SkillsSection},
};

/// Scroll offset past which the header turns opaque.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Viewport line a section must span to count as active.
pub const SECTION_PROBE_Y_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// In-page section reachable from the header nav.
pub struct NavSection {
    /// Element id (and fragment) of the section.
    pub id: &'static str,
    /// Nav link text.
    pub label: &'static str,
}

impl NavSection {
    /// `#id` fragment link.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Sections in page order.
pub const NAV_SECTIONS: [NavSection; 4] = [
    NavSection {
        id: "about",
        label: "About",
    },
    NavSection {
        id: "skills",
        label: "Skills",
    },
    NavSection {
        id: "projects",
        label: "Projects",
    },
    NavSection {
        id: "contact",
        label: "Contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
/// Viewport-relative vertical extent of a section.
pub struct SectionBounds {
    /// Section id.
    pub id: &'static str,
    /// `getBoundingClientRect().top`.
    pub top: f64,
    /// `getBoundingClientRect().bottom`.
    pub bottom: f64,
}

/// First section spanning [`SECTION_PROBE_Y_PX`], if any.
pub fn active_section(bounds: impl IntoIterator<Item = SectionBounds>) -> Option<&'static str> {
    bounds
        .into_iter()
        .find(|section| section.top <= SECTION_PROBE_Y_PX && section.bottom >= SECTION_PROBE_Y_PX)
        .map(|section| section.id)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Header state derived from the page scroll.
pub struct ScrollState {
    /// Page scrolled past [`SCROLLED_THRESHOLD_PX`].
    pub scrolled: bool,
    /// Highlighted nav section.
    pub active: Option<&'static str>,
}

impl ScrollState {
    /// Next state after a scroll event. The highlight sticks when no section spans the probe line.
    pub fn observe(self, scroll_y: f64, bounds: impl IntoIterator<Item = SectionBounds>) -> Self {
        Self {
            scrolled: scroll_y > SCROLLED_THRESHOLD_PX,
            active: active_section(bounds).or(self.active),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_scroll() -> (f64, Vec<SectionBounds>) {
    let scroll_y = window().scroll_y().unwrap_or_default();
    let doc = document();
    let bounds = NAV_SECTIONS
        .iter()
        .filter_map(|section| {
            let rect = doc.get_element_by_id(section.id)?.get_bounding_client_rect();
            Some(SectionBounds {
                id: section.id,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect();
    (scroll_y, bounds)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_scroll() -> (f64, Vec<SectionBounds>) {
    (0.0, Vec::new())
}

#[cfg(target_arch = "wasm32")]
fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_top() {}

#[component]
/// Website rendition of the home page.
pub fn WebsiteHome(on_switch_view: Callback<()>) -> impl IntoView {
    let scroll = create_rw_signal(ScrollState::default());

    let listener = window_event_listener(ev::scroll, move |_| {
        let (scroll_y, bounds) = read_scroll();
        let current = scroll.get_untracked();
        let next = current.observe(scroll_y, bounds);
        if next != current {
            scroll.set(next);
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <div class="site-website">
            <SiteHeader scroll=scroll.read_only() on_switch_view />
            <Hero />
            <AboutSection />
            <SkillsSection />
            <ProjectsSection />
            <ContactSection />
            <IconButton
                icon=IconName::ArrowUp
                variant=ButtonVariant::Primary
                layout_class="site-back-to-top"
                label="Back to top"
                on_click=Callback::new(move |_| scroll_to_top())
            />
            <SiteFooter />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bounds(id: &'static str, top: f64, bottom: f64) -> SectionBounds {
        SectionBounds { id, top, bottom }
    }

    #[test]
    fn section_spanning_the_probe_line_is_active() {
        let page = [
            bounds("about", -600.0, -20.0),
            bounds("skills", -20.0, 480.0),
            bounds("projects", 480.0, 1100.0),
        ];
        assert_eq!(active_section(page), Some("skills"));
        assert_eq!(active_section([bounds("about", 100.0, 700.0)]), Some("about"));
        assert_eq!(active_section([bounds("about", -500.0, 100.0)]), Some("about"));
        assert_eq!(active_section([bounds("about", 101.0, 700.0)]), None);
    }

    #[test]
    fn highlight_sticks_between_sections() {
        let state = ScrollState::default().observe(900.0, [bounds("projects", 40.0, 800.0)]);
        assert_eq!(
            state,
            ScrollState {
                scrolled: true,
                active: Some("projects"),
            }
        );

        let state = state.observe(950.0, [bounds("projects", 300.0, 800.0)]);
        assert_eq!(state.active, Some("projects"));
    }

    #[test]
    fn header_turns_opaque_past_threshold() {
        assert!(!ScrollState::default().observe(50.0, []).scrolled);
        assert!(ScrollState::default().observe(50.5, []).scrolled);
    }

    #[test]
    fn nav_links_point_at_section_fragments() {
        let hrefs: Vec<_> = NAV_SECTIONS.iter().map(NavSection::href).collect();
        assert_eq!(hrefs, vec!["#about", "#skills", "#projects", "#contact"]);
    }
}
