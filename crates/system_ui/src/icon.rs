//! Centralized outline icon catalog.
//!
//! Components reference icons by semantic [`IconName`] and render them through [`Icon`], so no
//! crate embeds raw SVG snippets. Glyphs are 24px outline strokes drawn with `currentColor`.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Folder with contents (Projects app).
    Folder,
    /// Person silhouette (About app, lock screen avatar).
    User,
    /// Envelope (Contact app).
    Mail,
    /// 3x3 grid (All Apps launcher, Misc folder).
    Grid,
    /// Leave-the-desktop arrow (switch to website).
    LogOut,
    /// Monitor (switch to desktop).
    Monitor,
    /// Window minimize control.
    WindowMinimize,
    /// Window maximize control.
    WindowMaximize,
    /// Window restore control.
    WindowRestore,
    /// Close / dismiss.
    Dismiss,
    /// Hamburger menu.
    Menu,
    /// Network status.
    Wifi,
    /// Battery status.
    Battery,
    /// Volume status.
    Volume,
    /// Search glyph.
    Search,
    /// Command key glyph.
    Command,
    /// Right arrow.
    ArrowRight,
    /// Left arrow.
    ArrowLeft,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Diagonal "open" arrow.
    ArrowUpRight,
    /// Left chevron.
    ChevronLeft,
    /// Right chevron.
    ChevronRight,
    /// Five-point star.
    Star,
    /// GitHub mark.
    Github,
    /// LinkedIn mark.
    Linkedin,
    /// Twitter bird.
    Twitter,
    /// Download tray.
    Download,
    /// Phone handset.
    Phone,
    /// Map pin.
    MapPin,
    /// Music note (Spotify window).
    Music,
    /// Code brackets.
    Code,
    /// Server rack.
    Server,
    /// Database cylinder.
    Database,
    /// Wrench.
    Settings,
    /// External link box.
    ExternalLink,
    /// Calendar page.
    Calendar,
    /// Briefcase.
    Briefcase,
    /// Price tag.
    Tag,
    /// Graduation cap.
    GraduationCap,
    /// Globe.
    Globe,
}

impl IconName {
    /// Stable token used for CSS hooks and manifest/config lookups.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::User => "user",
            Self::Mail => "mail",
            Self::Grid => "grid",
            Self::LogOut => "log-out",
            Self::Monitor => "monitor",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
            Self::Menu => "menu",
            Self::Wifi => "wifi",
            Self::Battery => "battery",
            Self::Volume => "volume",
            Self::Search => "search",
            Self::Command => "command",
            Self::ArrowRight => "arrow-right",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowUp => "arrow-up",
            Self::ArrowDown => "arrow-down",
            Self::ArrowUpRight => "arrow-up-right",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::Star => "star",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Download => "download",
            Self::Phone => "phone",
            Self::MapPin => "map-pin",
            Self::Music => "music",
            Self::Code => "code",
            Self::Server => "server",
            Self::Database => "database",
            Self::Settings => "settings",
            Self::ExternalLink => "external-link",
            Self::Calendar => "calendar",
            Self::Briefcase => "briefcase",
            Self::Tag => "tag",
            Self::GraduationCap => "graduation-cap",
            Self::Globe => "globe",
        }
    }

    /// Every icon in declaration order.
    pub const ALL: [IconName; 41] = [
        Self::Folder,
        Self::User,
        Self::Mail,
        Self::Grid,
        Self::LogOut,
        Self::Monitor,
        Self::WindowMinimize,
        Self::WindowMaximize,
        Self::WindowRestore,
        Self::Dismiss,
        Self::Menu,
        Self::Wifi,
        Self::Battery,
        Self::Volume,
        Self::Search,
        Self::Command,
        Self::ArrowRight,
        Self::ArrowLeft,
        Self::ArrowUp,
        Self::ArrowDown,
        Self::ArrowUpRight,
        Self::ChevronLeft,
        Self::ChevronRight,
        Self::Star,
        Self::Github,
        Self::Linkedin,
        Self::Twitter,
        Self::Download,
        Self::Phone,
        Self::MapPin,
        Self::Music,
        Self::Code,
        Self::Server,
        Self::Database,
        Self::Settings,
        Self::ExternalLink,
        Self::Calendar,
        Self::Briefcase,
        Self::Tag,
        Self::GraduationCap,
        Self::Globe,
    ];

    /// Parses a stable token back into an icon.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.token() == token)
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Folder => {
                r#"<path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z"/>"#
            }
            Self::User => {
                r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#
            }
            Self::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Self::Grid => {
                r#"<rect width="18" height="18" x="3" y="3" rx="2"/><path d="M3 9h18"/><path d="M3 15h18"/><path d="M9 3v18"/><path d="M15 3v18"/>"#
            }
            Self::LogOut => {
                r#"<path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/><path d="m16 17 5-5-5-5"/><path d="M21 12H9"/>"#
            }
            Self::Monitor => {
                r#"<rect width="20" height="14" x="2" y="3" rx="2"/><path d="M8 21h8"/><path d="M12 17v4"/>"#
            }
            Self::WindowMinimize => r#"<path d="M5 12h14"/>"#,
            Self::WindowMaximize => {
                r#"<path d="M15 3h6v6"/><path d="M9 21H3v-6"/><path d="M21 3l-7 7"/><path d="M3 21l7-7"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M4 14h6v6"/><path d="M20 10h-6V4"/><path d="M14 10l7-7"/><path d="M3 21l7-7"/>"#
            }
            Self::Dismiss => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Self::Menu => r#"<path d="M4 6h16"/><path d="M4 12h16"/><path d="M4 18h16"/>"#,
            Self::Wifi => {
                r#"<path d="M12 20h.01"/><path d="M2 8.82a15 15 0 0 1 20 0"/><path d="M5 12.86a10 10 0 0 1 14 0"/><path d="M8.5 16.43a5 5 0 0 1 7 0"/>"#
            }
            Self::Battery => {
                r#"<rect width="16" height="10" x="2" y="7" rx="2"/><path d="M22 11v2"/>"#
            }
            Self::Volume => {
                r#"<path d="M11 5 6 9H2v6h4l5 4V5Z"/><path d="M15.54 8.46a5 5 0 0 1 0 7.07"/><path d="M19.07 4.93a10 10 0 0 1 0 14.14"/>"#
            }
            Self::Search => r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
            Self::Command => {
                r#"<path d="M15 6v12a3 3 0 1 0 3-3H6a3 3 0 1 0 3 3V6a3 3 0 1 0-3 3h12a3 3 0 1 0-3-3"/>"#
            }
            Self::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Self::ArrowLeft => r#"<path d="m12 19-7-7 7-7"/><path d="M19 12H5"/>"#,
            Self::ArrowUp => r#"<path d="m5 12 7-7 7 7"/><path d="M12 19V5"/>"#,
            Self::ArrowDown => r#"<path d="M12 5v14"/><path d="m19 12-7 7-7-7"/>"#,
            Self::ArrowUpRight => r#"<path d="M7 7h10v10"/><path d="M7 17 17 7"/>"#,
            Self::ChevronLeft => r#"<path d="m15 18-6-6 6-6"/>"#,
            Self::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
            Self::Star => {
                r#"<path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2Z"/>"#
            }
            Self::Github => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            Self::Linkedin => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6Z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
            }
            Self::Twitter => {
                r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2Z"/>"#
            }
            Self::Download => {
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="m7 10 5 5 5-5"/><path d="M12 15V3"/>"#
            }
            Self::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92Z"/>"#
            }
            Self::MapPin => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
            Self::Music => {
                r#"<path d="M9 18V5l12-2v13"/><circle cx="6" cy="18" r="3"/><circle cx="18" cy="16" r="3"/>"#
            }
            Self::Code => r#"<path d="m16 18 6-6-6-6"/><path d="m8 6-6 6 6 6"/>"#,
            Self::Server => {
                r#"<rect width="20" height="8" x="2" y="2" rx="2"/><rect width="20" height="8" x="2" y="14" rx="2"/><path d="M6 6h.01"/><path d="M6 18h.01"/>"#
            }
            Self::Database => {
                r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5v14a9 3 0 0 0 18 0V5"/><path d="M3 12a9 3 0 0 0 18 0"/>"#
            }
            Self::Settings => {
                r#"<path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76Z"/>"#
            }
            Self::ExternalLink => {
                r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
            }
            Self::Calendar => {
                r#"<rect width="18" height="18" x="3" y="4" rx="2"/><path d="M16 2v4"/><path d="M8 2v4"/><path d="M3 10h18"/>"#
            }
            Self::Briefcase => {
                r#"<rect width="20" height="14" x="2" y="7" rx="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#
            }
            Self::Tag => {
                r#"<path d="M12.59 2.59A2 2 0 0 0 11.17 2H4a2 2 0 0 0-2 2v7.17a2 2 0 0 0 .59 1.42l8.7 8.7a2.43 2.43 0 0 0 3.42 0l6.58-6.58a2.43 2.43 0 0 0 0-3.42Z"/><circle cx="7.5" cy="7.5" r=".5"/>"#
            }
            Self::GraduationCap => {
                r#"<path d="M22 10v6"/><path d="M2 10l10-5 10 5-10 5Z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#
            }
            Self::Globe => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 16px standard icon (menus, status bar).
    #[default]
    Sm,
    /// 20px medium icon (window chrome, buttons).
    Md,
    /// 28px large icon (taskbar).
    Lg,
    /// 32px extra-large icon (desktop launchers).
    Xl,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 28,
            Self::Xl => 32,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[component]
/// Renders an outline icon from the centralized catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_are_unique_and_parse_back() {
        let tokens: HashSet<_> = IconName::ALL.iter().map(|icon| icon.token()).collect();
        assert_eq!(tokens.len(), IconName::ALL.len());
        for icon in IconName::ALL {
            assert_eq!(IconName::from_token(icon.token()), Some(icon));
        }
        assert_eq!(IconName::from_token("nope"), None);
    }

    #[test]
    fn content_icon_tokens_resolve() {
        for token in ["code", "server", "database", "settings", "github", "linkedin", "twitter"] {
            assert!(IconName::from_token(token).is_some(), "missing icon `{token}`");
        }
    }
}
