//! App catalog decoded from the build-time manifest JSON, plus window content dispatch.

mod placeholders;

use std::sync::OnceLock;

use desktop_app_about::AboutApp;
use desktop_app_contact::ContactApp;
use desktop_app_projects::ProjectsApp;
use leptos::*;
use serde::Deserialize;
use system_ui::IconName;

use crate::model::{WindowId, WindowRect};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

/// Desktop slot of the WEB (switch view) icon, after every app icon.
pub const WEB_ICON_SLOT: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
/// Initial frame geometry from an app manifest.
pub struct WindowDefaults {
    /// Left offset.
    pub x: i32,
    /// Top offset.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Launcher, icon, and window metadata for one app.
pub struct AppDescriptor {
    /// Window hosting the app.
    pub app_id: WindowId,
    /// Name shown in the launcher and as the window's accessible label.
    pub display_name: String,
    /// Title chip text; empty hides the chip.
    pub window_title: String,
    /// Desktop icon caption.
    pub desktop_icon_label: String,
    /// Taskbar tooltip.
    pub taskbar_label: String,
    /// `system_ui` icon token.
    pub icon: String,
    /// Whether a desktop icon is shown.
    pub show_on_desktop: bool,
    /// Whether a taskbar button is shown.
    pub show_in_taskbar: bool,
    /// Desktop icon column position (`y = slot * 100`).
    pub desktop_icon_slot: u8,
    /// Initial frame geometry.
    pub window_defaults: WindowDefaults,
}

impl AppDescriptor {
    /// Resolved icon; unknown tokens fall back to a star.
    pub fn icon_name(&self) -> IconName {
        IconName::from_token(&self.icon).unwrap_or(IconName::Star)
    }

    /// Frame rect used when the window opens.
    pub fn default_rect(&self) -> WindowRect {
        WindowRect {
            x: self.window_defaults.x,
            y: self.window_defaults.y,
            w: self.window_defaults.width,
            h: self.window_defaults.height,
        }
    }
}

fn builtin_descriptor(
    app_id: WindowId,
    display_name: &str,
    window_title: &str,
    icon_label: &str,
    taskbar_label: &str,
    icon: &str,
    show_in_taskbar: bool,
) -> AppDescriptor {
    let rect = WindowRect::default();
    AppDescriptor {
        app_id,
        display_name: display_name.to_string(),
        window_title: window_title.to_string(),
        desktop_icon_label: icon_label.to_string(),
        taskbar_label: taskbar_label.to_string(),
        icon: icon.to_string(),
        show_on_desktop: true,
        show_in_taskbar,
        desktop_icon_slot: app_id.index() as u8,
        window_defaults: WindowDefaults {
            x: rect.x,
            y: rect.y,
            width: rect.w,
            height: rect.h,
        },
    }
}

fn builtin_catalog() -> &'static [AppDescriptor] {
    static BUILTIN: OnceLock<Vec<AppDescriptor>> = OnceLock::new();
    BUILTIN.get_or_init(|| {
        vec![
            builtin_descriptor(
                WindowId::Projects,
                "Projects",
                "Projects",
                "Projects",
                "Projects",
                "folder",
                true,
            ),
            builtin_descriptor(WindowId::About, "About Me", "", "ME", "ME", "user", true),
            builtin_descriptor(
                WindowId::Contact,
                "Contact",
                "Contact",
                "Contact",
                "CONTACT",
                "mail",
                true,
            ),
            builtin_descriptor(WindowId::Misc, "Misc", "Misc", "Misc", "Misc", "grid", false),
            AppDescriptor {
                show_on_desktop: false,
                ..builtin_descriptor(
                    WindowId::Spotify,
                    "Spotify",
                    "Spotify",
                    "Spotify",
                    "Spotify",
                    "music",
                    false,
                )
            },
        ]
    })
}

/// Decodes a catalog payload, filling ids the payload misses from the built-in defaults.
///
/// # Errors
///
/// Returns the `serde_json` error when the payload is not a valid catalog.
pub fn decode_catalog(json: &str) -> Result<Vec<AppDescriptor>, serde_json::Error> {
    let mut catalog: Vec<AppDescriptor> = serde_json::from_str(json)?;
    for builtin in builtin_catalog() {
        if !catalog.iter().any(|app| app.app_id == builtin.app_id) {
            catalog.push(builtin.clone());
        }
    }
    catalog.sort_by_key(|app| (app.desktop_icon_slot, app.app_id));
    Ok(catalog)
}

/// Returns the app catalog ordered by desktop slot.
pub fn app_catalog() -> &'static [AppDescriptor] {
    static CATALOG: OnceLock<Vec<AppDescriptor>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        decode_catalog(APP_MANIFEST_CATALOG_JSON).unwrap_or_else(|err| {
            logging::warn!("app manifest catalog failed to decode, using built-in defaults: {err}");
            builtin_catalog().to_vec()
        })
    })
}

/// Catalog entry for `app_id`.
pub fn app_descriptor(app_id: WindowId) -> &'static AppDescriptor {
    app_catalog()
        .iter()
        .find(|app| app.app_id == app_id)
        .unwrap_or(&builtin_catalog()[app_id.index()])
}

/// Apps with a desktop icon, in slot order.
pub fn desktop_icon_apps() -> Vec<&'static AppDescriptor> {
    app_catalog()
        .iter()
        .filter(|app| app.show_on_desktop)
        .collect()
}

/// Apps with a taskbar button, in slot order.
pub fn taskbar_apps() -> Vec<&'static AppDescriptor> {
    app_catalog()
        .iter()
        .filter(|app| app.show_in_taskbar)
        .collect()
}

/// Renders the app hosted by `window_id`.
pub fn render_window_contents(window_id: WindowId) -> View {
    match window_id {
        WindowId::Projects => view! { <ProjectsApp /> }.into_view(),
        WindowId::About => view! { <AboutApp /> }.into_view(),
        WindowId::Contact => view! { <ContactApp /> }.into_view(),
        WindowId::Misc => view! { <placeholders::MiscApp /> }.into_view(),
        WindowId::Spotify => view! { <placeholders::SpotifyApp /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn generated_catalog_covers_every_window() {
        let catalog = decode_catalog(APP_MANIFEST_CATALOG_JSON).expect("generated catalog decodes");
        assert_eq!(catalog.len(), WindowId::ALL.len());
        for id in WindowId::ALL {
            assert_eq!(app_descriptor(id).app_id, id);
        }
    }

    #[test]
    fn desktop_icons_follow_slot_order() {
        let ids: Vec<_> = desktop_icon_apps().iter().map(|app| app.app_id).collect();
        assert_eq!(
            ids,
            vec![
                WindowId::Projects,
                WindowId::About,
                WindowId::Contact,
                WindowId::Misc
            ]
        );
        assert!(desktop_icon_apps()
            .iter()
            .all(|app| app.desktop_icon_slot < WEB_ICON_SLOT));
        assert!(!app_descriptor(WindowId::Spotify).show_on_desktop);
        assert!(builtin_catalog()
            .iter()
            .filter(|app| app.show_on_desktop)
            .all(|app| app.app_id != WindowId::Spotify));
    }

    #[test]
    fn taskbar_lists_the_three_content_apps() {
        let labels: Vec<_> = taskbar_apps()
            .iter()
            .map(|app| app.taskbar_label.as_str())
            .collect();
        assert_eq!(labels, vec!["Projects", "ME", "CONTACT"]);
    }

    #[test]
    fn about_window_has_no_title_chip() {
        let about = app_descriptor(WindowId::About);
        assert_eq!(about.window_title, "");
        assert_eq!(about.icon_name(), IconName::User);
        assert_eq!(
            about.default_rect(),
            WindowRect {
                x: 50,
                y: 50,
                w: 800,
                h: 500
            }
        );
    }

    #[test]
    fn partial_catalog_is_filled_from_builtins() {
        let json = r#"[{
            "app_id": "misc",
            "display_name": "Odds",
            "window_title": "Odds",
            "desktop_icon_label": "Odds",
            "taskbar_label": "Odds",
            "icon": "no-such-icon",
            "show_on_desktop": true,
            "show_in_taskbar": false,
            "desktop_icon_slot": 3,
            "window_defaults": { "x": 10, "y": 20, "width": 640, "height": 480 }
        }]"#;
        let catalog = decode_catalog(json).expect("decodes");
        assert_eq!(catalog.len(), 5);
        let misc = catalog
            .iter()
            .find(|app| app.app_id == WindowId::Misc)
            .expect("misc present");
        assert_eq!(misc.display_name, "Odds");
        assert_eq!(misc.icon_name(), IconName::Star);
        assert!(decode_catalog("{not json").is_err());
    }
}
