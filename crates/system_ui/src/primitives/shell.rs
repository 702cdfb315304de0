//! Desktop chrome: shell root, window layer, icons, window frames, taskbar, status bar, launcher.

use leptos::ev::{MouseEvent, PointerEvent};

use super::*;

fn tilt_style(deg: i16) -> String {
    format!("--ui-tilt:{deg}deg;")
}

#[component]
/// Desktop root with its wallpaper backdrop. `locked` marks the session as behind the lock screen.
pub fn DesktopRoot(
    id: &'static str,
    wallpaper_url: &'static str,
    #[prop(into)] locked: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=id class="ui-desktop" data-locked=move || locked.get()>
            <div
                class="ui-desktop-backdrop"
                style=format!("background-image:url('{wallpaper_url}');")
                aria-hidden="true"
            ></div>
            {children()}
        </div>
    }
}

#[component]
/// Positioning context for windows and icons. Coordinates in window frames are relative to it.
pub fn DesktopWindowLayer(id: &'static str, children: Children) -> impl IntoView {
    view! { <div id=id class="ui-window-layer">{children()}</div> }
}

#[component]
/// Absolutely positioned desktop icon.
pub fn DesktopIconButton(
    icon: IconName,
    #[prop(into)] label: String,
    data_app: &'static str,
    #[prop(into)] style: Signal<String>,
    #[prop(into)] dragging: Signal<bool>,
    on_pointerdown: Callback<PointerEvent>,
    on_click: Callback<MouseEvent>,
    on_dblclick: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-desktop-icon"
            style=move || style.get()
            title=label.clone()
            data-app=data_app
            data-dragging=move || dragging.get()
            on:pointerdown=move |ev| on_pointerdown.call(ev)
            on:click=move |ev| on_click.call(ev)
            on:dblclick=move |ev| on_dblclick.call(ev)
        >
            <span class="ui-desktop-icon-tile">
                <Icon icon size=IconSize::Xl />
            </span>
            <span class="ui-desktop-icon-label">{label}</span>
        </button>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Title bar buttons, in display order.
pub enum WindowControl {
    /// Hide the window, keeping its frame.
    Minimize,
    /// Maximize, or restore when already maximized.
    Maximize,
    /// Close the window.
    Close,
}

impl WindowControl {
    const ROW: [Self; 3] = [Self::Minimize, Self::Maximize, Self::Close];

    fn token(self) -> &'static str {
        match self {
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
            Self::Close => "close",
        }
    }

    fn label(self, maximized: bool) -> &'static str {
        match self {
            Self::Minimize => "Minimize",
            Self::Maximize if maximized => "Restore",
            Self::Maximize => "Maximize",
            Self::Close => "Close",
        }
    }

    fn icon(self, maximized: bool) -> IconName {
        match self {
            Self::Minimize => IconName::WindowMinimize,
            Self::Maximize if maximized => IconName::WindowRestore,
            Self::Maximize => IconName::WindowMaximize,
            Self::Close => IconName::Dismiss,
        }
    }
}

#[component]
/// Desktop window chrome around `children`.
///
/// The title bar is the drag handle (`on_grab`) and double-clicking it reports
/// [`WindowControl::Maximize`]. Control buttons keep their pointer-down away from the drag
/// handle. The south-east grip (`on_resize_grab`) is hidden while maximized.
pub fn WindowFrame(
    #[prop(into)] label: String,
    title: &'static str,
    data_app: &'static str,
    #[prop(into)] style: Signal<String>,
    #[prop(into)] maximized: Signal<bool>,
    #[prop(into)] interacting: Signal<bool>,
    on_grab: Callback<PointerEvent>,
    on_resize_grab: Callback<PointerEvent>,
    on_control: Callback<WindowControl>,
    children: Children,
) -> impl IntoView {
    let controls = WindowControl::ROW
        .into_iter()
        .map(|control| {
            view! {
                <button
                    type="button"
                    class="ui-window-control"
                    data-control=control.token()
                    aria-label=move || control.label(maximized.get())
                    title=move || control.label(maximized.get())
                    on:pointerdown=|ev: PointerEvent| ev.stop_propagation()
                    on:dblclick=|ev: MouseEvent| ev.stop_propagation()
                    on:click=move |_| on_control.call(control)
                >
                    {move || view! { <Icon icon=control.icon(maximized.get()) size=IconSize::Lg /> }}
                </button>
            }
        })
        .collect_view();

    view! {
        <section
            class="ui-window-frame"
            style=move || style.get()
            role="dialog"
            aria-label=label
            data-app=data_app
            data-maximized=move || maximized.get()
            data-interacting=move || interacting.get()
        >
            <header
                class="ui-window-titlebar"
                on:pointerdown=move |ev| on_grab.call(ev)
                on:dblclick=move |_| on_control.call(WindowControl::Maximize)
            >
                <div class="ui-window-title">
                    {(!title.is_empty()).then(|| view! { <span class="ui-window-title-chip">{title}</span> })}
                </div>
                <div class="ui-window-controls">{controls}</div>
            </header>
            <div class="ui-window-body">{children()}</div>
            <Show when=move || !maximized.get()>
                <div
                    class="ui-resize-handle"
                    data-edge="south-east"
                    aria-hidden="true"
                    on:pointerdown=move |ev| on_resize_grab.call(ev)
                >
                    <span class="ui-resize-grip"></span>
                    <span class="ui-resize-grip"></span>
                </div>
            </Show>
        </section>
    }
}

#[component]
/// Floating taskbar dock.
pub fn Taskbar(aria_label: &'static str, children: Children) -> impl IntoView {
    view! {
        <nav class="ui-taskbar" aria-label=aria_label>
            <div class="ui-taskbar-inner">{children()}</div>
        </nav>
    }
}

#[component]
/// Named run of taskbar buttons.
pub fn TaskbarGroup(name: &'static str, children: Children) -> impl IntoView {
    view! { <div class="ui-taskbar-group" data-group=name>{children()}</div> }
}

#[component]
/// Slanted bar between taskbar groups.
pub fn TaskbarSeparator(tilt_deg: i16) -> impl IntoView {
    view! { <span class="ui-taskbar-separator" style=tilt_style(tilt_deg) aria-hidden="true"></span> }
}

#[derive(Debug, Clone, Copy)]
/// Popup a [`TaskbarButton`] opens.
pub struct MenuToggle {
    /// Element id of the popup.
    pub menu_id: &'static str,
    /// Whether the popup is showing.
    pub open: Signal<bool>,
}

#[component]
/// Tilted taskbar button with a hover label.
///
/// `active` marks an app with an open window. `menu` wires the popup attributes for a
/// button that toggles one.
pub fn TaskbarButton(
    icon: IconName,
    #[prop(into)] label: String,
    tilt_deg: i16,
    #[prop(optional)] data_app: Option<&'static str>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional)] menu: Option<MenuToggle>,
    on_click: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-taskbar-button"
            style=tilt_style(tilt_deg)
            aria-label=label.clone()
            aria-haspopup=menu.map(|_| "menu")
            aria-controls=menu.map(|menu| menu.menu_id)
            aria-expanded=move || menu.map(|menu| menu.open.get().to_string())
            data-app=data_app
            data-active=move || active.get()
            on:click=move |ev| on_click.call(ev)
        >
            <span class="ui-taskbar-button-face"></span>
            <span class="ui-taskbar-button-icon">
                <Icon icon size=IconSize::Lg />
            </span>
            <span class="ui-taskbar-button-tooltip">{label}</span>
        </button>
    }
}

#[component]
/// Top status bar: brand mark on the left, `children` on the right.
pub fn StatusBar(brand: &'static str, children: Children) -> impl IntoView {
    view! {
        <header class="ui-statusbar">
            <div class="ui-statusbar-brand">
                <Icon icon=IconName::Command size=IconSize::Sm />
                <span>{brand}</span>
            </div>
            <div class="ui-statusbar-status">{children()}</div>
        </header>
    }
}

#[component]
/// "All Apps" popup.
pub fn LauncherMenu(id: &'static str, children: Children) -> impl IntoView {
    view! {
        <div id=id class="ui-launcher-menu" role="menu" aria-label="Application launcher">
            {children()}
        </div>
    }
}

#[component]
/// Launcher entry; `selected` marks an app whose window is showing.
pub fn LauncherItem(
    icon: IconName,
    data_app: &'static str,
    #[prop(into)] selected: Signal<bool>,
    on_click: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-launcher-item"
            role="menuitem"
            data-app=data_app
            data-selected=move || selected.get()
            on:click=move |ev| on_click.call(ev)
        >
            <Icon icon size=IconSize::Md />
            <span>{children()}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn control_row_reads_minimize_maximize_close() {
        let tokens: Vec<_> = WindowControl::ROW.iter().map(|c| c.token()).collect();
        assert_eq!(tokens, vec!["minimize", "maximize", "close"]);
    }

    #[test]
    fn maximize_control_flips_to_restore() {
        assert_eq!(WindowControl::Maximize.label(false), "Maximize");
        assert_eq!(WindowControl::Maximize.label(true), "Restore");
        assert_eq!(WindowControl::Maximize.icon(true), IconName::WindowRestore);
        assert_eq!(WindowControl::Close.icon(true), IconName::Dismiss);
    }

    #[test]
    fn tilt_is_a_css_custom_property() {
        assert_eq!(tilt_style(-6), "--ui-tilt:-6deg;");
    }
}
