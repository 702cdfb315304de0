//! Desktop shell UI composition and interaction surfaces.

mod desktop_icons;
mod lock_screen;
mod taskbar;
mod top_bar;
mod window;

use leptos::*;
use system_ui::{DesktopRoot, DesktopWindowLayer};

use self::{
    desktop_icons::DesktopIcons, lock_screen::LockScreen, taskbar::DesktopTaskbar,
    top_bar::TopBar, window::DesktopWindow,
};

use crate::{host::DESKTOP_LAYER_ID, reducer::DesktopAction};

const DESKTOP_WALLPAPER_URL: &str =
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=2564&auto=format&fit=crop";

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Full desktop experience: lock screen, status bar, icons, windows, and taskbar.
///
/// `on_switch_view` is invoked by the WEB icon and taskbar button to leave desktop mode.
pub fn DesktopShell(#[prop(optional)] on_switch_view: Option<Callback<()>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let locked = Signal::derive(move || state.get().locked);

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && state.get_untracked().launcher_open {
            runtime.dispatch_action(DesktopAction::CloseLauncher);
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <DesktopRoot id="desktop-shell-root" wallpaper_url=DESKTOP_WALLPAPER_URL locked=locked>
            <TopBar />
            <DesktopWindowLayer id=DESKTOP_LAYER_ID>
                <div
                    class="desktop-dismiss-layer"
                    on:mousedown=move |_| {
                        if state.get_untracked().launcher_open {
                            runtime.dispatch_action(DesktopAction::CloseLauncher);
                        }
                    }
                />
                <DesktopIcons on_switch_view=on_switch_view />
                <For each=move || state.get().visible_windows() key=|id| *id let:window_id>
                    <DesktopWindow window_id=window_id />
                </For>
            </DesktopWindowLayer>
            <DesktopTaskbar on_switch_view=on_switch_view />
            <LockScreen />
        </DesktopRoot>
    }
}

fn switch_view(on_switch_view: Option<Callback<()>>) {
    if let Some(on_switch_view) = on_switch_view {
        on_switch_view.call(());
    }
}
