use leptos::*;
use system_ui::{
    IconName, LauncherItem, LauncherMenu, MenuToggle, Taskbar, TaskbarButton, TaskbarGroup,
    TaskbarSeparator,
};

use super::{switch_view, use_desktop_runtime};
use crate::{apps, reducer::DesktopAction};

const LAUNCHER_MENU_ID: &str = "desktop-launcher-menu";
const APP_BUTTON_TILTS: [i16; 3] = [2, -2, 3];

fn app_button_tilt(index: usize) -> i16 {
    APP_BUTTON_TILTS[index % APP_BUTTON_TILTS.len()]
}

#[component]
pub(super) fn DesktopTaskbar(on_switch_view: Option<Callback<()>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let launcher_open = Signal::derive(move || state.get().launcher_open);

    let app_buttons = apps::taskbar_apps()
        .into_iter()
        .enumerate()
        .map(|(index, app)| {
            let window_id = app.app_id;
            view! {
                <TaskbarButton
                    icon=app.icon_name()
                    label=app.taskbar_label.clone()
                    tilt_deg=app_button_tilt(index)
                    data_app=window_id.key()
                    active=Signal::derive(move || state.get().is_open(window_id))
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleWindow { window_id });
                    })
                />
            }
        })
        .collect_view();

    view! {
        <Taskbar aria_label="Desktop taskbar">
            <TaskbarGroup name="launcher">
                <TaskbarButton
                    icon=IconName::Grid
                    label="All Apps"
                    tilt_deg=-3
                    menu=MenuToggle {
                        menu_id: LAUNCHER_MENU_ID,
                        open: launcher_open,
                    }
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleLauncher);
                    })
                />
            </TaskbarGroup>
            <TaskbarSeparator tilt_deg=12 />
            <TaskbarGroup name="apps">{app_buttons}</TaskbarGroup>
            <TaskbarSeparator tilt_deg=-6 />
            <TaskbarGroup name="system">
                <TaskbarButton
                    icon=IconName::LogOut
                    label="WEB"
                    tilt_deg=-1
                    data_app="web"
                    on_click=Callback::new(move |_| switch_view(on_switch_view))
                />
            </TaskbarGroup>
        </Taskbar>
        <Show when=move || launcher_open.get()>
            <LauncherMenu id=LAUNCHER_MENU_ID>
                {apps::app_catalog()
                    .iter()
                    .map(|app| {
                        let window_id = app.app_id;
                        view! {
                            <LauncherItem
                                icon=app.icon_name()
                                data_app=window_id.key()
                                selected=Signal::derive(move || state.get().is_visible(window_id))
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::RevealWindow { window_id });
                                })
                            >
                                {app.display_name.as_str()}
                            </LauncherItem>
                        }
                    })
                    .collect_view()}
            </LauncherMenu>
        </Show>
    }
}
