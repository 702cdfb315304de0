use leptos::*;
use system_ui::{WindowControl, WindowFrame};

use super::use_desktop_runtime;
use crate::{apps, model::WindowId, reducer::DesktopAction, window_manager::frame_style};

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let app = apps::app_descriptor(window_id);

    let frame = Signal::derive(move || runtime.state.get().frame(window_id).copied());
    let maximized = Signal::derive(move || frame.get().is_some_and(|frame| frame.maximized));
    let interacting = Signal::derive(move || {
        runtime.interaction.get().active_window() == Some(window_id)
    });
    let style = Signal::derive(move || {
        frame
            .get()
            .map(|frame| frame_style(frame, runtime.interaction.get().drag_preview(window_id)))
            .unwrap_or_default()
    });

    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: runtime.host.pointer_position(ev.client_x(), ev.client_y()),
        });
    });
    let begin_resize = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize { window_id });
    });
    let on_control = Callback::new(move |control: WindowControl| {
        runtime.dispatch_action(match control {
            WindowControl::Minimize => DesktopAction::MinimizeWindow { window_id },
            WindowControl::Maximize => DesktopAction::ToggleMaximize { window_id },
            WindowControl::Close => DesktopAction::CloseWindow { window_id },
        });
    });

    view! {
        <WindowFrame
            label=app.display_name.clone()
            title=app.window_title.as_str()
            data_app=window_id.key()
            style=style
            maximized=maximized
            interacting=interacting
            on_grab=begin_move
            on_resize_grab=begin_resize
            on_control=on_control
        >
            {apps::render_window_contents(window_id)}
        </WindowFrame>
    }
}
