use leptos::*;
use system_ui::{DesktopIconButton, IconName};

use super::{switch_view, use_desktop_runtime};
use crate::{
    apps::{self, WEB_ICON_SLOT},
    host::{release_listeners, PointerListeners},
    reducer::DesktopAction,
};

const ICON_SLOT_SPACING_PX: i32 = 100;
const CLICK_SLOP_PX: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IconDrag {
    pointer_start: (i32, i32),
    origin: (i32, i32),
    moved: bool,
}

impl IconDrag {
    /// Position for the pointer at `(x, y)`; `None` until the pointer leaves the click slop.
    fn follow(&mut self, x: i32, y: i32) -> Option<(i32, i32)> {
        let dx = x - self.pointer_start.0;
        let dy = y - self.pointer_start.1;
        if !self.moved && dx * dx + dy * dy <= CLICK_SLOP_PX * CLICK_SLOP_PX {
            return None;
        }
        self.moved = true;
        Some((self.origin.0 + dx, self.origin.1 + dy))
    }
}

fn seed_position(slot: u8) -> (i32, i32) {
    (0, i32::from(slot) * ICON_SLOT_SPACING_PX)
}

#[component]
pub(super) fn DesktopIcons(on_switch_view: Option<Callback<()>>) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let app_icons = apps::desktop_icon_apps()
        .into_iter()
        .map(|app| {
            let window_id = app.app_id;
            view! {
                <DraggableIcon
                    icon=app.icon_name()
                    label=app.desktop_icon_label.clone()
                    icon_slot=app.desktop_icon_slot
                    data_app=window_id.key()
                    on_activate=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::RevealWindow { window_id });
                    })
                />
            }
        })
        .collect_view();

    view! {
        <div class="desktop-icon-column">
            {app_icons}
            <DraggableIcon
                icon=IconName::LogOut
                label="WEB"
                icon_slot=WEB_ICON_SLOT
                data_app="web"
                on_activate=Callback::new(move |_| switch_view(on_switch_view))
            />
        </div>
    }
}

#[component]
fn DraggableIcon(
    icon: IconName,
    #[prop(into)] label: String,
    icon_slot: u8,
    data_app: &'static str,
    on_activate: Callback<()>,
) -> impl IntoView {
    let position = create_rw_signal(seed_position(icon_slot));
    let drag = create_rw_signal(None::<IconDrag>);
    let suppress_click = create_rw_signal(false);
    let listeners = store_value(None::<PointerListeners>);
    on_cleanup(move || release_listeners(listeners));

    let begin_drag = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.stop_propagation();
        drag.set(Some(IconDrag {
            pointer_start: (ev.client_x(), ev.client_y()),
            origin: position.get_untracked(),
            moved: false,
        }));
        release_listeners(listeners);
        listeners.set_value(Some(PointerListeners::attach(
            move |ev: web_sys::PointerEvent| {
                let Some(mut session) = drag.get_untracked() else {
                    return;
                };
                if let Some(next) = session.follow(ev.client_x(), ev.client_y()) {
                    position.set(next);
                    drag.set(Some(session));
                }
            },
            move |_: web_sys::PointerEvent| {
                if let Some(session) = drag.get_untracked() {
                    suppress_click.set(session.moved);
                }
                drag.set(None);
                release_listeners(listeners);
            },
        )));
    });
    let swallow_drag_click = Callback::new(move |ev: web_sys::MouseEvent| {
        if suppress_click.get_untracked() {
            suppress_click.set(false);
            ev.prevent_default();
            ev.stop_propagation();
        }
    });

    view! {
        <DesktopIconButton
            icon=icon
            label=label
            style=Signal::derive(move || {
                let (x, y) = position.get();
                format!("left:{x}px;top:{y}px;")
            })
            dragging=Signal::derive(move || drag.get().is_some_and(|session| session.moved))
            data_app=data_app
            on_pointerdown=begin_drag
            on_click=swallow_drag_click
            on_dblclick=Callback::new(move |_| on_activate.call(()))
        />
    }
}
