//! Effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{
    host::{release_listeners, PointerListeners},
    model::PointerInteraction,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

/// Installs the executor that drains reducer effects in order.
///
/// Pointer listeners attached for a session are removed when the session ends or the provider
/// is cleaned up, whichever comes first.
pub fn install(runtime: DesktopRuntimeContext) {
    let listeners = store_value(None::<PointerListeners>);

    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_effect(runtime, listeners, effect);
        }
    });

    on_cleanup(move || release_listeners(listeners));
}

fn run_effect(
    runtime: DesktopRuntimeContext,
    listeners: StoredValue<Option<PointerListeners>>,
    effect: RuntimeEffect,
) {
    match effect {
        RuntimeEffect::AttachPointerListeners => {
            release_listeners(listeners);
            let attached = PointerListeners::attach(
                move |ev: web_sys::PointerEvent| pointer_moved(runtime, &ev),
                move |_: web_sys::PointerEvent| pointer_released(runtime),
            );
            listeners.set_value(Some(attached));
        }
        RuntimeEffect::DetachPointerListeners => release_listeners(listeners),
    }
}

fn pointer_moved(runtime: DesktopRuntimeContext, ev: &web_sys::PointerEvent) {
    let pointer = runtime.host.pointer_position(ev.client_x(), ev.client_y());
    match runtime.interaction.get_untracked().pointer {
        PointerInteraction::Idle => {}
        PointerInteraction::Dragging(_) => {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer,
                viewport: runtime.host.desktop_viewport(),
            });
        }
        PointerInteraction::Resizing(_) => {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    }
}

fn pointer_released(runtime: DesktopRuntimeContext) {
    match runtime.interaction.get_untracked().pointer {
        PointerInteraction::Idle => {}
        PointerInteraction::Dragging(_) => {
            runtime.dispatch_action(DesktopAction::EndMove {
                viewport: runtime.host.desktop_viewport(),
            });
        }
        PointerInteraction::Resizing(_) => runtime.dispatch_action(DesktopAction::EndResize),
    }
}
