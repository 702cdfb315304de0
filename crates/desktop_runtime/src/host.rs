//! Browser geometry queries and window-level pointer listeners for the desktop shell.
//!
//! Reducer coordinates are relative to the desktop window layer, so every pointer position and
//! viewport size passes through [`DesktopHostContext`] before it reaches a [`DesktopAction`].
//!
//! [`DesktopAction`]: crate::reducer::DesktopAction

use leptos::{leptos_dom::helpers::WindowListenerHandle, *};

use crate::model::{PointerPosition, Viewport};

/// DOM id of the layer windows and icons are positioned in.
pub const DESKTOP_LAYER_ID: &str = "desktop-window-layer";
/// Height reserved for the top status bar when the layer cannot be measured.
const TOP_BAR_HEIGHT_PX: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Layer-relative geometry queries.
pub struct DesktopHostContext {
    layer_id: &'static str,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self {
            layer_id: DESKTOP_LAYER_ID,
        }
    }
}

impl DesktopHostContext {
    /// DOM id of the measured layer.
    pub fn layer_id(&self) -> &'static str {
        self.layer_id
    }

    /// Current size of the desktop layer.
    pub fn desktop_viewport(&self) -> Viewport {
        let (w, h) = match self.layer_bounds() {
            Some((_, _, w, h)) => (w, h),
            None => {
                let (w, h) = platform_host_web::viewport_size();
                (w, (h - TOP_BAR_HEIGHT_PX).max(0.0))
            }
        };
        Viewport {
            w: w.round() as i32,
            h: h.round() as i32,
        }
    }

    /// Converts client coordinates into layer coordinates.
    pub fn pointer_position(&self, client_x: i32, client_y: i32) -> PointerPosition {
        let (left, top) = self
            .layer_bounds()
            .map(|(left, top, _, _)| (left.round() as i32, top.round() as i32))
            .unwrap_or((0, 0));
        PointerPosition {
            x: client_x - left,
            y: client_y - top,
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn layer_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let rect = document()
            .get_element_by_id(self.layer_id)?
            .get_bounding_client_rect();
        Some((rect.left(), rect.top(), rect.width(), rect.height()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn layer_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        None
    }
}

/// Window-level pointer move/up listeners that live for one pointer session.
pub struct PointerListeners {
    handles: Vec<WindowListenerHandle>,
}

impl PointerListeners {
    /// Attaches `on_move` to `pointermove` and `on_end` to `pointerup` and `pointercancel`.
    pub fn attach(
        on_move: impl Fn(web_sys::PointerEvent) + 'static,
        on_end: impl Fn(web_sys::PointerEvent) + Clone + 'static,
    ) -> Self {
        let on_cancel = on_end.clone();
        Self {
            handles: vec![
                window_event_listener(ev::pointermove, on_move),
                window_event_listener(ev::pointerup, on_end),
                window_event_listener(ev::pointercancel, on_cancel),
            ],
        }
    }

    /// Removes every listener.
    pub fn remove(self) {
        for handle in self.handles {
            handle.remove();
        }
    }
}

/// Removes the listeners held in `slot`, if any.
pub fn release_listeners(slot: StoredValue<Option<PointerListeners>>) {
    if let Some(attached) = slot.try_update_value(Option::take).flatten() {
        attached.remove();
    }
}
