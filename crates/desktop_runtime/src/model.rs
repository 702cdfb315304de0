//! Desktop session data model: window registry, frame geometry, and pointer interaction state.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default window left offset inside the desktop layer.
pub const DEFAULT_WINDOW_X: i32 = 50;
/// Default window top offset inside the desktop layer.
pub const DEFAULT_WINDOW_Y: i32 = 50;
/// Default window width.
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
/// Default window height.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 500;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Closed set of mini-applications the desktop can host, one window each.
pub enum WindowId {
    /// Project list and detail browser.
    Projects,
    /// Profile, social links, and skills.
    About,
    /// Contact details and the `mailto:` form.
    Contact,
    /// Empty placeholder folder.
    Misc,
    /// Embedded player placeholder.
    Spotify,
}

impl WindowId {
    /// Every window id in catalog order.
    pub const ALL: [WindowId; 5] = [
        Self::Projects,
        Self::About,
        Self::Contact,
        Self::Misc,
        Self::Spotify,
    ];

    /// Stable string key, matching the manifest `app_id`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Misc => "misc",
            Self::Spotify => "spotify",
        }
    }

    /// Parses a stable key; unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window position (top-left, desktop-layer coordinates) and size in CSS pixels.
pub struct WindowRect {
    /// Left offset.
    pub x: i32,
    /// Top offset.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl WindowRect {
    /// Translates the rect by a pointer delta.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Inline CSS positioning for an unmaximized frame.
    pub fn css(self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;",
            self.x, self.y, self.w, self.h
        )
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: DEFAULT_WINDOW_X,
            y: DEFAULT_WINDOW_Y,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Per-window view state; lives exactly as long as the window is open.
pub struct WindowFrameState {
    /// Last committed position and size. Untouched by maximize.
    pub rect: WindowRect,
    /// Whether the frame fills the desktop layer.
    pub maximized: bool,
}

impl WindowFrameState {
    /// Fresh frame at `rect`.
    pub fn at(rect: WindowRect) -> Self {
        Self {
            rect,
            maximized: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Size of the desktop layer that windows are clamped into.
pub struct Viewport {
    /// Layer width.
    pub w: i32,
    /// Layer height.
    pub h: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Authoritative desktop session state.
///
/// Invariants maintained by [`crate::reduce_desktop`]:
/// `minimized_windows` is a subset of `open_windows`, `frames` is keyed by exactly the open ids,
/// and neither list holds duplicates.
pub struct DesktopState {
    /// Lock gate; every window action is rejected while set.
    pub locked: bool,
    /// Open windows in creation order, which is also paint order.
    pub open_windows: Vec<WindowId>,
    /// Open-but-hidden windows in minimize order.
    pub minimized_windows: Vec<WindowId>,
    /// Frame state for every open window.
    pub frames: BTreeMap<WindowId, WindowFrameState>,
    /// "All Apps" launcher popup visibility.
    pub launcher_open: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            locked: true,
            open_windows: Vec::new(),
            minimized_windows: Vec::new(),
            frames: BTreeMap::new(),
            launcher_open: false,
        }
    }
}

impl DesktopState {
    /// Whether `window_id` is open (minimized or not).
    pub fn is_open(&self, window_id: WindowId) -> bool {
        self.open_windows.contains(&window_id)
    }

    /// Whether `window_id` is open but hidden.
    pub fn is_minimized(&self, window_id: WindowId) -> bool {
        self.minimized_windows.contains(&window_id)
    }

    /// Whether `window_id` should be rendered.
    pub fn is_visible(&self, window_id: WindowId) -> bool {
        self.is_open(window_id) && !self.is_minimized(window_id)
    }

    /// Rendered windows in paint order.
    pub fn visible_windows(&self) -> Vec<WindowId> {
        self.open_windows
            .iter()
            .copied()
            .filter(|id| !self.is_minimized(*id))
            .collect()
    }

    /// Frame state of an open window.
    pub fn frame(&self, window_id: WindowId) -> Option<&WindowFrameState> {
        self.frames.get(&window_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer position in desktop-layer coordinates.
pub struct PointerPosition {
    /// Horizontal offset from the layer's left edge.
    pub x: i32,
    /// Vertical offset from the layer's top edge.
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-progress title bar drag.
pub struct DragSession {
    /// Window being dragged.
    pub window_id: WindowId,
    /// Pointer position at drag start.
    pub pointer_start: PointerPosition,
    /// Committed rect at drag start.
    pub rect_start: WindowRect,
    /// Uncommitted rect following the pointer.
    pub preview: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-progress bottom-right resize.
pub struct ResizeSession {
    /// Window being resized.
    pub window_id: WindowId,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Pointer interaction state machine. Sessions start only from `Idle`.
pub enum PointerInteraction {
    /// No active pointer session.
    #[default]
    Idle,
    /// A window is following the pointer.
    Dragging(DragSession),
    /// A window's bottom-right corner is following the pointer.
    Resizing(ResizeSession),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient pointer state kept beside [`DesktopState`].
pub struct InteractionState {
    /// Current pointer session.
    pub pointer: PointerInteraction,
}

impl InteractionState {
    /// Whether a drag or resize is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self.pointer, PointerInteraction::Idle)
    }

    /// Window owning the active session, if any.
    pub fn active_window(&self) -> Option<WindowId> {
        match &self.pointer {
            PointerInteraction::Idle => None,
            PointerInteraction::Dragging(session) => Some(session.window_id),
            PointerInteraction::Resizing(session) => Some(session.window_id),
        }
    }

    /// Drag preview rect for `window_id`, when it is the one being dragged.
    pub fn drag_preview(&self, window_id: WindowId) -> Option<WindowRect> {
        match &self.pointer {
            PointerInteraction::Dragging(session) if session.window_id == window_id => {
                Some(session.preview)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_keys_round_trip_and_match_serde() {
        for id in WindowId::ALL {
            assert_eq!(WindowId::from_key(id.key()), Some(id));
            assert_eq!(
                serde_json::to_string(&id).expect("serialize"),
                format!("\"{}\"", id.key())
            );
        }
        assert_eq!(WindowId::from_key("Projects"), None);
        assert_eq!(WindowId::from_key("finder"), None);
    }

    #[test]
    fn fresh_session_is_locked_and_empty() {
        let state = DesktopState::default();
        assert!(state.locked);
        assert!(state.open_windows.is_empty());
        assert!(state.frames.is_empty());
        assert_eq!(state.visible_windows(), Vec::<WindowId>::new());
    }

    #[test]
    fn visibility_excludes_minimized_windows() {
        let state = DesktopState {
            locked: false,
            open_windows: vec![WindowId::Projects, WindowId::About],
            minimized_windows: vec![WindowId::Projects],
            ..DesktopState::default()
        };
        assert!(state.is_open(WindowId::Projects));
        assert!(!state.is_visible(WindowId::Projects));
        assert!(state.is_visible(WindowId::About));
        assert!(!state.is_visible(WindowId::Contact));
        assert_eq!(state.visible_windows(), vec![WindowId::About]);
    }

    #[test]
    fn drag_preview_only_reports_dragged_window() {
        let session = DragSession {
            window_id: WindowId::About,
            pointer_start: PointerPosition { x: 0, y: 0 },
            rect_start: WindowRect::default(),
            preview: WindowRect::default().offset(5, 7),
        };
        let interaction = InteractionState {
            pointer: PointerInteraction::Dragging(session),
        };
        assert!(interaction.is_active());
        assert_eq!(interaction.active_window(), Some(WindowId::About));
        assert_eq!(
            interaction.drag_preview(WindowId::About),
            Some(WindowRect {
                x: 55,
                y: 57,
                w: 800,
                h: 500
            })
        );
        assert_eq!(interaction.drag_preview(WindowId::Projects), None);
    }
}
