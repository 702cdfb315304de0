//! Reducer actions, side-effect intents, and transition logic for the desktop session.

use thiserror::Error;

use crate::{
    apps,
    model::{
        DesktopState, DragSession, InteractionState, PointerInteraction, PointerPosition,
        ResizeSession, Viewport, WindowFrameState, WindowId,
    },
    window_manager::{clamp_to_viewport, drag_preview, resize_candidate},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Dismiss the lock screen. There is no way back.
    Unlock,
    /// Open a window at its default frame if it is not open yet.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Taskbar semantics: un-minimize, minimize, or open depending on current state.
    ToggleWindow {
        /// Window bound to the taskbar button.
        window_id: WindowId,
    },
    /// Desktop icon semantics: open or un-minimize, never hide.
    RevealWindow {
        /// Window bound to the icon.
        window_id: WindowId,
    },
    /// Close a window and discard its frame.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Hide an open window, keeping its frame.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Flip the maximized flag without touching the stored rect.
    ToggleMaximize {
        /// Window to maximize or restore.
        window_id: WindowId,
    },
    /// Open or close the "All Apps" launcher.
    ToggleLauncher,
    /// Close the launcher if open.
    CloseLauncher,
    /// Start a title bar drag.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Move the drag preview, clamped into the desktop layer.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current desktop layer size.
        viewport: Viewport,
    },
    /// Commit the drag preview, clamped into the desktop layer.
    EndMove {
        /// Current desktop layer size.
        viewport: Viewport,
    },
    /// Start a bottom-right resize.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
    },
    /// Resize toward the pointer when the result clears the size floor.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active resize.
    EndResize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// A pointer session started; listen for pointer move/up on the whole window.
    AttachPointerListeners,
    /// The pointer session ended; drop the window-level listeners.
    DetachPointerListeners,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for rejected actions.
pub enum ReducerError {
    /// The lock screen is still up.
    #[error("desktop session is locked")]
    SessionLocked,
    /// A frame operation targeted a window that is not open.
    #[error("window `{0}` is not open")]
    WindowNotOpen(WindowId),
}

/// Applies a [`DesktopAction`] to the session and collects resulting side effects.
///
/// Registry actions (open, toggle, reveal, close, minimize) treat a closed window as a normal
/// state and never fail for it. Frame actions need the window to be open.
///
/// # Errors
///
/// Returns [`ReducerError::SessionLocked`] for anything but [`DesktopAction::Unlock`] while the
/// session is locked, and [`ReducerError::WindowNotOpen`] when a frame action targets a closed
/// window. State is left unchanged in both cases.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();

    if state.locked {
        return match action {
            DesktopAction::Unlock => {
                state.locked = false;
                Ok(effects)
            }
            _ => Err(ReducerError::SessionLocked),
        };
    }

    match action {
        DesktopAction::Unlock => {}
        DesktopAction::OpenWindow { window_id } => {
            open_window(state, window_id);
            state.launcher_open = false;
        }
        DesktopAction::ToggleWindow { window_id } => {
            if state.is_minimized(window_id) {
                unminimize_window(state, window_id);
            } else if state.is_open(window_id) {
                minimize_window(state, interaction, window_id, &mut effects);
            } else {
                open_window(state, window_id);
            }
            state.launcher_open = false;
        }
        DesktopAction::RevealWindow { window_id } => {
            if state.is_minimized(window_id) {
                unminimize_window(state, window_id);
            } else {
                open_window(state, window_id);
            }
            state.launcher_open = false;
        }
        DesktopAction::CloseWindow { window_id } => {
            state.open_windows.retain(|id| *id != window_id);
            state.minimized_windows.retain(|id| *id != window_id);
            state.frames.remove(&window_id);
            end_session_for(interaction, window_id, &mut effects);
            state.launcher_open = false;
        }
        DesktopAction::MinimizeWindow { window_id } => {
            minimize_window(state, interaction, window_id, &mut effects);
            state.launcher_open = false;
        }
        DesktopAction::ToggleMaximize { window_id } => {
            let frame = frame_mut(state, window_id)?;
            frame.maximized = !frame.maximized;
            if frame.maximized {
                end_session_for(interaction, window_id, &mut effects);
            }
        }
        DesktopAction::ToggleLauncher => {
            state.launcher_open = !state.launcher_open;
        }
        DesktopAction::CloseLauncher => {
            state.launcher_open = false;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let frame = *frame_mut(state, window_id)?;
            if !interaction.is_active() && !frame.maximized {
                interaction.pointer = PointerInteraction::Dragging(DragSession {
                    window_id,
                    pointer_start: pointer,
                    rect_start: frame.rect,
                    preview: frame.rect,
                });
                effects.push(RuntimeEffect::AttachPointerListeners);
            }
        }
        DesktopAction::UpdateMove { pointer, viewport } => {
            if let PointerInteraction::Dragging(session) = &mut interaction.pointer {
                session.preview = clamp_to_viewport(
                    drag_preview(session.rect_start, session.pointer_start, pointer),
                    viewport,
                );
            }
        }
        DesktopAction::EndMove { viewport } => {
            if let PointerInteraction::Dragging(session) = &interaction.pointer {
                if let Some(frame) = state.frames.get_mut(&session.window_id) {
                    if !frame.maximized {
                        frame.rect = clamp_to_viewport(session.preview, viewport);
                    }
                }
                interaction.pointer = PointerInteraction::Idle;
                effects.push(RuntimeEffect::DetachPointerListeners);
            }
        }
        DesktopAction::BeginResize { window_id } => {
            let frame = *frame_mut(state, window_id)?;
            if !interaction.is_active() && !frame.maximized {
                interaction.pointer = PointerInteraction::Resizing(ResizeSession { window_id });
                effects.push(RuntimeEffect::AttachPointerListeners);
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let PointerInteraction::Resizing(session) = &interaction.pointer {
                if let Some(frame) = state.frames.get_mut(&session.window_id) {
                    if !frame.maximized {
                        if let Some(rect) = resize_candidate(frame.rect, pointer) {
                            frame.rect = rect;
                        }
                    }
                }
            }
        }
        DesktopAction::EndResize => {
            if matches!(interaction.pointer, PointerInteraction::Resizing(_)) {
                interaction.pointer = PointerInteraction::Idle;
                effects.push(RuntimeEffect::DetachPointerListeners);
            }
        }
    }

    Ok(effects)
}

fn open_window(state: &mut DesktopState, window_id: WindowId) {
    if state.is_open(window_id) {
        return;
    }
    state.open_windows.push(window_id);
    let rect = apps::app_descriptor(window_id).default_rect();
    state.frames.insert(window_id, WindowFrameState::at(rect));
}

fn unminimize_window(state: &mut DesktopState, window_id: WindowId) {
    state.minimized_windows.retain(|id| *id != window_id);
}

fn minimize_window(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
    effects: &mut Vec<RuntimeEffect>,
) {
    if !state.is_open(window_id) || state.is_minimized(window_id) {
        return;
    }
    state.minimized_windows.push(window_id);
    end_session_for(interaction, window_id, effects);
}

fn end_session_for(
    interaction: &mut InteractionState,
    window_id: WindowId,
    effects: &mut Vec<RuntimeEffect>,
) {
    if interaction.active_window() == Some(window_id) {
        interaction.pointer = PointerInteraction::Idle;
        effects.push(RuntimeEffect::DetachPointerListeners);
    }
}

fn frame_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowFrameState, ReducerError> {
    state
        .frames
        .get_mut(&window_id)
        .ok_or(ReducerError::WindowNotOpen(window_id))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowRect;

    fn unlocked() -> (DesktopState, InteractionState) {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce_desktop(&mut state, &mut interaction, DesktopAction::Unlock).expect("unlock");
        (state, interaction)
    }

    fn apply(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("action accepted")
    }

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn locked_session_rejects_window_actions_without_mutation() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        for action in [
            DesktopAction::OpenWindow {
                window_id: WindowId::Projects,
            },
            DesktopAction::ToggleLauncher,
            DesktopAction::BeginResize {
                window_id: WindowId::About,
            },
        ] {
            assert_eq!(
                reduce_desktop(&mut state, &mut interaction, action),
                Err(ReducerError::SessionLocked)
            );
        }
        assert_eq!(state, DesktopState::default());
        assert_eq!(
            ReducerError::SessionLocked.to_string(),
            "desktop session is locked"
        );
    }

    #[test]
    fn open_is_idempotent_and_keeps_creation_order() {
        let (mut state, mut interaction) = unlocked();
        for id in [WindowId::Contact, WindowId::Projects, WindowId::Contact] {
            apply(&mut state, &mut interaction, DesktopAction::OpenWindow { window_id: id });
        }
        assert_eq!(state.open_windows, vec![WindowId::Contact, WindowId::Projects]);
        assert_eq!(state.frames.len(), 2);
    }

    #[test]
    fn reveal_never_minimizes() {
        let (mut state, mut interaction) = unlocked();
        let reveal = DesktopAction::RevealWindow {
            window_id: WindowId::Misc,
        };
        apply(&mut state, &mut interaction, reveal.clone());
        apply(&mut state, &mut interaction, reveal.clone());
        assert_eq!(state.visible_windows(), vec![WindowId::Misc]);

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: WindowId::Misc,
            },
        );
        apply(&mut state, &mut interaction, reveal);
        assert_eq!(state.minimized_windows, Vec::<WindowId>::new());
        assert!(state.is_visible(WindowId::Misc));
    }

    #[test]
    fn minimize_is_guarded_against_closed_and_repeated_calls() {
        let (mut state, mut interaction) = unlocked();
        let minimize = DesktopAction::MinimizeWindow {
            window_id: WindowId::About,
        };
        apply(&mut state, &mut interaction, minimize.clone());
        assert_eq!(state.minimized_windows, Vec::<WindowId>::new());

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: WindowId::About,
            },
        );
        apply(&mut state, &mut interaction, minimize.clone());
        apply(&mut state, &mut interaction, minimize);
        assert_eq!(state.minimized_windows, vec![WindowId::About]);
    }

    #[test]
    fn frame_actions_on_closed_window_error() {
        let (mut state, mut interaction) = unlocked();
        assert_eq!(
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::ToggleMaximize {
                    window_id: WindowId::Spotify
                }
            ),
            Err(ReducerError::WindowNotOpen(WindowId::Spotify))
        );
        assert_eq!(
            ReducerError::WindowNotOpen(WindowId::Spotify).to_string(),
            "window `spotify` is not open"
        );
    }

    #[test]
    fn drag_previews_then_commits_clamped_position() {
        let (mut state, mut interaction) = unlocked();
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: WindowId::Projects,
            },
        );
        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: WindowId::Projects,
                pointer: pointer(100, 60),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::AttachPointerListeners]);

        apply(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: pointer(40, 20),
                viewport: Viewport { w: 1280, h: 720 },
            },
        );
        assert_eq!(
            interaction.drag_preview(WindowId::Projects),
            Some(WindowRect {
                x: 0,
                y: 10,
                w: 800,
                h: 500
            })
        );
        assert_eq!(state.frames[&WindowId::Projects].rect, WindowRect::default());

        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::EndMove {
                viewport: Viewport { w: 1280, h: 720 },
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::DetachPointerListeners]);
        assert_eq!(
            state.frames[&WindowId::Projects].rect,
            WindowRect {
                x: 0,
                y: 10,
                w: 800,
                h: 500
            }
        );
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn drag_preview_never_leaves_the_layer() {
        let (mut state, mut interaction) = unlocked();
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: WindowId::Projects,
            },
        );
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: WindowId::Projects,
                pointer: pointer(100, 60),
            },
        );
        let viewport = Viewport { w: 1280, h: 720 };
        for (to, expected) in [
            (pointer(-2000, 5000), (0, 220)),
            (pointer(5000, -2000), (480, 0)),
            (pointer(150, 90), (100, 80)),
        ] {
            apply(
                &mut state,
                &mut interaction,
                DesktopAction::UpdateMove {
                    pointer: to,
                    viewport,
                },
            );
            let preview = interaction
                .drag_preview(WindowId::Projects)
                .expect("dragging");
            assert_eq!((preview.x, preview.y), expected);
        }
    }

    #[test]
    fn begin_while_busy_is_ignored() {
        let (mut state, mut interaction) = unlocked();
        for id in [WindowId::Projects, WindowId::About] {
            apply(&mut state, &mut interaction, DesktopAction::OpenWindow { window_id: id });
        }
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: WindowId::About,
            },
        );
        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: WindowId::Projects,
                pointer: pointer(0, 0),
            },
        );
        assert_eq!(effects, Vec::new());
        assert_eq!(interaction.active_window(), Some(WindowId::About));

        // An end for the other kind of session leaves the resize running.
        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::EndMove {
                viewport: Viewport { w: 1280, h: 720 },
            },
        );
        assert_eq!(effects, Vec::new());
        assert!(matches!(interaction.pointer, PointerInteraction::Resizing(_)));
    }

    #[test]
    fn maximized_window_cannot_start_a_drag() {
        let (mut state, mut interaction) = unlocked();
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: WindowId::Contact,
            },
        );
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: WindowId::Contact,
            },
        );
        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: WindowId::Contact,
                pointer: pointer(10, 10),
            },
        );
        assert_eq!(effects, Vec::new());
        assert!(!interaction.is_active());
    }

    #[test]
    fn closing_the_dragged_window_returns_to_idle() {
        let (mut state, mut interaction) = unlocked();
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                window_id: WindowId::About,
            },
        );
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: WindowId::About,
                pointer: pointer(60, 60),
            },
        );
        let effects = apply(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: WindowId::About,
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::DetachPointerListeners]);
        assert!(!interaction.is_active());
        assert!(state.frames.is_empty());
    }

    #[test]
    fn closing_or_minimizing_dismisses_the_launcher() {
        let (mut state, mut interaction) = unlocked();
        for id in [WindowId::About, WindowId::Contact] {
            apply(&mut state, &mut interaction, DesktopAction::OpenWindow { window_id: id });
        }
        apply(&mut state, &mut interaction, DesktopAction::ToggleLauncher);
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: WindowId::About,
            },
        );
        assert!(!state.launcher_open);

        apply(&mut state, &mut interaction, DesktopAction::ToggleLauncher);
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: WindowId::Contact,
            },
        );
        assert!(!state.launcher_open);
    }

    #[test]
    fn launcher_closes_when_a_window_is_revealed() {
        let (mut state, mut interaction) = unlocked();
        apply(&mut state, &mut interaction, DesktopAction::ToggleLauncher);
        assert!(state.launcher_open);
        apply(
            &mut state,
            &mut interaction,
            DesktopAction::RevealWindow {
                window_id: WindowId::Projects,
            },
        );
        assert!(!state.launcher_open);
        apply(&mut state, &mut interaction, DesktopAction::ToggleLauncher);
        apply(&mut state, &mut interaction, DesktopAction::CloseLauncher);
        assert!(!state.launcher_open);
    }
}
