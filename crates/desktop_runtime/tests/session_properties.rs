use desktop_runtime::{
    reduce_desktop, DesktopAction, DesktopState, InteractionState, PointerPosition, ReducerError,
    Viewport, WindowId, WindowRect,
};
use pretty_assertions::assert_eq;

struct Session {
    state: DesktopState,
    interaction: InteractionState,
}

impl Session {
    fn locked() -> Self {
        Self {
            state: DesktopState::default(),
            interaction: InteractionState::default(),
        }
    }

    fn unlocked() -> Self {
        let mut session = Self::locked();
        session.apply(DesktopAction::Unlock);
        session
    }

    fn try_apply(&mut self, action: DesktopAction) -> Result<(), ReducerError> {
        reduce_desktop(&mut self.state, &mut self.interaction, action).map(|_| ())
    }

    fn apply(&mut self, action: DesktopAction) {
        self.try_apply(action).expect("action accepted");
    }

    fn open(&mut self, window_id: WindowId) {
        self.apply(DesktopAction::OpenWindow { window_id });
    }

    fn rect(&self, window_id: WindowId) -> WindowRect {
        self.state.frame(window_id).expect("window open").rect
    }
}

#[test]
fn open_then_close_restores_visible_set() {
    for target in WindowId::ALL {
        let mut session = Session::unlocked();
        session.open(WindowId::Contact);
        let before = session.state.visible_windows();

        session.open(target);
        session.apply(DesktopAction::CloseWindow { window_id: target });

        if target == WindowId::Contact {
            assert_eq!(session.state.visible_windows(), Vec::<WindowId>::new());
        } else {
            assert_eq!(session.state.visible_windows(), before);
        }
    }

    for target in WindowId::ALL {
        let mut session = Session::unlocked();
        session.open(target);
        session.apply(DesktopAction::CloseWindow { window_id: target });
        assert_eq!(session.state.visible_windows(), Vec::<WindowId>::new());
        assert!(session.state.frames.is_empty());
    }
}

#[test]
fn toggle_opens_then_minimizes() {
    for target in WindowId::ALL {
        let mut session = Session::unlocked();
        session.apply(DesktopAction::ToggleWindow { window_id: target });
        assert!(session.state.is_visible(target));

        session.apply(DesktopAction::ToggleWindow { window_id: target });
        assert!(session.state.is_open(target));
        assert!(session.state.is_minimized(target));

        session.apply(DesktopAction::ToggleWindow { window_id: target });
        assert!(session.state.is_visible(target));
    }
}

#[test]
fn undersized_resize_keeps_committed_size() {
    let mut session = Session::unlocked();
    session.open(WindowId::Projects);
    session.apply(DesktopAction::BeginResize {
        window_id: WindowId::Projects,
    });

    session.apply(DesktopAction::UpdateResize {
        pointer: PointerPosition { x: 650, y: 450 },
    });
    assert_eq!(
        session.rect(WindowId::Projects),
        WindowRect {
            x: 50,
            y: 50,
            w: 600,
            h: 400
        }
    );

    for pointer in [
        PointerPosition { x: 450, y: 700 },
        PointerPosition { x: 900, y: 350 },
        PointerPosition { x: 10, y: 10 },
    ] {
        session.apply(DesktopAction::UpdateResize { pointer });
        assert_eq!(
            session.rect(WindowId::Projects),
            WindowRect {
                x: 50,
                y: 50,
                w: 600,
                h: 400
            }
        );
    }

    session.apply(DesktopAction::EndResize);
    assert!(!session.interaction.is_active());
}

#[test]
fn maximize_round_trip_restores_exact_frame() {
    let mut session = Session::unlocked();
    session.open(WindowId::About);
    session.apply(DesktopAction::BeginMove {
        window_id: WindowId::About,
        pointer: PointerPosition { x: 100, y: 100 },
    });
    session.apply(DesktopAction::UpdateMove {
        pointer: PointerPosition { x: 173, y: 121 },
        viewport: Viewport { w: 1440, h: 860 },
    });
    session.apply(DesktopAction::EndMove {
        viewport: Viewport { w: 1440, h: 860 },
    });
    let before = session.rect(WindowId::About);
    assert_eq!(
        before,
        WindowRect {
            x: 123,
            y: 71,
            w: 800,
            h: 500
        }
    );

    session.apply(DesktopAction::ToggleMaximize {
        window_id: WindowId::About,
    });
    assert!(session.state.frame(WindowId::About).expect("open").maximized);
    session.apply(DesktopAction::ToggleMaximize {
        window_id: WindowId::About,
    });

    let frame = session.state.frame(WindowId::About).expect("open");
    assert!(!frame.maximized);
    assert_eq!(frame.rect, before);
}

#[test]
fn session_starts_locked_and_unlock_enables_windows() {
    let mut session = Session::locked();
    assert!(session.state.locked);
    assert_eq!(
        session.try_apply(DesktopAction::OpenWindow {
            window_id: WindowId::Projects
        }),
        Err(ReducerError::SessionLocked)
    );
    assert!(session.state.open_windows.is_empty());

    session.apply(DesktopAction::Unlock);
    assert!(!session.state.locked);
    session.open(WindowId::Projects);
    assert_eq!(session.state.visible_windows(), vec![WindowId::Projects]);

    session.apply(DesktopAction::Unlock);
    assert!(!session.state.locked);
}

#[test]
fn minimizing_keeps_creation_order() {
    let mut session = Session::unlocked();
    session.open(WindowId::Projects);
    session.open(WindowId::About);
    session.apply(DesktopAction::MinimizeWindow {
        window_id: WindowId::Projects,
    });

    assert_eq!(
        session.state.open_windows,
        vec![WindowId::Projects, WindowId::About]
    );
    assert_eq!(session.state.minimized_windows, vec![WindowId::Projects]);
    assert_eq!(session.state.visible_windows(), vec![WindowId::About]);
}

#[test]
fn closing_minimized_window_clears_both_lists() {
    let mut session = Session::unlocked();
    session.open(WindowId::Contact);
    session.open(WindowId::Misc);
    session.apply(DesktopAction::MinimizeWindow {
        window_id: WindowId::Contact,
    });

    session.apply(DesktopAction::CloseWindow {
        window_id: WindowId::Contact,
    });

    assert_eq!(session.state.open_windows, vec![WindowId::Misc]);
    assert_eq!(session.state.minimized_windows, Vec::<WindowId>::new());
    assert_eq!(session.state.frame(WindowId::Contact), None);
}

#[test]
fn reopening_after_close_starts_at_defaults() {
    let mut session = Session::unlocked();
    session.open(WindowId::Projects);
    session.apply(DesktopAction::BeginResize {
        window_id: WindowId::Projects,
    });
    session.apply(DesktopAction::UpdateResize {
        pointer: PointerPosition { x: 700, y: 500 },
    });
    session.apply(DesktopAction::EndResize);
    session.apply(DesktopAction::ToggleMaximize {
        window_id: WindowId::Projects,
    });
    session.apply(DesktopAction::CloseWindow {
        window_id: WindowId::Projects,
    });

    session.open(WindowId::Projects);
    let frame = session.state.frame(WindowId::Projects).expect("open");
    assert!(!frame.maximized);
    assert_eq!(frame.rect, WindowRect::default());
}

#[test]
fn drag_commit_is_clamped_to_the_layer() {
    let mut session = Session::unlocked();
    session.open(WindowId::Contact);
    session.apply(DesktopAction::BeginMove {
        window_id: WindowId::Contact,
        pointer: PointerPosition { x: 60, y: 60 },
    });
    session.apply(DesktopAction::UpdateMove {
        pointer: PointerPosition { x: 2000, y: 2000 },
        viewport: Viewport { w: 1280, h: 720 },
    });
    assert_eq!(
        session.interaction.drag_preview(WindowId::Contact),
        Some(WindowRect {
            x: 480,
            y: 220,
            w: 800,
            h: 500
        })
    );
    session.apply(DesktopAction::EndMove {
        viewport: Viewport { w: 1280, h: 720 },
    });
    assert_eq!(
        session.rect(WindowId::Contact),
        WindowRect {
            x: 480,
            y: 220,
            w: 800,
            h: 500
        }
    );
}
