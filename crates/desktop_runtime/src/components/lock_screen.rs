use std::time::Duration;

use leptos::*;
use platform_host::WallClockSnapshot;
use portfolio_content::PROFILE;
use system_ui::{Button, ButtonSize, ButtonVariant, Icon, IconName, IconSize};

use super::use_desktop_runtime;
use crate::reducer::DesktopAction;

const LOCK_CLOCK_TICK: Duration = Duration::from_secs(1);
const LOCK_EXIT_TRANSITION: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LockOverlayPhase {
    Shown,
    Exiting,
    Hidden,
}

impl LockOverlayPhase {
    fn resolve(locked: bool, exiting: bool) -> Self {
        match (locked, exiting) {
            (true, _) => Self::Shown,
            (false, true) => Self::Exiting,
            (false, false) => Self::Hidden,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Shown => "shown",
            Self::Exiting => "exiting",
            Self::Hidden => "hidden",
        }
    }
}

#[component]
pub(super) fn LockScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let exiting = create_rw_signal(false);
    let now = create_rw_signal(WallClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || now.set(WallClockSnapshot::now()),
        LOCK_CLOCK_TICK,
    ) {
        on_cleanup(move || interval.clear());
    }

    let phase =
        Signal::derive(move || LockOverlayPhase::resolve(runtime.state.get().locked, exiting.get()));
    let unlock = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::Unlock);
        exiting.set(true);
        set_timeout(
            move || {
                let _ = exiting.try_set(false);
            },
            LOCK_EXIT_TRANSITION,
        );
    });

    view! {
        <Show when=move || phase.get() != LockOverlayPhase::Hidden>
            <div
                class="lock-screen"
                role="dialog"
                aria-modal="true"
                aria-label="Lock screen"
                data-phase=move || phase.get().token()
            >
                <div class="lock-screen-halftone" aria-hidden="true"></div>
                <div class="lock-screen-slice" aria-hidden="true"></div>
                <div class="lock-screen-clock">
                    <h1 class="lock-screen-time">{move || now.get().format_hh_mm()}</h1>
                    <p class="lock-screen-date">{move || now.get().format_long_date()}</p>
                </div>
                <div class="lock-screen-account">
                    <div class="lock-screen-avatar">
                        <Icon icon=IconName::User size=IconSize::Xl />
                        <span class="lock-screen-avatar-star">
                            <Icon icon=IconName::Star size=IconSize::Lg />
                        </span>
                    </div>
                    <h2 class="lock-screen-name">{PROFILE.name}</h2>
                    <Button
                        variant=ButtonVariant::Danger
                        size=ButtonSize::Lg
                        trailing_icon=IconName::ArrowRight
                        disabled=Signal::derive(move || exiting.get())
                        on_click=unlock
                    >
                        "Take Your Heart"
                    </Button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn overlay_stays_up_for_the_exit_transition() {
        assert_eq!(LockOverlayPhase::resolve(true, false), LockOverlayPhase::Shown);
        assert_eq!(LockOverlayPhase::resolve(false, true), LockOverlayPhase::Exiting);
        assert_eq!(LockOverlayPhase::resolve(false, false), LockOverlayPhase::Hidden);
        assert_eq!(LockOverlayPhase::Exiting.token(), "exiting");
    }
}
