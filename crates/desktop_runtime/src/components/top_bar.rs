use std::time::Duration;

use leptos::*;
use platform_host::WallClockSnapshot;
use system_ui::{Icon, IconName, StatusBar};

const STATUS_CLOCK_TICK: Duration = Duration::from_secs(60);

#[component]
pub(super) fn TopBar() -> impl IntoView {
    let now = create_rw_signal(WallClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || now.set(WallClockSnapshot::now()),
        STATUS_CLOCK_TICK,
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <StatusBar brand="SYSTEM">
            <Icon icon=IconName::Search />
            <Icon icon=IconName::Wifi />
            <Icon icon=IconName::Volume />
            <Icon icon=IconName::Battery />
            <time>{move || now.get().format_hh_mm()}</time>
        </StatusBar>
    }
}
