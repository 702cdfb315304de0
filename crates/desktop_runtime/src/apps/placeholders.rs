//! Built-in windows that have no app crate of their own.

use leptos::*;
use system_ui::{EmptyState, Icon, IconName, IconSize, Text, TextRole, TextTone};

#[component]
/// Empty folder window.
pub(super) fn MiscApp() -> impl IntoView {
    view! {
        <EmptyState layout_class="misc-app">
            <Icon icon=IconName::Folder size=IconSize::Xl />
            <Text tone=TextTone::Secondary>"This folder is empty."</Text>
        </EmptyState>
    }
}

#[component]
/// Player window. The embed is not wired up yet, so it shows a static card.
pub(super) fn SpotifyApp() -> impl IntoView {
    view! {
        <EmptyState layout_class="spotify-app">
            <Icon icon=IconName::Music size=IconSize::Xl />
            <Text role=TextRole::Title>"Spotify"</Text>
            <Text tone=TextTone::Secondary>"Nothing is playing right now."</Text>
        </EmptyState>
    }
}
