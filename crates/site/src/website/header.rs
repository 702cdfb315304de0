use leptos::*;
use leptos_router::A;
use portfolio_content::PROFILE;
use system_ui::{IconButton, IconName};

use super::{ScrollState, NAV_SECTIONS};

#[component]
/// Accent-plus-rest brand mark.
pub(super) fn Brand() -> impl IntoView {
    let (accent, rest) = PROFILE.brand;
    view! {
        <span class="site-brand">
            <A href="/">
                <span class="site-brand-accent">{accent}</span>
                {rest}
            </A>
        </span>
    }
}

#[component]
pub(super) fn SiteHeader(scroll: ReadSignal<ScrollState>, on_switch_view: Callback<()>) -> impl IntoView {
    let menu_open = create_rw_signal(false);

    let nav_links = NAV_SECTIONS
        .iter()
        .map(|section| {
            let id = section.id;
            view! {
                <a
                    href=section.href()
                    class="site-nav-link"
                    data-active=move || (scroll.get().active == Some(id)).to_string()
                >
                    {section.label}
                </a>
            }
        })
        .collect_view();

    let mobile_links = move || {
        NAV_SECTIONS
            .iter()
            .map(|section| {
                view! {
                    <a
                        href=section.href()
                        class="site-mobile-link"
                        on:click=move |_| menu_open.set(false)
                    >
                        {section.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header" data-scrolled=move || scroll.get().scrolled.to_string()>
            <div class="site-header-bar">
                <Brand />
                <div class="site-header-actions">
                    <nav class="site-nav" aria-label="Sections">{nav_links}</nav>
                    <IconButton
                        icon=IconName::Monitor
                        layout_class="site-view-switch"
                        label="Switch to Desktop Mode"
                        on_click=Callback::new(move |_| on_switch_view.call(()))
                    />
                    {move || {
                        let icon = if menu_open.get() { IconName::Dismiss } else { IconName::Menu };
                        view! {
                            <IconButton
                                icon
                                layout_class="site-menu-toggle"
                                label="Menu"
                                aria_expanded=Signal::derive(move || menu_open.get())
                                on_click=Callback::new(move |_| menu_open.update(|open| *open = !*open))
                            />
                        }
                    }}
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="site-mobile-nav" aria-label="Sections">{mobile_links()}</nav>
            </Show>
        </header>
    }
}
