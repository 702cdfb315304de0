//! Projects mini-app: the catalog grid with in-window list/detail navigation.
//!
//! The card, list, and detail views are shared with the website routes, which pass
//! [`CardTarget::Route`] / [`BackTarget::Route`] so navigation goes through the router
//! instead of the in-window selection.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod card;
mod details;
mod list;
mod selection;

use leptos::*;

pub use card::{CardTarget, ProjectCard, CARD_TAG_LIMIT};
pub use details::{BackTarget, ProjectDetails};
pub use list::ProjectsList;
pub use selection::ProjectSelection;

#[component]
/// Desktop window content for the Projects app.
pub fn ProjectsApp() -> impl IntoView {
    let selection = create_rw_signal(ProjectSelection::default());

    let on_select = Callback::new(move |slug: &'static str| {
        selection.update(|selection| selection.select(slug));
    });
    let on_back = Callback::new(move |_: ()| {
        selection.update(ProjectSelection::back);
    });

    view! {
        <div class="app-projects" data-app-view=move || selection.get().view_token()>
            {move || match selection.get().current() {
                Some(project) => view! {
                    <ProjectDetails project back=BackTarget::Callback(on_back) />
                }
                .into_view(),
                None => view! { <ProjectsList card_target=CardTarget::Select(on_select) /> }.into_view(),
            }}
        </div>
    }
}
