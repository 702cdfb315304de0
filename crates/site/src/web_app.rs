use desktop_app_projects::{BackTarget, CardTarget, ProjectDetails, ProjectsList};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use portfolio_content::{
    home_metadata, not_found_metadata, project_by_slug, project_metadata,
    projects_index_metadata, PageMetadata,
};
use system_ui::prelude::*;

use crate::home::HomePage;

const PROJECTS_PATH: &str = "/projects";

#[component]
/// Router root: `/`, `/projects`, `/projects/:slug`, and a not-found fallback.
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="en" />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=HomeRoute />
                    <Route path=PROJECTS_PATH view=ProjectsRoute />
                    <Route path="/projects/:slug" view=ProjectRoute />
                    <Route path="/*any" view=NotFoundRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomeRoute() -> impl IntoView {
    view! {
        <PageMeta metadata=home_metadata() />
        <HomePage />
    }
}

#[component]
fn ProjectsRoute() -> impl IntoView {
    view! {
        <PageMeta metadata=projects_index_metadata() />
        <div class="site-page">
            <ProjectsList card_target=CardTarget::Route show_home_link=true />
        </div>
    }
}

#[component]
fn ProjectRoute() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|map| map.get("slug").cloned().unwrap_or_default());

    move || {
        let slug = slug();
        match project_by_slug(&slug) {
            Ok(project) => view! {
                <PageMeta metadata=project_metadata(project.slug) />
                <div class="site-page">
                    <ProjectDetails project back=BackTarget::Route(PROJECTS_PATH) />
                </div>
            }
            .into_view(),
            Err(err) => {
                logging::warn!("project route: {err}");
                view! {
                    <PageMeta metadata=project_metadata(&slug) />
                    <NotFound />
                }
                .into_view()
            }
        }
    }
}

#[component]
fn NotFoundRoute() -> impl IntoView {
    view! {
        <PageMeta metadata=not_found_metadata() />
        <NotFound />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="site-page site-not-found">
            <EmptyState>
                <Heading level=1>"404"</Heading>
                <Text tone=TextTone::Secondary>"This page could not be found."</Text>
                <LinkButton href="/" variant=ButtonVariant::Quiet leading_icon=IconName::ArrowLeft>
                    "Back to home"
                </LinkButton>
            </EmptyState>
        </div>
    }
}

#[component]
/// Writes a page's title, description, and Open Graph tags into `<head>`.
fn PageMeta(metadata: PageMetadata) -> impl IntoView {
    let PageMetadata {
        title,
        description,
        open_graph,
    } = metadata;

    let open_graph = open_graph.map(|og| {
        let image = og.image.map(|(path, width, height)| {
            view! {
                <Meta property="og:image" content=path />
                <Meta property="og:image:width" content=width.to_string() />
                <Meta property="og:image:height" content=height.to_string() />
            }
        });
        view! {
            <Meta property="og:title" content=og.title />
            <Meta property="og:description" content=og.description />
            <Meta property="og:type" content=og.kind />
            <Meta property="og:site_name" content=portfolio_content::SITE_NAME />
            {og.url.map(|url| view! { <Meta property="og:url" content=url /> })}
            {image}
        }
    });

    view! {
        <Title text=title />
        {description.map(|content| view! { <Meta name="description" content=content /> })}
        {open_graph}
    }
}
