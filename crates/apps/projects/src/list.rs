use leptos::*;
use portfolio_content::projects;
use system_ui::prelude::*;

use crate::{CardTarget, ProjectCard};

#[component]
/// Full catalog grid with header.
///
/// `show_home_link` adds the back-to-home arrow used on the `/projects` route.
pub fn ProjectsList(
    card_target: CardTarget,
    #[prop(optional)] show_home_link: bool,
) -> impl IntoView {
    let catalog = projects();

    view! {
        <section class="projects-list">
            <Cluster gap=LayoutGap::Lg layout_class="projects-list-header">
                {show_home_link.then(|| view! {
                    <a href="/" class="ui-icon-link" aria-label="Back to home">
                        <Icon icon=IconName::ArrowLeft size=IconSize::Md />
                    </a>
                })}
                <span class="projects-list-emblem">
                    <Icon icon=IconName::Grid size=IconSize::Lg />
                </span>
                <Stack gap=LayoutGap::Sm>
                    <Heading level=1>"All Projects"</Heading>
                    <Text tone=TextTone::Secondary>"Showcasing my creative journey"</Text>
                </Stack>
            </Cluster>
            {if catalog.is_empty() {
                view! {
                    <EmptyState>
                        <Heading level=3>"No projects found"</Heading>
                        <Text tone=TextTone::Secondary>"Check back soon for new updates!"</Text>
                    </EmptyState>
                }
                .into_view()
            } else {
                view! {
                    <Grid columns=3 gap=LayoutGap::Lg layout_class="projects-grid">
                        {catalog
                            .iter()
                            .map(|project| view! { <ProjectCard project target=card_target /> })
                            .collect_view()}
                    </Grid>
                }
                .into_view()
            }}
        </section>
    }
}
