use leptos::*;
use portfolio_content::{LinkTarget, Project};
use system_ui::prelude::*;

#[derive(Clone, Copy)]
/// Where the detail view's back arrow goes.
pub enum BackTarget {
    /// Return to the list inside the desktop window.
    Callback(Callback<()>),
    /// Navigate to a route path.
    Route(&'static str),
}

#[component]
/// Full project page: meta row, image, descriptions, technologies, and links.
pub fn ProjectDetails(project: &'static Project, back: BackTarget) -> impl IntoView {
    let back_control = match back {
        BackTarget::Callback(on_back) => view! {
            <IconButton
                icon=IconName::ArrowLeft
                label="Back to projects"
                layout_class="project-back"
                on_click=Callback::new(move |_| on_back.call(()))
            />
        }
        .into_view(),
        BackTarget::Route(path) => view! {
            <a href=path class="ui-icon-link project-back" aria-label="Back to projects">
                <Icon icon=IconName::ArrowLeft size=IconSize::Md />
            </a>
        }
        .into_view(),
    };

    view! {
        <article class="project-details">
            <Cluster gap=LayoutGap::Md layout_class="project-details-header">
                {back_control}
                <Stack gap=LayoutGap::Sm>
                    <Heading level=1>{project.title}</Heading>
                    <Cluster gap=LayoutGap::Md>
                        <MetaItem icon=IconName::Tag value=project.kind.label().to_string() />
                        <MetaItem icon=IconName::Calendar value=project.year.to_string() />
                        <MetaItem icon=IconName::User value=project.client.to_string() />
                    </Cluster>
                </Stack>
            </Cluster>

            <div class="project-details-layout">
                <Stack gap=LayoutGap::Lg layout_class="project-details-main">
                    <div class="project-details-media">
                        <img src=project.image alt=project.title width="800" height="600" />
                    </div>
                    <Card>
                        <Heading level=2>"About this project"</Heading>
                        <p class="project-details-lead">{project.description}</p>
                        <p>{project.long_description}</p>
                    </Card>
                    <Card>
                        <Heading level=2>"Technologies Used"</Heading>
                        <Cluster gap=LayoutGap::Sm>
                            {project
                                .technologies
                                .iter()
                                .map(|tech| view! { <Badge tone=TextTone::Accent>{*tech}</Badge> })
                                .collect_view()}
                        </Cluster>
                    </Card>
                </Stack>

                <Stack gap=LayoutGap::Md layout_class="project-details-sidebar">
                    <Card variant=SurfaceVariant::Accent>
                        <Heading level=2>"Project Details"</Heading>
                        <dl class="project-details-facts">
                            <dt>"Year"</dt>
                            <dd>{project.year}</dd>
                            <dt>"Client"</dt>
                            <dd>{project.client}</dd>
                            <dt>"Type"</dt>
                            <dd>{project.kind.label()}</dd>
                        </dl>
                    </Card>
                    <Stack gap=LayoutGap::Sm>
                        {project.live_link().map(|link| project_link(link, "Live Preview", IconName::ExternalLink, ButtonVariant::Primary))}
                        {project.source_link().map(|link| project_link(link, "View Code", IconName::Github, ButtonVariant::Standard))}
                    </Stack>
                    <Card variant=SurfaceVariant::Muted>
                        <Heading level=3>"Quick Stats"</Heading>
                        <dl class="project-details-facts">
                            <dt>"Technologies"</dt>
                            <dd>{project.technologies.len()}</dd>
                            <dt>"Category"</dt>
                            <dd>{project.kind.label()}</dd>
                        </dl>
                    </Card>
                </Stack>
            </div>
        </article>
    }
}

#[component]
fn MetaItem(icon: IconName, value: String) -> impl IntoView {
    view! {
        <Text tone=TextTone::Secondary layout_class="project-meta-item">
            <Icon icon size=IconSize::Sm />
            {value}
        </Text>
    }
}

// Free-text values such as "Private GitLab Repository" render as plain labels.
fn project_link(
    link: LinkTarget<'static>,
    label: &'static str,
    icon: IconName,
    variant: ButtonVariant,
) -> View {
    match link {
        LinkTarget::Url(url) => view! {
            <LinkButton href=url variant opens=LinkOpens::NewTab leading_icon=icon layout_class="project-link">
                {label}
            </LinkButton>
        }
        .into_view(),
        LinkTarget::Label(text) => view! {
            <div class="project-link project-link-label" data-link-kind="label">
                <Icon icon size=IconSize::Sm />
                <Text tone=TextTone::Secondary>{text}</Text>
            </div>
        }
        .into_view(),
    }
}
