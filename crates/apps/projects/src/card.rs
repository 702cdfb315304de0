use leptos::*;
use portfolio_content::Project;
use system_ui::prelude::*;

/// Technology tags shown on a card before the `+N` overflow badge.
pub const CARD_TAG_LIMIT: usize = 3;

#[derive(Clone, Copy)]
/// What "View Details" does on a card.
pub enum CardTarget {
    /// Select the project inside the desktop window.
    Select(Callback<&'static str>),
    /// Navigate to `/projects/{slug}`.
    Route,
}

#[component]
/// Compact project tile: image, type badge, summary, first tags, and a details action.
pub fn ProjectCard(project: &'static Project, target: CardTarget) -> impl IntoView {
    let (tags, hidden) = project.card_technologies(CARD_TAG_LIMIT);

    let action = match target {
        CardTarget::Select(on_select) => view! {
            <Button
                variant=ButtonVariant::Quiet
                layout_class="project-card-action"
                trailing_icon=IconName::ArrowUpRight
                on_click=Callback::new(move |_| on_select.call(project.slug))
            >
                "View Details"
            </Button>
        }
        .into_view(),
        CardTarget::Route => view! {
            <LinkButton
                href=project.detail_path()
                variant=ButtonVariant::Quiet
                layout_class="project-card-action"
                trailing_icon=IconName::ArrowUpRight
            >
                "View Details"
            </LinkButton>
        }
        .into_view(),
    };

    view! {
        <Card layout_class="project-card" padded=false>
            <div class="project-card-media">
                <img src=project.image alt=project.title width="800" height="600" loading="lazy" />
            </div>
            <Stack gap=LayoutGap::Sm padded=true>
                <Cluster justify=LayoutJustify::Between align=LayoutAlign::Start>
                    <Heading level=3>{project.title}</Heading>
                    <Badge tone=TextTone::Accent>{project.kind.label()}</Badge>
                </Cluster>
                <Text tone=TextTone::Secondary layout_class="project-card-summary">
                    {project.description}
                </Text>
                <Cluster gap=LayoutGap::Sm>
                    {tags.iter().map(|tech| view! { <Badge>{*tech}</Badge> }).collect_view()}
                    {(hidden > 0).then(|| view! { <Badge>{format!("+{hidden}")}</Badge> })}
                </Cluster>
                {action}
            </Stack>
        </Card>
    }
}
