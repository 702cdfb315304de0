//! About mini-app: owner introduction, CV download, social links, and the skills grid.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use portfolio_content::{skill_categories, SkillCategory, SocialLink, PROFILE};
use system_ui::prelude::*;

/// Resolves a content icon token, falling back to a neutral glyph for unknown tokens.
pub fn content_icon(token: &str) -> IconName {
    IconName::from_token(token).unwrap_or(IconName::Star)
}

#[component]
/// Desktop window content for the About app.
pub fn AboutApp() -> impl IntoView {
    view! {
        <div class="app-about">
            <Stack gap=LayoutGap::Md layout_class="app-about-hero">
                <Heading level=1 layout_class="gradient-text">{PROFILE.name}</Heading>
                <Heading level=2 tone=TextTone::Accent>{PROFILE.role}</Heading>
                <Text tone=TextTone::Secondary>{PROFILE.tagline}</Text>
                <Cluster gap=LayoutGap::Md>
                    <LinkButton
                        href=PROFILE.cv_path
                        opens=LinkOpens::Download
                        variant=ButtonVariant::Primary
                        leading_icon=IconName::Download
                    >
                        "Download CV"
                    </LinkButton>
                    <SocialLinks links=PROFILE.socials />
                </Cluster>
            </Stack>
            <hr class="app-about-divider" />
            <Stack gap=LayoutGap::Md>
                <Heading level=3>"Technical Skills"</Heading>
                <SkillsGrid categories=skill_categories() />
            </Stack>
        </div>
    }
}

#[component]
/// Row of icon links to external profiles.
pub fn SocialLinks(links: &'static [SocialLink]) -> impl IntoView {
    view! {
        <Cluster gap=LayoutGap::Sm layout_class="social-links">
            {links
                .iter()
                .map(|link| view! {
                    <a
                        href=link.url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="ui-icon-link"
                        aria-label=link.label
                        title=link.label
                    >
                        <Icon icon=content_icon(link.icon) size=IconSize::Md />
                    </a>
                })
                .collect_view()}
        </Cluster>
    }
}

#[component]
/// Four-up grid of skill categories.
pub fn SkillsGrid(categories: &'static [SkillCategory]) -> impl IntoView {
    view! {
        <Grid columns=4 gap=LayoutGap::Lg layout_class="skills-grid">
            {categories
                .iter()
                .map(|category| view! {
                    <Card layout_class="skill-card">
                        <span class="skill-card-icon">
                            <Icon icon=content_icon(category.icon) size=IconSize::Lg />
                        </span>
                        <Heading level=3>{category.title}</Heading>
                        <ul class="skill-list">
                            {category.skills.iter().map(|skill| view! { <li>{*skill}</li> }).collect_view()}
                        </ul>
                    </Card>
                })
                .collect_view()}
        </Grid>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn content_icons_resolve_without_fallback() {
        for category in skill_categories() {
            assert_ne!(content_icon(category.icon), IconName::Star, "{}", category.title);
        }
        for link in PROFILE.socials {
            assert_ne!(content_icon(link.icon), IconName::Star, "{}", link.label);
        }
    }

    #[test]
    fn unknown_icon_token_falls_back() {
        assert_eq!(content_icon("sparkles"), IconName::Star);
    }
}
