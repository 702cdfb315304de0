use leptos::*;
use platform_host::WallClockSnapshot;
use portfolio_content::PROFILE;
use system_ui::prelude::*;

use super::{header::Brand, NAV_SECTIONS};

fn copyright_line(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", PROFILE.name)
}

#[component]
pub(super) fn SiteFooter() -> impl IntoView {
    let year = WallClockSnapshot::now().year();

    view! {
        <footer class="site-footer">
            <Grid columns=3 gap=LayoutGap::Lg>
                <Stack gap=LayoutGap::Md>
                    <Brand />
                    <Text tone=TextTone::Secondary>
                        "A passionate web developer focused on creating functional and secure websites and applications."
                    </Text>
                </Stack>
                <Stack gap=LayoutGap::Sm>
                    <Heading level=3>"Quick Links"</Heading>
                    <nav class="site-footer-links" aria-label="Quick links">
                        {NAV_SECTIONS
                            .iter()
                            .map(|section| view! { <a href=section.href()>{section.label}</a> })
                            .collect_view()}
                    </nav>
                </Stack>
                <Stack gap=LayoutGap::Sm>
                    <Heading level=3>"Contact"</Heading>
                    <Text tone=TextTone::Secondary>{PROFILE.email}</Text>
                    <Text tone=TextTone::Secondary>{PROFILE.phone}</Text>
                    <Text tone=TextTone::Secondary>{PROFILE.location}</Text>
                </Stack>
            </Grid>
            <Text role=TextRole::Caption tone=TextTone::Secondary layout_class="site-footer-copyright">
                {copyright_line(year)}
            </Text>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn copyright_carries_the_year_and_owner() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Mikhail Haritz. All rights reserved."
        );
    }
}
