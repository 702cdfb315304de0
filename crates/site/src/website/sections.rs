use desktop_app_about::{SkillsGrid, SocialLinks};
use desktop_app_contact::{ContactDetail, ContactForm};
use leptos::*;
use portfolio_content::{projects, skill_categories, PROFILE};
use system_ui::prelude::*;

use super::carousel::ProjectCarousel;

const RESUME_URL: &str =
    "https://drive.google.com/file/d/1pISl6NVG0hZe0xVmee6-dYzRP2Sw6Lqo/view?usp=sharing";
const HERO_PITCH: &str = "Crafting secure, reliable, and scalable digital experiences.";

/// Pointer position inside a `width` x `height` box at `(left, top)`, as percentages.
///
/// Degenerate boxes keep the spotlight centered.
pub(super) fn spotlight_percent(
    client: (f64, f64),
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (50.0, 50.0);
    }
    (
        (client.0 - left) / width * 100.0,
        (client.1 - top) / height * 100.0,
    )
}

#[component]
fn SectionTitle(title: &'static str) -> impl IntoView {
    view! {
        <div class="site-section-title">
            <Heading level=2>{title}</Heading>
            <span class="site-section-rule" aria-hidden="true"></span>
        </div>
    }
}

#[component]
/// Full-height intro with a pointer-following spotlight.
pub(super) fn Hero() -> impl IntoView {
    let section = create_node_ref::<html::Section>();
    let spotlight = create_rw_signal((50.0_f64, 50.0_f64));

    let follow_pointer = move |ev: web_sys::MouseEvent| {
        let Some(section) = section.get_untracked() else {
            return;
        };
        let rect = section.get_bounding_client_rect();
        spotlight.set(spotlight_percent(
            (f64::from(ev.client_x()), f64::from(ev.client_y())),
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        ));
    };

    view! {
        <section
            id="hero-section"
            class="site-hero"
            node_ref=section
            on:mousemove=follow_pointer
            style=move || {
                let (x, y) = spotlight.get();
                format!("--spotlight-x:{x:.1}%;--spotlight-y:{y:.1}%;")
            }
        >
            <div class="site-hero-content">
                <h1 class="site-hero-title">
                    <span class="site-hero-greeting">"Hi, I'm"</span>
                    <span class="site-hero-name">{PROFILE.brand.0}</span>
                </h1>
                <Card layout_class="site-hero-pitch" variant=SurfaceVariant::Muted>
                    <Text role=TextRole::Title>{HERO_PITCH}</Text>
                </Card>
                <Cluster gap=LayoutGap::Lg justify=LayoutJustify::Center>
                    <LinkButton href="#projects" variant=ButtonVariant::Primary size=ButtonSize::Lg>
                        "View My Work"
                    </LinkButton>
                    <LinkButton
                        href=RESUME_URL
                        opens=LinkOpens::NewTab
                        size=ButtonSize::Lg
                        leading_icon=IconName::Download
                    >
                        "Download Resume"
                    </LinkButton>
                </Cluster>
                <a href="#about" class="site-hero-scroll">
                    <Text tone=TextTone::Secondary role=TextRole::Caption>"Scroll to explore"</Text>
                    <Icon icon=IconName::ArrowDown size=IconSize::Md />
                </a>
            </div>
        </section>
    }
}

#[component]
pub(super) fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="site-section site-section-muted">
            <SectionTitle title="About Me" />
            <Stack gap=LayoutGap::Lg>
                {PROFILE
                    .about
                    .iter()
                    .map(|paragraph| view! { <Text tone=TextTone::Secondary>{*paragraph}</Text> })
                    .collect_view()}
                <Stack gap=LayoutGap::Sm>
                    <Heading level=3>"Education"</Heading>
                    <Text tone=TextTone::Secondary>{PROFILE.education_degree}</Text>
                    <Text tone=TextTone::Secondary>{PROFILE.education_school}</Text>
                </Stack>
            </Stack>
        </section>
    }
}

#[component]
pub(super) fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="site-section">
            <SectionTitle title="My Skills" />
            <Text tone=TextTone::Secondary>
                "I've worked with various technologies across the full stack development spectrum. Here are my areas of expertise:"
            </Text>
            <SkillsGrid categories=skill_categories() />
        </section>
    }
}

#[component]
pub(super) fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="site-section site-section-muted">
            <Cluster justify=LayoutJustify::Between align=LayoutAlign::End>
                <Stack gap=LayoutGap::Sm>
                    <SectionTitle title="Featured Projects" />
                    <Text tone=TextTone::Secondary>"Here are some of my recent projects."</Text>
                </Stack>
                <LinkButton href="/projects" variant=ButtonVariant::Quiet trailing_icon=IconName::ArrowRight>
                    "View All Projects"
                </LinkButton>
            </Cluster>
            <ProjectCarousel projects=projects() />
        </section>
    }
}

#[component]
pub(super) fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="site-section">
            <SectionTitle title="Get In Touch" />
            <Text tone=TextTone::Secondary>
                "Have a project in mind or want to chat? Feel free to reach out! I'm always open to discussing new projects, creative ideas or opportunities to be part of your vision."
            </Text>
            <div class="site-contact-grid">
                <Stack gap=LayoutGap::Lg>
                    <ContactDetail icon=IconName::Mail title="Email">
                        {PROFILE.email}
                    </ContactDetail>
                    <ContactDetail icon=IconName::Phone title="Phone">
                        {PROFILE.phone}
                    </ContactDetail>
                    <ContactDetail icon=IconName::MapPin title="Location">
                        {PROFILE.location}
                    </ContactDetail>
                    <Stack gap=LayoutGap::Sm>
                        <Heading level=3>"Connect with me"</Heading>
                        <SocialLinks links=PROFILE.socials />
                    </Stack>
                </Stack>
                <ContactForm />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn spotlight_tracks_pointer_inside_the_hero() {
        assert_eq!(spotlight_percent((300.0, 250.0), 100.0, 50.0, 800.0, 400.0), (25.0, 50.0));
        assert_eq!(spotlight_percent((100.0, 50.0), 100.0, 50.0, 800.0, 400.0), (0.0, 0.0));
    }

    #[test]
    fn collapsed_hero_keeps_spotlight_centered() {
        assert_eq!(spotlight_percent((10.0, 10.0), 0.0, 0.0, 0.0, 600.0), (50.0, 50.0));
    }
}
