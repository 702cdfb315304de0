//! Contact mini-app and the shared contact form.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod form;
pub mod mailto;

use leptos::*;
use portfolio_content::PROFILE;
use system_ui::prelude::*;

pub use form::ContactForm;
pub use mailto::{compose_mailto, encode_uri_component, ContactDraft, DraftField};

#[component]
/// Desktop window content for the Contact app.
pub fn ContactApp() -> impl IntoView {
    view! {
        <div class="app-contact">
            <Stack gap=LayoutGap::Lg layout_class="app-contact-details">
                <Stack gap=LayoutGap::Sm>
                    <Heading level=2>"Get in Touch"</Heading>
                    <Text tone=TextTone::Secondary>
                        "Have a project in mind or just want to say hi? I'd love to hear from you."
                    </Text>
                </Stack>
                <ContactDetail icon=IconName::Mail title="Email">
                    <a href=format!("mailto:{}", PROFILE.email)>{PROFILE.email}</a>
                </ContactDetail>
                <ContactDetail icon=IconName::MapPin title="Location">
                    <Text tone=TextTone::Secondary>{PROFILE.location}</Text>
                </ContactDetail>
            </Stack>
            <ContactForm />
        </div>
    }
}

#[component]
/// Icon + title + value tile used by the contact surfaces.
pub fn ContactDetail(icon: IconName, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <Card variant=SurfaceVariant::Muted layout_class="contact-detail">
            <Cluster gap=LayoutGap::Md align=LayoutAlign::Start>
                <span class="contact-detail-icon">
                    <Icon icon size=IconSize::Md />
                </span>
                <Stack gap=LayoutGap::None>
                    <Heading level=3>{title}</Heading>
                    {children()}
                </Stack>
            </Cluster>
        </Card>
    }
}
