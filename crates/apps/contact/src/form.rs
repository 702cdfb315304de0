use leptos::*;
use portfolio_content::PROFILE;
use system_ui::prelude::*;

use crate::mailto::{send_via, ContactDraft, DraftField};

#[component]
/// Name/email/subject/message form that opens the visitor's mail client on submit.
pub fn ContactForm(
    #[prop(default = PROFILE.email)] recipient: &'static str,
) -> impl IntoView {
    let draft = create_rw_signal(ContactDraft::default());

    let on_submit = Callback::new(move |_| {
        let current = draft.get_untracked();
        if !current.is_complete() {
            logging::warn!("contact form submitted with empty fields");
            return;
        }
        spawn_local(async move {
            let host = platform_host_web::external_url_service();
            if let Err(err) = send_via(&host, recipient, &current).await {
                logging::warn!("contact mailto navigation failed: {err}");
            }
        });
    });

    let value = move |field: DraftField| {
        Signal::derive(move || draft.with(|d| d.field(field).to_string()))
    };
    let edit = move |field: DraftField| {
        Callback::new(move |text: String| draft.update(|d| d.set(field, text)))
    };

    view! {
        <Form layout_class="contact-form" aria_label="Contact form" on_submit>
            <Grid columns=2 gap=LayoutGap::Md>
                <FormField
                    label="Name"
                    name="name"
                    placeholder="Your name"
                    value=value(DraftField::Name)
                    on_input=edit(DraftField::Name)
                />
                <FormField
                    label="Email"
                    name="email"
                    kind=FieldKind::Email
                    placeholder="Your email"
                    value=value(DraftField::Email)
                    on_input=edit(DraftField::Email)
                />
            </Grid>
            <FormField
                label="Subject"
                name="subject"
                placeholder="Subject"
                value=value(DraftField::Subject)
                on_input=edit(DraftField::Subject)
            />
            <FormField
                label="Message"
                name="message"
                kind=FieldKind::Multiline
                placeholder="Your message"
                value=value(DraftField::Message)
                on_input=edit(DraftField::Message)
            />
            <Button submit=true variant=ButtonVariant::Primary layout_class="contact-submit">
                "Send Message"
            </Button>
        </Form>
    }
}
