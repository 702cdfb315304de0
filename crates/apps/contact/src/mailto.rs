//! `mailto:` composition for the contact form.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use platform_host::ExternalUrlService;

/// Placeholder the mail body uses in front of the sender's address.
pub const EMAIL_PLACEHOLDER: &str = "%EMAIL%";

/// Characters `encodeURIComponent` leaves alone besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Contact form field values.
pub struct ContactDraft {
    /// Sender name.
    pub name: String,
    /// Sender address.
    pub email: String,
    /// Mail subject.
    pub subject: String,
    /// Free-form message.
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One input of the contact form.
pub enum DraftField {
    /// Sender name.
    Name,
    /// Sender address.
    Email,
    /// Mail subject.
    Subject,
    /// Free-form message.
    Message,
}

impl DraftField {
    /// Every field, in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];
}

impl ContactDraft {
    /// Current text of `field`.
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Subject => &self.subject,
            DraftField::Message => &self.message,
        }
    }

    /// Replaces the text of `field`.
    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
            DraftField::Subject => &mut self.subject,
            DraftField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Whether every required field has non-whitespace content.
    pub fn is_complete(&self) -> bool {
        DraftField::ALL
            .iter()
            .all(|field| !self.field(*field).trim().is_empty())
    }

    /// Plain-text mail body before encoding.
    pub fn body(&self) -> String {
        format!(
            "Hi, my name is {} ({EMAIL_PLACEHOLDER}: {}).\n\n{}",
            self.name, self.email, self.message
        )
    }
}

/// Builds `mailto:<recipient>?subject=..&body=..` with both query values component-encoded.
pub fn compose_mailto(recipient: &str, draft: &ContactDraft) -> String {
    format!(
        "mailto:{recipient}?subject={}&body={}",
        encode_uri_component(&draft.subject),
        encode_uri_component(&draft.body())
    )
}

/// Composes the link for `draft` and hands it to `service`.
///
/// # Errors
///
/// Returns the host service error when navigation fails.
pub async fn send_via<S>(service: &S, recipient: &str, draft: &ContactDraft) -> Result<String, String>
where
    S: ExternalUrlService + ?Sized,
{
    let url = compose_mailto(recipient, draft);
    service.open_url(&url).await?;
    Ok(url)
}

/// Percent-encodes UTF-8 bytes outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::RecordingExternalUrlService;
    use pretty_assertions::assert_eq;

    use super::*;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "Ana".to_string(),
            email: "ana@x.io".to_string(),
            subject: "Hello there".to_string(),
            message: "Let's talk".to_string(),
        }
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("a b&c=d/e?f"), "a%20b%26c%3Dd%2Fe%3Ff");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("50%\n"), "50%25%0A");
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
        assert_eq!(encode_uri_component(""), "");
    }

    #[test]
    fn reserved_uri_characters_are_escaped() {
        assert_eq!(encode_uri_component("#$+,;:@[]"), "%23%24%2B%2C%3B%3A%40%5B%5D");
        assert_eq!(encode_uri_component("a\tb"), "a%09b");
    }

    #[test]
    fn mailto_carries_subject_and_templated_body() {
        assert_eq!(
            compose_mailto("mikhailharitz@gmail.com", &draft()),
            "mailto:mikhailharitz@gmail.com?subject=Hello%20there&body=Hi%2C%20my%20name%20is%20Ana%20(%25EMAIL%25%3A%20ana%40x.io).%0A%0ALet's%20talk"
        );
    }

    #[test]
    fn completeness_requires_every_field() {
        assert!(draft().is_complete());
        let mut missing = draft();
        missing.subject = "   ".to_string();
        assert!(!missing.is_complete());
        assert!(!ContactDraft::default().is_complete());
    }

    #[test]
    fn fields_are_edited_independently() {
        let mut edited = ContactDraft::default();
        edited.set(DraftField::Email, "ana@x.io".to_string());
        edited.set(DraftField::Message, "hi".to_string());
        assert_eq!(edited.field(DraftField::Email), "ana@x.io");
        assert_eq!(edited.field(DraftField::Message), "hi");
        assert_eq!(edited.field(DraftField::Name), "");
        assert!(!edited.is_complete());
    }

    #[test]
    fn send_via_hands_the_link_to_the_host() {
        let host = RecordingExternalUrlService::default();
        let url = block_on(send_via(&host, "me@example.com", &draft())).expect("send");
        assert_eq!(host.opened(), vec![url.clone()]);
        assert!(url.starts_with("mailto:me@example.com?subject=Hello%20there&body="));
    }
}
