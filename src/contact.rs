use crate::client::ApiClient;
use crate::models::ContactMessage;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Fullname,
    Email,
    Message,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    pub fields: ContactMessage,
    pub button_disabled: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: ContactMessage::default(),
            button_disabled: true,
        }
    }
}

impl ContactForm {
    pub fn from_message(mut fields: ContactMessage) -> Self {
        fields.email = fields.email.trim().to_string();
        let mut form = Self {
            fields,
            button_disabled: true,
        };
        form.refresh_button();
        form
    }

    pub fn input(&mut self, field: ContactField, value: &str) {
        match field {
            ContactField::Fullname => self.fields.fullname = value.to_string(),
            ContactField::Email => self.fields.email = value.trim().to_string(),
            ContactField::Message => self.fields.message = value.to_string(),
        }
        self.refresh_button();
    }

    fn refresh_button(&mut self) {
        self.button_disabled = !self.is_valid();
    }

    pub fn is_valid(&self) -> bool {
        !self.fields.fullname.is_empty()
            && !self.fields.message.is_empty()
            && is_valid_email(&self.fields.email)
    }

    fn reset(&mut self) {
        self.fields = ContactMessage::default();
        self.button_disabled = true;
    }

    /// Sends the message and returns the alert to show.
    pub async fn submit(&mut self, client: &ApiClient) -> String {
        info!(
            fullname = %self.fields.fullname,
            email = %self.fields.email,
            "submitting contact form"
        );

        match client.send_contact(&self.fields).await {
            Ok(response) if response.is_success() => {
                self.reset();
                "Message sent successfully!".to_string()
            }
            Ok(response) => format!("Error: {}", response.message),
            Err(err) => {
                error!("error sending contact form: {err}");
                "Failed to send message. Please try again.".to_string()
            }
        }
    }
}

/// Same shape the browser accepts for `<input type="email">`: a local part,
/// one `@`, and dot-separated labels of letters, digits and hyphens.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    const LOCAL_SPECIALS: &str = ".!#$%&'*+/=?^_`{|}~-";
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(ch));

    let domain_ok = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
        });

    local_ok && domain_ok
}
