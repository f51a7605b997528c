use crate::channel::Channel;

pub const DEFAULT_MESSAGE: &str = "Order shipped";

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Client {
    name: String,
    contact_with: Channel,
    email: String,
    phone: String,
}

impl Client {
    pub fn new(name: &str, contact_with: &str, email: &str, phone: &str) -> Self {
        Self {
            name: name.to_string(),
            contact_with: Channel::from_name(contact_with),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact_with(&self) -> Channel {
        self.contact_with
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Phone number for sms clients, email address for everyone else.
    pub fn resolve_contact_information(&self) -> &str {
        match self.contact_with {
            Channel::Sms => &self.phone,
            Channel::Email => &self.email,
        }
    }
}

/// Clients notified when no roster is configured.
pub fn default_roster() -> Vec<Client> {
    vec![
        Client::new("Karine", "email", "karine@mail.fr", "01.02.03.04.05.06"),
        Client::new("Julien", "sms", "julien@mail.fr", "01.02.03.04.05.07"),
        Client::new("Karim", "sms", "karim@mail.fr", "01.02.03.04.05.08"),
        Client::new("Justine", "email", "justine@mail.fr", "01.02.03.04.05.09"),
    ]
}
