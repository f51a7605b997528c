use std::fmt;

/// Medium a client wants to be reached through.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "String")]
pub enum Channel {
    #[default]
    Email,
    Sms,
}

impl Channel {
    /// Anything that is not exactly "sms" is treated as email.
    pub fn from_name(name: &str) -> Self {
        match name {
            "sms" => Channel::Sms,
            _ => Channel::Email,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Sms => "sms",
        }
    }
}

impl From<String> for Channel {
    fn from(name: String) -> Self {
        Channel::from_name(&name)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
