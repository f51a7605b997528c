use super::Notifier;
use crate::channel::Channel;
use crate::console::Console;

pub struct EmailNotification {
    console: Console,
}

impl EmailNotification {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    fn send(&self, recipient: &str, message: &str) {
        self.console.line(&format!(
            "Email sent to {} containing message {}",
            recipient, message
        ));
    }
}

impl Notifier for EmailNotification {
    fn manage_notification(&mut self, recipient: &str, message: &str) {
        self.send(recipient, message);
    }

    fn channel(&self) -> Channel {
        Channel::Email
    }
}
