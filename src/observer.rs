use crate::console::Console;
use crate::notifier::sms::SmsNotification;

/// Reacts to a delivery reported by an sms notification.
pub trait DeliveryObserver {
    fn on_delivery_event(&self, subject: &SmsNotification);
}

/// Tells the operator the sms reached the handset.
pub struct SmsReceived {
    console: Console,
}

impl SmsReceived {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl DeliveryObserver for SmsReceived {
    fn on_delivery_event(&self, _subject: &SmsNotification) {
        self.console.line("Message delivered");
    }
}
