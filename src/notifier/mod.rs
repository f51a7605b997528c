use std::rc::Rc;

use crate::carrier::SharedCarrier;
use crate::channel::Channel;
use crate::console::Console;
use crate::observer::{DeliveryObserver, SmsReceived};

pub mod email;
pub mod sms;

pub use email::EmailNotification;
pub use sms::{SmsNotification, SmsState};

/// A single-use notification for one channel.
pub trait Notifier {
    /// Only entry point for callers; delivery itself stays private to each
    /// variant.
    fn manage_notification(&mut self, recipient: &str, message: &str);

    fn channel(&self) -> Channel;

    fn observer_count(&self) -> usize {
        0
    }
}

/// Something that announces events to attached observers.
pub trait Subject {
    fn attach(&mut self, observer: Rc<dyn DeliveryObserver>);
    fn detach(&mut self, observer: &Rc<dyn DeliveryObserver>);
    fn notify(&self);
}

/// Builds the notification matching a client's channel. The carrier is
/// shared by every sms this factory creates.
pub struct NotificationFactory {
    console: Console,
    carrier: SharedCarrier,
}

impl NotificationFactory {
    pub fn new(console: Console, carrier: SharedCarrier) -> Self {
        Self { console, carrier }
    }

    /// Unrecognised channel names get an email notification.
    pub fn create_notification(&self, channel: &str) -> Box<dyn Notifier> {
        self.create(Channel::from_name(channel))
    }

    pub fn create(&self, channel: Channel) -> Box<dyn Notifier> {
        match channel {
            Channel::Sms => {
                let mut sms = SmsNotification::new(self.console.clone(), self.carrier.clone());
                sms.attach(Rc::new(SmsReceived::new(self.console.clone())));
                Box::new(sms)
            }
            Channel::Email => Box::new(EmailNotification::new(self.console.clone())),
        }
    }
}
