use std::rc::Rc;

use log::debug;

use super::{Notifier, Subject};
use crate::carrier::SharedCarrier;
use crate::channel::Channel;
use crate::console::Console;
use crate::observer::DeliveryObserver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsState {
    Created,
    Sent,
    Delivered,
    NotDelivered,
}

pub struct SmsNotification {
    console: Console,
    carrier: SharedCarrier,
    observers: Vec<Rc<dyn DeliveryObserver>>,
    state: SmsState,
}

impl SmsNotification {
    pub fn new(console: Console, carrier: SharedCarrier) -> Self {
        Self {
            console,
            carrier,
            observers: Vec::new(),
            state: SmsState::Created,
        }
    }

    pub fn state(&self) -> SmsState {
        self.state
    }

    /// Observers only hear about messages that were actually received.
    /// Only a sent message gets an outcome.
    fn set_received(&mut self, received: bool) {
        if self.state != SmsState::Sent {
            return;
        }
        if received {
            self.state = SmsState::Delivered;
            self.notify();
        } else {
            self.state = SmsState::NotDelivered;
        }
    }

    fn send(&mut self, recipient: &str, message: &str) {
        self.console.line(&format!(
            "SMS sent to {} containing message {}",
            recipient, message
        ));
        self.state = SmsState::Sent;
        let received = self.carrier.borrow_mut().received();
        debug!("sms to {} received: {}", recipient, received);
        self.set_received(received);
    }
}

impl Subject for SmsNotification {
    fn attach(&mut self, observer: Rc<dyn DeliveryObserver>) {
        if !self.observers.iter().any(|o| Rc::ptr_eq(o, &observer)) {
            self.observers.push(observer);
        }
    }

    fn detach(&mut self, observer: &Rc<dyn DeliveryObserver>) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.on_delivery_event(self);
        }
    }
}

impl Notifier for SmsNotification {
    fn manage_notification(&mut self, recipient: &str, message: &str) {
        self.send(recipient, message);
    }

    fn channel(&self) -> Channel {
        Channel::Sms
    }

    fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
