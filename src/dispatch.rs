use log::{debug, info};

use crate::client::Client;
use crate::notifier::NotificationFactory;

/// Notifies every client in order, one notification per client.
pub fn dispatch(clients: &[Client], message: &str, factory: &NotificationFactory) {
    info!("notifying {} clients", clients.len());
    for client in clients {
        debug!("notifying {} by {}", client.name(), client.contact_with());
        let mut notification = factory.create(client.contact_with());
        notification.manage_notification(client.resolve_contact_information(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::DeliveryMode;
    use crate::client::default_roster;
    use crate::console::Console;

    #[test]
    fn sent_lines_follow_roster_order() {
        let console = Console::buffered();
        let factory = NotificationFactory::new(console.clone(), DeliveryMode::Never.carrier(None));

        dispatch(&default_roster(), "Order shipped", &factory);

        assert_eq!(
            console.lines(),
            [
                "Email sent to karine@mail.fr containing message Order shipped",
                "SMS sent to 01.02.03.04.05.07 containing message Order shipped",
                "SMS sent to 01.02.03.04.05.08 containing message Order shipped",
                "Email sent to justine@mail.fr containing message Order shipped",
            ]
        );
    }

    #[test]
    fn delivery_line_follows_its_sms() {
        let console = Console::buffered();
        let factory = NotificationFactory::new(console.clone(), DeliveryMode::Always.carrier(None));

        dispatch(&default_roster(), "Order shipped", &factory);

        let lines = console.lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "Message delivered");
        assert_eq!(lines[4], "Message delivered");
    }

    #[test]
    fn empty_roster_writes_nothing() {
        let console = Console::buffered();
        let factory = NotificationFactory::new(console.clone(), DeliveryMode::Always.carrier(None));
        dispatch(&[], "Order shipped", &factory);
        assert!(console.lines().is_empty());
    }
}
