//! Notifies a roster of clients by email or sms. Delivery is simulated: each
//! notification writes a confirmation line, and sms notifications announce a
//! (randomly) received message to their observers.

pub mod carrier;
pub mod channel;
pub mod cli;
pub mod client;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod notifier;
pub mod observer;
