use anyhow::Result;
use clap::Parser;
use log::info;

use notify_dispatch::cli::Args;
use notify_dispatch::config;
use notify_dispatch::console::Console;
use notify_dispatch::dispatch::dispatch;
use notify_dispatch::notifier::NotificationFactory;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = config::load(args.config.as_deref())?;
    let message = config.message_or(args.message.as_deref());
    let clients = config.clients();

    info!("delivery mode: {:?}", args.delivery);
    let factory = NotificationFactory::new(Console::Stdout, args.delivery.carrier(args.seed));
    dispatch(&clients, message, &factory);

    Ok(())
}
