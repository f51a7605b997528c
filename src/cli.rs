use std::path::PathBuf;

use clap::Parser;

use crate::carrier::DeliveryMode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Client roster file, the default is "$HOME/.dispatch.toml". The
    /// built-in roster is used if the default file does not exist.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Message sent to every client, overrides the roster file.
    #[arg(short, long)]
    pub message: Option<String>,

    /// Seed for the simulated sms delivery.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Whether sms are reported as received.
    #[arg(long, value_enum, default_value_t = DeliveryMode::Random)]
    pub delivery: DeliveryMode,
}
