use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{Context, Result};
use log::info;

use crate::client::{default_roster, Client, DEFAULT_MESSAGE};

const DEFAULT_CONFIG_PATH: &str = ".dispatch.toml";

#[derive(serde::Deserialize, Default, Debug, Clone)]
pub struct Config {
    pub message: Option<String>,
    #[serde(default)]
    pub clients: Vec<Client>,
}

impl Config {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }

    /// A message given on the command line beats the file's.
    pub fn message_or<'a>(&'a self, overridden: Option<&'a str>) -> &'a str {
        overridden.unwrap_or_else(|| self.message())
    }

    /// Configured clients, or the built-in roster when none are listed.
    pub fn clients(&self) -> Vec<Client> {
        if self.clients.is_empty() {
            return default_roster();
        }
        self.clients.clone()
    }
}

pub fn default_path() -> PathBuf {
    let home_dir = env::var("HOME").unwrap_or_else(|_| String::from("/"));
    Path::new(&home_dir).join(DEFAULT_CONFIG_PATH)
}

/// Loads the roster. An explicit path must exist and parse; a missing
/// default file just means the built-in roster.
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_from(path, true),
        None => load_from(&default_path(), false),
    }
}

pub fn load_from(path: &Path, explicit: bool) -> Result<Config> {
    let config_literal = match fs::read_to_string(path) {
        Ok(config) => config,
        Err(_) if !explicit && !path.exists() => {
            info!("no config at {}, using built-in roster", path.display());
            return Ok(Config::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read config {}", path.display()));
        }
    };

    toml::from_str(&config_literal).with_context(|| format!("parse config {}", path.display()))
}
