use anyhow::{Context, Result};
use std::env;

/// Mail credentials and recipient, read once from the environment at
/// startup and passed through immutably from there.
#[derive(Debug, Clone)]
pub struct Config {
    /// Sender mailbox, also the SMTP username.
    pub smtp_user: String,
    /// App password for the sender mailbox.
    pub smtp_password: String,
    /// Where availability alerts go.
    pub notify_to: String,
}

impl Config {
    /// Read `GMAIL_USER`, `GMAIL_PASSWORD` and `TO_EMAIL`. There are no
    /// defaults; a missing variable is a startup failure.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            smtp_user: require("GMAIL_USER")?,
            smtp_password: require("GMAIL_PASSWORD")?,
            notify_to: require("TO_EMAIL")?,
        })
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("missing required environment variable {name}"))
}
