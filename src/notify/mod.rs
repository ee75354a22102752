use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

const SMTP_HOST: &str = "smtp.gmail.com";
const SMTP_PORT: u16 = 587;

/// Common trait for notification sinks, so the driver can be exercised
/// without a live mail relay.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one plain-text notification. Not retried on failure.
    async fn notify(&self, subject: &str, body: &str) -> Result<()>;
}

/// Gmail SMTP notifier. Credentials go over STARTTLS on the submission
/// port; one message submission per call and no local copy kept.
pub struct EmailNotifier {
    from: Mailbox,
    to: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailNotifier {
    pub fn new(config: &Config) -> Result<Self> {
        let from: Mailbox = config
            .smtp_user
            .parse()
            .with_context(|| format!("invalid sender address: {}", config.smtp_user))?;
        let to: Mailbox = config
            .notify_to
            .parse()
            .with_context(|| format!("invalid recipient address: {}", config.notify_to))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(SMTP_HOST)
            .context("failed to configure SMTP relay")?
            .port(SMTP_PORT)
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        Ok(Self {
            from,
            to,
            transport,
        })
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn notify(&self, subject: &str, body: &str) -> Result<()> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .body(body.to_string())
            .context("failed to build email message")?;

        self.transport
            .send(email)
            .await
            .context("failed to send email")?;

        info!("Email sent successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(user: &str, to: &str) -> Config {
        Config {
            smtp_user: user.to_string(),
            smtp_password: "app-password".to_string(),
            notify_to: to.to_string(),
        }
    }

    #[test]
    fn builds_from_valid_addresses() {
        let notifier = EmailNotifier::new(&config("sender@gmail.com", "alerts@example.com"));
        assert!(notifier.is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(EmailNotifier::new(&config("not an address", "alerts@example.com")).is_err());
        assert!(EmailNotifier::new(&config("sender@gmail.com", "also not one")).is_err());
    }
}
