use lettre::transport::smtp::{authentication::{Credentials, Mechanism}, SmtpTransport};
use lettre::{Message, Transport};
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::error::NotifyError;

/// Something that can hand a finished message to a relay.
pub trait Mailer
{
    fn deliver(&self, email: &Message) -> Result<(), NotifyError>;
}

/// Submits over STARTTLS with one fresh connection per message.
pub struct SmtpClient
{
    host: String,
    port: u16,
    creds: Credentials,
    timeout: Option<Duration>,
}

impl SmtpClient
{
    pub fn new(cfg: &Config) -> Self
    {
        Self
        {
            host: cfg.smtp_server.clone(),
            port: cfg.smtp_port,
            creds: Credentials::new(cfg.smtp_username.clone(), cfg.smtp_password.clone()),
            timeout: cfg.smtp_timeout,
        }
    }

    fn transport(&self) -> Result<SmtpTransport, NotifyError>
    {
        let mut builder = SmtpTransport::starttls_relay(&self.host)?
            .port(self.port)
            .credentials(self.creds.clone())
            .authentication(vec![Mechanism::Plain, Mechanism::Login]);
        if let Some(timeout) = self.timeout
        {
            builder = builder.timeout(Some(timeout));
        }
        Ok(builder.build())
    }
}

impl Mailer for SmtpClient
{
    fn deliver(&self, email: &Message) -> Result<(), NotifyError>
    {
        // Dropped at the end of this call, which closes the connection on
        // every path.
        let mailer = self.transport()?;
        debug!(host = %self.host, port = self.port, "submitting message");
        mailer.send(email)?;
        Ok(())
    }
}
