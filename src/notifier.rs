use chrono::{Local, NaiveDateTime};
use lettre::message::Mailbox;
use tracing::{error, info};

use crate::config::Config;
use crate::error::NotifyError;
use crate::message::{compose, format_submitted_at, DemoRequest};
use crate::smtp_client::{Mailer, SmtpClient};

/// Sends demo-request alerts to the configured notification mailbox.
///
/// Failures never escape: they are logged and reported as `false`. There is
/// no retry; that is up to the caller.
pub struct Notifier<M = SmtpClient>
{
    mailer: M,
    sender: String,
    recipient: String,
}

impl Notifier<SmtpClient>
{
    pub fn new(cfg: &Config) -> Self
    {
        Self::with_mailer
        (
            SmtpClient::new(cfg),
            &cfg.sender_email,
            &cfg.notification_email,
        )
    }
}

impl<M: Mailer> Notifier<M>
{
    pub fn with_mailer(mailer: M, sender: &str, recipient: &str) -> Self
    {
        Self
        {
            mailer,
            sender: sender.to_string(),
            recipient: recipient.to_string(),
        }
    }

    /// Returns `true` once the relay has accepted the message.
    pub fn send(&self, name: &str, email: &str, looking_for: &str) -> bool
    {
        let request = DemoRequest::new(name, email, looking_for);
        self.send_at(&request, Local::now().naive_local())
    }

    pub fn send_at(&self, request: &DemoRequest, submitted_at: NaiveDateTime) -> bool
    {
        match self.try_send(request, submitted_at)
        {
            Ok(()) =>
            {
                info!(recipient = %self.recipient, "Email notification sent successfully to {}", self.recipient);
                true
            }
            Err(e) =>
            {
                error!(kind = e.kind(), recipient = %self.recipient, "Failed to send email notification: {e}");
                false
            }
        }
    }

    pub fn try_send(&self, request: &DemoRequest, submitted_at: NaiveDateTime) -> Result<(), NotifyError>
    {
        let from = parse_mailbox("sender", &self.sender)?;
        let to = parse_mailbox("recipient", &self.recipient)?;
        let stamp = format_submitted_at(submitted_at);

        let email = compose(request, &stamp, from, to)?;
        self.mailer.deliver(&email)
    }
}

fn parse_mailbox(role: &'static str, address: &str) -> Result<Mailbox, NotifyError>
{
    address.parse().map_err(|source| NotifyError::Address
    {
        role,
        address: address.to_string(),
        source,
    })
}
