pub mod config;
pub mod error;
pub mod logger;
pub mod message;
pub mod notifier;
pub mod smtp_client;

pub use config::Config;
pub use error::{ConfigError, NotifyError};
pub use message::DemoRequest;
pub use notifier::Notifier;
pub use smtp_client::{Mailer, SmtpClient};
