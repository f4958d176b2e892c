use lettre::address::AddressError;
use lettre::transport::smtp;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError
{
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber
    {
        var: &'static str,
        value: String,
    },
}

/// Everything that can stop a notification from reaching the relay.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError
{
    #[error("invalid {role} address {address:?}: {source}")]
    Address
    {
        role: &'static str,
        address: String,
        #[source]
        source: AddressError,
    },

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("smtp error: {0}")]
    Transport(#[from] smtp::Error),
}

impl NotifyError
{
    /// Short label logged next to the message so failures can be grouped.
    pub fn kind(&self) -> &'static str
    {
        match self
        {
            NotifyError::Address { .. } => "address",
            NotifyError::Build(_) => "build",
            NotifyError::Transport(e) if e.is_timeout() => "timeout",
            NotifyError::Transport(e) if e.is_permanent() => "permanent",
            NotifyError::Transport(e) if e.is_transient() => "transient",
            NotifyError::Transport(e) if e.is_client() => "client",
            NotifyError::Transport(_) => "connection",
        }
    }
}
