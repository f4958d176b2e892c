use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Clone)]
pub struct Config
{
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub sender_email: String,
    pub notification_email: String,
    /// Left to the transport default when unset.
    pub smtp_timeout: Option<Duration>,
}

impl Config
{
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError>
    {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let smtp_port = match get("SMTP_PORT")
        {
            Some(raw) => parse_number("SMTP_PORT", &raw)?,
            None => DEFAULT_SMTP_PORT,
        };

        let smtp_timeout = match get("SMTP_TIMEOUT_SECS")
        {
            Some(raw) => Some(Duration::from_secs(parse_number("SMTP_TIMEOUT_SECS", &raw)?)),
            None => None,
        };

        Ok(Self
        {
            smtp_server: require("SMTP_SERVER")?,
            smtp_port,
            smtp_username: require("SMTP_USERNAME")?,
            smtp_password: require("SMTP_PASSWORD")?,
            sender_email: require("SENDER_EMAIL")?,
            notification_email: require("NOTIFICATION_EMAIL")?,
            smtp_timeout,
        })
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError>
{
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber
    {
        var,
        value: raw.to_string(),
    })
}
