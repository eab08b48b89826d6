use std::env;
use std::time::Duration;

use anyhow::Context;
use tracing::warn;
use url::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TRIPS_API_URL: &str =
    "https://z0qw1e7jpd.execute-api.eu-west-1.amazonaws.com/default/trips";
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// SQLite connection string, read from `DB_NAME`.
    pub database_url: String,
    pub api_key: String,
    pub trips_api_url: Url,
}

impl Config {
    /// Read configuration from the process environment. Call
    /// `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Result<String, env::VarError>) -> anyhow::Result<Self> {
        let port = match optional(&lookup, "PORT")? {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let Some(database_url) = optional(&lookup, "DB_NAME")? else {
            anyhow::bail!("DB_NAME is required but not set");
        };

        let api_key = optional(&lookup, "API_KEY")?.unwrap_or_else(|| {
            warn!("API_KEY is not set; trip search requests will be sent without a key");
            String::new()
        });

        let raw_url = optional(&lookup, "TRIPS_API_URL")?
            .unwrap_or_else(|| DEFAULT_TRIPS_API_URL.to_string());
        let trips_api_url =
            Url::parse(&raw_url).with_context(|| format!("TRIPS_API_URL is not a valid url: {raw_url}"))?;

        Ok(Self {
            port,
            database_url,
            api_key,
            trips_api_url,
        })
    }
}

/// Trimmed value of `key`; unset and blank both read as `None`.
fn optional(
    lookup: &impl Fn(&str) -> Result<String, env::VarError>,
    key: &str,
) -> anyhow::Result<Option<String>> {
    match lookup(key) {
        Ok(value) => {
            let value = value.trim();
            if value.is_empty() {
                Ok(None)
            } else {
                Ok(Some(value.to_string()))
            }
        }
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            anyhow::bail!("{key} is not valid unicode");
        }
    }
}
