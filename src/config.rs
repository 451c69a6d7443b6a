use anyhow::{Context, Result};
use clap::Args;
use std::{env, time::Duration};
use url::Url;

/// Default timeout for a single request: 30 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the object API.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base API endpoint, e.g. `https://storage.example.com`.
    pub endpoint: Url,

    /// Account path put in front of every `container/object` path
    /// (e.g. `/v1/Storage-acme`). Empty for none.
    pub container_path: String,

    /// Pre-issued token sent as `X-Auth-Token`.
    pub auth_token: Option<String>,

    /// Retry budget for the transport. Not applied by the bundled transport.
    pub max_retries: u32,

    pub timeout: Duration,

    pub user_agent: String,
}

/// Connection flags shared by every CLI subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Base API endpoint (overrides OBJECT_STORAGE_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Account path prefixed to object paths (overrides OBJECT_STORAGE_CONTAINER_PATH)
    #[arg(long, global = true)]
    pub container_path: Option<String>,

    /// Auth token sent as X-Auth-Token (overrides OBJECT_STORAGE_AUTH_TOKEN)
    #[arg(long, global = true)]
    pub auth_token: Option<String>,

    /// Retry budget handed to the transport (overrides OBJECT_STORAGE_MAX_RETRIES)
    #[arg(long, global = true)]
    pub max_retries: Option<u32>,

    /// Request timeout in seconds (overrides OBJECT_STORAGE_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header (overrides OBJECT_STORAGE_USER_AGENT)
    #[arg(long, global = true)]
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Build a config for `endpoint` with every other setting at its default.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            container_path: String::new(),
            auth_token: None,
            max_retries: 0,
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }

    /// Merge CLI arguments over environment variables over defaults.
    pub fn from_env_and_args(args: &ConnectionArgs) -> Result<Self> {
        Self::from_sources(args, |key| env::var(key).ok())
    }

    /// Merge CLI arguments over values from `lookup` over defaults.
    pub fn from_sources<F>(args: &ConnectionArgs, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Environment fallback ---
        let endpoint_raw = args
            .endpoint
            .clone()
            .or_else(|| lookup("OBJECT_STORAGE_ENDPOINT"))
            .context("no endpoint configured; set OBJECT_STORAGE_ENDPOINT or pass --endpoint")?;
        let endpoint = Url::parse(&endpoint_raw)
            .with_context(|| format!("parsing endpoint `{}`", endpoint_raw))?;

        let max_retries = match args.max_retries {
            Some(value) => value,
            None => parse_var::<u32, _>(&lookup, "OBJECT_STORAGE_MAX_RETRIES")?.unwrap_or(0),
        };
        let timeout = match args.timeout_secs {
            Some(secs) => Duration::from_secs(secs),
            None => parse_var::<u64, _>(&lookup, "OBJECT_STORAGE_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
        };

        // --- Merge ---
        Ok(Self {
            endpoint,
            container_path: args
                .container_path
                .clone()
                .or_else(|| lookup("OBJECT_STORAGE_CONTAINER_PATH"))
                .unwrap_or_default(),
            auth_token: args
                .auth_token
                .clone()
                .or_else(|| lookup("OBJECT_STORAGE_AUTH_TOKEN"))
                .filter(|token| !token.is_empty()),
            max_retries,
            timeout,
            user_agent: args
                .user_agent
                .clone()
                .or_else(|| lookup("OBJECT_STORAGE_USER_AGENT"))
                .unwrap_or_else(default_user_agent),
        })
    }

    /// Base URL every qualified object path is appended to.
    pub fn base_url(&self) -> String {
        let endpoint = self.endpoint.as_str().trim_end_matches('/');
        let path = self.container_path.trim_matches('/');
        if path.is_empty() {
            endpoint.to_string()
        } else {
            format!("{}/{}", endpoint, path)
        }
    }

    pub fn with_container_path(mut self, path: impl Into<String>) -> Self {
        self.container_path = path.into();
        self
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn default_user_agent() -> String {
    format!("object-store-client/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("parsing {} value `{}`", key, value)),
        None => Ok(None),
    }
}
