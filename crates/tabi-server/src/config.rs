//! Server configuration from environment variables.

use std::str::FromStr;

use secrecy::Secret;
use tabi_core::{TabiError, TabiResult};

use crate::line::RetryPolicy;

/// Default LINE Messaging API host.
pub const DEFAULT_LINE_API_BASE: &str = "https://api.line.me";

/// HTTP listener and LINE channel settings.
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Channel secret used to verify `X-Line-Signature`.
    pub channel_secret: Secret<String>,
    /// Channel access token for the reply API.
    pub access_token: Secret<String>,
    pub api_base: String,
    /// Timeout for one reply API call.
    pub reply_timeout_secs: u64,
    pub retry_policy: RetryPolicy,
}

impl ServerConfig {
    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `TABI_HOST` (default: 0.0.0.0)
    /// - `TABI_PORT` (default: 8000)
    /// - `LINE_CHANNEL_SECRET` (required)
    /// - `LINE_CHANNEL_ACCESS_TOKEN` (required)
    /// - `LINE_API_BASE` (default: https://api.line.me)
    /// - `TABI_REPLY_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> TabiResult<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> TabiResult<Self> {
        let host = var("TABI_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parsed(&var, "TABI_PORT", 8000)?;

        let channel_secret = required(&var, "LINE_CHANNEL_SECRET")?;
        let access_token = required(&var, "LINE_CHANNEL_ACCESS_TOKEN")?;

        let api_base = var("LINE_API_BASE")
            .unwrap_or_else(|| DEFAULT_LINE_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let reply_timeout_secs = parsed(&var, "TABI_REPLY_TIMEOUT_SECS", 10)?;

        Ok(Self {
            host,
            port,
            channel_secret: Secret::new(channel_secret),
            access_token: Secret::new(access_token),
            api_base,
            reply_timeout_secs,
            retry_policy: RetryPolicy::default(),
        })
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(var: &impl Fn(&str) -> Option<String>, name: &str) -> TabiResult<String> {
    match var(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(TabiError::config(format!("{} must be set", name))),
    }
}

fn parsed<T: FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> TabiResult<T> {
    match var(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| TabiError::config(format!("{} '{}' is not valid", name, value))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const CHANNEL: [(&str, &str); 2] = [
        ("LINE_CHANNEL_SECRET", "secret"),
        ("LINE_CHANNEL_ACCESS_TOKEN", "token"),
    ];

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_vars(vars(&CHANNEL)).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.api_base, DEFAULT_LINE_API_BASE);
        assert_eq!(config.reply_timeout_secs, 10);
        assert_eq!(config.channel_secret.expose_secret(), "secret");
        assert_eq!(config.access_token.expose_secret(), "token");
    }

    #[test]
    fn test_overrides() {
        let mut pairs = CHANNEL.to_vec();
        pairs.extend([
            ("TABI_HOST", "127.0.0.1"),
            ("TABI_PORT", "9000"),
            ("LINE_API_BASE", "http://localhost:8080/"),
            ("TABI_REPLY_TIMEOUT_SECS", "3"),
        ]);
        let config = ServerConfig::from_vars(vars(&pairs)).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.reply_timeout_secs, 3);
    }

    #[test]
    fn test_missing_channel_secret_is_rejected() {
        let result = ServerConfig::from_vars(vars(&[("LINE_CHANNEL_ACCESS_TOKEN", "token")]));
        match result {
            Err(TabiError::Configuration(message)) => {
                assert!(message.contains("LINE_CHANNEL_SECRET"))
            }
            _ => panic!("expected a configuration error"),
        }

        let blank = ServerConfig::from_vars(vars(&[
            ("LINE_CHANNEL_SECRET", "  "),
            ("LINE_CHANNEL_ACCESS_TOKEN", "token"),
        ]));
        assert!(matches!(blank, Err(TabiError::Configuration(_))));
    }

    #[test]
    fn test_missing_access_token_is_rejected() {
        let result = ServerConfig::from_vars(vars(&[("LINE_CHANNEL_SECRET", "secret")]));
        assert!(matches!(result, Err(TabiError::Configuration(_))));
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let cases = [
            ("TABI_PORT", "eighty"),
            ("TABI_PORT", "70000"),
            ("TABI_REPLY_TIMEOUT_SECS", "-1"),
        ];
        for (name, value) in cases {
            let mut pairs = CHANNEL.to_vec();
            pairs.push((name, value));
            let result = ServerConfig::from_vars(vars(&pairs));
            assert!(matches!(result, Err(TabiError::Configuration(_))), "{name}={value}");
        }
    }
}
