use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tokio::fs;

/// The endpoints the booking core talks to. The booking function serves both
/// booking creation (POST) and the booking list (GET); the notification
/// function is optional and notifications are skipped when it is not set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Endpoint of the remote booking function.
    bookings_url: String,
    /// Endpoint of the admin notification function.
    notify_url: Option<String>,
}

impl Config {
    /// Create a config directly from the endpoint values.
    pub fn new(bookings_url: String, notify_url: Option<String>) -> Self {
        Config {
            bookings_url,
            notify_url,
        }
    }

    /// Load and validate a config from a TOML file at the given path.
    pub async fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            ConfigError::from(format!("could not read config at {}: {}", path.display(), e))
        })?;
        let cfg: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::from(format!("could not parse config: {}", e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate the config, making sure every configured endpoint is an
    /// http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("bookings_url", &self.bookings_url)?;
        if let Some(ref url) = self.notify_url {
            validate_url("notify_url", url)?;
        }
        Ok(())
    }

    /// Endpoint of the remote booking function.
    pub fn bookings_url(&self) -> &str {
        &self.bookings_url
    }

    /// Endpoint of the admin notification function, if one is configured.
    pub fn notify_url(&self) -> Option<&str> {
        self.notify_url.as_deref()
    }
}

fn validate_url(field: &str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(format!("{} must be an http(s) URL, got {:?}", field, url).into())
    }
}

/// An error in the configuration
#[derive(Debug)]
pub struct ConfigError {
    msg: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}

// default impls are fine here
impl std::error::Error for ConfigError {}

impl From<String> for ConfigError {
    fn from(s: String) -> Self {
        ConfigError { msg: s }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn encoding() {
        let cfg = Config::new(
            "https://functions.example.dev/bookings".to_string(),
            Some("https://functions.example.dev/notify".to_string()),
        );

        let expected = r#"bookings_url = "https://functions.example.dev/bookings"
notify_url = "https://functions.example.dev/notify"
"#;
        assert_eq!(toml::to_string(&cfg).unwrap(), expected);
    }

    #[test]
    fn decoding() {
        let input = r#"bookings_url = "https://functions.example.dev/bookings"
notify_url = "https://functions.example.dev/notify"
"#;
        let expected_cfg = Config::new(
            "https://functions.example.dev/bookings".to_string(),
            Some("https://functions.example.dev/notify".to_string()),
        );

        assert_eq!(toml::from_str::<Config>(input).unwrap(), expected_cfg);
    }

    #[test]
    fn notify_endpoint_is_optional() {
        let input = r#"bookings_url = "https://functions.example.dev/bookings"
"#;
        let cfg = toml::from_str::<Config>(input).unwrap();
        assert_eq!(cfg.notify_url(), None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validation_rejects_non_http_endpoints() {
        let cfg = Config::new("ftp://example.dev/bookings".to_string(), None);
        assert!(cfg.validate().is_err());

        let cfg = Config::new(
            "https://functions.example.dev/bookings".to_string(),
            Some("not a url".to_string()),
        );
        assert!(cfg.validate().is_err());
    }
}
