use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr};
use url::Url;
use zeroize::Zeroizing;

use crate::constants::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, IMAGE_BUCKET};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Base URL of the hosted store, e.g. `https://xyz.supabase.co`.
    #[serde(default)]
    pub supabase_url: String,

    #[serde(default)]
    pub supabase_anon_key: String,

    #[serde(default = "default_bucket")]
    pub storage_bucket: String,

    #[serde(default)]
    pub gemini_api_key: String,

    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Site".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_bucket() -> String {
    IMAGE_BUCKET.to_string()
}
fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}
fn default_gemini_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}
fn default_request_timeout() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            name: default_name(),
            port: default_port(),
            host: default_host(),
            worker_count: default_worker_count(),
            cors_allowed_origins: default_cors_origins(),
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            storage_bucket: default_bucket(),
            gemini_api_key: String::new(),
            gemini_model: default_gemini_model(),
            gemini_base_url: default_gemini_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .try_parsing(true)
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // Conventional unprefixed names used by hosted-store tooling
        config.supabase_url = fill_from_env(config.supabase_url, "SUPABASE_URL");
        config.supabase_anon_key = fill_from_env(config.supabase_anon_key, "SUPABASE_ANON_KEY");
        config.gemini_api_key = fill_from_env(config.gemini_api_key, "GEMINI_API_KEY");

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let has_url = !self.supabase_url.trim().is_empty();
        let has_key = !self.supabase_anon_key.trim().is_empty();

        if has_url != has_key {
            errors.push("SUPABASE_URL and SUPABASE_ANON_KEY must be set together".to_string());
        }
        if has_url {
            match Url::parse(self.supabase_url.trim()) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                _ => errors.push(format!("SUPABASE_URL is not a valid http(s) URL: {}", self.supabase_url)),
            }
        }
        if self.storage_bucket.trim().is_empty() {
            errors.push("STORAGE_BUCKET cannot be empty".to_string());
        }
        if self.is_ai_configured() && Url::parse(&self.gemini_base_url).is_err() {
            errors.push(format!("GEMINI_BASE_URL is not a valid URL: {}", self.gemini_base_url));
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    /// Store credentials present. When false the service runs in demo mode.
    pub fn is_store_configured(&self) -> bool {
        !self.supabase_url.trim().is_empty() && !self.supabase_anon_key.trim().is_empty()
    }

    pub fn is_ai_configured(&self) -> bool {
        !self.gemini_api_key.trim().is_empty()
    }

    pub fn anon_key(&self) -> Zeroizing<String> {
        Zeroizing::new(self.supabase_anon_key.trim().to_string())
    }

    pub fn gemini_key(&self) -> Zeroizing<String> {
        Zeroizing::new(self.gemini_api_key.trim().to_string())
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn fill_from_env(current: String, env_key: &str) -> String {
    if current.trim().is_empty() {
        env::var(env_key).unwrap_or_default()
    } else {
        current
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("supabase_url", &self.supabase_url)
            .field("supabase_anon_key", &self.supabase_anon_key.redact())
            .field("storage_bucket", &self.storage_bucket)
            .field("gemini_api_key", &self.gemini_api_key.redact())
            .field("gemini_model", &self.gemini_model)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> AppConfig {
        AppConfig {
            supabase_url: "https://demo-project.supabase.co".into(),
            supabase_anon_key: "anon-key".into(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn empty_store_credentials_mean_demo_mode() {
        let config = AppConfig::default();
        assert!(!config.is_store_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn url_without_key_is_rejected() {
        let config = AppConfig {
            supabase_url: "https://demo-project.supabase.co".into(),
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("must be set together"));
    }

    #[test]
    fn non_http_store_url_is_rejected() {
        let config = AppConfig {
            supabase_url: "ftp://example.com".into(),
            ..configured()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn wildcard_cors_rejected_in_production() {
        let config = AppConfig {
            env: AppEnvironment::Production,
            ..configured()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            env: AppEnvironment::Production,
            cors_allowed_origins: vec!["https://me.dev, https://www.me.dev".into()],
            ..configured()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.cors_origins(), vec!["https://me.dev", "https://www.me.dev"]);
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = AppConfig {
            gemini_api_key: "super-secret".into(),
            ..configured()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("anon-key"));
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("[REDACTED]"));
    }
}
