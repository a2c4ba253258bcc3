// src/config.rs
use std::{env, net::SocketAddr};
use thiserror::Error;

const LOCAL_ADMIN_URL: &str = "http://localhost:3000";
const LOCAL_FRONTEND_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    environment: Environment,
    local_test: bool,
    listen_addr: SocketAddr,
    editor_url: String,
    allowed_origins: Vec<String>,
    media_base_url: String,
    cron_secret: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_editor_url() -> String {
    "https://editor.dinasuvadu.com".into()
}

fn default_frontend_url() -> String {
    "https://sub.dinasuvadu.com".into()
}

fn default_media_base_url() -> String {
    "https://media.dinasuvadu.in".into()
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.trim_end_matches('/').to_string())
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment =
            Environment::parse(non_empty("APP_ENV").or_else(|| non_empty("NODE_ENV")).as_deref());
        let local_test = non_empty("LOCAL_TEST").is_some();

        let listen_addr_raw = non_empty("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let listen_addr = listen_addr_raw.parse::<SocketAddr>().map_err(|err| {
            ConfigError::Invalid(format!("LISTEN_ADDR `{listen_addr_raw}`: {err}"))
        })?;

        let editor_url = non_empty("EDITOR_URL")
            .unwrap_or_else(default_editor_url)
            .trim_end_matches('/')
            .to_string();
        let frontend_url = non_empty("FRONTEND_URL")
            .unwrap_or_else(default_frontend_url)
            .trim_end_matches('/')
            .to_string();

        let allowed_origins = match non_empty("ALLOWED_ORIGINS") {
            Some(raw) => parse_list(&raw),
            None => Self::default_origins(environment, local_test, &editor_url, &frontend_url),
        };
        if allowed_origins.is_empty() {
            return Err(ConfigError::Invalid(
                "ALLOWED_ORIGINS must list at least one origin".into(),
            ));
        }

        let media_base_url = non_empty("MEDIA_BASE_URL")
            .unwrap_or_else(default_media_base_url)
            .trim_end_matches('/')
            .to_string();
        if !media_base_url.starts_with("http://") && !media_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "MEDIA_BASE_URL must be an http(s) URL, got `{media_base_url}`"
            )));
        }

        Ok(Self {
            environment,
            local_test,
            listen_addr,
            editor_url,
            allowed_origins,
            media_base_url,
            cron_secret: non_empty("CRON_SECRET"),
        })
    }

    fn default_origins(
        environment: Environment,
        local_test: bool,
        editor_url: &str,
        frontend_url: &str,
    ) -> Vec<String> {
        let local = [LOCAL_ADMIN_URL, LOCAL_FRONTEND_URL];
        let deployed = [editor_url, frontend_url];
        let origins: Vec<&str> = match (environment, local_test) {
            (Environment::Production, true) => local.into_iter().chain(deployed).collect(),
            (Environment::Production, false) => deployed.to_vec(),
            (Environment::Development, _) => local.to_vec(),
        };
        origins.into_iter().map(str::to_string).collect()
    }

    pub const fn environment(&self) -> Environment {
        self.environment
    }

    pub const fn local_test(&self) -> bool {
        self.local_test
    }

    pub const fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Public URL of the admin panel. Only a real production deployment uses
    /// the editor host; everything else runs on localhost.
    pub fn server_url(&self) -> &str {
        match (self.environment, self.local_test) {
            (Environment::Production, false) => &self.editor_url,
            _ => LOCAL_ADMIN_URL,
        }
    }

    /// Origins accepted for CORS and CSRF checks.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn media_base_url(&self) -> &str {
        &self.media_base_url
    }

    pub fn cron_secret(&self) -> Option<&str> {
        self.cron_secret.as_deref()
    }
}
