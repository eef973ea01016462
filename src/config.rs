// src/config.rs
use crate::application::commands::{articles::ArticleSettings, auth::AuthSettings};
use crate::domain::article::ArticleLimits;
use std::{env, path::PathBuf, str::FromStr, time::Duration};
use thiserror::Error;

const DEV_SECRET_KEY: &str = "pressroom-development-secret-change-me";

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    articles_dir: PathBuf,
    default_author: String,
    admin_password_hash: Option<String>,
    secret_key: String,
    production: bool,
    session_ttl: Duration,
    limits: ArticleLimits,
    login_rate_limit: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_articles_dir() -> PathBuf {
    PathBuf::from("data/articles")
}

fn default_session_ttl() -> u64 {
    60 * 60 * 24
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let get = |key: &'static str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let articles_dir = get("ARTICLES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_articles_dir);
        let default_author = get("DEFAULT_AUTHOR")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| "Admin".into());

        let admin_password_hash = get("ADMIN_PASSWORD_HASH");
        if let Some(hash) = &admin_password_hash
            && !hash.starts_with("$argon2")
        {
            return Err(ConfigError::Invalid(
                "ADMIN_PASSWORD_HASH must be an argon2 PHC string".into(),
            ));
        }

        let production = get("APP_ENV").is_some_and(|v| v.eq_ignore_ascii_case("production"));

        let secret_key = match get("SECRET_KEY") {
            Some(key) => key,
            None if production => return Err(ConfigError::Missing("SECRET_KEY")),
            None => {
                tracing::warn!("SECRET_KEY not set; using the development key");
                DEV_SECRET_KEY.into()
            }
        };

        let session_ttl_secs = parse_or(&get, "SESSION_TTL_SECONDS", default_session_ttl())?;
        if session_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "SESSION_TTL_SECONDS must be positive".into(),
            ));
        }

        let defaults = ArticleLimits::default();
        let limits = ArticleLimits {
            title_max: parse_or(&get, "TITLE_MAX_LEN", defaults.title_max)?,
            excerpt_max: parse_or(&get, "EXCERPT_MAX_LEN", defaults.excerpt_max)?,
            content_min: parse_or(&get, "CONTENT_MIN_LEN", defaults.content_min)?,
            tags_max: parse_or(&get, "TAGS_MAX", defaults.tags_max)?,
            tag_max: parse_or(&get, "TAG_MAX_LEN", defaults.tag_max)?,
        };

        let login_rate_limit = match get("LOGIN_RATE_LIMIT") {
            None => true,
            Some(v) => parse_flag(&v).ok_or_else(|| {
                ConfigError::Invalid(format!("LOGIN_RATE_LIMIT must be a boolean, got {v:?}"))
            })?,
        };

        Ok(Self {
            listen_addr,
            articles_dir,
            default_author,
            admin_password_hash,
            secret_key,
            production,
            session_ttl: Duration::from_secs(session_ttl_secs),
            limits,
            login_rate_limit,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn articles_dir(&self) -> &PathBuf {
        &self.articles_dir
    }

    pub fn default_author(&self) -> &str {
        &self.default_author
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// `Secure` cookies are only set in production.
    pub fn is_production(&self) -> bool {
        self.production
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    pub fn limits(&self) -> ArticleLimits {
        self.limits
    }

    pub fn login_rate_limit(&self) -> bool {
        self.login_rate_limit
    }

    pub fn article_settings(&self) -> ArticleSettings {
        ArticleSettings {
            limits: self.limits,
            default_author: self.default_author.clone(),
        }
    }

    pub fn auth_settings(&self) -> Result<AuthSettings, ConfigError> {
        let session_ttl = chrono::Duration::from_std(self.session_ttl)
            .map_err(|_| ConfigError::Invalid("SESSION_TTL_SECONDS is out of range".into()))?;
        Ok(AuthSettings {
            admin_password_hash: self.admin_password_hash.clone(),
            session_ttl,
        })
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&'static str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got {raw:?}"))),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
