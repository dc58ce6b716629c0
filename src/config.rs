use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

/// Runtime settings shared by the server and the collector.
///
/// Every value has a default so either binary can start without a `.env`.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    pub min_skill_threshold: usize,
    pub hh_api_base_url: Url,
    pub hh_user_agent: String,
    pub http_timeout: Duration,
    pub collect_query: String,
    pub collect_pages: u32,
    pub collect_per_page: u32,
    pub collect_delay: Duration,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

pub const DEFAULT_API_BASE_URL: &str = "https://api.hh.ru/";

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: "127.0.0.1:5000".to_string(),
            data_file: PathBuf::from("vacancies_full.json"),
            static_dir: PathBuf::from("static"),
            min_skill_threshold: 5,
            hh_api_base_url: Url::parse(DEFAULT_API_BASE_URL)
                .expect("default API base URL is valid"),
            hh_user_agent: "vacancy-insights/0.1 (collector)".to_string(),
            http_timeout: Duration::from_secs(30),
            collect_query: "Python".to_string(),
            collect_pages: 20,
            collect_per_page: 50,
            collect_delay: Duration::from_millis(200),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let defaults = Self::default();

        let hh_api_base_url = match env::var("HH_API_BASE_URL") {
            Ok(raw) => parse_base_url(&raw)?,
            Err(_) => defaults.hh_api_base_url,
        };

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", defaults.server_address),
            data_file: env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            min_skill_threshold: get_env_parse_or(
                "MIN_SKILL_THRESHOLD",
                defaults.min_skill_threshold,
            )?,
            hh_api_base_url,
            hh_user_agent: get_env_or("HH_USER_AGENT", defaults.hh_user_agent),
            http_timeout: Duration::from_secs(get_env_parse_or(
                "HTTP_TIMEOUT_SECS",
                defaults.http_timeout.as_secs(),
            )?),
            collect_query: get_env_or("COLLECT_QUERY", defaults.collect_query),
            collect_pages: get_env_parse_or("COLLECT_PAGES", defaults.collect_pages)?,
            collect_per_page: get_env_parse_or("COLLECT_PER_PAGE", defaults.collect_per_page)?,
            collect_delay: Duration::from_millis(get_env_parse_or(
                "COLLECT_DELAY_MS",
                defaults.collect_delay.as_millis() as u64,
            )?),
        })
    }
}

/// Parses an API base URL, forcing a trailing slash so relative joins keep the path prefix.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized)
        .map_err(|e| Error::Config(format!("Invalid value for HH_API_BASE_URL: {}", e)))
}

fn get_env_or(name: &str, default: String) -> String {
    env::var(name).unwrap_or(default)
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let url = parse_base_url("http://127.0.0.1:8080/api").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/");
        assert_eq!(
            url.join("vacancies").unwrap().as_str(),
            "http://127.0.0.1:8080/api/vacancies"
        );
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let err = parse_base_url("not a url").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.collect_query, "Python");
        assert_eq!(config.collect_pages, 20);
        assert_eq!(config.collect_per_page, 50);
        assert_eq!(config.min_skill_threshold, 5);
        assert_eq!(config.collect_delay, Duration::from_millis(200));
        assert_eq!(config.data_file, PathBuf::from("vacancies_full.json"));
    }
}
