use url::Url;

use super::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://mate.academy/students-api/";

/// Environment variable that overrides [`DEFAULT_API_URL`]
pub const API_URL_VAR: &str = "POSTBOARD_API_URL";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Base url all endpoints are joined onto. Always ends with a `/`.
    pub api_url: Url,
}

impl Default for Config {
    fn default() -> Self {
        Self::parse(DEFAULT_API_URL).expect("the default API url is valid")
    }
}

impl Config {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let mut api_url = Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl {
            value: value.to_string(),
            source,
        })?;
        if api_url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(value.to_string()));
        }
        // `Url::join` replaces the last segment unless the path ends with a slash
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }
        Ok(Self { api_url })
    }

    /// Reads [`API_URL_VAR`], falling back to the default on a missing or broken value
    pub fn from_env() -> Self {
        match std::env::var(API_URL_VAR) {
            Ok(value) => Self::parse(&value).unwrap_or_else(|e| {
                log::error!("Ignoring {API_URL_VAR}: {e}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}
