pub mod backend;
pub mod config;
pub mod error;
pub mod model;
pub mod types;

#[cfg(test)]
pub mod test_backend;

pub use config::Config;
pub use error::ApiError;
pub use model::Model;

use navicula::types::EnvironmentType;

#[derive(Clone)]
pub struct Environment {
    pub model: Model,
    pub config: Config,
}

impl EnvironmentType for Environment {
    type AppEvent = types::AppEvent;
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("api_url", &self.config.api_url.as_str())
            .finish()
    }
}

impl Environment {
    pub fn new(config: Config) -> Self {
        Self {
            model: Model::new(&config),
            config,
        }
    }

    pub fn open_url(&self, url: &str) {
        if let Err(e) = webbrowser::open(url) {
            log::error!("Could not open {url}: {e}");
        }
    }
}
