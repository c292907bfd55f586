use thiserror::Error;

/// Failure of a single call against the REST API.
///
/// The variants are `Clone` so results can travel inside reducer actions.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, body read failure)
    #[error("API Error: {call} could not reach the server: {detail}")]
    Network { call: &'static str, detail: String },

    /// The server answered with a non-2xx status
    #[error("API Error: {call} failed with HTTP {status}")]
    Http {
        call: &'static str,
        status: u16,
        body: String,
    },

    /// A 2xx response whose body was not the expected JSON
    #[error("API Error: {call} returned an unreadable body: {detail}")]
    Decode { call: &'static str, detail: String },
}

impl ApiError {
    pub fn call(&self) -> &'static str {
        match self {
            ApiError::Network { call, .. } => call,
            ApiError::Http { call, .. } => call,
            ApiError::Decode { call, .. } => call,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API url {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API url {0:?} cannot be used as a base url")]
    NotABase(String),
}
