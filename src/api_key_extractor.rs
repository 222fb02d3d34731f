use crate::{
    headers::Headers,
    parse_api_key_from_header::{parse_with_scheme, AuthError, DEFAULT_HEADER_NAME, DEFAULT_SCHEME},
};
use std::env;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid header name '{0}': it must not be empty")]
    InvalidHeaderName(String),
    #[error("Invalid scheme '{0}': it must be a single non-empty word")]
    InvalidScheme(String),
}

/// Pulls the API key out of a header collection.
///
/// The header name is looked up exactly as configured. Callers whose HTTP
/// layer normalizes header names must configure the normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyExtractor {
    header_name: String,
    scheme: String,
}

impl ApiKeyExtractor {
    pub fn new(header_name: String, scheme: String) -> Result<Self, ConfigError> {
        if header_name.is_empty() {
            return Err(ConfigError::InvalidHeaderName(header_name));
        }
        // a scheme with a space in it could never match the first word of a header
        if scheme.is_empty() || scheme.contains(' ') {
            return Err(ConfigError::InvalidScheme(scheme));
        }

        Ok(Self {
            header_name,
            scheme,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let header_name =
            env::var("API_KEY_HEADER_NAME").unwrap_or(DEFAULT_HEADER_NAME.to_string());
        let scheme = env::var("API_KEY_SCHEME").unwrap_or(DEFAULT_SCHEME.to_string());

        Self::new(header_name, scheme)
    }

    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn extract<'a>(&self, headers: &'a Headers) -> Result<&'a str, AuthError> {
        let header_value = match headers.first(&self.header_name) {
            Some(value) => value,
            None => {
                tracing::debug!("Missing header (header_name='{}')", self.header_name);
                return Err(AuthError::NoAuthHeader);
            }
        };

        parse_with_scheme(header_value, &self.header_name, &self.scheme)
    }
}

impl Default for ApiKeyExtractor {
    fn default() -> Self {
        Self {
            header_name: DEFAULT_HEADER_NAME.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

/// Extracts the key from the `Authorization` header using the `ApiKey` scheme.
pub fn get_api_key(headers: &Headers) -> Result<&str, AuthError> {
    ApiKeyExtractor::default().extract(headers)
}
