pub mod api_key_extractor;
pub mod headers;
pub mod models;
pub mod parse_api_key_from_header;
pub mod substring;

pub use api_key_extractor::{get_api_key, ApiKeyExtractor, ConfigError};
pub use headers::Headers;
pub use models::RequestAuthorizerEvent;
pub use parse_api_key_from_header::{parse_api_key_from_header, AuthError};
