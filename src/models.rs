use crate::headers::Headers;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Request-authorizer style event as handed over by the HTTP layer.
#[derive(Debug, Default, Deserialize)]
pub struct RequestAuthorizerEvent {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub headers: HashMap<String, String>,
    #[serde(
        rename = "multiValueHeaders",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub multi_value_headers: HashMap<String, Vec<String>>,
}

impl RequestAuthorizerEvent {
    /// Multi-value entries win; single values only fill in the names they lack.
    pub fn headers(&self) -> Headers {
        let mut merged = self.multi_value_headers.clone();
        for (name, value) in &self.headers {
            merged
                .entry(name.clone())
                .or_insert_with(|| vec![value.clone()]);
        }

        merged.into()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
