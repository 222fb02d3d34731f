use thiserror::Error;

pub static DEFAULT_HEADER_NAME: &str = "Authorization";
pub static DEFAULT_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header: {0}")]
    MalformedHeader(String),
}

impl AuthError {
    fn malformed(scheme: &str) -> Self {
        Self::MalformedHeader(format!("expected '{} <key>'", scheme))
    }
}

pub fn parse_api_key_from_header(header_value: &str) -> Result<&str, AuthError> {
    parse_with_scheme(header_value, DEFAULT_HEADER_NAME, DEFAULT_SCHEME)
}

/// Splits on the first space only, so `"ApiKey"` (no key segment) and
/// `"ApiKey "` (empty key) stay distinguishable. Anything after a second
/// space is dropped.
///
/// Nothing taken from `header_value` is logged.
pub(crate) fn parse_with_scheme<'a>(
    header_value: &'a str,
    header_name: &str,
    scheme: &str,
) -> Result<&'a str, AuthError> {
    if header_value.is_empty() {
        tracing::debug!("Empty header (header_name='{}')", header_name);
        return Err(AuthError::NoAuthHeader);
    }

    let (found_scheme, rest) = match header_value.split_once(' ') {
        Some(parts) => parts,
        None => {
            tracing::debug!(
                "Header has no key segment (header_name='{}', expected_scheme='{}')",
                header_name,
                scheme
            );
            return Err(AuthError::malformed(scheme));
        }
    };

    if found_scheme != scheme {
        tracing::debug!(
            "Unsupported authorization scheme (header_name='{}', expected_scheme='{}')",
            header_name,
            scheme
        );
        return Err(AuthError::malformed(scheme));
    }

    let key = match rest.split_once(' ') {
        Some((key, _)) => key,
        None => rest,
    };

    Ok(key)
}

#[cfg(test)]
pub(crate) fn assert_malformed(result: Result<&str, AuthError>) {
    match result {
        Err(e @ AuthError::MalformedHeader(_)) => assert!(crate::substring::contains(
            &e.to_string(),
            "malformed authorization header"
        )),
        other => panic!("Expected a MalformedHeader error, got {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substring::contains;
    use tracing_test::traced_test;

    #[test]
    fn it_should_parse_a_key_from_a_valid_header() {
        let result = parse_api_key_from_header("ApiKey my-secret-api-key");
        assert_eq!(result, Ok("my-secret-api-key"));
    }

    #[test]
    fn it_should_report_an_empty_header_as_missing() {
        let result = parse_api_key_from_header("");
        assert_eq!(result, Err(AuthError::NoAuthHeader));
    }

    #[test]
    fn it_should_fail_to_parse_other_schemes() {
        assert_malformed(parse_api_key_from_header("Bearer some-token"));
        assert_malformed(parse_api_key_from_header("Basic dXNlcjpwYXNz"));
    }

    #[test]
    fn it_should_fail_to_parse_the_scheme_without_a_key_segment() {
        assert_malformed(parse_api_key_from_header("ApiKey"));
        assert_malformed(parse_api_key_from_header("randomstring"));
    }

    #[test]
    fn it_should_match_the_scheme_case_sensitively() {
        assert_malformed(parse_api_key_from_header("apikey my-secret-api-key"));
        assert_malformed(parse_api_key_from_header("APIKEY my-secret-api-key"));
    }

    #[test]
    fn it_should_only_return_the_first_token_after_the_scheme() {
        let result = parse_api_key_from_header("ApiKey key-with extra-parts");
        assert_eq!(result, Ok("key-with"));
    }

    #[test]
    fn it_should_accept_an_empty_key_after_the_scheme() {
        assert_eq!(parse_api_key_from_header("ApiKey "), Ok(""));
        assert_eq!(parse_api_key_from_header("ApiKey  trailing"), Ok(""));
    }

    #[test]
    fn it_should_keep_special_characters_in_the_key() {
        assert_eq!(
            parse_api_key_from_header("ApiKey abc123!@#$%^&*()_+-="),
            Ok("abc123!@#$%^&*()_+-=")
        );
        assert_eq!(
            parse_api_key_from_header("ApiKey 550e8400-e29b-41d4-a716-446655440000"),
            Ok("550e8400-e29b-41d4-a716-446655440000")
        );
    }

    #[test]
    fn it_should_not_tolerate_leading_whitespace() {
        assert_malformed(parse_api_key_from_header("   "));
        assert_malformed(parse_api_key_from_header("  ApiKey my-key"));
    }

    #[test]
    fn it_should_only_split_on_spaces() {
        assert_malformed(parse_api_key_from_header("ApiKey\tmy-key"));
        assert_eq!(parse_api_key_from_header("ApiKey my\tkey"), Ok("my\tkey"));
    }

    #[test]
    fn it_should_not_leak_the_key_in_the_error_message() {
        let err = parse_api_key_from_header("Bearer super-secret").unwrap_err();
        assert!(!contains(&err.to_string(), "super-secret"));
    }

    #[test]
    fn it_should_parse_with_a_custom_scheme() {
        assert_eq!(parse_with_scheme("Token abc", "X-Key", "Token"), Ok("abc"));
        assert_malformed(parse_with_scheme("ApiKey abc", "X-Key", "Token"));
    }

    #[test]
    #[traced_test]
    fn it_should_not_log_anything_taken_from_the_header_value() {
        assert_malformed(parse_api_key_from_header("sk_live_SECRET123 x"));
        assert_malformed(parse_api_key_from_header("sk_live_OTHER456"));
        assert_malformed(parse_api_key_from_header("fake\nINFO forged line x"));

        assert!(logs_contain("Unsupported authorization scheme"));
        assert!(logs_contain("Header has no key segment"));
        assert!(!logs_contain("sk_live_SECRET123"));
        assert!(!logs_contain("sk_live_OTHER456"));
        assert!(!logs_contain("forged line"));
    }

    #[test]
    #[traced_test]
    fn it_should_name_the_header_when_its_value_is_empty() {
        assert_eq!(
            parse_with_scheme("", "X-Key", "ApiKey"),
            Err(AuthError::NoAuthHeader)
        );
        assert!(logs_contain("Empty header (header_name='X-Key')"));
        assert!(!logs_contain("Authorization"));
    }
}
