//! HTTP handlers for API endpoints.

pub mod examples;
pub mod health;
pub mod metadata;
pub mod tryit;

use crate::api::middleware::error::ApiError;

/// Validate an API identifier before it becomes an upstream path segment.
///
/// Identifiers are plain path segments like `mygene` or `pending_api-v2`;
/// anything else would let a caller reshape the upstream URL.
pub fn validate_api_name(api: &str) -> Result<(), ApiError> {
    let valid = api.chars().any(char::is_alphanumeric)
        && api
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(ApiError::BadRequest(format!(
            "invalid API identifier: {api}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_name_accepts_plain_segments() {
        assert!(validate_api_name("mygene").is_ok());
        assert!(validate_api_name("pending_api-v2").is_ok());
        assert!(validate_api_name("api.v3").is_ok());
    }

    #[test]
    fn test_validate_api_name_rejects_path_tricks() {
        assert!(validate_api_name("").is_err());
        assert!(validate_api_name("a/b").is_err());
        assert!(validate_api_name("..").is_err());
        assert!(validate_api_name("a b").is_err());
        assert!(validate_api_name("a?b=c").is_err());
    }
}
