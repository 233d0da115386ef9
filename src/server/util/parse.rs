use crate::server::error::{internal::InternalError, AppError};

/// Parses a stored snowflake id back into `u64`.
///
/// Ids are persisted as strings, so a failure here means the row was written by
/// something other than this application.
///
/// # Arguments
/// - `value` - The stored id to parse
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalError(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}

/// Parses a snowflake id supplied by an API client.
///
/// # Returns
/// - `Ok(u64)` - Valid id
/// - `Err(AppError::BadRequest)` - The client sent something that is not a snowflake
pub fn parse_id_param(name: &str, value: &str) -> Result<u64, AppError> {
    value
        .parse::<u64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: '{}'", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_ids() {
        assert_eq!(parse_u64_from_string("123456789012345678").unwrap(), 123456789012345678);
    }

    #[test]
    fn stored_id_failure_is_internal() {
        let err = parse_u64_from_string("not-a-number").unwrap_err();
        assert!(matches!(err, AppError::InternalError(InternalError::ParseStringId { .. })));
    }

    #[test]
    fn client_id_failure_is_bad_request() {
        let err = parse_id_param("user_id", "abc").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("user_id")));
    }
}
