//! Validation for stored predictions.

use crate::types::DbId;

/// Validate an owning user id (external, must be a positive BIGSERIAL value).
pub fn validate_user_id(user_id: DbId) -> Result<(), String> {
    if user_id <= 0 {
        return Err(format!("user_id must be positive, got {user_id}"));
    }
    Ok(())
}

/// Validate an optional EPDS result reference.
pub fn validate_epds_result_id(epds_result_id: Option<DbId>) -> Result<(), String> {
    match epds_result_id {
        Some(id) if id <= 0 => Err(format!("epds_result_id must be positive, got {id}")),
        _ => Ok(()),
    }
}
