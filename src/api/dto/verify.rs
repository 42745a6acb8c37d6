//! DTO for the password verification endpoint.

use serde::Deserialize;
use validator::Validate;

/// Password submitted for a protected short link.
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyPasswordRequest {
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}
