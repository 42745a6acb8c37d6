//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping from a short code to an original URL.
///
/// `click_count` is maintained by the analytics recorder and only ever grows
/// while the record exists. `password_hash` holds a salted digest, never the
/// plaintext password.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: i64,
    pub password_hash: Option<String>,
    pub owner_id: Option<i64>,
}

impl UrlRecord {
    /// Returns true once the expiry timestamp has strictly passed.
    ///
    /// Records without `expires_at` never expire. Expiry is a read-time
    /// check only; expired rows stay in storage.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() > e)
    }

    /// Returns true if a non-empty password gate is set.
    pub fn has_password(&self) -> bool {
        self.password_hash.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Input data for creating a new URL record.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_code: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub password_hash: Option<String>,
    pub owner_id: Option<i64>,
}
