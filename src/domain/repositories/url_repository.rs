//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for short URL records.
///
/// The storage layer owns the `short_code` uniqueness invariant through a
/// unique index; the service-level pre-check before insert is an
/// optimization, not the authority.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new URL record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists
    /// (unique index violation). Callers allocating random codes must treat
    /// this as a signal to retry with a fresh code.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds the most recently created record for an original URL.
    ///
    /// Used for idempotent-by-original-url shortening; the caller decides
    /// whether an expired hit counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, original_url: &str)
        -> Result<Option<UrlRecord>, AppError>;

    /// Deletes a record and, via cascade, all its click events.
    ///
    /// `owner_id` must match the stored owner: an anonymous record (`None`)
    /// is only deletable with `owner_id = None`, an owned record only by its
    /// owner. Returns `Ok(true)` when a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, code: &str, owner_id: Option<i64>) -> Result<bool, AppError>;
}
