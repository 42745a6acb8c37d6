//! URL shortening, resolution, and access control.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::reachability::ReachabilityChecker;
use crate::utils::url_normalizer::normalize_url;
use crate::utils::url_screen::is_suspicious_url;

/// Retry budget for code allocation. With 62^6 possible codes, hitting it
/// means a systemic problem, not contention; the bound exists to guarantee
/// termination.
const MAX_ATTEMPTS: usize = 10;

/// Longest accepted expiry window in days.
const MAX_EXPIRES_IN_DAYS: i64 = 365;

/// Parameters for shortening one URL, as carried by a bulk request item.
#[derive(Debug, Clone)]
pub struct ShortenParams {
    pub url: String,
    pub expires_in_days: Option<i64>,
    pub password: Option<String>,
    pub owner_id: Option<i64>,
}

/// Service for creating, resolving, and deleting short URLs.
///
/// Owns the uniqueness-resolver loop: generate a candidate, check the store,
/// insert, and treat a unique-index conflict (check/insert race) as one more
/// collision. The storage constraint is the authoritative backstop.
pub struct UrlService<R: UrlRepository> {
    repository: Arc<R>,
    code_length: usize,
    reachability: Option<Arc<dyn ReachabilityChecker>>,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new URL service.
    ///
    /// `reachability` enables the optional pre-shorten probe; `None` skips it.
    pub fn new(
        repository: Arc<R>,
        code_length: usize,
        reachability: Option<Arc<dyn ReachabilityChecker>>,
    ) -> Self {
        Self {
            repository,
            code_length,
            reachability,
        }
    }

    /// Shortens a URL, returning the stored record.
    ///
    /// # Idempotence
    ///
    /// An existing unexpired record for the same normalized URL is returned
    /// as-is. An expired one counts as absent and a fresh record (possibly
    /// with a different code) is created. Two concurrent first-time requests
    /// for the same URL may still produce two codes; no cross-request lock
    /// is taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed, over-long, blacklisted,
    /// or (when probing is enabled) unreachable URLs, and for an out-of-range
    /// expiry window. Returns [`AppError::Exhausted`] when the allocation
    /// retry budget is spent.
    pub async fn create_short_url(
        &self,
        original_url: String,
        expires_in_days: Option<i64>,
        password: Option<String>,
        owner_id: Option<i64>,
    ) -> Result<UrlRecord, AppError> {
        let normalized = normalize_url(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        if is_suspicious_url(&normalized) {
            return Err(AppError::bad_request(
                "URL rejected by safety screen",
                json!({ "reason": "malicious" }),
            ));
        }

        if let Some(probe) = &self.reachability {
            if !probe.is_reachable(&normalized).await {
                return Err(AppError::bad_request(
                    "URL is not reachable",
                    json!({ "reason": "unreachable" }),
                ));
            }
        }

        if let Some(days) = expires_in_days {
            if !(1..=MAX_EXPIRES_IN_DAYS).contains(&days) {
                return Err(AppError::bad_request(
                    "expires_in_days must be between 1 and 365",
                    json!({ "expires_in_days": days }),
                ));
            }
        }

        if let Some(existing) = self.repository.find_by_original_url(&normalized).await? {
            if !existing.is_expired() {
                return Ok(existing);
            }
            // Expired mapping: treat as absent and mint a new record.
        }

        let expires_at = expires_in_days.map(|days| Utc::now() + Duration::days(days));
        let password_hash = password.as_deref().map(hash_password);

        self.allocate_and_insert(normalized, expires_at, password_hash, owner_id)
            .await
    }

    /// Shortens a batch of URLs, one outcome per item, in input order.
    ///
    /// Items are independent: a rejected or failed item never stops the
    /// rest of the batch. Each item goes through the same validation,
    /// screening, and idempotent allocation as [`Self::create_short_url`].
    pub async fn create_short_urls(
        &self,
        items: Vec<ShortenParams>,
    ) -> Vec<Result<UrlRecord, AppError>> {
        let mut outcomes = Vec::with_capacity(items.len());
        for item in items {
            outcomes.push(
                self.create_short_url(item.url, item.expires_in_days, item.password, item.owner_id)
                    .await,
            );
        }
        outcomes
    }

    /// Resolves a code for redirecting, enforcing expiry and password gates.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] - unknown code
    /// - [`AppError::Expired`] - expiry has passed (record is kept)
    /// - [`AppError::PasswordRequired`] - a password gate is set; the client
    ///   must go through [`Self::verify_password`]
    pub async fn resolve(&self, code: &str) -> Result<UrlRecord, AppError> {
        let record = self.lookup_live(code).await?;

        if record.has_password() {
            return Err(AppError::password_required(
                "This link is password protected",
                json!({ "code": code }),
            ));
        }

        Ok(record)
    }

    /// Verifies a supplied password for a protected code.
    ///
    /// A record without a password gate passes verification trivially.
    ///
    /// # Errors
    ///
    /// [`AppError::Unauthorized`] on mismatch; not-found and expiry behave
    /// as in [`Self::resolve`].
    pub async fn verify_password(
        &self,
        code: &str,
        supplied: &str,
    ) -> Result<UrlRecord, AppError> {
        let record = self.lookup_live(code).await?;

        match record.password_hash.as_deref() {
            None | Some("") => Ok(record),
            Some(stored) if verify_password(stored, supplied) => Ok(record),
            Some(_) => Err(AppError::unauthorized(
                "Invalid password",
                json!({ "code": code }),
            )),
        }
    }

    /// Deletes a record (cascading its click events).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no record matches the code and
    /// owner; a wrong owner is indistinguishable from a missing code.
    pub async fn delete_url(&self, code: &str, owner_id: Option<i64>) -> Result<(), AppError> {
        if self.repository.delete(code, owner_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "URL not found or not owned by you",
                json!({ "code": code }),
            ))
        }
    }

    /// Fetches a record by code without enforcing the password gate.
    ///
    /// Expiry is still enforced; analytics for expired links stay readable
    /// through the repository, not through this path.
    pub async fn lookup_live(&self, code: &str) -> Result<UrlRecord, AppError> {
        let record = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        if record.is_expired() {
            return Err(AppError::expired(
                "This link has expired",
                json!({ "code": code, "expired_at": record.expires_at }),
            ));
        }

        Ok(record)
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// The bounded generate-check-insert loop.
    ///
    /// A conflict from the unique index counts as a collision like a
    /// pre-check hit: the candidate is discarded and a new one is drawn.
    async fn allocate_and_insert(
        &self,
        original_url: String,
        expires_at: Option<chrono::DateTime<Utc>>,
        password_hash: Option<String>,
        owner_id: Option<i64>,
    ) -> Result<UrlRecord, AppError> {
        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code(self.code_length);

            if self.repository.find_by_code(&code).await?.is_some() {
                continue;
            }

            let new_record = NewUrlRecord {
                original_url: original_url.clone(),
                short_code: code,
                expires_at,
                password_hash: password_hash.clone(),
                owner_id,
            };

            match self.repository.insert(new_record).await {
                Ok(record) => return Ok(record),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::exhausted(
            "Unable to allocate a unique short code",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }
}
