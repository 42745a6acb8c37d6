//! Shared application state injected into handlers.
//!
//! Services are constructed once at startup and passed in explicitly; there
//! is no ambient global store handle anywhere in the crate.

use std::sync::Arc;

use crate::application::services::{StatsService, UrlService};
use crate::infrastructure::persistence::{PgStatsRepository, PgUrlRepository};

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<PgUrlRepository>>,
    pub stats_service: Arc<StatsService<PgUrlRepository, PgStatsRepository>>,
    /// Public base used when rendering short URLs, e.g. `https://sho.rt`.
    pub base_url: String,
}
