//! Business logic services.

mod stats_service;
mod url_service;

pub use stats_service::{AnalyticsReport, StatsService};
pub use url_service::{ShortenParams, UrlService};
