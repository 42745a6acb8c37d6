//! Repository traits decoupling business logic from storage.

mod stats_repository;
mod url_repository;

pub use stats_repository::StatsRepository;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use stats_repository::MockStatsRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
