//! PostgreSQL repository implementations.

mod pg_stats_repository;
mod pg_url_repository;

pub use pg_stats_repository::PgStatsRepository;
pub use pg_url_repository::PgUrlRepository;
