//! HTTP request handlers.

mod bulk;
mod delete;
mod health;
mod redirect;
mod shorten;
mod stats;
mod verify;

pub use bulk::bulk_shorten_handler;
pub use delete::delete_handler;
pub use health::{health_handler, index_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
pub use verify::verify_password_handler;
