//! Core business entities.

mod click;
mod url_record;

pub use click::{Click, NewClick};
pub use url_record::{NewUrlRecord, UrlRecord};
