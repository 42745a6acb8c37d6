//! Request/response DTOs.

pub mod bulk;
pub mod delete;
pub mod shorten;
pub mod stats;
pub mod verify;
