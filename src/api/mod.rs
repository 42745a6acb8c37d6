//! API layer: handlers and DTOs.

pub mod dto;
pub mod handlers;
