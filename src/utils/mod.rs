//! Shared utilities: code generation, URL hygiene, password hashing.

pub mod code_generator;
pub mod password;
pub mod reachability;
pub mod url_normalizer;
pub mod url_screen;
