//! CLI command implementations

pub mod quote;
pub mod services;
pub mod validate;
