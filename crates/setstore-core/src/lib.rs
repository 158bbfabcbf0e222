//! Core utilities and types shared across all setstore crates

pub mod config;
pub mod error;
pub mod openapi;
pub mod problemdetails;
pub use problemdetails::ProblemDetails;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;
