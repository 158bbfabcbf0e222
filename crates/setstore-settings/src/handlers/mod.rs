//! HTTP handlers for settings

mod handler;
mod types;

pub use handler::*;
pub use types::*;
