//! sea-orm entities for the setstore schema

pub mod settings;
