pub mod agenda;
pub mod api;
pub mod config;
pub mod dates;
pub mod error;
pub mod parsers;
pub mod tracing;
