//! Core settings for the storefront

pub mod config;

pub use config::{Config, LogConfig};
