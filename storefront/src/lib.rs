//! Storefront - order and catalog logic behind the marketplace screens
//!
//! # Layout
//!
//! - [`orders`]: filtering, dashboard stats, money, status transitions, store
//! - [`presentation`]: labels, colors, badges, truncation, formatting
//! - [`catalog`]: read-only category and product lookups
//! - [`services`]: collaborator traits and their seed-backed implementations
//! - [`seed`]: embedded sample data
//! - [`core`]: configuration
//! - [`utils`]: logging and time helpers

pub mod catalog;
pub mod core;
pub mod orders;
pub mod presentation;
pub mod seed;
pub mod services;
pub mod utils;

// Re-export public types
pub use catalog::Catalog;
pub use self::core::{Config, LogConfig};
pub use orders::{DashboardStats, OrderStore, StatusFilter, TransitionPolicy};
pub use presentation::{DisplayOptions, OrderHistoryEntry};

/// 设置环境 (dotenv, 日志, 配置)
///
/// 日志先于配置初始化, 配置解析的警告才能输出
pub fn setup_environment() -> Config {
    // .env is optional
    let _ = dotenv::dotenv();
    let log = LogConfig::from_env();
    utils::init_logger_with_file(Some(&log.level), log.dir.as_deref());
    Config::from_env()
}
