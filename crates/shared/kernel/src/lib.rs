//! Kernel utilities shared across the watchface crates.
//! Keep this crate lightweight: it hosts layered config loading and re-exports the domain.
//!
//! ## Config loading
//! ```rust,no_run
//! use wfh_kernel::config::load_config;
//! use wfh_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("wfh.toml")).unwrap_or_default();
//! ```

pub mod config;

pub use wfh_domain as domain;
