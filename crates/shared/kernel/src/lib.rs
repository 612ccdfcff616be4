//! Kernel utilities shared across binaries.
//! Keep this crate lightweight; today it owns configuration loading and re-exports the domain.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use shutter_kernel::config::load_config;
//! use shutter_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("shutter")).unwrap();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use shutter_domain as domain;
