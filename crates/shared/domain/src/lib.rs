//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O or mapping logic, just tag names, configuration and route state.

pub mod config;
pub mod constants;
pub mod navigation;
