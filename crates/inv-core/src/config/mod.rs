//! # Pure Data Module - Data Transfer Objects Only
//!
//! Configuration structures and the TOML -> DTO mapping. No validation and no
//! default values live here: an empty field is a fact, and the wiring layer
//! decides what to fall back to.

pub mod app_config;

pub use app_config::AppConfig;
