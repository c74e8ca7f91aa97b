//! Shared types, error model, and configuration for sitelift.
//!
//! This crate is the foundation depended on by all other sitelift crates.
//! It provides:
//! - [`SiteliftError`], the unified error type
//! - Vocabulary types ([`ClosePolicy`], [`SiteEntry`], [`EntryKind`])
//! - Configuration ([`AppConfig`], [`ExportConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{AppConfig, ExportConfig, init_config, load_config, load_config_from};
pub use error::{Result, SiteliftError};
pub use types::{ClosePolicy, EntryKind, SiteEntry};
