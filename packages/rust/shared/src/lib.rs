//! Shared types, error model, and configuration for coursemark.
//!
//! This crate is the foundation depended on by all other coursemark crates.
//! It provides:
//! - [`CoursemarkError`] — the unified error type
//! - Domain row types for the eight input tables ([`CategoryPage`],
//!   [`CourseRow`], [`FaqRow`], ...)
//! - Configuration ([`AppConfig`], [`Conventions`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, Conventions, DefaultsConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{CoursemarkError, Result};
pub use types::{
    AboutTopicsRow, AreaServedRow, CategoryPage, CategoryTagsRow, COURSE_CODE_SENTINEL,
    CourseRow, CourseTopicsRow, FaqRow, OrgVariable, SCHEMA_CONTEXT,
};
