//! Registry crate for the documentation-site navigation sidebar.
//!
//! This crate provides the core data structures and functionality for
//! loading, organizing, and emitting the sidebar consumed by the
//! documentation-site generator.

pub mod clap_builder;
pub mod config;
pub mod models;
pub mod sections;
pub mod utils;
pub mod validate;

pub use clap_builder::build_clap;
pub use config::NavConfig;
pub use docnav_types::{SidebarGroup, SidebarItem};
pub use models::NavRegistry;
pub use utils::*;
pub use validate::{ValidationError, validate_group, validate_sidebar};
