//! Storage Volume Resolver
//!
//! Turns a multi-disk storage declaration into validated volume specs and
//! short, collision-aware volume names for a Kubernetes operator's
//! volume-mount builder.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │   ConfigSource       │     │   ConfigParser   │     │   NameResolver   │
//! │ (inline/env/file)    │ ──► │  (declaration →  │ ──► │ (mount paths →   │
//! │                      │     │   volume specs)  │     │   short names)   │
//! └──────────────────────┘     └──────────────────┘     └────────┬─────────┘
//!                                                                │
//!                                                       ┌────────▼─────────┐
//!                                                       │  ResolvedVolume  │
//!                                                       │ → mount builder  │
//!                                                       └──────────────────┘
//! ```
//!
//! # Declaration format
//!
//! ```text
//! /home/disk1/palo.SSD,50;/home/disk2/palo,medium:remote_cache,capacity:100
//! ```
//!
//! # Modules
//!
//! - [`config`]: Declaration sources and parser
//! - [`naming`]: Volume name resolution
//! - [`domain`]: Volume value objects
//! - [`plan`]: Parse-and-name composition
//! - [`error`]: Error types and handling

pub mod config;
pub mod domain;
pub mod error;
pub mod naming;
pub mod plan;

// Re-export commonly used types
pub use config::{parse_storage_config, ConfigParser, ConfigSource, DEFAULT_CONFIG_ENV};

pub use domain::{ResolvedVolume, StorageMedium, StorageVolumeSpec};

pub use error::{Error, ErrorAction, Result};

pub use naming::{resolve_volume_names, NameResolver};

pub use plan::{resolve_specs, resolve_volumes};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
