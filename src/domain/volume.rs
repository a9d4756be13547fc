//! Storage Volume Types
//!
//! Value objects produced by the declaration parser and handed to the
//! volume-mount builder.

use crate::error::{Error, Result};
use crate::naming::NameResolver;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Storage Medium
// =============================================================================

/// Storage class of a declared disk
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageMedium {
    #[default]
    Hdd,
    Ssd,
    RemoteCache,
}

impl StorageMedium {
    /// Canonical uppercase form
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMedium::Hdd => "HDD",
            StorageMedium::Ssd => "SSD",
            StorageMedium::RemoteCache => "REMOTE_CACHE",
        }
    }

    /// Parse the dotted path suffix form (`/data.SSD`).
    ///
    /// Only `HDD` and `SSD` were ever accepted there; `REMOTE_CACHE` can only
    /// be declared through the `medium:` attribute.
    pub fn from_legacy_suffix(token: &str) -> Option<Self> {
        match token.trim().to_uppercase().as_str() {
            "HDD" => Some(StorageMedium::Hdd),
            "SSD" => Some(StorageMedium::Ssd),
            _ => None,
        }
    }
}

impl std::fmt::Display for StorageMedium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StorageMedium {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hdd" => Ok(StorageMedium::Hdd),
            "ssd" => Ok(StorageMedium::Ssd),
            "remote_cache" => Ok(StorageMedium::RemoteCache),
            _ => Err(Error::InvalidMedium {
                medium: s.trim().to_string(),
            }),
        }
    }
}

// =============================================================================
// Storage Volume Spec
// =============================================================================

/// One declared disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageVolumeSpec {
    /// Absolute mount path without trailing slash
    pub mount_path: String,

    /// Declared capacity in gigabytes
    #[serde(default)]
    pub capacity: Option<u64>,

    /// Storage medium
    #[serde(default)]
    pub medium: StorageMedium,
}

impl StorageVolumeSpec {
    /// Create a spec on the default medium with no capacity
    pub fn new(mount_path: impl Into<String>) -> Self {
        Self {
            mount_path: mount_path.into(),
            capacity: None,
            medium: StorageMedium::default(),
        }
    }

    pub fn with_capacity(mut self, capacity_gb: u64) -> Self {
        self.capacity = Some(capacity_gb);
        self
    }

    pub fn with_medium(mut self, medium: StorageMedium) -> Self {
        self.medium = medium;
        self
    }

    /// Capacity in its display form (e.g., "50Gi")
    pub fn capacity_display(&self) -> Option<String> {
        self.capacity.map(|gb| format!("{}Gi", gb))
    }

    /// Capacity as a Kubernetes resource quantity
    pub fn capacity_quantity(&self) -> Option<Quantity> {
        self.capacity_display().map(Quantity)
    }
}

// =============================================================================
// Resolved Volume
// =============================================================================

/// A parsed volume paired with its short name, as consumed by the
/// volume-mount builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVolume {
    pub mount_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Quantity>,

    pub medium: StorageMedium,

    /// Collision-aware short name derived from the mount path
    pub name: String,
}

impl ResolvedVolume {
    pub fn new(spec: &StorageVolumeSpec, name: impl Into<String>) -> Self {
        Self {
            mount_path: spec.mount_path.clone(),
            capacity: spec.capacity_quantity(),
            medium: spec.medium,
            name: name.into(),
        }
    }

    /// Pair each spec with the name resolved from its mount path
    pub fn from_specs(specs: &[StorageVolumeSpec]) -> Vec<ResolvedVolume> {
        let paths: Vec<&str> = specs.iter().map(|s| s.mount_path.as_str()).collect();
        let names = NameResolver::resolve(&paths);

        specs
            .iter()
            .zip(names)
            .map(|(spec, name)| ResolvedVolume::new(spec, name))
            .collect()
    }
}
