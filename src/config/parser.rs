//! Storage Declaration Parser
//!
//! Parses the multi-disk storage string into ordered volume specs.
//!
//! ```text
//! config := entry (';' entry)*
//! entry  := path [ '.' MEDIUM ] [ ',' attrs ]
//! attrs  := INTEGER | (key ':' value) (',' key ':' value)*
//! ```
//!
//! Example: `/home/disk1/palo.SSD,50;/home/disk2/palo,medium:hdd,capacity:100`

use crate::domain::{StorageMedium, StorageVolumeSpec};
use crate::error::{Error, Result};
use std::collections::HashSet;
use tracing::debug;

const ENTRY_SEPARATOR: char = ';';
const ATTRIBUTE_SEPARATOR: char = ',';
const MEDIUM_SUFFIX_SEPARATOR: char = '.';
const KEY_VALUE_SEPARATOR: char = ':';

const KEY_MEDIUM: &str = "medium";
const KEY_CAPACITY: &str = "capacity";

// =============================================================================
// Config Parser
// =============================================================================

/// Parser for the storage declaration string
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigParser;

impl ConfigParser {
    /// Parse a declaration into specs in entry order.
    ///
    /// Empty entries are skipped, so `""` and `";;"` yield an empty list.
    /// The first invalid entry aborts the parse; duplicate mount paths are
    /// checked once every entry has parsed.
    pub fn parse(raw: &str) -> Result<Vec<StorageVolumeSpec>> {
        let mut specs = Vec::new();

        for entry in raw.split(ENTRY_SEPARATOR) {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            let spec = Self::parse_entry(entry)?;
            debug!(
                mount_path = %spec.mount_path,
                medium = %spec.medium,
                capacity = ?spec.capacity,
                "Parsed storage entry"
            );
            specs.push(spec);
        }

        Self::check_unique_paths(&specs)?;

        debug!("Parsed {} storage volumes", specs.len());
        Ok(specs)
    }

    fn parse_entry(entry: &str) -> Result<StorageVolumeSpec> {
        let (path_part, attributes) = match entry.split_once(ATTRIBUTE_SEPARATOR) {
            Some((path, attrs)) => (path, Some(attrs)),
            None => (entry, None),
        };

        // Legacy form: /path.SSD
        let (candidate, suffix) = match path_part.split_once(MEDIUM_SUFFIX_SEPARATOR) {
            Some((path, suffix)) => (path, Some(suffix)),
            None => (path_part, None),
        };

        let mut spec = StorageVolumeSpec::new(normalize_mount_path(candidate)?);
        if let Some(medium) = suffix.and_then(StorageMedium::from_legacy_suffix) {
            spec.medium = medium;
        }

        if let Some(attributes) = attributes {
            Self::apply_attributes(&mut spec, attributes)?;
        }

        Ok(spec)
    }

    fn apply_attributes(spec: &mut StorageVolumeSpec, attributes: &str) -> Result<()> {
        let attributes = attributes.trim();

        // Legacy shorthand: /path,50
        if let Ok(capacity) = attributes.parse::<u64>() {
            spec.capacity = Some(capacity);
            return Ok(());
        }

        for token in attributes.split(ATTRIBUTE_SEPARATOR) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            let Some((key, value)) = token.split_once(KEY_VALUE_SEPARATOR) else {
                if token.starts_with('-') && token.parse::<i64>().is_ok() {
                    return Err(Error::InvalidCapacity {
                        capacity: token.to_string(),
                    });
                }
                return Err(Error::UnknownAttribute {
                    attribute: token.to_string(),
                });
            };

            let value = value.trim();
            match key.trim().to_lowercase().as_str() {
                KEY_MEDIUM => spec.medium = value.parse()?,
                KEY_CAPACITY => spec.capacity = Some(parse_capacity(value)?),
                _ => {
                    return Err(Error::UnknownAttribute {
                        attribute: key.trim().to_string(),
                    })
                }
            }
        }

        Ok(())
    }

    fn check_unique_paths(specs: &[StorageVolumeSpec]) -> Result<()> {
        let mut seen = HashSet::with_capacity(specs.len());
        for spec in specs {
            if !seen.insert(spec.mount_path.as_str()) {
                return Err(Error::DuplicatePath {
                    path: spec.mount_path.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Parse a declaration string into ordered volume specs
pub fn parse_storage_config(raw: &str) -> Result<Vec<StorageVolumeSpec>> {
    ConfigParser::parse(raw)
}

// =============================================================================
// Utility Functions
// =============================================================================

/// Trim whitespace and one trailing slash, then require an absolute path
fn normalize_mount_path(candidate: &str) -> Result<String> {
    let trimmed = candidate.trim();
    let path = trimmed.strip_suffix('/').unwrap_or(trimmed);

    if path.is_empty() || !path.starts_with('/') {
        return Err(Error::InvalidPath {
            path: trimmed.to_string(),
        });
    }

    Ok(path.to_string())
}

/// Parse a capacity value in gigabytes
fn parse_capacity(value: &str) -> Result<u64> {
    value.parse::<u64>().map_err(|_| Error::InvalidCapacity {
        capacity: value.to_string(),
    })
}
