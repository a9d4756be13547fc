//! Volume Name Resolver
//!
//! Derives a short name for each mount path from its trailing segments,
//! growing the suffix toward the root until the name is unclaimed:
//!
//! ```text
//! /home/disk1/doris  ->  disk1-doris
//! /home/disk2/doris  ->  disk2-doris
//! /opt/cache         ->  cache
//! ```
//!
//! When a path collides with a different path that currently uses the
//! contested name, that path grows by one segment as well, and the
//! contested name stays claimed so later paths keep growing past it.
//!
//! Names are recorded per literal path string, so a path listed more than
//! once is resolved again on every occurrence and all of its occurrences
//! report the name from the last one.

use std::collections::HashMap;
use tracing::{debug, warn};

const NAME_SEPARATOR: &str = "-";

/// Resolver for collision-aware volume names
#[derive(Debug, Clone, Copy, Default)]
pub struct NameResolver;

impl NameResolver {
    /// Resolve one name per path, preserving input order and length
    pub fn resolve<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
        // name -> owning path
        let mut claims: HashMap<String, &str> = HashMap::with_capacity(paths.len());
        // literal path -> latest name
        let mut literal: HashMap<&str, String> = HashMap::with_capacity(paths.len());

        for path in paths {
            let path = path.as_ref();
            let name = Self::claim_name(path, &mut claims, &mut literal);
            claims.insert(name.clone(), path);
            literal.insert(path, name);
        }

        paths
            .iter()
            .map(|path| literal.get(path.as_ref()).cloned().unwrap_or_default())
            .collect()
    }

    /// Grow a suffix of the path's segments until it is unclaimed
    fn claim_name<'a>(
        path: &'a str,
        claims: &mut HashMap<String, &'a str>,
        literal: &mut HashMap<&'a str, String>,
    ) -> String {
        let segments = split_segments(path);
        if segments.is_empty() {
            return String::new();
        }

        let mut depth = 1;
        let mut candidate = suffix_name(&segments, depth);

        while let Some(&owner) = claims.get(&candidate) {
            if owner != path {
                Self::displace(owner, &candidate, depth, claims, literal);
            }

            if depth == segments.len() {
                if literal.get(owner).map(String::as_str) == Some(candidate.as_str()) {
                    warn!(
                        path = %path,
                        name = %candidate,
                        owner = %owner,
                        "Path segments exhausted, reusing colliding volume name"
                    );
                }
                break;
            }

            depth += 1;
            debug!(
                "Name '{}' already claimed by {}, extending to depth {}",
                candidate, owner, depth
            );
            candidate = suffix_name(&segments, depth);
        }

        debug!(path = %path, name = %candidate, "Resolved volume name");
        candidate
    }

    /// Move `owner` off `contested` by one more segment, if it still uses
    /// that name and the longer name is free
    fn displace<'a>(
        owner: &'a str,
        contested: &str,
        depth: usize,
        claims: &mut HashMap<String, &'a str>,
        literal: &mut HashMap<&'a str, String>,
    ) {
        if literal.get(owner).map(String::as_str) != Some(contested) {
            return;
        }

        let segments = split_segments(owner);
        if depth >= segments.len() {
            return;
        }

        let renamed = suffix_name(&segments, depth + 1);
        if claims.contains_key(&renamed) {
            return;
        }

        debug!(path = %owner, from = %contested, to = %renamed, "Renamed volume on collision");
        claims.insert(renamed.clone(), owner);
        literal.insert(owner, renamed);
    }
}

/// Resolve short volume names for the given mount paths
pub fn resolve_volume_names<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    NameResolver::resolve(paths)
}

// =============================================================================
// Utility Functions
// =============================================================================

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Join the last `depth` segments
fn suffix_name(segments: &[&str], depth: usize) -> String {
    segments[segments.len() - depth..].join(NAME_SEPARATOR)
}
