//! Volume Plan
//!
//! Joins parsed specs with their resolved names into the ordered list the
//! volume-mount builder consumes.

use crate::config::ConfigParser;
use crate::domain::{ResolvedVolume, StorageVolumeSpec};
use crate::error::Result;
use tracing::info;

/// Pair each spec with the name resolved from its mount path
pub fn resolve_specs(specs: &[StorageVolumeSpec]) -> Vec<ResolvedVolume> {
    ResolvedVolume::from_specs(specs)
}

/// Parse a declaration and resolve names for every volume
pub fn resolve_volumes(raw: &str) -> Result<Vec<ResolvedVolume>> {
    let specs = ConfigParser::parse(raw)?;
    let volumes = resolve_specs(&specs);
    info!("Resolved {} storage volumes", volumes.len());
    Ok(volumes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StorageMedium;
    use crate::error::Error;
    use assert_matches::assert_matches;
    use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

    #[test]
    fn test_resolve_volumes() {
        let volumes =
            resolve_volumes("/home/disk1/doris.SSD,50;/home/disk2/doris,medium:remote_cache;/opt/log")
                .unwrap();

        assert_eq!(volumes.len(), 3);
        assert_eq!(volumes[0].name, "disk1-doris");
        assert_eq!(volumes[0].capacity, Some(Quantity("50Gi".into())));
        assert_eq!(volumes[0].medium, StorageMedium::Ssd);
        assert_eq!(volumes[1].name, "disk2-doris");
        assert_eq!(volumes[1].medium, StorageMedium::RemoteCache);
        assert!(volumes[1].capacity.is_none());
        assert_eq!(volumes[2].name, "log");
        assert_eq!(volumes[2].mount_path, "/opt/log");
    }

    #[test]
    fn test_resolve_volumes_empty() {
        assert!(resolve_volumes(" ; ").unwrap().is_empty());
    }

    #[test]
    fn test_resolve_volumes_propagates_parse_errors() {
        assert_matches!(
            resolve_volumes("/a;/a"),
            Err(Error::DuplicatePath { .. })
        );
    }

    #[test]
    fn test_resolve_specs_preserves_order() {
        let specs = vec![
            StorageVolumeSpec::new("/b/data"),
            StorageVolumeSpec::new("/a/data"),
        ];
        let names: Vec<_> = resolve_specs(&specs).into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["b-data", "a-data"]);
    }
}
