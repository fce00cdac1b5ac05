//! Media route registry.
//!
//! Built once at startup by walking the media root. Each supported file is
//! mapped from `{base_route}/{relative/path}` to its absolute location on
//! disk. The registry is never mutated after the scan, so request handlers
//! share it behind an `Arc` without locking.

use media_proxy_common::paths::{is_supported_media, MediaKind};
use media_proxy_common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};
use walkdir::WalkDir;

/// One row of the `/list` inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntry {
    /// URL path the file is served under.
    pub path: String,
    /// Size in bytes at the time of the listing.
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

/// Immutable mapping from URL path to file on disk.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    base_route: String,
    entries: BTreeMap<String, PathBuf>,
}

impl RouteRegistry {
    /// Scan `media_root` recursively and register every supported file.
    ///
    /// A missing media root is created empty, which yields an empty registry.
    /// Any I/O error during the walk aborts the scan with
    /// [`Error::ScanFailed`].
    pub fn build(media_root: &Path, base_route: impl Into<String>) -> Result<Self> {
        let base_route = base_route.into();

        if !media_root.exists() {
            info!("Media directory {:?} does not exist, creating it", media_root);
            std::fs::create_dir_all(media_root)
                .map_err(|e| Error::scan_failed(media_root, e))?;
        }

        let root = media_root
            .canonicalize()
            .map_err(|e| Error::scan_failed(media_root, e))?;

        info!("Scanning media directory: {:?}", root);
        let mut entries = BTreeMap::new();

        for entry in WalkDir::new(&root).min_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                Error::scan_failed(path, e.into())
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            if !is_supported_media(path) {
                trace!("Skipping unsupported file: {:?}", path);
                continue;
            }

            let relative = path
                .strip_prefix(&root)
                .map_err(|e| Error::scan_failed(path, std::io::Error::other(e)))?;
            let route = route_for(&base_route, relative);

            debug!(route = %route, path = ?path, "Discovered media file");
            entries.insert(route, path.to_path_buf());
        }

        info!("Scan complete: {} media files under {:?}", entries.len(), root);
        Ok(Self {
            base_route,
            entries,
        })
    }

    /// Build a registry from precomputed `(route, file)` pairs.
    pub fn from_entries<I>(base_route: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, PathBuf)>,
    {
        Self {
            base_route: base_route.into(),
            entries: entries.into_iter().collect(),
        }
    }

    /// Exact-match lookup of a URL path.
    pub fn lookup(&self, url_path: &str) -> Option<&Path> {
        self.entries.get(url_path).map(PathBuf::as_path)
    }

    /// Re-stat every registered file and report the ones still present.
    pub fn list(&self) -> Vec<MediaEntry> {
        self.entries
            .iter()
            .filter_map(|(route, path)| match std::fs::metadata(path) {
                Ok(metadata) => Some(MediaEntry {
                    path: route.clone(),
                    size: metadata.len(),
                    kind: MediaKind::from_path(path),
                }),
                Err(e) => {
                    debug!(route = %route, error = %e, "Omitting vanished media file");
                    None
                }
            })
            .collect()
    }

    pub fn base_route(&self) -> &str {
        &self.base_route
    }

    /// URL path of the JSON inventory.
    pub fn list_route(&self) -> String {
        format!("{}/list", self.base_route)
    }

    /// Registered routes and their files, ordered by route.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(route, path)| (route.as_str(), path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Join a relative file path onto the base route using `/` separators.
fn route_for(base_route: &str, relative: &Path) -> String {
    let relative = relative.to_string_lossy().replace('\\', "/");
    format!("{}/{}", base_route, relative)
}
