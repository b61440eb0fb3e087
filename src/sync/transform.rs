use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};

use crate::error::SyncError;
use crate::types::pack::{InstalledAddonManifest, PackMetadata, ReleaseEvent, ReleasePayload};

/// Reads `web/pack.yml` and hands it over as the `PUT pack` body. Unknown
/// fields ride along untouched; the backend owns the schema.
pub fn parse_metadata(path: &Path) -> Result<PackMetadata, SyncError> {
    let text = std::fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
    serde_yaml::from_str(&text).map_err(|e| SyncError::Yaml {
        path: path.display().to_string(),
        source: e,
    })
}

/// The closed set of page source formats, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    Json,
    Yaml,
    /// Anything else. Parsed as an empty object instead of being skipped:
    /// the backend's handling of an empty page body is its own business, and
    /// one odd file must not fail the whole batch.
    Other,
}

impl PageFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => PageFormat::Json,
            Some("yml") | Some("yaml") => PageFormat::Yaml,
            _ => PageFormat::Other,
        }
    }
}

/// Parses one page document according to its extension.
pub fn parse_page(path: &Path) -> Result<Value, SyncError> {
    match PageFormat::from_path(path) {
        PageFormat::Json => {
            let text = std::fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
            serde_json::from_str(&text).map_err(|e| SyncError::Json {
                path: path.display().to_string(),
                source: e,
            })
        }
        PageFormat::Yaml => {
            let text = std::fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
            serde_yaml::from_str(&text).map_err(|e| SyncError::Yaml {
                path: path.display().to_string(),
                source: e,
            })
        }
        PageFormat::Other => Ok(Value::Object(Map::new())),
    }
}

/// Loads every asset file as a `(base name, bytes)` pair. The base name is
/// both the part name and the uploaded file name.
pub fn collect_assets(files: &[std::path::PathBuf]) -> Result<Vec<(String, Vec<u8>)>, SyncError> {
    let mut parts = Vec::with_capacity(files.len());
    for file in files {
        let name = file
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
            .unwrap_or_default();
        let bytes = std::fs::read(file).map_err(|e| SyncError::io(file, e))?;
        parts.push((name, bytes));
    }
    Ok(parts)
}

/// Packs the collected assets into one multipart form for `PUT pack/assets`.
pub fn assets_form(parts: Vec<(String, Vec<u8>)>) -> Form {
    let mut form = Form::new();
    for (name, bytes) in parts {
        let part = Part::bytes(bytes).file_name(name.clone());
        form = form.part(name, part);
    }
    form
}

/// Loads the installed addon manifest. Its absence is fatal, not a skip:
/// a release cannot be described without it.
pub fn load_manifest(path: &Path) -> Result<InstalledAddonManifest, SyncError> {
    if !path.is_file() {
        return Err(SyncError::ManifestMissing(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| SyncError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

/// Merges the release event's stripped descriptive fields with the addons
/// whose files actually shipped. The manifest is authoritative about what a
/// build contained, but only entries whose `installedFile.fileName` is
/// present under `mods/` make it into the payload.
pub fn release_payload(
    event: &ReleaseEvent,
    manifest: InstalledAddonManifest,
    mods_dir: &Path,
) -> ReleasePayload {
    let installed_addons = manifest
        .installed_addons
        .into_iter()
        .filter(|addon| mods_dir.join(&addon.installed_file.file_name).is_file())
        .collect();

    ReleasePayload {
        name: event.name.clone(),
        body: event.body.clone(),
        prerelease: event.prerelease,
        installed_addons,
    }
}
