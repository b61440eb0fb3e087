use std::path::Path;

use crate::error::SyncError;
use crate::types::pack::ReleaseEvent;

/// Reads a pipeline input. The invoking pipeline exposes its string-keyed
/// inputs as `INPUT_<NAME>` environment variables; an empty string counts as
/// absent.
pub fn get_input(name: &str) -> Option<String> {
    let key = format!("INPUT_{}", name.to_uppercase());
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

pub fn require_input(name: &str) -> Result<String, SyncError> {
    get_input(name).ok_or_else(|| SyncError::MissingInput(name.to_string()))
}

/// Extracts the release record from the pipeline's trigger event, if this run
/// was started by one. The event payload itself is an external contract; only
/// the `release` key is pulled out and handed over as an opaque record.
pub fn release_event() -> Result<Option<ReleaseEvent>, SyncError> {
    if std::env::var("GITHUB_EVENT_NAME").as_deref() != Ok("release") {
        return Ok(None);
    }

    let event_path = match std::env::var("GITHUB_EVENT_PATH") {
        Ok(p) => p,
        Err(_) => return Ok(None),
    };

    let path = Path::new(&event_path);
    let text = std::fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
    let event: serde_json::Value = serde_json::from_str(&text).map_err(|e| SyncError::Json {
        path: path.display().to_string(),
        source: e,
    })?;

    match event.get("release") {
        Some(release) => {
            let release: ReleaseEvent =
                serde_json::from_value(release.clone()).map_err(|e| SyncError::Json {
                    path: path.display().to_string(),
                    source: e,
                })?;
            Ok(Some(release))
        }
        None => Ok(None),
    }
}
