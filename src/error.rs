use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a sync run. Skip conditions (missing pages or
/// assets directory, missing metadata file) never reach this type; they are
/// absorbed with a warning where they are detected.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The backend answered with a non-success status.
    #[error("request to '{path}' failed with status {status}: {body}")]
    Api {
        path: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// A required pipeline input is absent or empty.
    #[error("missing required pipeline input '{0}'")]
    MissingInput(String),

    /// Release creation requested but the installed addon manifest is absent.
    /// Distinct from ordinary skip conditions: a release cannot be built
    /// without it, so this aborts before any network call.
    #[error("installed addon manifest not found at '{}'", .0.display())]
    ManifestMissing(PathBuf),

    /// The release event carried no tag name.
    #[error("release event has an empty tag name")]
    EmptyReleaseTag,

    /// The top-level action selector matched nothing we know.
    #[error("unrecognized action '{0}' (expected 'web')")]
    UnknownAction(String),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON in '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse YAML in '{path}': {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl SyncError {
    /// True for failures that happened on the wire rather than locally. The
    /// top level logs these with the failing endpoint and response body.
    pub fn is_transport(&self) -> bool {
        matches!(self, SyncError::Api { .. } | SyncError::Http(_))
    }

    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
