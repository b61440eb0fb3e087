pub mod orchestrator;
pub mod reader;
pub mod transform;

pub use orchestrator::WebSync;
pub use reader::WebSources;

use std::path::Path;

use crate::client::WebClient;
use crate::error::SyncError;
use crate::utils::inputs::release_event;
use crate::utils::spinner::with_spinner;

/// The `web` action: release creation first (when the pipeline run was
/// triggered by a release event), then the generic web update fan-out.
pub async fn run_web(root: &Path) -> Result<(), SyncError> {
    let client = WebClient::from_inputs()?;
    let sync = WebSync::new(client, WebSources::new(root));

    if let Some(event) = release_event()? {
        let spinner = with_spinner(&format!("Creating release '{}'...", event.tag_name));
        match sync.create_release(&event, root).await {
            Ok(_) => spinner.succeed(format!("Release '{}' created", event.tag_name)),
            Err(e) => {
                spinner.finish_and_clear();
                return Err(e);
            }
        }
    }

    sync.update_web().await
}
