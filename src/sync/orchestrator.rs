use std::path::{Path, PathBuf};

use futures::FutureExt;
use futures::future::{BoxFuture, join_all};
use serde_json::Value;

use crate::client::WebClient;
use crate::error::SyncError;
use crate::sync::reader::WebSources;
use crate::sync::transform::{
    assets_form, collect_assets, load_manifest, parse_metadata, parse_page, release_payload,
};
use crate::types::pack::ReleaseEvent;
use crate::utils::logger::{LogLevel, Logger};

/// Drives one synchronization run: fans the category syncs out concurrently
/// and builds the release payload when a release event fired.
pub struct WebSync {
    client: WebClient,
    sources: WebSources,
}

impl WebSync {
    pub fn new(client: WebClient, sources: WebSources) -> Self {
        WebSync { client, sources }
    }

    /// Pushes metadata, pages and assets concurrently. Categories absent on
    /// disk never enter the branch list; categories that are present but fail
    /// on the wire fail the whole operation, surfaced only after every
    /// branch has settled. No rollback of branches that already landed.
    pub async fn update_web(&self) -> Result<(), SyncError> {
        let mut branches: Vec<BoxFuture<'_, Result<Value, SyncError>>> = Vec::new();

        if self.sources.has_metadata() {
            branches.push(self.sync_metadata().boxed());
        }

        for page in self.sources.page_files()? {
            branches.push(async move { self.sync_page(page).await }.boxed());
        }

        let assets = self.sources.asset_files()?;
        if self.sources.assets_dir().is_dir() {
            branches.push(async move { self.sync_assets(assets).await }.boxed());
        }

        let results = join_all(branches).await;
        for result in results {
            result?;
        }

        Logger::new().log_message(LogLevel::Success, "Web artifacts synchronized");
        Ok(())
    }

    async fn sync_metadata(&self) -> Result<Value, SyncError> {
        let metadata = parse_metadata(&self.sources.metadata_file())?;
        Logger::new().log_message(
            LogLevel::Info,
            &format!("Syncing pack metadata for '{}'", metadata.name),
        );
        self.client.put("pack", &metadata).await
    }

    async fn sync_page(&self, path: PathBuf) -> Result<Value, SyncError> {
        let page = parse_page(&path)?;
        let title = page
            .get("title")
            .and_then(|t| t.as_str())
            .map(|t| t.to_string())
            .unwrap_or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("?")
                    .to_string()
            });
        Logger::new().log_message(LogLevel::Info, &format!("Syncing page '{}'", title));
        self.client.put("pack/page", &page).await
    }

    async fn sync_assets(&self, files: Vec<PathBuf>) -> Result<Value, SyncError> {
        let parts = collect_assets(&files)?;
        Logger::new().log_message(
            LogLevel::Info,
            &format!("Uploading {} asset file(s)", parts.len()),
        );
        self.client
            .put_multipart("pack/assets", assets_form(parts))
            .await
    }

    /// Builds and sends the release record for one release event. The
    /// installed addon manifest under `dir` is mandatory here; everything is
    /// checked and assembled before the single network call goes out.
    pub async fn create_release(
        &self,
        event: &ReleaseEvent,
        dir: &Path,
    ) -> Result<Value, SyncError> {
        if event.tag_name.trim().is_empty() {
            return Err(SyncError::EmptyReleaseTag);
        }

        let manifest = load_manifest(&dir.join("minecraftinstance.json"))?;
        let payload = release_payload(event, manifest, &dir.join("mods"));

        Logger::new().log_message(
            LogLevel::Info,
            &format!(
                "Creating release '{}' with {} addon(s)",
                event.tag_name,
                payload.installed_addons.len()
            ),
        );

        let response = self
            .client
            .put(&format!("pack/release/{}", event.tag_name), &payload)
            .await?;

        if let Some(message) = response.get("message").and_then(|m| m.as_str()) {
            Logger::new().log_message(LogLevel::Info, &format!("💬 Backend : {}", message));
        }

        Ok(response)
    }
}
