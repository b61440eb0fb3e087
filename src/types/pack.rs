use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The pack's web-facing metadata, authored in `web/pack.yml`. The backend
/// owns the full schema; anything we do not model is carried in `rest` and
/// sent back verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackMetadata {
    pub name: String,
    pub author: String,
    pub description: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// One entry of the installed addon manifest (`minecraftinstance.json`).
/// Produced by the launcher, not by us; unknown fields pass through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstalledAddon {
    #[serde(rename = "addonID")]
    pub addon_id: i64,
    #[serde(rename = "installedFile")]
    pub installed_file: InstalledFile,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstalledFile {
    #[serde(rename = "categoryClassId", default, skip_serializing_if = "Option::is_none")]
    pub category_class_id: Option<i64>,
    pub id: i64,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The slice of `minecraftinstance.json` we consume.
#[derive(Debug, Clone, Deserialize)]
pub struct InstalledAddonManifest {
    #[serde(rename = "installedAddons", default)]
    pub installed_addons: Vec<InstalledAddon>,
}

/// The release record extracted from the pipeline's release trigger event.
/// Only the stripped descriptive fields below are ever forwarded.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseEvent {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
}

/// Body of `PUT pack/release/{tag}`: the event's stripped descriptive fields
/// merged with the addons whose files actually shipped. Built once per
/// release event and sent exactly once.
#[derive(Debug, Clone, Serialize)]
pub struct ReleasePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub prerelease: bool,
    #[serde(rename = "installedAddons")]
    pub installed_addons: Vec<InstalledAddon>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_keeps_unknown_fields() {
        let yaml = r##"
name: My Pack
author: Someone
description: A pack
slug: my-pack
theme:
  accent: "#1dd3b0"
"##;
        let meta: PackMetadata = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(meta.name, "My Pack");
        assert!(meta.rest.contains_key("theme"));

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["theme"]["accent"], "#1dd3b0");
        assert!(json.get("assets").is_none());
    }

    #[test]
    fn manifest_parses_launcher_shape() {
        let raw = r#"{
            "baseModLoader": {"name": "forge"},
            "installedAddons": [
                {
                    "addonID": 238222,
                    "installedFile": {"id": 321, "fileName": "jei.jar", "fileLength": 12},
                    "packageType": 6
                }
            ]
        }"#;
        let manifest: InstalledAddonManifest = serde_json::from_str(raw).unwrap();
        assert_eq!(manifest.installed_addons.len(), 1);
        let addon = &manifest.installed_addons[0];
        assert_eq!(addon.addon_id, 238222);
        assert_eq!(addon.installed_file.file_name, "jei.jar");
        // pass-through survives re-serialization
        let round = serde_json::to_value(addon).unwrap();
        assert_eq!(round["packageType"], 6);
        assert_eq!(round["installedFile"]["fileLength"], 12);
    }

    #[test]
    fn release_event_strips_to_descriptive_fields() {
        let raw = r#"{
            "tag_name": "v1.2.0",
            "name": "Release v1.2.0",
            "body": "changelog",
            "prerelease": false,
            "draft": false,
            "assets": []
        }"#;
        let event: ReleaseEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(event.tag_name, "v1.2.0");
        assert_eq!(event.name.as_deref(), Some("Release v1.2.0"));
        assert!(!event.prerelease);
    }
}
