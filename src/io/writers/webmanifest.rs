use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::types::Dimensions;

/// One entry of a web app manifest `icons` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl ManifestIcon {
    pub fn png(name: &str, size: Dimensions, src_prefix: &str) -> Self {
        Self {
            src: join_src(src_prefix, name),
            sizes: size.to_string(),
            mime_type: "image/png".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcons {
    pub icons: Vec<ManifestIcon>,
}

fn join_src(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else if prefix.ends_with('/') {
        format!("{prefix}{name}")
    } else {
        format!("{prefix}/{name}")
    }
}

/// Writes `{"icons": [...]}` as pretty JSON, ready to merge into a `site.webmanifest`.
pub fn write_manifest_icons(output: &Path, icons: &[ManifestIcon]) -> Result<()> {
    let fragment = ManifestIcons {
        icons: icons.to_vec(),
    };
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &fragment)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    info!("Wrote web app manifest icons to {:?}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn src_prefix_is_joined_with_single_slash() {
        assert_eq!(join_src("", "a.png"), "a.png");
        assert_eq!(join_src("/icons", "a.png"), "/icons/a.png");
        assert_eq!(join_src("/icons/", "a.png"), "/icons/a.png");
    }

    #[test]
    fn fragment_uses_manifest_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.json");
        let icons = vec![ManifestIcon::png(
            "mstile-310x150.png",
            Dimensions::new(310, 150),
            "/static",
        )];
        write_manifest_icons(&path, &icons).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["icons"][0]["src"], "/static/mstile-310x150.png");
        assert_eq!(value["icons"][0]["sizes"], "310x150");
        assert_eq!(value["icons"][0]["type"], "image/png");
    }
}
