//! Manifest file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use signpost_sidebar::SidebarManifest;

/// Load a manifest, picking the format from the file extension.
pub fn load_manifest(path: &Path) -> Result<SidebarManifest> {
    if !path.exists() {
        anyhow::bail!(
            "Manifest not found: {}. Run 'signpost init' first.",
            path.display()
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let manifest: SidebarManifest = match ext {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
        _ => toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
    };

    for field in manifest.unknown_fields() {
        tracing::warn!("{} in {}", field, path.display());
    }

    tracing::info!(
        "Loaded {} groups, {} items and {} locales from {}",
        manifest.group_count(),
        manifest.item_count(),
        manifest.locales.len(),
        path.display()
    );

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use signpost_sidebar::Declaration;
    use tempfile::tempdir;

    #[test]
    fn loads_toml_manifest() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("sidebar.toml");
        fs::write(
            &path,
            "[[entries]]\nkind = \"group\"\npath = \"/\"\ntext = \"Start\"\n\n[[entries]]\nkind = \"item\"\ngroup = \"/\"\nkey = \"intro\"\ntext = \"Intro\"\n",
        )
        .unwrap();

        let manifest = load_manifest(&path).unwrap();

        assert_eq!(manifest.group_count(), 1);
        assert_eq!(manifest.item_count(), 1);
    }

    #[test]
    fn loads_yaml_manifest() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("sidebar.yml");
        fs::write(&path, "entries:\n  - kind: group\n    path: /\n    text: Start\n").unwrap();

        let manifest = load_manifest(&path).unwrap();

        let Declaration::Group(start) = &manifest.entries[0] else {
            panic!("expected a group");
        };
        assert_eq!(start.metadata.text.as_deref(), Some("Start"));
    }

    #[test]
    fn errors_on_missing_manifest() {
        let temp = tempdir().unwrap();

        let err = load_manifest(&temp.path().join("sidebar.toml")).unwrap_err();

        assert!(err.to_string().contains("Manifest not found"));
    }

    #[test]
    fn errors_on_malformed_manifest() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("sidebar.toml");
        fs::write(&path, "[[entries]\npath = ").unwrap();

        let err = load_manifest(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to parse"));
    }
}
