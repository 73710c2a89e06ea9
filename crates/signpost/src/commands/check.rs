//! Manifest validation command.

use std::path::Path;

use anyhow::{Context, Result};

use crate::manifest::load_manifest;

/// Run the check command.
pub fn run(config: &Path) -> Result<()> {
    let manifest = load_manifest(config)?;
    let sidebars = manifest
        .build_locales()
        .with_context(|| format!("Invalid sidebar in {}", config.display()))?;

    for sidebar in &sidebars {
        tracing::info!(
            "Locale {}: {} top-level groups, {} nodes",
            sidebar.name,
            sidebar.items.len(),
            sidebar.node_count()
        );
    }

    tracing::info!("{} is valid", config.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn accepts_valid_manifest() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("sidebar.toml");
        fs::write(&config, "[[entries]]\nkind = \"group\"\npath = \"/\"\ntext = \"Start\"\n").unwrap();

        run(&config).unwrap();
    }

    #[test]
    fn rejects_out_of_order_groups() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("sidebar.yaml");
        fs::write(
            &config,
            "entries:\n  - kind: group\n    path: /loop/mapped-types\n    text: Mapped Types\n  - kind: group\n    path: /loop\n    text: Loop\n",
        )
        .unwrap();

        let err = run(&config).unwrap_err();

        assert!(format!("{err:#}").contains("Parent group is not found or wrong order"));
    }
}
