//! Sidebar build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use signpost_sidebar::{LocaleSidebar, SidebarItem};

use crate::manifest::load_manifest;

/// Run the build command.
pub fn run(config: &Path, output: Option<PathBuf>, locale: Option<String>, compact: bool) -> Result<()> {
    tracing::info!("Building sidebar...");

    let manifest = load_manifest(config)?;
    let mut sidebars = manifest
        .build_locales()
        .with_context(|| format!("Invalid sidebar in {}", config.display()))?;

    if let Some(name) = locale {
        sidebars.retain(|sidebar| sidebar.name == name);
        if sidebars.is_empty() {
            anyhow::bail!("Locale not found in {}: {}", config.display(), name);
        }
    }

    match output {
        Some(dir) => {
            for path in write_locales(&dir, &sidebars, compact)? {
                tracing::info!("Output: {}", path.display());
            }
        }
        None => {
            println!("{}", to_json(&sidebars, compact)?);
        }
    }

    Ok(())
}

/// Write one `<locale>.json` per sidebar into `dir`.
fn write_locales(dir: &Path, sidebars: &[LocaleSidebar], compact: bool) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut written = Vec::with_capacity(sidebars.len());
    for sidebar in sidebars {
        let path = dir.join(format!("{}.json", sidebar.name));
        let json = to_json(&sidebar.items, compact)?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!("Built locale {} with {} nodes", sidebar.name, sidebar.node_count());
        written.push(path);
    }

    Ok(written)
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"
[[entries]]
kind = "group"
path = "/"
text = "Start"

[[entries]]
kind = "item"
group = "/"
key = "intro"
text = "Intro"
link = "intro"

[[locales]]
name = "en"

[[locales]]
name = "th"
prefix = "/th"
"#;

    #[test]
    fn writes_one_file_per_locale() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("sidebar.toml");
        let out = temp.path().join("out");
        fs::write(&config, MANIFEST).unwrap();

        run(&config, Some(out.clone()), None, false).unwrap();

        let en: Vec<SidebarItem> =
            serde_json::from_str(&fs::read_to_string(out.join("en.json")).unwrap()).unwrap();
        let th: Vec<SidebarItem> =
            serde_json::from_str(&fs::read_to_string(out.join("th.json")).unwrap()).unwrap();

        assert_eq!(en[0].find("/intro").unwrap().link.as_deref(), Some("/intro"));
        assert_eq!(th[0].find("/intro").unwrap().link.as_deref(), Some("/th/intro"));
    }

    #[test]
    fn builds_single_locale() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("sidebar.toml");
        let out = temp.path().join("out");
        fs::write(&config, MANIFEST).unwrap();

        run(&config, Some(out.clone()), Some("th".to_string()), true).unwrap();

        assert!(out.join("th.json").exists());
        assert!(!out.join("en.json").exists());
    }

    #[test]
    fn errors_on_unknown_locale() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("sidebar.toml");
        fs::write(&config, MANIFEST).unwrap();

        let err = run(&config, None, Some("fr".to_string()), false).unwrap_err();

        assert!(err.to_string().contains("Locale not found"));
    }

    #[test]
    fn reports_invalid_sidebar() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("sidebar.toml");
        fs::write(
            &config,
            "[[entries]]\nkind = \"group\"\npath = \"/a\"\n\n[[entries]]\nkind = \"group\"\npath = \"/a\"\n",
        )
        .unwrap();

        let err = run(&config, None, None, false).unwrap_err();

        assert!(err.to_string().contains("Invalid sidebar"));
        assert!(format!("{err:#}").contains("Duplicate group key: /a"));
    }

    #[test]
    fn stdout_lists_locales_in_declaration_order() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("sidebar.toml");
        fs::write(
            &config,
            MANIFEST.replace("name = \"en\"", "name = \"zh\""),
        )
        .unwrap();

        let sidebars = load_manifest(&config).unwrap().build_locales().unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&sidebars, true).unwrap()).unwrap();

        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|locale| locale["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["zh", "th"]);
        assert_eq!(json[1]["items"][0]["items"][0]["link"], "/th/intro");
    }
}
