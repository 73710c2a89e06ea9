//! Write a starter sidebar manifest.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing signpost...");

    if config.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config.display()
        );
        return Ok(());
    }

    if let Some(parent) = config.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(config, DEFAULT_MANIFEST)
        .with_context(|| format!("Failed to write {}", config.display()))?;
    tracing::info!("Created {}", config.display());
    tracing::info!("Run 'signpost build' to compile the sidebar.");

    Ok(())
}

const DEFAULT_MANIFEST: &str = r#"# Signpost sidebar manifest

[options]
# Groups start collapsed unless they say otherwise
collapsed = true

# Marks overridden pages that still point at untranslated content
extra_message = "🚧"

[[entries]]
kind = "group"
path = "/"
text = "Start Reading"

[[entries]]
kind = "item"
group = "/"
key = "intro"
text = "Introduction"
link = "intro"

[[entries]]
kind = "item"
group = "/"
key = "type-safe"
text = "What is Type-safe"
link = "type-safe"

[[entries]]
kind = "item"
group = "/"
key = "glossary"
text = "Glossary"
link = "glossary"

[[entries]]
kind = "group"
path = "/data-structure"
text = "Data Structure"

[[entries]]
kind = "item"
group = "/data-structure"
key = "data-structure"
text = "Intro"
link = "data-structure"
doc_footer_text = "Intro to Data Structure"

[[entries]]
kind = "item"
group = "/data-structure"
key = "tuple"
text = "Tuple"
link = "tuple"

[[entries]]
kind = "group"
path = "/design-patterns"
text = "Design Patterns"

[[entries]]
kind = "item"
group = "/design-patterns"
key = "design-patterns"
text = "Intro"
link = "design-patterns"
doc_footer_text = "Intro to Design Patterns"

[[entries]]
kind = "item"
group = "/design-patterns"
key = "builder-pattern"
text = "Builder Pattern"
link = "builder-pattern"

[[locales]]
name = "en"

[[locales]]
name = "th"

[[locales.group_overrides]]
path = "/"
text = "เริ่มต้นอ่าน"

# Only translated pages get the locale prefix
[[locales.item_overrides]]
group = "/"
key = "intro"
text = "บทนำ"
prefix = "/th"
"#;
