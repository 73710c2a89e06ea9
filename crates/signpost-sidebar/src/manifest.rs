//! Declarative sidebar manifests.
//!
//! A manifest lists the base groups and items once, in one ordered `entries`
//! list, then one entry per locale holding the overrides and link prefix for
//! that locale. Each locale compiles from its own clone of the base builder.

use std::collections::{BTreeMap, HashSet};

use rayon::prelude::*;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::builder::SidebarBuilder;
use crate::error::{Result, SidebarError};
use crate::item::SidebarItem;
use crate::key::item_key;
use crate::metadata::{SidebarMetadata, SidebarOptions};

/// Locale name used when a manifest declares no locales.
pub const DEFAULT_LOCALE: &str = "default";

/// A full sidebar manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SidebarManifest {
    pub options: SidebarOptions,
    /// Groups and items in declaration order
    pub entries: Vec<Declaration>,
    pub locales: Vec<LocaleDecl>,
}

/// One base declaration, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Declaration {
    Group(GroupDecl),
    Item(ItemDecl),
}

/// A group declaration or override.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupDecl {
    /// Absolute group path
    pub path: String,

    #[serde(flatten)]
    pub metadata: SidebarMetadata,

    /// Keys matching no metadata field
    #[serde(flatten)]
    pub unknown: BTreeMap<String, IgnoredAny>,
}

/// An item declaration or override.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDecl {
    /// Owning group path
    pub group: String,

    /// Key relative to the group
    pub key: String,

    #[serde(flatten)]
    pub metadata: SidebarMetadata,

    /// Keys matching no metadata field
    #[serde(flatten)]
    pub unknown: BTreeMap<String, IgnoredAny>,
}

impl GroupDecl {
    pub fn new(path: impl Into<String>, metadata: SidebarMetadata) -> Self {
        Self {
            path: path.into(),
            metadata,
            unknown: BTreeMap::new(),
        }
    }
}

impl ItemDecl {
    pub fn new(group: impl Into<String>, key: impl Into<String>, metadata: SidebarMetadata) -> Self {
        Self {
            group: group.into(),
            key: key.into(),
            metadata,
            unknown: BTreeMap::new(),
        }
    }
}

/// A locale variant of the base sidebar.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleDecl {
    pub name: String,

    /// Prefix for every link without its own prefix, e.g. `/th`
    #[serde(default)]
    pub prefix: Option<String>,

    #[serde(default)]
    pub group_overrides: Vec<GroupDecl>,

    #[serde(default)]
    pub item_overrides: Vec<ItemDecl>,
}

/// The compiled sidebar of one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSidebar {
    pub name: String,
    pub items: Vec<SidebarItem>,
}

impl LocaleSidebar {
    /// Number of nodes across the whole tree.
    pub fn node_count(&self) -> usize {
        self.items.iter().map(SidebarItem::node_count).sum()
    }
}

impl SidebarManifest {
    /// Replay the base declarations into a fresh builder.
    pub fn base_builder(&self) -> SidebarBuilder {
        self.entries.iter().fold(
            SidebarBuilder::with_options(self.options.clone()),
            |builder, entry| match entry {
                Declaration::Group(group) => {
                    builder.add_group(group.path.clone(), group.metadata.clone())
                }
                Declaration::Item(item) => {
                    builder.add(&item.group, &item.key, item.metadata.clone())
                }
            },
        )
    }

    pub fn group_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, Declaration::Group(_)))
            .count()
    }

    pub fn item_count(&self) -> usize {
        self.entries.len() - self.group_count()
    }

    /// Describe every key that matched no metadata field, e.g. a misspelled `link`.
    pub fn unknown_fields(&self) -> Vec<String> {
        let mut found = Vec::new();
        let mut report = |owner: String, unknown: &BTreeMap<String, IgnoredAny>| {
            for field in unknown.keys() {
                found.push(format!("{owner}: unknown field `{field}`"));
            }
        };

        for entry in &self.entries {
            match entry {
                Declaration::Group(group) => report(format!("group {}", group.path), &group.unknown),
                Declaration::Item(item) => report(
                    format!("item {}", item_key(&item.group, &item.key)),
                    &item.unknown,
                ),
            }
        }
        for locale in &self.locales {
            for group in &locale.group_overrides {
                report(format!("locale {} group {}", locale.name, group.path), &group.unknown);
            }
            for item in &locale.item_overrides {
                report(
                    format!("locale {} item {}", locale.name, item_key(&item.group, &item.key)),
                    &item.unknown,
                );
            }
        }

        found
    }

    /// Compile every locale, in declaration order.
    pub fn build_locales(&self) -> Result<Vec<LocaleSidebar>> {
        let mut seen = HashSet::new();
        for locale in &self.locales {
            if !seen.insert(locale.name.as_str()) {
                return Err(SidebarError::DuplicateLocale(locale.name.clone()));
            }
        }

        let base = self.base_builder();

        if self.locales.is_empty() {
            return Ok(vec![LocaleSidebar {
                name: DEFAULT_LOCALE.to_string(),
                items: base.to_sidebar_items(None)?,
            }]);
        }

        self.locales
            .par_iter()
            .map(|locale| locale.compile(&base))
            .collect()
    }
}

impl LocaleDecl {
    /// Branch from `base` and apply this locale's overrides.
    pub fn apply(&self, base: &SidebarBuilder) -> Result<SidebarBuilder> {
        let mut builder = base.clone();
        for group in &self.group_overrides {
            builder = builder.override_group(&group.path, group.metadata.clone())?;
        }
        for item in &self.item_overrides {
            builder = builder.override_item(&item.group, &item.key, item.metadata.clone())?;
        }
        Ok(builder)
    }

    /// Apply overrides and compile with this locale's prefix.
    pub fn compile(&self, base: &SidebarBuilder) -> Result<LocaleSidebar> {
        let items = self.apply(base)?.to_sidebar_items(self.prefix.as_deref())?;

        tracing::debug!("Compiled locale {} ({} top-level nodes)", self.name, items.len());

        Ok(LocaleSidebar {
            name: self.name.clone(),
            items,
        })
    }
}
