//! Fluent sidebar builder.
//!
//! Declarations are recorded flat and stamped with an increasing order index.
//! [`SidebarBuilder::to_sidebar_items`] assembles the group hierarchy from the
//! path keys, attaches items to their owning groups and sorts every level by
//! declaration order.

use std::collections::btree_map::Entry as MapEntry;
use std::collections::{BTreeMap, HashMap};

use crate::error::{Result, SidebarError, TargetKind};
use crate::item::{sort_by_order, strip_order, SidebarItem};
use crate::key::{is_valid_group_key, item_key, owning_group, parent_group, resolve_link};
use crate::metadata::{SidebarMetadata, SidebarOptions};

/// A declared group or item.
#[derive(Debug, Clone)]
struct Declared {
    metadata: SidebarMetadata,
    order: u64,
    /// Set once an item has been overridden (locale variants)
    overridden: bool,
}

impl Declared {
    fn new(metadata: SidebarMetadata, order: u64) -> Self {
        Self {
            metadata,
            order,
            overridden: false,
        }
    }
}

/// Accumulates group and item declarations and compiles them into a sidebar tree.
///
/// Cloning a builder copies every declaration and continues the order counter,
/// so a locale variant can branch from a shared base and override entries
/// without touching the base.
#[derive(Debug, Clone)]
pub struct SidebarBuilder {
    /// Groups in declaration order; duplicates are kept and rejected on compile
    groups: Vec<(String, Declared)>,
    /// Items by absolute key
    items: BTreeMap<String, Declared>,
    options: SidebarOptions,
    /// `None` once the counter has handed out `u64::MAX`
    next_order: Option<u64>,
    /// A declaration arrived after the counter ran out
    overflowed: bool,
}

impl Default for SidebarBuilder {
    fn default() -> Self {
        Self::with_options(SidebarOptions::default())
    }
}

impl SidebarBuilder {
    /// Create an empty builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given options.
    pub fn with_options(options: SidebarOptions) -> Self {
        Self {
            groups: Vec::new(),
            items: BTreeMap::new(),
            next_order: Some(options.initial_order),
            options,
            overflowed: false,
        }
    }

    pub fn options(&self) -> &SidebarOptions {
        &self.options
    }

    /// Order index the next declaration will receive, `None` once exhausted.
    pub fn next_order(&self) -> Option<u64> {
        self.next_order
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn contains_group(&self, path: &str) -> bool {
        self.groups.iter().any(|(key, _)| key == path)
    }

    pub fn contains_item(&self, group: &str, key: &str) -> bool {
        self.items.contains_key(&item_key(group, key))
    }

    fn stamp(&mut self) -> u64 {
        match self.next_order {
            Some(order) => {
                self.next_order = order.checked_add(1);
                order
            }
            None => {
                self.overflowed = true;
                u64::MAX
            }
        }
    }

    fn check_order(&self) -> Result<()> {
        if self.overflowed {
            return Err(SidebarError::OrderOverflow);
        }
        Ok(())
    }

    /// Declare a group at an absolute path such as `/type-programming/loop`.
    ///
    /// The parent group must be declared first. Key problems and order
    /// overflow surface when the sidebar is compiled.
    pub fn add_group(mut self, path: impl Into<String>, mut metadata: SidebarMetadata) -> Self {
        if metadata.collapsed.is_none() {
            metadata.collapsed = self.options.collapsed;
        }
        let order = self.stamp();
        self.groups.push((path.into(), Declared::new(metadata, order)));
        self
    }

    /// Declare an item under `group`. Re-declaring a key merges the metadata
    /// and moves the item to the end of the order.
    pub fn add(mut self, group: &str, key: &str, metadata: SidebarMetadata) -> Self {
        let order = self.stamp();
        match self.items.entry(item_key(group, key)) {
            MapEntry::Occupied(mut occupied) => {
                let declared = occupied.get_mut();
                declared.metadata.merge(metadata);
                declared.order = order;
            }
            MapEntry::Vacant(vacant) => {
                vacant.insert(Declared::new(metadata, order));
            }
        }
        self
    }

    /// Merge partial metadata over an existing item, keeping its order.
    pub fn override_item(mut self, group: &str, key: &str, metadata: SidebarMetadata) -> Result<Self> {
        let key = item_key(group, key);
        let Some(declared) = self.items.get_mut(&key) else {
            return Err(SidebarError::OverrideTargetMissing {
                kind: TargetKind::Item,
                key,
            });
        };
        declared.overridden = true;
        declared.metadata.merge(metadata);
        Ok(self)
    }

    /// Merge partial metadata over an existing group, keeping its order.
    pub fn override_group(mut self, path: &str, metadata: SidebarMetadata) -> Result<Self> {
        let Some((_, declared)) = self.groups.iter_mut().find(|(key, _)| key == path) else {
            return Err(SidebarError::OverrideTargetMissing {
                kind: TargetKind::Group,
                key: path.to_string(),
            });
        };
        declared.metadata.merge(metadata);
        Ok(self)
    }

    /// Compile only the group hierarchy, without items.
    pub fn group_tree(&self) -> Result<Vec<SidebarItem>> {
        self.check_order()?;
        let mut items = GroupTree::assemble(&self.groups)?.into_items();
        self.finish(&mut items);
        Ok(items)
    }

    /// Compile the full sidebar.
    ///
    /// `prefix_link` is prepended to every item link unless the item carries
    /// its own prefix.
    pub fn to_sidebar_items(&self, prefix_link: Option<&str>) -> Result<Vec<SidebarItem>> {
        self.check_order()?;
        let mut tree = GroupTree::assemble(&self.groups)?;

        let mut dropped = 0;
        for (key, declared) in &self.items {
            let group = owning_group(key);
            let Some(slot) = tree.slot(&group) else {
                tracing::warn!("Dropping sidebar item {}: group {} is not declared", key, group);
                dropped += 1;
                continue;
            };
            let item = self.compile_item(key, declared, &group, prefix_link);
            tree.attach(slot, item);
        }

        let mut items = tree.into_items();
        self.finish(&mut items);

        tracing::debug!(
            "Compiled sidebar with {} groups and {} items ({} dropped)",
            self.groups.len(),
            self.items.len() - dropped,
            dropped
        );

        Ok(items)
    }

    fn compile_item(
        &self,
        key: &str,
        declared: &Declared,
        group: &str,
        prefix_link: Option<&str>,
    ) -> SidebarItem {
        let metadata = &declared.metadata;
        let mut text = metadata.text.clone();
        let mut link = None;

        if let Some(raw) = metadata.link.as_deref() {
            let prefix = metadata.prefix.as_deref().or(prefix_link).unwrap_or("");
            // Overridden entries without a prefix still point at default-locale content
            if prefix.is_empty() && declared.overridden {
                if let Some(extra) = self.options.extra_message.as_deref() {
                    text = Some(match text {
                        Some(text) => format!("{text} {extra}"),
                        None => extra.to_string(),
                    });
                }
            }
            link = Some(resolve_link(prefix, group, raw));
        }

        SidebarItem {
            key: key.to_string(),
            text,
            link,
            collapsed: metadata.collapsed,
            doc_footer_text: metadata.doc_footer_text.clone(),
            order: Some(declared.order),
            items: None,
        }
    }

    fn finish(&self, items: &mut [SidebarItem]) {
        sort_by_order(items);
        if !self.options.retain_order {
            strip_order(items);
        }
    }
}

/// Group hierarchy indexed by absolute path.
struct GroupTree {
    index: HashMap<String, usize>,
    nodes: Vec<SidebarItem>,
    child_groups: Vec<Vec<usize>>,
    leaves: Vec<Vec<SidebarItem>>,
    roots: Vec<usize>,
}

impl GroupTree {
    fn assemble(groups: &[(String, Declared)]) -> Result<Self> {
        let mut tree = Self {
            index: HashMap::with_capacity(groups.len()),
            nodes: Vec::with_capacity(groups.len()),
            child_groups: Vec::with_capacity(groups.len()),
            leaves: Vec::with_capacity(groups.len()),
            roots: Vec::new(),
        };

        for (path, declared) in groups {
            if !is_valid_group_key(path) {
                return Err(SidebarError::InvalidKey(path.clone()));
            }

            let parent = match parent_group(path) {
                Some(parent) => Some(
                    *tree
                        .index
                        .get(parent)
                        .ok_or_else(|| SidebarError::ParentNotFound(path.clone()))?,
                ),
                None => None,
            };

            if tree.index.contains_key(path) {
                return Err(SidebarError::DuplicateKey(path.clone()));
            }

            let id = tree.nodes.len();
            tree.nodes.push(SidebarItem {
                key: path.clone(),
                text: declared.metadata.text.clone(),
                link: declared.metadata.link.clone(),
                collapsed: declared.metadata.collapsed,
                doc_footer_text: declared.metadata.doc_footer_text.clone(),
                order: Some(declared.order),
                items: None,
            });
            tree.child_groups.push(Vec::new());
            tree.leaves.push(Vec::new());
            tree.index.insert(path.clone(), id);

            match parent {
                Some(parent) => tree.child_groups[parent].push(id),
                None => tree.roots.push(id),
            }
        }

        Ok(tree)
    }

    fn slot(&self, group: &str) -> Option<usize> {
        self.index.get(group).copied()
    }

    fn attach(&mut self, slot: usize, item: SidebarItem) {
        self.leaves[slot].push(item);
    }

    fn into_items(mut self) -> Vec<SidebarItem> {
        let roots = std::mem::take(&mut self.roots);
        roots.into_iter().map(|id| self.build(id)).collect()
    }

    fn build(&mut self, id: usize) -> SidebarItem {
        let mut node = std::mem::take(&mut self.nodes[id]);
        let mut items: Vec<SidebarItem> = std::mem::take(&mut self.child_groups[id])
            .into_iter()
            .map(|child| self.build(child))
            .collect();
        items.append(&mut self.leaves[id]);
        if !items.is_empty() {
            node.items = Some(items);
        }
        node
    }
}
