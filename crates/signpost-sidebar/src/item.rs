//! Compiled sidebar nodes.

use serde::{Deserialize, Serialize};

/// A node of the compiled sidebar tree, either a group or an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItem {
    /// Absolute path of the node, e.g. `/type-programming/loop/mapped-types`
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Fully resolved link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_footer_text: Option<String>,

    /// Declaration order, removed unless the builder retains it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SidebarItem>>,
}

impl SidebarItem {
    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .items
            .iter()
            .flatten()
            .map(SidebarItem::node_count)
            .sum::<usize>()
    }

    /// Find a node by key anywhere in this subtree.
    pub fn find(&self, key: &str) -> Option<&SidebarItem> {
        if self.key == key {
            return Some(self);
        }
        self.items.iter().flatten().find_map(|child| child.find(key))
    }
}

/// Sort every level of the tree by order index.
pub(crate) fn sort_by_order(items: &mut [SidebarItem]) {
    items.sort_by_key(|item| item.order.unwrap_or(0));
    for item in items.iter_mut() {
        if let Some(children) = item.items.as_mut() {
            sort_by_order(children);
        }
    }
}

/// Remove the order field from every node.
pub(crate) fn strip_order(items: &mut [SidebarItem]) {
    for item in items.iter_mut() {
        item.order = None;
        if let Some(children) = item.items.as_mut() {
            strip_order(children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(key: &str, order: u64, items: Option<Vec<SidebarItem>>) -> SidebarItem {
        SidebarItem {
            key: key.to_string(),
            order: Some(order),
            items,
            ..Default::default()
        }
    }

    #[test]
    fn sorts_nested_levels() {
        let mut tree = vec![
            node("/loop", 1, Some(vec![node("/loop/b", 5, None), node("/loop/a", 2, None)])),
            node("/", 0, None),
        ];

        sort_by_order(&mut tree);

        let keys: Vec<&str> = tree.iter().map(|n| n.key.as_str()).collect();
        assert_eq!(keys, vec!["/", "/loop"]);
        let children: Vec<&str> = tree[1]
            .items
            .iter()
            .flatten()
            .map(|n| n.key.as_str())
            .collect();
        assert_eq!(children, vec!["/loop/a", "/loop/b"]);
    }

    #[test]
    fn strips_order_recursively() {
        let mut tree = vec![node("/", 0, Some(vec![node("/intro", 1, None)]))];

        strip_order(&mut tree);

        assert_eq!(tree[0].order, None);
        assert_eq!(tree[0].items.as_ref().unwrap()[0].order, None);
    }

    #[test]
    fn serializes_camel_case_and_omits_absent_fields() {
        let item = SidebarItem {
            key: "/data-structure/intro".to_string(),
            text: Some("Intro".to_string()),
            doc_footer_text: Some("Intro to Data Structure".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "key": "/data-structure/intro",
                "text": "Intro",
                "docFooterText": "Intro to Data Structure",
            })
        );
    }

    #[test]
    fn counts_and_finds_nodes() {
        let tree = node(
            "/loop",
            0,
            Some(vec![node("/loop/mapped-types", 1, Some(vec![node("/loop/mapped-types/intro", 2, None)]))]),
        );

        assert_eq!(tree.node_count(), 3);
        assert!(tree.find("/loop/mapped-types/intro").is_some());
        assert!(tree.find("/missing").is_none());
    }
}
