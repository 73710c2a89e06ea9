//! Display metadata attached to groups and items, and builder-wide options.

use serde::Deserialize;

/// Display metadata for a group or an item.
///
/// Every field is optional so the same record serves full declarations and
/// partial overrides. Merging is shallow: fields present on the newer record win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SidebarMetadata {
    /// Display label
    #[serde(default)]
    pub text: Option<String>,

    /// Link relative to the owning group path
    #[serde(default)]
    pub link: Option<String>,

    /// Whether the group renders collapsed
    #[serde(default)]
    pub collapsed: Option<bool>,

    /// Locale or base prefix for this entry's link, e.g. `/th`
    #[serde(default)]
    pub prefix: Option<String>,

    /// Passed through to the renderer untouched
    #[serde(default, alias = "docFooterText")]
    pub doc_footer_text: Option<String>,
}

impl SidebarMetadata {
    /// Create metadata with a display label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn doc_footer_text(mut self, text: impl Into<String>) -> Self {
        self.doc_footer_text = Some(text.into());
        self
    }

    /// Shallow-merge `other` over `self`.
    pub fn merge(&mut self, other: SidebarMetadata) {
        if other.text.is_some() {
            self.text = other.text;
        }
        if other.link.is_some() {
            self.link = other.link;
        }
        if other.collapsed.is_some() {
            self.collapsed = other.collapsed;
        }
        if other.prefix.is_some() {
            self.prefix = other.prefix;
        }
        if other.doc_footer_text.is_some() {
            self.doc_footer_text = other.doc_footer_text;
        }
    }
}

/// Options shared by every declaration on a builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SidebarOptions {
    /// Collapsed state for groups that do not declare one
    pub collapsed: Option<bool>,

    /// First order index handed out
    pub initial_order: u64,

    /// Keep the `order` field on compiled nodes
    pub retain_order: bool,

    /// Appended to the text of overridden items that end up without a prefix
    pub extra_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_fields_missing_from_newer_record() {
        let mut meta = SidebarMetadata::new("Introduction")
            .link("/intro")
            .doc_footer_text("Intro");

        meta.merge(SidebarMetadata::new("บทนำ").prefix("/th"));

        assert_eq!(meta.text.as_deref(), Some("บทนำ"));
        assert_eq!(meta.link.as_deref(), Some("/intro"));
        assert_eq!(meta.prefix.as_deref(), Some("/th"));
        assert_eq!(meta.doc_footer_text.as_deref(), Some("Intro"));
    }

    #[test]
    fn options_default_strips_order() {
        let options = SidebarOptions::default();

        assert!(!options.retain_order);
        assert_eq!(options.initial_order, 0);
        assert!(options.collapsed.is_none());
    }
}
