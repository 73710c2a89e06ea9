//! Sidebar declaration builder for documentation sites.
//!
//! Groups and items are declared flat, keyed by absolute paths, and compiled
//! into an ordered navigation tree. Locale variants branch from a shared base
//! declaration by cloning the builder and overriding selected entries.

pub mod builder;
pub mod error;
pub mod item;
pub mod key;
pub mod manifest;
pub mod metadata;

pub use builder::SidebarBuilder;
pub use error::{Result, SidebarError, TargetKind};
pub use item::SidebarItem;
pub use manifest::{Declaration, GroupDecl, ItemDecl, LocaleDecl, LocaleSidebar, SidebarManifest};
pub use metadata::{SidebarMetadata, SidebarOptions};
