use serde::{Deserialize, Serialize};

/// Represents a single clickable entry in the navigation sidebar.
///
/// The serialized shape (`text` + `link`) is exactly what the hosting
/// site generator expects for a sidebar link, so values of this type can
/// be emitted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    /// The label displayed in the menu (e.g., "组件通信")
    pub text: String,
    /// Site-relative path of the page (e.g., "/harmonyos/组件通信")
    pub link: String,
}

impl SidebarItem {
    /// Creates an entry from a label and a site-relative link.
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Returns the leading path segment of the link as a `/segment/`
    /// prefix, or `None` when the link is not a rooted two-part path.
    ///
    /// For `/harmonyos/路由控制` this is `/harmonyos/`.
    pub fn section_prefix(&self) -> Option<&str> {
        let rest = self.link.strip_prefix('/')?;
        let segment_len = rest.find('/')?;
        Some(&self.link[..segment_len + 2])
    }
}

/// A titled cluster of related navigation links displayed together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// The group title rendered above its entries
    pub text: String,
    /// Ordered entries; the order here is the vertical menu order
    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

impl SidebarGroup {
    /// Creates a group from a title and an ordered list of entries.
    pub fn new(text: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }

    /// The path prefix this group's links are expected to share, derived
    /// from the first entry. `None` for empty groups or non-rooted links.
    pub fn expected_prefix(&self) -> Option<&str> {
        self.items.first().and_then(SidebarItem::section_prefix)
    }
}
