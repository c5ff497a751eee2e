use std::convert::Infallible;

use docnav_types::{SidebarGroup, SidebarItem};

use crate::NavConfig;
use crate::sections;
use crate::utils::{dedup_items_by_link, expand_tilde};

/// The navigation registry holding every sidebar group known to the site.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default, PartialEq, Eq)]
pub struct NavRegistry {
    /// Ordered sidebar groups; the order here is display order
    pub groups: Vec<SidebarGroup>,
    /// Config used to identify site-local sidebar files to merge
    pub config: NavConfig,
}

impl NavRegistry {
    /// Creates a registry containing only the built-in sections.
    ///
    /// This is the pure data provider: no inputs, no I/O, and repeated
    /// calls yield deep-equal values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docnav_registry::NavRegistry;
    ///
    /// let registry = NavRegistry::builtin();
    /// println!("Loaded {} sidebar groups", registry.groups.len());
    /// ```
    pub fn builtin() -> Self {
        NavRegistry {
            groups: sections::builtin_sidebar(),
            ..Default::default()
        }
    }

    /// Creates a registry from the built-in sections plus any site-local
    /// sidebar files listed in the user config.
    ///
    /// Each extra file is a JSON array of sidebar groups appended after the
    /// built-in ones. Files that cannot be read or parsed are skipped, so a
    /// stale config never prevents the built-in sidebar from loading.
    /// Entries sharing a link with an earlier entry are dropped.
    pub fn from_config() -> Result<Self, Infallible> {
        let config = NavConfig::load()?;
        let mut groups = sections::builtin_sidebar();

        if let Some(extras) = config.extras.as_ref() {
            for path in extras {
                let Ok(content) = std::fs::read_to_string(expand_tilde(path)) else {
                    continue;
                };
                let Ok(mut extra) = serde_json::from_str::<Vec<SidebarGroup>>(&content) else {
                    continue;
                };
                groups.append(&mut extra);
            }
        }
        dedup_items_by_link(&mut groups);

        Ok(NavRegistry { groups, config })
    }

    /// Replaces the registry's groups, deduplicating links in display order.
    pub fn with_groups(mut self, mut groups: Vec<SidebarGroup>) -> Self {
        dedup_items_by_link(&mut groups);
        self.groups = groups;
        self
    }

    /// Returns the group with the given title, if present.
    pub fn group(&self, title: &str) -> Option<&SidebarGroup> {
        self.groups.iter().find(|group| group.text == title)
    }

    /// Iterates over every entry of every group in display order.
    pub fn items(&self) -> impl Iterator<Item = &SidebarItem> {
        self.groups.iter().flat_map(|group| group.items.iter())
    }

    /// Number of entries across all groups.
    pub fn len(&self) -> usize {
        self.items().count()
    }

    /// True when no group contributes any entry.
    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }
}
