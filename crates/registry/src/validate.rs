//! Invariant checks for sidebar data.
//!
//! The sidebar is static configuration, so the only runtime failure mode is
//! shipping a table that the site generator would render wrong: empty
//! labels, links pointing outside the section, or two entries fighting over
//! one page. These checks run from `docnav check` and from tests.

use docnav_types::SidebarGroup;
use indexmap::IndexSet;
use thiserror::Error;
use tracing::debug;

/// Errors emitted when a sidebar violates its structural invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A group's title is empty or whitespace.
    #[error("sidebar group has an empty title")]
    EmptyGroupTitle,
    /// An entry's label is empty or whitespace.
    #[error("sidebar entry for {link} has an empty label")]
    EmptyItemText {
        /// Link of the offending entry
        link: String,
    },
    /// An entry's link falls outside the group's path prefix.
    #[error("entry \"{text}\" links to {link}, outside the group's {prefix} prefix")]
    MissingLinkPrefix {
        /// Label of the offending entry
        text: String,
        /// Link of the offending entry
        link: String,
        /// Prefix the rest of the group shares
        prefix: String,
    },
    /// The same link appears more than once across the sidebar.
    #[error("duplicate sidebar link: {link}")]
    DuplicateLink {
        /// The repeated link
        link: String,
    },
}

/// Validates a whole sidebar, group by group, then checks link uniqueness
/// across all groups.
pub fn validate_sidebar(groups: &[SidebarGroup]) -> Result<(), ValidationError> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    for group in groups {
        validate_group(group)?;
        for item in &group.items {
            if !seen.insert(item.link.as_str()) {
                return Err(ValidationError::DuplicateLink {
                    link: item.link.clone(),
                });
            }
        }
        debug!("Validated sidebar group: {}", group.text);
    }
    Ok(())
}

/// Validates a single group: non-empty title, non-empty labels, and every
/// link sharing the group's path prefix (derived from the first entry).
pub fn validate_group(group: &SidebarGroup) -> Result<(), ValidationError> {
    if group.text.trim().is_empty() {
        return Err(ValidationError::EmptyGroupTitle);
    }

    let prefix = group.expected_prefix();
    for item in &group.items {
        if item.text.trim().is_empty() {
            return Err(ValidationError::EmptyItemText {
                link: item.link.clone(),
            });
        }
        if let Some(prefix) = prefix
            && !item.link.starts_with(prefix)
        {
            return Err(ValidationError::MissingLinkPrefix {
                text: item.text.clone(),
                link: item.link.clone(),
                prefix: prefix.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::builtin_sidebar;
    use docnav_types::SidebarItem;

    fn group(items: Vec<SidebarItem>) -> SidebarGroup {
        SidebarGroup::new("鸿蒙开发", items)
    }

    #[test]
    fn builtin_sidebar_validates_clean() {
        validate_sidebar(&builtin_sidebar()).expect("built-in sidebar is valid");
    }

    #[test]
    fn rejects_empty_group_title() {
        let bad = SidebarGroup::new("  ", vec![]);
        assert_eq!(validate_sidebar(&[bad]), Err(ValidationError::EmptyGroupTitle));
    }

    #[test]
    fn rejects_empty_item_label() {
        let bad = group(vec![
            SidebarItem::new("动画", "/harmonyos/动画"),
            SidebarItem::new("", "/harmonyos/手势检测"),
        ]);
        assert_eq!(
            validate_sidebar(&[bad]),
            Err(ValidationError::EmptyItemText {
                link: "/harmonyos/手势检测".to_string(),
            })
        );
    }

    #[test]
    fn rejects_link_outside_group_prefix() {
        let bad = group(vec![
            SidebarItem::new("动画", "/harmonyos/动画"),
            SidebarItem::new("迷路", "/web/迷路"),
        ]);
        assert_eq!(
            validate_sidebar(&[bad]),
            Err(ValidationError::MissingLinkPrefix {
                text: "迷路".to_string(),
                link: "/web/迷路".to_string(),
                prefix: "/harmonyos/".to_string(),
            })
        );
    }

    #[test]
    fn rejects_duplicate_link_across_groups() {
        let first = group(vec![SidebarItem::new("动画", "/harmonyos/动画")]);
        let second = SidebarGroup::new(
            "进阶",
            vec![SidebarItem::new("动画进阶", "/harmonyos/动画")],
        );
        assert_eq!(
            validate_sidebar(&[first, second]),
            Err(ValidationError::DuplicateLink {
                link: "/harmonyos/动画".to_string(),
            })
        );
    }
}
