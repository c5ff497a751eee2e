use std::path::PathBuf;

use anyhow::{Result, anyhow};
use dirs_next::home_dir;
use docnav_types::{SidebarGroup, SidebarItem};
use indexmap::IndexSet;

/// Finds a sidebar entry by its site-relative link.
///
/// Groups are searched in display order, so when the same link appears in
/// several groups the first occurrence wins.
///
/// # Arguments
///
/// * `groups` - The sidebar groups to search
/// * `link` - The site-relative path (e.g., "/harmonyos/路由控制")
///
/// # Returns
///
/// - `Ok(SidebarItem)` - The matching entry
/// - `Err` - If no entry carries the given link
pub fn find_by_link(groups: &[SidebarGroup], link: &str) -> Result<SidebarItem> {
    groups
        .iter()
        .flat_map(|group| group.items.iter())
        .find(|item| item.link == link)
        .cloned()
        .ok_or(anyhow!("no sidebar entry for link {}", link))
}

/// Removes entries whose link already appeared earlier in display order.
///
/// Order is preserved; only later duplicates are dropped.
pub fn dedup_items_by_link(groups: &mut [SidebarGroup]) {
    let mut seen: IndexSet<String> = IndexSet::new();
    for group in groups.iter_mut() {
        group.items.retain(|item| seen.insert(item.link.clone()));
    }
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let p = path.trim();
    if p == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = p.strip_prefix("~/") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_groups() -> Vec<SidebarGroup> {
        vec![
            SidebarGroup::new(
                "鸿蒙开发",
                vec![
                    SidebarItem::new("动画", "/harmonyos/动画"),
                    SidebarItem::new("路由控制", "/harmonyos/路由控制"),
                ],
            ),
            SidebarGroup::new(
                "进阶",
                vec![
                    SidebarItem::new("动画进阶", "/harmonyos/动画"),
                    SidebarItem::new("编译构建", "/harmonyos/编译构建"),
                ],
            ),
        ]
    }

    #[test]
    fn find_by_link_returns_first_match() {
        let groups = two_groups();
        let item = find_by_link(&groups, "/harmonyos/动画").expect("entry present");
        assert_eq!(item.text, "动画");
    }

    #[test]
    fn find_by_link_errors_on_unknown_link() {
        let groups = two_groups();
        assert!(find_by_link(&groups, "/harmonyos/不存在").is_err());
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let mut groups = two_groups();
        dedup_items_by_link(&mut groups);
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].items.len(), 1);
        assert_eq!(groups[1].items[0].link, "/harmonyos/编译构建");
    }
}
