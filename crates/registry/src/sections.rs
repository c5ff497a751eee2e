//! Built-in sidebar sections.
//!
//! Each section is a fixed table of (label, link) pairs transcribed into a
//! [`SidebarGroup`] once and then handed out by value. The tables are the
//! source of truth for the site's navigation; the order of rows is the
//! vertical menu order.

use docnav_types::{SidebarGroup, SidebarItem};
use once_cell::sync::Lazy;

/// Title of the HarmonyOS group as rendered in the sidebar.
pub const HARMONYOS_TITLE: &str = "鸿蒙开发";

/// Path prefix shared by every page of the HarmonyOS section.
pub const HARMONYOS_PREFIX: &str = "/harmonyos/";

const HARMONYOS_PAGES: &[(&str, &str)] = &[
    ("组件通信", "/harmonyos/组件通信"),
    ("存储数据", "/harmonyos/存储数据"),
    ("动画", "/harmonyos/动画"),
    ("生命周期", "/harmonyos/生命周期"),
    ("封装懒加载list组件", "/harmonyos/封装懒加载list组件"),
    ("路由控制", "/harmonyos/路由控制"),
    ("简易操作沙箱文件", "/harmonyos/简易操作沙箱文件"),
    ("简易视频播放器", "/harmonyos/简易视频播放器"),
    ("WebView", "/harmonyos/WebView"),
    ("拖拽表格", "/harmonyos/拖拽表格"),
    ("手势检测", "/harmonyos/手势检测"),
    ("Canvas绘图", "/harmonyos/Canvas绘图"),
    ("卡片双向通信", "/harmonyos/卡片双向通信"),
    ("编译构建", "/harmonyos/编译构建"),
    ("装饰器@ObservedV2", "/harmonyos/装饰器@ObservedV2"),
];

static BUILTIN: Lazy<Vec<SidebarGroup>> = Lazy::new(|| {
    vec![SidebarGroup::new(
        HARMONYOS_TITLE,
        HARMONYOS_PAGES
            .iter()
            .map(|(text, link)| SidebarItem::new(*text, *link))
            .collect(),
    )]
});

/// Returns the built-in sidebar: one group per documentation section.
///
/// The value is materialized once and cloned per call, so repeated loads
/// observe identical data.
pub fn builtin_sidebar() -> Vec<SidebarGroup> {
    BUILTIN.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_exactly_one_group() {
        let sidebar = builtin_sidebar();
        assert_eq!(sidebar.len(), 1);
        assert_eq!(sidebar[0].text, HARMONYOS_TITLE);
    }

    #[test]
    fn harmonyos_group_has_fifteen_entries_in_order() {
        let sidebar = builtin_sidebar();
        let items = &sidebar[0].items;
        assert_eq!(items.len(), 15);
        assert_eq!(items[0], SidebarItem::new("组件通信", "/harmonyos/组件通信"));
        assert_eq!(
            items[14],
            SidebarItem::new("装饰器@ObservedV2", "/harmonyos/装饰器@ObservedV2")
        );
    }

    #[test]
    fn repeated_loads_are_deep_equal() {
        assert_eq!(builtin_sidebar(), builtin_sidebar());
    }

    #[test]
    fn group_prefix_matches_section_constant() {
        let sidebar = builtin_sidebar();
        assert_eq!(sidebar[0].expected_prefix(), Some(HARMONYOS_PREFIX));
    }
}
