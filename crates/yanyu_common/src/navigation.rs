//! Bottom-navigation table and active-state resolution.

use crate::routes;

/// Appended to an active item's accessible label.
pub const ACTIVE_LABEL_SUFFIX: &str = " - 当前页面";

/// Glyph shown above a navigation label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Book,
    Award,
    Chart,
    User,
}

impl NavIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Home => "🏠",
            NavIcon::Book => "📖",
            NavIcon::Award => "🏆",
            NavIcon::Chart => "📊",
            NavIcon::User => "👤",
        }
    }

    /// Stable `data-testid` of the icon element.
    pub fn test_id(&self) -> &'static str {
        match self {
            NavIcon::Home => "home-icon",
            NavIcon::Book => "book-icon",
            NavIcon::Award => "award-icon",
            NavIcon::Chart => "chart-icon",
            NavIcon::User => "user-icon",
        }
    }
}

/// One fixed entry of the bottom navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: &'static str,
    pub description: &'static str,
    pub icon: NavIcon,
}

impl NavItem {
    /// Whether this item's route covers `path`.
    ///
    /// Exact equality always matches. Any other route also matches its
    /// sub-paths (`/courses` covers `/courses/ai-basics`), but the root route
    /// only ever matches itself.
    pub fn matches(&self, path: &str) -> bool {
        if path == self.route {
            return true;
        }
        self.route != routes::HOME
            && path
                .strip_prefix(self.route)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// The bottom navigation, in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "首页",
        route: routes::HOME,
        description: "返回首页查看学习概览",
        icon: NavIcon::Home,
    },
    NavItem {
        label: "课程",
        route: routes::COURSES,
        description: "浏览和学习AI课程",
        icon: NavIcon::Book,
    },
    NavItem {
        label: "考试",
        route: routes::EXAM,
        description: "参加专业考试和测试",
        icon: NavIcon::Award,
    },
    NavItem {
        label: "职业路径",
        route: routes::CAREER_PATH,
        description: "查看AI工程师职业发展路径",
        icon: NavIcon::Chart,
    },
    NavItem {
        label: "我的",
        route: routes::PROFILE,
        description: "查看个人资料和设置",
        icon: NavIcon::User,
    },
];

/// Display attributes of one item for a given path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItemState {
    pub item: NavItem,
    pub is_active: bool,
    /// Value of the control's `aria-label`.
    pub aria_label: String,
}

/// Resolves every item against one snapshot of the current path.
///
/// At most one item is active: if several routes cover the path, the first
/// one in list order wins. If none does, nothing is active.
pub fn resolve_nav(current_path: &str, items: &[NavItem]) -> Vec<NavItemState> {
    let active_index = items.iter().position(|item| item.matches(current_path));

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let is_active = active_index == Some(index);
            let aria_label = if is_active {
                format!("{}{}", item.label, ACTIVE_LABEL_SUFFIX)
            } else {
                item.description.to_string()
            };
            NavItemState {
                item: *item,
                is_active,
                aria_label,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(path: &str) -> Vec<&'static str> {
        resolve_nav(path, NAV_ITEMS)
            .into_iter()
            .filter(|state| state.is_active)
            .map(|state| state.item.label)
            .collect()
    }

    #[test]
    fn test_root_only_matches_itself() {
        assert_eq!(active_labels("/"), vec!["首页"]);
        assert_eq!(active_labels("/courses"), vec!["课程"]);
    }

    #[test]
    fn test_sub_path_activates_parent() {
        assert_eq!(active_labels("/courses/ai-basics"), vec!["课程"]);
        assert_eq!(active_labels("/profile/settings/theme"), vec!["我的"]);
    }

    #[test]
    fn test_prefix_without_separator_does_not_match() {
        // "/courses-archive" shares a prefix with "/courses" but is not below it
        assert!(active_labels("/courses-archive").is_empty());
        assert!(active_labels("/examples").is_empty());
    }

    #[test]
    fn test_unknown_path_has_no_active_item() {
        assert!(active_labels("/ai-assistant").is_empty());
        assert!(active_labels("").is_empty());
    }

    #[test]
    fn test_every_known_route_activates_exactly_its_item() {
        for item in NAV_ITEMS {
            assert_eq!(active_labels(item.route), vec![item.label], "route {}", item.route);
        }
    }

    #[test]
    fn test_aria_labels() {
        let states = resolve_nav("/exam", NAV_ITEMS);
        let exam = states.iter().find(|s| s.item.route == "/exam").unwrap();
        assert_eq!(exam.aria_label, "考试 - 当前页面");

        let home = states.iter().find(|s| s.item.route == "/").unwrap();
        assert!(!home.is_active);
        assert_eq!(home.aria_label, "返回首页查看学习概览");
    }

    #[test]
    fn test_overlapping_routes_first_match_wins() {
        let items = [
            NavItem {
                label: "学习",
                route: "/learn",
                description: "学习",
                icon: NavIcon::Book,
            },
            NavItem {
                label: "实验室",
                route: "/learn/lab",
                description: "实验室",
                icon: NavIcon::Chart,
            },
        ];
        let states = resolve_nav("/learn/lab/1", &items);
        let active: Vec<_> = states.iter().filter(|s| s.is_active).map(|s| s.item.label).collect();
        assert_eq!(active, vec!["学习"]);
    }

    #[test]
    fn test_state_order_follows_table() {
        let labels: Vec<_> = resolve_nav("/", NAV_ITEMS).iter().map(|s| s.item.label).collect();
        assert_eq!(labels, vec!["首页", "课程", "考试", "职业路径", "我的"]);
    }

    #[test]
    fn test_icon_test_ids_are_unique() {
        let ids: std::collections::HashSet<_> = NAV_ITEMS.iter().map(|i| i.icon.test_id()).collect();
        assert_eq!(ids.len(), NAV_ITEMS.len());
    }
}
