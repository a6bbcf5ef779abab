//! Browser tests for the bottom navigation bar.
//!
//! Run with: wasm-pack test --headless --firefox app

#![cfg(target_arch = "wasm32")]

mod common;

use leptos::prelude::*;
use wasm_bindgen_test::*;

use yanyu_app::layout::{BottomNav, NAV_ARIA_LABEL};
use yanyu_app::navigation::{provide_navigator, RecordingNavigator};

use common::{click, container, press, query, query_all, settle};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_nav(path: RwSignal<String>) -> (web_sys::HtmlElement, RecordingNavigator) {
    let root = container();
    let navigator = RecordingNavigator::new();
    let recorder = navigator.clone();
    leptos::mount::mount_to(root.clone(), move || {
        provide_navigator(recorder);
        view! { <BottomNav current_path=path /> }
    })
    .forget();
    (root, navigator)
}

fn buttons(root: &web_sys::HtmlElement) -> Vec<web_sys::Element> {
    query_all(root, "nav button")
}

fn active_labels(root: &web_sys::HtmlElement) -> Vec<String> {
    buttons(root)
        .into_iter()
        .filter(|b| b.get_attribute("aria-current").as_deref() == Some("page"))
        .filter_map(|b| b.get_attribute("aria-label"))
        .collect()
}

#[wasm_bindgen_test]
fn test_renders_landmark_and_all_items() {
    let (root, _) = mount_nav(RwSignal::new("/".to_string()));

    let nav = query(&root, "nav");
    assert_eq!(nav.get_attribute("role").as_deref(), Some("navigation"));
    assert_eq!(nav.get_attribute("aria-label").as_deref(), Some(NAV_ARIA_LABEL));
    assert!(nav.class_list().contains("md:hidden"));

    let labels: Vec<_> = buttons(&root)
        .iter()
        .filter_map(|b| b.text_content())
        .collect();
    assert_eq!(labels.len(), 5);
    for (label, icon) in [
        ("首页", "home-icon"),
        ("课程", "book-icon"),
        ("考试", "award-icon"),
        ("职业路径", "chart-icon"),
        ("我的", "user-icon"),
    ] {
        assert!(labels.iter().any(|text| text.contains(label)), "missing {label}");
        query(&root, &format!("[data-testid='{icon}']"));
    }
}

#[wasm_bindgen_test]
fn test_root_marks_only_home_active() {
    let (root, _) = mount_nav(RwSignal::new("/".to_string()));

    assert_eq!(active_labels(&root), vec!["首页 - 当前页面"]);

    let courses = &buttons(&root)[1];
    assert_eq!(courses.get_attribute("aria-current"), None);
    assert_eq!(courses.get_attribute("aria-label").as_deref(), Some("浏览和学习AI课程"));
}

#[wasm_bindgen_test]
fn test_sub_path_activates_section() {
    let (root, _) = mount_nav(RwSignal::new("/courses/ai-basics".to_string()));
    assert_eq!(active_labels(&root), vec!["课程 - 当前页面"]);
}

#[wasm_bindgen_test]
fn test_unknown_path_has_no_active_item() {
    let (root, _) = mount_nav(RwSignal::new("/settings".to_string()));
    assert!(active_labels(&root).is_empty());
}

#[wasm_bindgen_test]
async fn test_active_item_follows_path_changes() {
    let path = RwSignal::new("/".to_string());
    let (root, _) = mount_nav(path);

    path.set("/profile".to_string());
    settle().await;

    assert_eq!(active_labels(&root), vec!["我的 - 当前页面"]);
}

#[wasm_bindgen_test]
fn test_click_dispatches_once() {
    let (root, navigator) = mount_nav(RwSignal::new("/".to_string()));

    click(&buttons(&root)[2]);

    assert_eq!(navigator.routes(), vec!["/exam"]);
}

#[wasm_bindgen_test]
fn test_activation_keys_dispatch_once_each() {
    let (root, navigator) = mount_nav(RwSignal::new("/".to_string()));
    let items = buttons(&root);

    press(&items[1], "Enter");
    press(&items[3], " ");
    press(&items[4], "a");
    press(&items[4], "Tab");

    assert_eq!(navigator.routes(), vec!["/courses", "/career-path"]);
}

#[wasm_bindgen_test]
fn test_repeated_activation_dispatches_every_time() {
    let (root, navigator) = mount_nav(RwSignal::new("/".to_string()));
    let profile = &buttons(&root)[4];

    click(profile);
    click(profile);

    assert_eq!(navigator.routes(), vec!["/profile", "/profile"]);
}
