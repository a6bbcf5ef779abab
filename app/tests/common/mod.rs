//! DOM helpers shared by the browser tests.

#![allow(dead_code)]

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("tests run in a browser document")
}

/// Fresh `<div>` appended to `<body>` to mount a component into.
pub fn container() -> HtmlElement {
    // Already initialised after the first test
    let _ = leptos::task::Executor::init_wasm_bindgen();

    let document = document();
    let element = document
        .create_element("div")
        .expect("create container")
        .unchecked_into::<HtmlElement>();
    document
        .body()
        .expect("document has a body")
        .append_child(&element)
        .expect("append container");
    element
}

pub fn query(root: &HtmlElement, selector: &str) -> Element {
    root.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

pub fn query_all(root: &HtmlElement, selector: &str) -> Vec<Element> {
    let nodes = root.query_selector_all(selector).expect("valid selector");
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn click(element: &Element) {
    element
        .dyn_ref::<HtmlElement>()
        .expect("clickable element")
        .click();
}

/// Dispatches a bubbling `keydown` for `key`.
pub fn press(element: &Element, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("build keydown event");
    element.dispatch_event(&event).expect("dispatch keydown");
}

pub fn text(root: &HtmlElement) -> String {
    root.text_content().unwrap_or_default()
}

/// Lets pending reactive updates and spawned tasks run.
pub async fn settle() {
    for _ in 0..3 {
        leptos::task::tick().await;
    }
}
