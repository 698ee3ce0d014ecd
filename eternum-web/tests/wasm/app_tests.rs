#![cfg(target_arch = "wasm32")]

use eternum_core::{REALMS_DATA_EXAMPLE, REALMS_DATA_KEY};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::Renderer;

use eternum_web::app::App;
use eternum_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app(saved_realms: Option<&str>) {
    let storage = dom::local_storage().expect("localStorage");
    match saved_realms {
        Some(text) => storage.set_item(REALMS_DATA_KEY, text).expect("seed realms"),
        None => storage.remove_item(REALMS_DATA_KEY).expect("clear realms"),
    }
    Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
}

async fn settle() {
    dom::sleep_ms(20).await.expect("timer");
}

fn element<T: JsCast>(id: &str) -> T {
    dom::document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} exists"))
        .dyn_into()
        .expect("element type")
}

fn click_tab(label: &str) {
    let tabs = dom::document()
        .query_selector_all("button[role='tab']")
        .expect("query tabs");
    for i in 0..tabs.length() {
        let tab: HtmlElement = tabs.get(i).expect("tab").dyn_into().expect("button");
        if tab.text_content().unwrap_or_default() == label {
            tab.click();
            return;
        }
    }
    panic!("tab {label} not found");
}

#[wasm_bindgen_test]
async fn main_landmark_carries_title() {
    render_app(None).await;
    let main: HtmlElement = element("main");
    assert_eq!(main.tag_name(), "MAIN");
    assert!(
        main.text_content()
            .unwrap_or_default()
            .contains("Eternum Resource Manager")
    );
}

#[wasm_bindgen_test]
async fn multiply_fills_result_panel() {
    render_app(None).await;
    let transfers: HtmlTextAreaElement = element("json-input");
    transfers.set_value(r#"{"items":[{"from":1,"to":2,"resource":"Wood","amount":100}]}"#);
    transfers
        .dispatch_event(&Event::new("input").expect("input event"))
        .expect("dispatch input");
    let multiplier: HtmlInputElement = element("multiplier");
    multiplier.set_value("2");
    multiplier
        .dispatch_event(&Event::new("input").expect("input event"))
        .expect("dispatch input");
    settle().await;

    element::<HtmlElement>("multiply-btn").click();
    settle().await;

    let result: HtmlElement = element("result-json");
    let text = result.text_content().unwrap_or_default();
    assert!(text.contains(r#""amount": 200"#), "unexpected result {text}");
}

#[wasm_bindgen_test]
async fn saved_donkey_realm_is_preselected() {
    render_app(Some(REALMS_DATA_EXAMPLE)).await;
    click_tab("Send Donkeys");
    settle().await;

    let select: HtmlSelectElement = element("realm-select");
    assert_eq!(select.value(), "4604");
    let realm_id: HtmlInputElement = element("realm-id");
    assert_eq!(realm_id.value(), "4604");
    assert!(realm_id.disabled());
}

#[wasm_bindgen_test]
async fn committing_realms_persists_raw_text() {
    render_app(None).await;
    let editor: HtmlTextAreaElement = element("realms-data");
    let text = r#"{"realms":[{"id":7,"name":"Stable","output":["Donkey"]}]}"#;
    editor.set_value(text);
    editor
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");
    settle().await;

    let stored = dom::local_storage()
        .expect("localStorage")
        .get_item(REALMS_DATA_KEY)
        .expect("read realms");
    assert_eq!(stored.as_deref(), Some(text));
    let summary: HtmlElement = element("realms-summary");
    assert_eq!(
        summary.text_content().unwrap_or_default(),
        "Realms: 1, donkey producers: 1"
    );
}
