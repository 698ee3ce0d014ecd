use crate::i18n;
use eternum_core::{CUSTOM_SELECTOR_VALUE, CarrierMode, Realm, RealmSelection};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Donkey-producing realms offered in the selector.
    pub realms: Vec<Realm>,
    pub selection: RealmSelection,
    pub realm_id: AttrValue,
    pub carrier_mode: CarrierMode,
    pub on_select: Callback<RealmSelection>,
    pub on_realm_id: Callback<String>,
    pub on_carrier_mode: Callback<CarrierMode>,
    pub on_execute: Callback<()>,
}

fn select_value(e: &Event) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        .map(|sel| sel.value())
}

#[function_component(DonkeyPanel)]
pub fn donkey_panel(p: &Props) -> Html {
    let on_realm_change = {
        let cb = p.on_select.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(&e) {
                cb.emit(RealmSelection::from_selector_value(&value));
            }
        })
    };
    let on_mode_change = {
        let cb = p.on_carrier_mode.clone();
        Callback::from(move |e: Event| {
            if let Some(mode) = select_value(&e).as_deref().and_then(CarrierMode::from_key) {
                cb.emit(mode);
            }
        })
    };
    let on_id_input = {
        let cb = p.on_realm_id.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let onclick = {
        let cb = p.on_execute.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let custom = p.selection == RealmSelection::Custom;
    let nothing_selected = p.selection == RealmSelection::None;

    html! {
        <div class="panel" role="tabpanel">
            <div class="field">
                <label for="realm-select"><strong>{ i18n::t("donkeys.select_label") }</strong></label>
                <select id="realm-select" onchange={on_realm_change}>
                    if nothing_selected {
                        <option value="" selected=true disabled=true>
                            { i18n::t("donkeys.select_placeholder") }
                        </option>
                    }
                    <option value={CUSTOM_SELECTOR_VALUE} selected={custom}>
                        { i18n::t("donkeys.custom") }
                    </option>
                    { for p.realms.iter().map(|realm| {
                        let selected = p.selection == RealmSelection::Realm(realm.id);
                        html! {
                            <option key={realm.id.to_string()} value={realm.id.to_string()} {selected}>
                                { realm.name.clone() }
                            </option>
                        }
                    }) }
                </select>
            </div>
            <div class="field">
                <label for="realm-id"><strong>{ i18n::t("donkeys.realm_id") }</strong></label>
                if custom {
                    <input
                        id="realm-id"
                        type="number"
                        placeholder={i18n::t("donkeys.realm_id_placeholder")}
                        value={p.realm_id.clone()}
                        oninput={on_id_input}
                    />
                } else {
                    <input id="realm-id" type="number" value={p.realm_id.clone()} disabled=true />
                }
            </div>
            <div class="field">
                <label for="carrier-mode"><strong>{ i18n::t("donkeys.grouping") }</strong></label>
                <select id="carrier-mode" onchange={on_mode_change}>
                    { for [CarrierMode::AggregateByOrigin, CarrierMode::PerTransfer].iter().map(|&mode| html! {
                        <option value={mode.key()} selected={mode == p.carrier_mode}>
                            { i18n::t(&format!("donkeys.{}", mode.key())) }
                        </option>
                    }) }
                </select>
            </div>
            <button id="send-donkeys-btn" class="btn btn-primary" {onclick}>
                { i18n::t("donkeys.action") }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(realms: Vec<Realm>, selection: RealmSelection, realm_id: &str) -> Props {
        Props {
            realms,
            selection,
            realm_id: AttrValue::from(realm_id.to_string()),
            carrier_mode: CarrierMode::default(),
            on_select: Callback::noop(),
            on_realm_id: Callback::noop(),
            on_carrier_mode: Callback::noop(),
            on_execute: Callback::noop(),
        }
    }

    #[test]
    fn without_donkey_realms_only_custom_is_offered() {
        let html = block_on(
            LocalServerRenderer::<DonkeyPanel>::with_props(props(
                Vec::new(),
                RealmSelection::None,
                "",
            ))
            .render(),
        );
        assert_eq!(html.matches("<option").count(), 2 + 2);
        assert!(html.contains("Select a realm"));
        assert!(html.contains(r#"value="custom""#));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn named_realm_locks_id_field() {
        let realms = vec![Realm {
            id: 4604,
            name: "Ememurd".to_string(),
            output: vec!["Donkey".to_string()],
        }];
        let html = block_on(
            LocalServerRenderer::<DonkeyPanel>::with_props(props(
                realms,
                RealmSelection::Realm(4604),
                "4604",
            ))
            .render(),
        );
        assert!(html.contains("Ememurd"));
        assert!(!html.contains("Select a realm"));
        assert!(html.contains(r#"value="4604""#));
        assert!(!html.contains("Enter Realm ID"));
    }

    #[test]
    fn custom_selection_unlocks_id_field() {
        let html = block_on(
            LocalServerRenderer::<DonkeyPanel>::with_props(props(
                Vec::new(),
                RealmSelection::Custom,
                "77",
            ))
            .render(),
        );
        assert!(html.contains("Enter Realm ID"));
        assert!(!html.contains("Select a realm"));
    }
}
