use crate::i18n;
use eternum_core::{REALMS_DATA_EXAMPLE, RealmDirectory};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub directory: RealmDirectory,
    /// Emitted with the full editor text when the user commits an edit.
    pub on_commit: Callback<String>,
}

/// Text area holding the realm directory document. Edits are kept as a draft
/// until the field's change event, then handed up for validation and saving.
#[function_component(RealmsEditor)]
pub fn realms_editor(p: &Props) -> Html {
    let draft = use_state(|| AttrValue::from(p.directory.to_pretty_json()));

    {
        let draft = draft.clone();
        use_effect_with(p.directory.clone(), move |directory| {
            draft.set(AttrValue::from(directory.to_pretty_json()));
            || {}
        });
    }

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                draft.set(area.value().into());
            }
        })
    };
    let on_change = {
        let cb = p.on_commit.clone();
        Callback::from(move |e: Event| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                cb.emit(area.value());
            }
        })
    };
    let on_focus = Callback::from(|e: FocusEvent| {
        if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
            area.select();
        }
    });

    let realm_count = p.directory.realms.len().to_string();
    let donkey_count = p.directory.carrier_sources().count().to_string();
    let mut vars = BTreeMap::new();
    vars.insert("count", realm_count.as_str());
    vars.insert("donkeys", donkey_count.as_str());

    html! {
        <section class="panel realms-editor">
            <label for="realms-data"><strong>{ i18n::t("realms.label") }</strong></label>
            <details class="help">
                <summary aria-label={i18n::t("realms.help")}>{"?"}</summary>
                <p>{ i18n::t("realms.help") }</p>
                <pre class="example">{ REALMS_DATA_EXAMPLE }</pre>
            </details>
            <textarea
                id="realms-data"
                rows={8}
                placeholder={i18n::t("realms.placeholder")}
                value={(*draft).clone()}
                oninput={on_input}
                onchange={on_change}
                onfocus={on_focus}
            />
            <p id="realms-summary" class="muted">{ i18n::tr("realms.count", Some(&vars)) }</p>
        </section>
    }
}
