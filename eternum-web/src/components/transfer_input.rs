use crate::i18n;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub value: AttrValue,
    pub on_input: Callback<String>,
}

/// Shared transfer JSON editor used by both modes.
#[function_component(TransferInput)]
pub fn transfer_input(p: &Props) -> Html {
    let oninput = {
        let cb = p.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                cb.emit(area.value());
            }
        })
    };
    html! {
        <div class="field">
            <label for="json-input"><strong>{ i18n::t("transfers.label") }</strong></label>
            <p id="json-input-help" class="muted">{ i18n::t("transfers.help") }</p>
            <textarea
                id="json-input"
                rows={16}
                placeholder={i18n::t("transfers.placeholder")}
                aria-describedby="json-input-help"
                value={p.value.clone()}
                {oninput}
            />
        </div>
    }
}
