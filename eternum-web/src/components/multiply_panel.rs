use crate::i18n;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub value: AttrValue,
    pub on_input: Callback<String>,
    pub on_execute: Callback<()>,
}

#[function_component(MultiplyPanel)]
pub fn multiply_panel(p: &Props) -> Html {
    let oninput = {
        let cb = p.on_input.clone();
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
    html! {
        <div class="panel" role="tabpanel">
            <div class="field">
                <label for="multiplier"><strong>{ i18n::t("multiply.label") }</strong></label>
                <input
                    id="multiplier"
                    type="number"
                    class="no-spinner"
                    placeholder={i18n::t("multiply.placeholder")}
                    value={p.value.clone()}
                    {oninput}
                />
            </div>
            <button id="multiply-btn" class="btn btn-primary" {onclick}>
                { i18n::t("multiply.action") }
            </button>
        </div>
    }
}
