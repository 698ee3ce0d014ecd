use crate::i18n;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Pretty-printed result; nothing renders until the first success.
    pub json: Option<AttrValue>,
    pub copied: bool,
    pub on_copy: Callback<()>,
}

#[function_component(ResultPanel)]
pub fn result_panel(p: &Props) -> Html {
    let Some(json) = p.json.clone() else {
        return Html::default();
    };
    let onclick = {
        let cb = p.on_copy.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let label = if p.copied {
        i18n::t("result.copied")
    } else {
        i18n::t("result.copy")
    };
    html! {
        <section class="panel result" aria-live="polite">
            <div class="result-header">
                <h2>{ i18n::t("result.title") }</h2>
                <button id="copy-result-btn" class="btn btn-secondary" disabled={p.copied} {onclick}>
                    { label }
                </button>
            </div>
            <pre id="result-json">{ json }</pre>
        </section>
    }
}
