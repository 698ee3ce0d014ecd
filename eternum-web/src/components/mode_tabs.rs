use crate::i18n;
use eternum_core::Mode;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub mode: Mode,
    pub on_select: Callback<Mode>,
}

#[function_component(ModeTabs)]
pub fn mode_tabs(p: &Props) -> Html {
    html! {
        <div class="tabs" role="tablist" aria-label={i18n::t("modes.label")}>
            { for Mode::ALL.iter().map(|&mode| {
                let selected = mode == p.mode;
                let onclick = {
                    let cb = p.on_select.clone();
                    Callback::from(move |_| cb.emit(mode))
                };
                let class = if selected { "tab tab-active" } else { "tab" };
                html! {
                    <button
                        type="button"
                        role="tab"
                        {class}
                        aria-selected={selected.to_string()}
                        {onclick}
                    >
                        { i18n::t(mode.label_key()) }
                    </button>
                }
            }) }
        </div>
    }
}
