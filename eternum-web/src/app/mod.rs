pub mod handlers;
pub mod state;

use crate::components::donkey_panel::DonkeyPanel;
use crate::components::mode_tabs::ModeTabs;
use crate::components::multiply_panel::MultiplyPanel;
use crate::components::realms_editor::RealmsEditor;
use crate::components::result_panel::ResultPanel;
use crate::components::transfer_input::TransferInput;
use crate::i18n;
use eternum_core::Mode;
use handlers::AppHandlers;
use state::AppState;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    render_app(&app_state)
}

fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let form = &*state.form;

    let mode_panel = match form.mode {
        Mode::Multiply => html! {
            <MultiplyPanel
                value={AttrValue::from(form.multiplier_text.clone())}
                on_input={handlers.multiplier_input.clone()}
                on_execute={handlers.execute.clone()}
            />
        },
        Mode::SendDonkeys => html! {
            <DonkeyPanel
                realms={state.carrier_sources()}
                selection={form.sender.selection()}
                realm_id={AttrValue::from(form.sender.realm_id().to_string())}
                carrier_mode={form.carrier_mode}
                on_select={handlers.sender_select.clone()}
                on_realm_id={handlers.custom_id_input.clone()}
                on_carrier_mode={handlers.carrier_mode_select.clone()}
                on_execute={handlers.execute.clone()}
            />
        },
    };

    html! {
        <main id="main" role="main" class="container">
            <h1>{ i18n::t("app.title") }</h1>
            <RealmsEditor
                directory={(*state.directory).clone()}
                on_commit={handlers.realms_commit.clone()}
            />
            <TransferInput
                value={AttrValue::from(form.transfer_text.clone())}
                on_input={handlers.transfer_input.clone()}
            />
            <ModeTabs mode={form.mode} on_select={handlers.mode_select.clone()} />
            { mode_panel }
            <ResultPanel
                json={state.result_json()}
                copied={*state.copied}
                on_copy={handlers.copy_result.clone()}
            />
        </main>
    }
}
