use crate::app::state::AppState;
use crate::dom;
use crate::i18n;
use eternum_core::{CarrierMode, Mode, RealmSelection, ResourceForm, StoreError, TransferList};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub realms_commit: Callback<String>,
    pub transfer_input: Callback<String>,
    pub multiplier_input: Callback<String>,
    pub mode_select: Callback<Mode>,
    pub sender_select: Callback<RealmSelection>,
    pub custom_id_input: Callback<String>,
    pub carrier_mode_select: Callback<CarrierMode>,
    pub execute: Callback<()>,
    pub copy_result: Callback<()>,
}

impl AppHandlers {
    pub fn new(state: &AppState) -> Self {
        Self {
            realms_commit: build_realms_commit(state),
            transfer_input: build_form_edit(state, |form, text: String| {
                form.transfer_text = text;
            }),
            multiplier_input: build_form_edit(state, |form, text: String| {
                form.multiplier_text = text;
            }),
            mode_select: build_form_edit(state, |form, mode: Mode| form.mode = mode),
            sender_select: build_form_edit(state, ResourceForm::select_sender),
            custom_id_input: build_form_edit(state, |form, text: String| {
                form.sender.set_custom_id(&text);
            }),
            carrier_mode_select: build_form_edit(state, |form, mode: CarrierMode| {
                form.carrier_mode = mode;
            }),
            execute: build_execute(state),
            copy_result: build_copy_result(state),
        }
    }
}

fn build_form_edit<T, F>(state: &AppState, edit: F) -> Callback<T>
where
    T: 'static,
    F: Fn(&mut ResourceForm, T) + 'static,
{
    let form_handle = state.form.clone();
    Callback::from(move |value: T| {
        let mut next = (*form_handle).clone();
        edit(&mut next, value);
        form_handle.set(next);
    })
}

pub fn build_realms_commit(state: &AppState) -> Callback<String> {
    let store = state.store.clone();
    let directory_handle = state.directory.clone();
    let form_handle = state.form.clone();
    Callback::from(move |text: String| {
        let saved = store.borrow_mut().save(&text).map(Clone::clone);
        match saved {
            Ok(directory) => {
                let mut next = (*form_handle).clone();
                if next.sender.reconcile(&directory) {
                    form_handle.set(next);
                }
                log::info!("saved {} realms", directory.realms.len());
                directory_handle.set(directory);
            }
            Err(StoreError::Input(err)) => {
                log::error!("Error parsing realms data: {err}");
                dom::alert(&i18n::t("errors.realms_format"));
            }
            Err(StoreError::Backend(err)) => {
                log::error!("Error saving realms data: {err}");
                dom::alert(&i18n::t("errors.storage"));
            }
        }
    })
}

pub fn build_execute(state: &AppState) -> Callback<()> {
    let form_handle = state.form.clone();
    Callback::from(move |()| {
        let mut next = (*form_handle).clone();
        let mode = next.mode;
        match next.execute().map(TransferList::len) {
            Ok(count) => {
                log::debug!("{mode:?} produced {count} transfers");
                form_handle.set(next);
            }
            Err(err) => {
                log::error!("Error processing data: {err}");
                dom::alert(&i18n::t("errors.processing"));
            }
        }
    })
}

pub fn build_copy_result(state: &AppState) -> Callback<()> {
    let form_handle = state.form.clone();
    let copied_handle = state.copied.clone();
    Callback::from(move |()| {
        let Some(text) = form_handle.result_json() else {
            return;
        };
        let copied_handle = copied_handle.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = dom::write_clipboard(&text).await {
                log::error!("clipboard write failed: {}", dom::js_error_message(&err));
                return;
            }
            copied_handle.set(true);
            let _ = dom::sleep_ms(eternum_core::constants::COPY_ACK_MS).await;
            copied_handle.set(false);
        });
    })
}
