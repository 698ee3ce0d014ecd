use crate::storage::{LocalStore, load_realm_store};
use eternum_core::{RealmDirectory, RealmDirectoryStore, ResourceForm};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

pub type RealmStore = RealmDirectoryStore<LocalStore>;

#[derive(Clone)]
pub struct AppState {
    pub store: Rc<RefCell<RealmStore>>,
    pub directory: UseStateHandle<RealmDirectory>,
    pub form: UseStateHandle<ResourceForm>,
    pub copied: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let store = use_mut_ref(load_realm_store);
    let directory = {
        let store = store.clone();
        use_state(move || store.borrow().directory().clone())
    };
    let form = {
        let directory = directory.clone();
        use_state(move || ResourceForm::for_directory(&directory))
    };
    AppState {
        store,
        directory,
        form,
        copied: use_state(|| false),
    }
}

impl AppState {
    /// Donkey-producing realms offered by the sender selector.
    #[must_use]
    pub fn carrier_sources(&self) -> Vec<eternum_core::Realm> {
        self.directory.carrier_sources().cloned().collect()
    }

    #[must_use]
    pub fn result_json(&self) -> Option<AttrValue> {
        self.form.result_json().map(AttrValue::from)
    }
}
