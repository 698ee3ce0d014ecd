use serde_json::Value;
use std::cell::RefCell;

const EN: &str = include_str!("../../i18n/en.json");

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
}

fn build_bundle(lang: &str, source: &str) -> Option<I18nBundle> {
    let translations = serde_json::from_str(source).ok()?;
    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
    })
}

fn fallback_bundle() -> I18nBundle {
    I18nBundle {
        lang: "en".to_string(),
        translations: Value::Object(serde_json::Map::new()),
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> =
        RefCell::new(build_bundle("en", EN).unwrap_or_else(fallback_bundle));
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}
