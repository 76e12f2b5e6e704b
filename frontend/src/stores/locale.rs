use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::prelude::*;

use super::StorageAdapter;

const LOCALE_KEY: &str = "feastly.locale";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    My,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::My => "မြန်မာ",
        }
    }

    pub fn format_price(&self, amount: f64) -> String {
        match self {
            Language::En => format!("${amount:.2}"),
            Language::My => format!("{amount:.0} Ks"),
        }
    }
}

pub enum LocaleAction {
    SetLanguage(Language),
}

/// Persisted language preference.
#[derive(Clone)]
pub struct LocaleStore {
    pub language: Language,
    adapter: Rc<dyn StorageAdapter>,
}

impl PartialEq for LocaleStore {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
    }
}

impl LocaleStore {
    pub fn hydrate(adapter: Rc<dyn StorageAdapter>) -> Self {
        let language = adapter
            .load(LOCALE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { language, adapter }
    }

    pub fn format_price(&self, amount: f64) -> String {
        self.language.format_price(amount)
    }
}

impl Reducible for LocaleStore {
    type Action = LocaleAction;

    fn reduce(self: Rc<Self>, action: LocaleAction) -> Rc<Self> {
        let LocaleAction::SetLanguage(language) = action;
        if let Ok(raw) = serde_json::to_string(&language) {
            self.adapter.save(LOCALE_KEY, &raw);
        }
        Rc::new(Self {
            language,
            adapter: Rc::clone(&self.adapter),
        })
    }
}

pub type LocaleHandle = UseReducerHandle<LocaleStore>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryAdapter;

    #[test]
    fn defaults_to_english() {
        let store = LocaleStore::hydrate(Rc::new(MemoryAdapter::default()));
        assert_eq!(store.language, Language::En);
        assert_eq!(store.format_price(1234.5), "$1234.50");
    }

    #[test]
    fn preference_round_trips_through_the_adapter() {
        let adapter = Rc::new(MemoryAdapter::default());
        let store = Rc::new(LocaleStore::hydrate(adapter.clone()));
        let store = store.reduce(LocaleAction::SetLanguage(Language::My));
        assert_eq!(store.format_price(3500.0), "3500 Ks");

        let rehydrated = LocaleStore::hydrate(adapter);
        assert_eq!(rehydrated.language, Language::My);
    }
}
