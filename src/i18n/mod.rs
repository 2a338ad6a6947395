//! Internationalization - Language detection, catalogs, and switching
//!
//! Four languages, Spanish as the default. The controller resolves the
//! initial language from the stored preference, then the host locale, then
//! the default; every successful switch persists the choice and notifies the
//! bus so other controllers (the typewriter's role list in particular) can
//! re-source their text.
//!
//! Lookups fail open: a missing key returns the key itself, logged at warn,
//! so a hole in one catalog never blanks the page.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use folio_motion::events::EventBus;
//! use folio_motion::i18n::{I18n, Language, MemoryStore, StaticSource};
//!
//! let source = StaticSource::new()
//!     .with_json(Language::Es, r#"{"nav":{"home":"Inicio"}}"#)?
//!     .with_json(Language::En, r#"{"nav":{"home":"Home"}}"#)?;
//! let i18n = I18n::new(
//!     Rc::new(source),
//!     Rc::new(MemoryStore::default()),
//!     EventBus::new(),
//!     Language::Es,
//! );
//! i18n.init(Some("en-US"))?;
//! assert_eq!(i18n.t("nav.home"), "Home");
//! # Ok::<(), folio_motion::i18n::I18nError>(())
//! ```

pub mod catalog;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use spark_signals::{Signal, signal};
use thiserror::Error;

use crate::events::EventBus;

pub use catalog::Catalog;

// =============================================================================
// Languages
// =============================================================================

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    En,
    De,
    Fr,
}

impl Language {
    /// Two-letter code, the persisted and wire form.
    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
        }
    }

    /// Parse a two-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            "de" => Some(Language::De),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    pub fn all() -> [Language; 4] {
        [Language::Es, Language::En, Language::De, Language::Fr]
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Es
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Map a host locale string to a supported language by prefix.
///
/// `"en-US"`, `"en_GB"`, and plain `"en"` all resolve to English. Unknown
/// locales return None so the caller falls through to the default.
pub fn detect(locale: &str) -> Option<Language> {
    let lower = locale.to_lowercase();
    for language in Language::all() {
        if lower == language.code() || lower.starts_with(&format!("{}-", language.code())) {
            return Some(language);
        }
    }
    // Underscore-separated locales show up from some hosts.
    let prefix = lower.split(['-', '_']).next().unwrap_or("");
    Language::from_code(prefix)
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("no catalog for language {0}")]
    MissingCatalog(Language),
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog root must be an object")]
    InvalidRoot,
}

// =============================================================================
// Seams
// =============================================================================

/// Where catalogs come from.
pub trait TranslationSource {
    fn load(&self, language: Language) -> Result<Catalog, I18nError>;
}

/// Source over catalogs registered up front.
#[derive(Default)]
pub struct StaticSource {
    catalogs: HashMap<Language, Catalog>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a catalog parsed from JSON text.
    pub fn with_json(mut self, language: Language, text: &str) -> Result<Self, I18nError> {
        self.catalogs.insert(language, Catalog::from_json(text)?);
        Ok(self)
    }

    pub fn insert(&mut self, language: Language, catalog: Catalog) {
        self.catalogs.insert(language, catalog);
    }
}

impl TranslationSource for StaticSource {
    fn load(&self, language: Language) -> Result<Catalog, I18nError> {
        self.catalogs
            .get(&language)
            .cloned()
            .ok_or(I18nError::MissingCatalog(language))
    }
}

/// Where the language preference persists.
pub trait PreferenceStore {
    fn get(&self) -> Option<String>;
    fn set(&self, code: &str);
}

/// In-memory preference store.
#[derive(Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn set(&self, code: &str) {
        *self.value.borrow_mut() = Some(code.to_string());
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Language controller. One per page.
pub struct I18n {
    source: Rc<dyn TranslationSource>,
    store: Rc<dyn PreferenceStore>,
    bus: EventBus,
    default_language: Language,
    language: Signal<Language>,
    catalog: RefCell<Catalog>,
}

impl I18n {
    pub fn new(
        source: Rc<dyn TranslationSource>,
        store: Rc<dyn PreferenceStore>,
        bus: EventBus,
        default_language: Language,
    ) -> Rc<Self> {
        Rc::new(Self {
            source,
            store,
            bus,
            default_language,
            language: signal(default_language),
            catalog: RefCell::new(Catalog::default()),
        })
    }

    /// Resolve and apply the initial language: stored preference first, then
    /// the host locale, then the default.
    pub fn init(&self, locale: Option<&str>) -> Result<Language, I18nError> {
        let initial = self
            .store
            .get()
            .as_deref()
            .and_then(Language::from_code)
            .or_else(|| locale.and_then(detect))
            .unwrap_or(self.default_language);
        self.switch_language(initial)
    }

    /// Switch to a language. On success the catalog swaps in, the preference
    /// persists, and the bus notifies subscribers. A language whose catalog
    /// fails to load falls back to the default once; a failing default is an
    /// error.
    pub fn switch_language(&self, language: Language) -> Result<Language, I18nError> {
        match self.source.load(language) {
            Ok(catalog) => {
                *self.catalog.borrow_mut() = catalog;
                self.store.set(language.code());
                self.language.set(language);
                self.bus.emit_language(language);
                Ok(language)
            }
            Err(err) => {
                tracing::warn!(language = %language, error = %err, "catalog load failed");
                if language != self.default_language {
                    self.switch_language(self.default_language)
                } else {
                    Err(err)
                }
            }
        }
    }

    /// Translate a key. Missing keys return the key itself, logged at warn.
    pub fn t(&self, key: &str) -> String {
        match self.catalog.borrow().get(key) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!(key, language = %self.language.get(), "missing translation");
                key.to_string()
            }
        }
    }

    /// Translate a list of keys, the typewriter role-list shape.
    pub fn roles(&self, keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| self.t(k)).collect()
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Reactive handle on the current language.
    pub fn language_signal(&self) -> Signal<Language> {
        self.language.clone()
    }
}

// =============================================================================
// Tests
// =============================================================================
