use leptos::*;
use std::rc::Rc;

use crate::utils::storage::StorageError;

pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => DARK_CLASS,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Everything the theme needs from the page: the persisted flag, the OS
/// colour-scheme preference and the root element's class list.
pub trait ThemeEnvironment {
    fn stored_preference(&self, key: &str) -> Option<String>;
    fn store_preference(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn system_prefers_dark(&self) -> bool;
    fn apply_dark_class(&self, dark: bool);
}

/// Reads the initial theme: stored JSON boolean first, OS preference second.
pub fn initial_theme(env: &dyn ThemeEnvironment, key: &str) -> Theme {
    if let Some(raw) = env.stored_preference(key) {
        match serde_json::from_str::<bool>(&raw) {
            Ok(dark) => return Theme::from_dark(dark),
            Err(err) => log::warn!("ignoring stored {key}={raw:?}: {err}"),
        }
    }
    Theme::from_dark(env.system_prefers_dark())
}

#[derive(Clone)]
pub struct ThemeState {
    theme: RwSignal<Theme>,
    storage_key: Rc<str>,
    env: Rc<dyn ThemeEnvironment>,
}

impl ThemeState {
    pub fn new(env: Rc<dyn ThemeEnvironment>, storage_key: &str) -> Self {
        let theme = create_rw_signal(initial_theme(env.as_ref(), storage_key));
        Self {
            theme,
            storage_key: Rc::from(storage_key),
            env,
        }
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }

    pub fn is_dark(&self) -> Signal<bool> {
        let theme = self.theme;
        Signal::derive(move || theme.get().is_dark())
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.sync();
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::info!("theme switched to {next:?}");
        self.set_theme(next);
    }

    /// Pushes the current theme to the document and to storage.
    pub fn sync(&self) {
        let theme = self.theme.get_untracked();
        self.env.apply_dark_class(theme.is_dark());
        if let Err(err) = self
            .env
            .store_preference(&self.storage_key, &theme.is_dark().to_string())
        {
            log::warn!("could not persist theme preference: {err}");
        }
    }
}

pub fn use_theme() -> ThemeState {
    match use_context::<ThemeState>() {
        Some(state) => state,
        None => provide_theme(),
    }
}

pub fn provide_theme() -> ThemeState {
    provide_theme_with(default_environment(), &crate::config::current().dark_mode_key)
}

pub fn provide_theme_with(env: Rc<dyn ThemeEnvironment>, storage_key: &str) -> ThemeState {
    let state = ThemeState::new(env, storage_key);
    provide_context(state.clone());
    state.sync();
    state
}

#[cfg(target_arch = "wasm32")]
pub fn default_environment() -> Rc<dyn ThemeEnvironment> {
    Rc::new(browser::BrowserEnvironment)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_environment() -> Rc<dyn ThemeEnvironment> {
    Rc::new(MemoryEnvironment::default())
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{ThemeEnvironment, DARK_CLASS};
    use crate::utils::storage::{self, StorageError};

    pub struct BrowserEnvironment;

    impl ThemeEnvironment for BrowserEnvironment {
        fn stored_preference(&self, key: &str) -> Option<String> {
            match storage::read_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("could not read {key}: {err}");
                    None
                }
            }
        }

        fn store_preference(&self, key: &str, value: &str) -> Result<(), StorageError> {
            storage::write_item(key, value)
        }

        fn system_prefers_dark(&self) -> bool {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .map(|m| m.matches())
                .unwrap_or(false)
        }

        fn apply_dark_class(&self, dark: bool) {
            let Some(html) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let list = html.class_list();
            let result = if dark {
                list.add_1(DARK_CLASS)
            } else {
                list.remove_1(DARK_CLASS)
            };
            if result.is_err() {
                log::warn!("could not update document class list");
            }
        }
    }
}

/// In-process stand-in for the browser used on non-wasm hosts.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    pub entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
    pub classes: std::cell::RefCell<std::collections::BTreeSet<String>>,
    pub prefers_dark: bool,
}

#[cfg(not(target_arch = "wasm32"))]
impl MemoryEnvironment {
    pub fn with_stored(key: &str, value: &str) -> Self {
        let env = Self::default();
        env.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        env
    }

    pub fn has_dark_class(&self) -> bool {
        self.classes.borrow().contains(DARK_CLASS)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ThemeEnvironment for MemoryEnvironment {
    fn stored_preference(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn store_preference(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn system_prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn apply_dark_class(&self, dark: bool) {
        let mut classes = self.classes.borrow_mut();
        if dark {
            classes.insert(DARK_CLASS.to_string());
        } else {
            classes.remove(DARK_CLASS);
        }
    }
}
