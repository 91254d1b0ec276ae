// Theme preference with explicit subscribe/notify.
use std::rc::Rc;

pub const THEME_KEY: &str = "showcase_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: "#0e1116",
                surface: "rgba(22,27,34,0.92)",
                border: "#30363d",
                text: "#e6edf3",
                muted: "#8b949e",
                accent: "#58a6ff",
            },
            Theme::Light => Palette {
                background: "#f6f8fa",
                surface: "rgba(255,255,255,0.94)",
                border: "#d0d7de",
                text: "#1f2328",
                muted: "#656d76",
                accent: "#0969da",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
}

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`. Unavailable storage reads as empty and drops writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePrefs;

impl PreferenceStore for LocalStoragePrefs {
    fn get(&self, key: &str) -> Option<String> {
        let store = web_sys::window()?.local_storage().ok().flatten()?;
        store.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if store.set_item(key, value).is_err() {
                    log::warn!("could not persist {}", key);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(Theme)>;

pub struct ThemeStore {
    theme: Theme,
    prefs: Rc<dyn PreferenceStore>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ThemeStore {
    /// Reads the persisted preference; falls back to the default theme.
    pub fn load(prefs: Rc<dyn PreferenceStore>) -> Self {
        let theme = prefs
            .get(THEME_KEY)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default();
        Self {
            theme,
            prefs,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn subscribe(&mut self, listener: impl Fn(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(l, _)| *l != id);
    }

    /// Persists and notifies, but only when the value actually changes.
    pub fn set(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        self.prefs.set(THEME_KEY, theme.as_str());
        log::debug!("theme -> {}", theme.as_str());
        for (_, l) in &self.listeners {
            l(theme);
        }
    }

    pub fn toggle(&mut self) {
        self.set(self.theme.toggled());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryPrefs(RefCell<HashMap<String, String>>);

    impl PreferenceStore for MemoryPrefs {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn load_reads_persisted_value() {
        let prefs = Rc::new(MemoryPrefs::default());
        prefs.set(THEME_KEY, "light");
        assert_eq!(ThemeStore::load(prefs).theme(), Theme::Light);

        let prefs = Rc::new(MemoryPrefs::default());
        prefs.set(THEME_KEY, "purple");
        assert_eq!(ThemeStore::load(prefs).theme(), Theme::Dark);
    }

    #[test]
    fn notifies_on_change_only_and_persists() {
        let prefs = Rc::new(MemoryPrefs::default());
        let mut store = ThemeStore::load(prefs.clone());
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let id = store.subscribe(move |_| h.set(h.get() + 1));

        store.set(Theme::Dark);
        assert_eq!(hits.get(), 0);
        store.toggle();
        assert_eq!(hits.get(), 1);
        assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("light"));

        store.unsubscribe(id);
        store.toggle();
        assert_eq!(hits.get(), 1);
        assert_eq!(store.theme(), Theme::Dark);
    }
}
