use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Page opened after login when the URL names no tab.
pub const HOME_TAB: &str = "d101_sales_summary";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Bumped after a successful save so lists of that entity reload.
    revisions: RwSignal<HashMap<&'static str, u64>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            revisions: RwSignal::new(HashMap::new()),
        }
    }

    /// Restores the tab named in `?active=` and keeps the query in sync with
    /// the active tab.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        match params.get("active") {
            Some(active_key) if !active_key.is_empty() => {
                self.open_tab(active_key, crate::layout::tabs::tab_label_for_key(active_key));
            }
            _ => self.open_tab(HOME_TAB, crate::layout::tabs::tab_label_for_key(HOME_TAB)),
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| tabs.push(Tab::new(key, title)));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        let mut next_active = None;
        self.opened.update(|tabs| {
            next_active = close_and_pick_next(tabs, key);
        });
        if was_active {
            self.active.set(next_active);
        }
    }

    /// Drops every tab, e.g. on logout.
    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn notify_saved(&self, entity: &'static str) {
        self.revisions.update(|r| *r.entry(entity).or_insert(0) += 1);
    }

    /// Reactive counter for `entity`; read it inside an effect to reload.
    pub fn revision(&self, entity: &'static str) -> u64 {
        self.revisions.with(|r| r.get(entity).copied().unwrap_or(0))
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes `key` and returns the tab to activate next: the right
/// neighbour, else the new last tab.
fn close_and_pick_next(tabs: &mut Vec<Tab>, key: &str) -> Option<String> {
    let index = tabs.iter().position(|t| t.key == key);
    if let Some(index) = index {
        tabs.remove(index);
        if let Some(tab) = tabs.get(index) {
            return Some(tab.key.clone());
        }
    }
    tabs.last().map(|t| t.key.clone())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

impl Tab {
    pub fn new(key: &str, title: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter().map(|k| Tab::new(k, k)).collect()
    }

    #[test]
    fn test_close_picks_right_neighbour() {
        let mut t = tabs(&["a", "b", "c"]);
        assert_eq!(close_and_pick_next(&mut t, "b"), Some("c".to_string()));
        assert_eq!(t, tabs(&["a", "c"]));
    }

    #[test]
    fn test_close_last_picks_previous() {
        let mut t = tabs(&["a", "b"]);
        assert_eq!(close_and_pick_next(&mut t, "b"), Some("a".to_string()));
    }

    #[test]
    fn test_close_only_tab() {
        let mut t = tabs(&["a"]);
        assert_eq!(close_and_pick_next(&mut t, "a"), None);
        assert!(t.is_empty());
    }
}
