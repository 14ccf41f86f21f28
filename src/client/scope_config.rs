use std::collections::HashMap;

use crate::config::Settings;
use crate::service::laybuy::StoreId;

/// Store-scoped key-value lookup, the way the host platform exposes its
/// configuration. A store-level value shadows the default scope.
pub trait ScopeConfig: Send + Sync {
    fn get_value(&self, path: &str, store_id: Option<StoreId>) -> Option<String>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryScopeConfig {
    default: HashMap<String, String>,
    stores: HashMap<StoreId, HashMap<String, String>>,
}

impl InMemoryScopeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the store from the `payment` and `stores` sections of the
    /// settings. Field names are expanded to full paths with `path_for`.
    pub fn from_settings(settings: &Settings, path_for: impl Fn(&str) -> String) -> Self {
        let mut scope_config = Self::new();
        for (field, value) in &settings.payment {
            scope_config.set(&path_for(field), value, None);
        }
        for (store, fields) in &settings.stores {
            let store_id = match store.parse::<StoreId>() {
                Ok(id) => id,
                Err(e) => {
                    tracing::warn!("ignoring settings for invalid store id {}: {}", store, e);
                    continue;
                }
            };
            for (field, value) in fields {
                scope_config.set(&path_for(field), value, Some(store_id));
            }
        }
        scope_config
    }

    pub fn set(&mut self, path: &str, value: &str, store_id: Option<StoreId>) {
        let scope = match store_id {
            Some(id) => self.stores.entry(id).or_default(),
            None => &mut self.default,
        };
        scope.insert(path.to_string(), value.to_string());
    }

    pub fn with_value(mut self, path: &str, value: &str, store_id: Option<StoreId>) -> Self {
        self.set(path, value, store_id);
        self
    }
}

impl ScopeConfig for InMemoryScopeConfig {
    fn get_value(&self, path: &str, store_id: Option<StoreId>) -> Option<String> {
        store_id
            .and_then(|id| self.stores.get(&id))
            .and_then(|scope| scope.get(path))
            .or_else(|| self.default.get(path))
            .cloned()
    }
}
