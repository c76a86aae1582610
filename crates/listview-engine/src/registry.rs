//! Screen Registry
//!
//! Storage for screen definitions, looked up by id when a screen mounts.

use parking_lot::RwLock;
use std::collections::HashMap;

use listview_core::{AppConfig, ConfigError, ScreenSpec};

use crate::error::{EngineError, EngineResult};

/// Registry of configured list screens.
pub struct ScreenRegistry {
    screens: RwLock<HashMap<String, ScreenSpec>>,
}

impl ScreenRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            screens: RwLock::new(HashMap::new()),
        }
    }

    /// Build a registry from a configuration file's screens.
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        let registry = Self::new();
        for screen in config.screens {
            registry.add(screen)?;
        }
        Ok(registry)
    }

    /// Register a screen.
    ///
    /// Returns an error if the screen is invalid or its id is taken.
    pub fn add(&self, screen: ScreenSpec) -> Result<(), ConfigError> {
        screen.validate()?;
        let mut screens = self.screens.write();
        if screens.contains_key(&screen.id) {
            return Err(ConfigError::DuplicateScreen(screen.id));
        }
        tracing::debug!("Registered screen: {}", screen.id);
        screens.insert(screen.id.clone(), screen);
        Ok(())
    }

    /// Register or replace a screen. Returns the definition it replaced.
    pub fn upsert(&self, screen: ScreenSpec) -> Result<Option<ScreenSpec>, ConfigError> {
        screen.validate()?;
        let mut screens = self.screens.write();
        let previous = screens.insert(screen.id.clone(), screen);
        if let Some(previous) = &previous {
            tracing::info!("Screen '{}' overridden by user config", previous.id);
        }
        Ok(previous)
    }

    /// Get a copy of a screen definition.
    pub fn get(&self, id: &str) -> Option<ScreenSpec> {
        self.screens.read().get(id).cloned()
    }

    /// Get a copy of a screen definition, or `ScreenNotFound`.
    pub fn require(&self, id: &str) -> EngineResult<ScreenSpec> {
        self.get(id)
            .ok_or_else(|| EngineError::ScreenNotFound(id.to_string()))
    }

    /// Execute a function with access to a screen definition.
    pub fn with_screen<F, R>(&self, id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&ScreenSpec) -> R,
    {
        let screens = self.screens.read();
        screens.get(id).map(f)
    }

    /// Registered screen ids, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.screens.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn exists(&self, id: &str) -> bool {
        self.screens.read().contains_key(id)
    }

    pub fn count(&self) -> usize {
        self.screens.read().len()
    }
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listview_core::{FieldSpec, Schema};

    fn screen(id: &str) -> ScreenSpec {
        ScreenSpec::new(id, Schema::new(vec![FieldSpec::text("title")]))
            .with_search_fields(["title"])
    }

    #[test]
    fn test_registry_add_and_get() {
        let registry = ScreenRegistry::new();
        registry.add(screen("jobs").with_title("Jobs")).unwrap();

        assert!(registry.exists("jobs"));
        assert!(!registry.exists("other"));
        assert_eq!(registry.get("jobs").unwrap().title.as_deref(), Some("Jobs"));
    }

    #[test]
    fn test_registry_require_missing() {
        let registry = ScreenRegistry::new();
        registry.add(screen("jobs")).unwrap();
        assert_eq!(registry.require("jobs").unwrap().id, "jobs");
        assert!(matches!(
            registry.require("payroll"),
            Err(EngineError::ScreenNotFound(id)) if id == "payroll"
        ));
    }

    #[test]
    fn test_registry_duplicate_error() {
        let registry = ScreenRegistry::new();
        registry.add(screen("jobs")).unwrap();
        let result = registry.add(screen("jobs").with_page_size(50));
        assert!(matches!(result, Err(ConfigError::DuplicateScreen(_))));
    }

    #[test]
    fn test_registry_rejects_invalid_screen() {
        let registry = ScreenRegistry::new();
        let result = registry.add(screen("jobs").with_page_size(0));
        assert!(matches!(result, Err(ConfigError::InvalidScreen { .. })));
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_registry_upsert_replaces() {
        let registry = ScreenRegistry::new();
        registry.add(screen("jobs")).unwrap();
        let previous = registry.upsert(screen("jobs").with_page_size(25)).unwrap();
        assert_eq!(previous.unwrap().page_size, 10);
        assert_eq!(registry.with_screen("jobs", |s| s.page_size), Some(25));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_registry_list_sorted() {
        let registry = ScreenRegistry::new();
        registry.add(screen("jobs")).unwrap();
        registry.add(screen("applications")).unwrap();
        registry.add(screen("interviews")).unwrap();
        assert_eq!(registry.list(), vec!["applications", "interviews", "jobs"]);
    }

    #[test]
    fn test_registry_from_config() {
        let config = AppConfig {
            screens: vec![screen("jobs"), screen("candidates")],
        };
        let registry = ScreenRegistry::from_config(config).unwrap();
        assert_eq!(registry.count(), 2);
    }
}
