//! Adapter registry.
//!
//! Maps normalized agent names to adapter factories. The registry is
//! populated at process startup (builtins plus any caller registrations);
//! there is no runtime name-based module loading.

use std::collections::HashMap;

use crate::domain::ports::AgentAdapter;

use super::{ClaudeAdapter, CursorAdapter, GeminiAdapter, WindsurfAdapter};

/// Factory producing an adapter for a (normalized) agent name.
pub type AdapterFactory = Box<dyn Fn(&str) -> Box<dyn AgentAdapter> + Send + Sync>;

/// Central registry of known agent adapters.
pub struct AdapterRegistry {
    factories: HashMap<String, AdapterFactory>,
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("agents", &self.names())
            .finish()
    }
}

impl Default for AdapterRegistry {
    /// Returns an empty registry with no adapters registered.
    fn default() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }
}

impl AdapterRegistry {
    /// Registry pre-populated with the builtin adapters.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        registry.register("claude", |name| Box::new(ClaudeAdapter::new(name)));
        registry.register("cursor", |name| Box::new(CursorAdapter::new(name)));
        registry.register("windsurf", |name| Box::new(WindsurfAdapter::new(name)));
        registry.register("gemini", |name| Box::new(GeminiAdapter::new(name)));
        registry
    }

    /// Register a factory under `name` (lowercased).
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(&str) -> Box<dyn AgentAdapter> + Send + Sync + 'static,
    {
        self.factories.insert(name.to_lowercase(), Box::new(factory));
    }

    /// Build the adapter for `name`, or `None` if no factory is registered.
    ///
    /// Lookup is case-insensitive; the factory receives the normalized name.
    pub fn resolve(&self, name: &str) -> Option<Box<dyn AgentAdapter>> {
        let key = name.to_lowercase();
        self.factories.get(&key).map(|factory| factory(&key))
    }

    /// Whether an adapter is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_lowercase())
    }

    /// Registered agent names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_knows_the_stock_agents() {
        let registry = AdapterRegistry::builtin();
        assert_eq!(
            registry.names(),
            vec!["claude", "cursor", "gemini", "windsurf"]
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = AdapterRegistry::builtin();
        let adapter = registry.resolve("Claude").unwrap();
        assert_eq!(adapter.agent_name(), "claude");
    }

    #[test]
    fn unknown_agent_resolves_to_none() {
        let registry = AdapterRegistry::builtin();
        assert!(registry.resolve("copilot").is_none());
        assert!(!registry.contains("copilot"));
    }
}
