use std::collections::HashMap;
use std::fmt;

use crate::components::{Component, Counter};
use crate::error::{HostError, Result};

type Factory = Box<dyn Fn() -> Box<dyn Component>>;

/// Child components that `Opcode::Child` may refer to, keyed by kebab-case name.
pub struct ComponentRegistry {
    factories: HashMap<String, Factory>,
}

impl ComponentRegistry {
    /// A registry with nothing in it.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    pub fn register<F, C>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> C + 'static,
        C: Component + 'static,
    {
        self.factories
            .insert(
                name.into(),
                Box::new(move || Box::new(factory()) as Box<dyn Component>),
            );
    }

    pub(crate) fn create(&self, name: &str) -> Result<Box<dyn Component>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| HostError::UnknownComponent(name.to_string()))
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Counter::NAME, Counter::new);
        registry
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ComponentRegistry")
            .field("components", &names)
            .finish()
    }
}
