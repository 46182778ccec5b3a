use super::PatternStore;
use crate::error::{PatsError, Result};
use crate::model::PatternDef;
use std::collections::HashMap;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    defs: HashMap<String, PatternDef>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PatternStore for InMemoryStore {
    fn save(&mut self, name: &str, def: &PatternDef) -> Result<()> {
        if self.defs.contains_key(name) {
            return Err(PatsError::PatternExists(name.to_string()));
        }
        self.defs.insert(name.to_string(), def.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<PatternDef> {
        self.defs
            .get(name)
            .cloned()
            .ok_or_else(|| PatsError::PatternNotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.defs.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_is_exclusive() {
        let mut store = InMemoryStore::new();
        let def = PatternDef {
            pattern: Some("x".to_string()),
            ..Default::default()
        };
        store.save("p", &def).unwrap();

        let err = store.save("p", &def).unwrap_err();
        assert!(matches!(err, PatsError::PatternExists(name) if name == "p"));
    }

    #[test]
    fn load_missing_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.load("ghost").unwrap_err();
        assert!(matches!(err, PatsError::PatternNotFound(name) if name == "ghost"));
    }

    #[test]
    fn list_is_sorted() {
        let mut store = InMemoryStore::new();
        let def = PatternDef::default();
        store.save("zeta", &def).unwrap();
        store.save("alpha", &def).unwrap();
        assert_eq!(store.list().unwrap(), vec!["alpha", "zeta"]);
    }
}
