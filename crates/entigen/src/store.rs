use entigen_core::schema::{ClassModel, Schema};
use entigen_core::{err, Result};
use entigen_java::Serializer;

use indexmap::IndexMap;

/// Durable storage for entity class sources.
pub trait SourceStore {
    /// Idempotent overwrite of the class's durable representation.
    fn save_java_source(&mut self, schema: &Schema, class: &ClassModel) -> Result<()>;
}

/// Interactive selection, used only when entity resolution is ambiguous or
/// the name was omitted.
pub trait EntityPrompt {
    /// Returns the index of the chosen entry.
    fn prompt_choice(&mut self, message: &str, choices: &[String]) -> Result<usize>;
}

/// Keeps rendered sources in memory, keyed by qualified class name. Useful
/// for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sources: IndexMap<String, String>,
    saves: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest rendered source for the class, if it was ever saved.
    pub fn source(&self, qualified: &str) -> Option<&str> {
        self.sources.get(qualified).map(String::as_str)
    }

    /// Qualified names in save order, repeats included.
    pub fn save_log(&self) -> &[String] {
        &self.saves
    }
}

impl SourceStore for MemoryStore {
    fn save_java_source(&mut self, schema: &Schema, class: &ClassModel) -> Result<()> {
        let source = Serializer::new(schema).serialize_class(class);
        let qualified = class.name.qualified();
        self.saves.push(qualified.clone());
        self.sources.insert(qualified, source);
        Ok(())
    }
}

/// Fails resolution instead of prompting, for non-interactive callers.
#[derive(Debug, Default)]
pub struct NoPrompt;

impl EntityPrompt for NoPrompt {
    fn prompt_choice(&mut self, _message: &str, _choices: &[String]) -> Result<usize> {
        Err(err!("interactive selection is unavailable"))
    }
}
