use crate::store::{EntityPrompt, SourceStore};

use entigen_core::schema::{ClassId, Schema};
use entigen_core::{Error, Result};

/// Drives field and relationship synthesis over a schema of entity class
/// models, persisting touched classes through the source store.
///
/// Commands run synchronously, one at a time, with exclusive access to the
/// schema. There is no rollback spanning the two sides of a bidirectional
/// command: a failure on the second class leaves the first class's mutation
/// in place and nothing persisted for that command.
pub struct Engine<S, P> {
    schema: Schema,
    store: S,
    prompt: P,
    entity_package: Option<String>,
}

impl<S: SourceStore, P: EntityPrompt> Engine<S, P> {
    pub fn new(schema: Schema, store: S, prompt: P) -> Self {
        Self {
            schema,
            store,
            prompt,
            entity_package: None,
        }
    }

    /// Sets the package used to qualify bare entity names during resolution.
    pub fn with_entity_package(mut self, package: impl Into<String>) -> Self {
        self.entity_package = Some(package.into());
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn schema_mut(&mut self) -> &mut Schema {
        &mut self.schema
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Resolves an entity class by simple name, by qualified name, or by the
    /// configured entity package, falling back to an interactive choice.
    /// Runs before any mutation, so a failure has no side effects.
    pub fn find_entity(&mut self, name: Option<&str>) -> Result<ClassId> {
        if let Some(name) = name {
            if let Some(class) = self.schema.class_by_name(name) {
                return Ok(class.id);
            }
            if let Some(package) = &self.entity_package {
                let qualified = format!("{package}.{name}");
                if let Some(class) = self.schema.class_by_name(&qualified) {
                    return Ok(class.id);
                }
            }
        }
        self.prompt_for_entity(name)
    }

    fn prompt_for_entity(&mut self, requested: Option<&str>) -> Result<ClassId> {
        let requested = requested.unwrap_or("unspecified");
        let choices: Vec<String> = self
            .schema
            .classes()
            .map(|class| class.name.qualified())
            .collect();

        if choices.is_empty() {
            return Err(Error::entity_not_found(requested));
        }

        let index = self
            .prompt
            .prompt_choice("Which entity would you like to modify?", &choices)
            .map_err(|err| err.context(Error::entity_not_found(requested)))?;

        self.schema
            .classes()
            .nth(index)
            .map(|class| class.id)
            .ok_or_else(|| Error::entity_not_found(requested))
    }

    pub(crate) fn persist(&mut self, id: ClassId) -> Result<()> {
        self.store
            .save_java_source(&self.schema, self.schema.class(id))
    }
}
