use entigen::schema::{ClassName, Schema};
use entigen::{Engine, EntityPrompt, MemoryStore, NoPrompt, Result};

/// Answers every prompt with a fixed choice and records what was offered.
#[derive(Default)]
struct ScriptedPrompt {
    choice: usize,
    offered: Vec<String>,
}

impl EntityPrompt for ScriptedPrompt {
    fn prompt_choice(&mut self, _message: &str, choices: &[String]) -> Result<usize> {
        self.offered = choices.to_vec();
        Ok(self.choice)
    }
}

fn hr_schema() -> Schema {
    let mut schema = Schema::new();
    schema.register(ClassName::new("com.example.hr", "Dept"));
    schema.register(ClassName::new("com.example.hr", "Employee"));
    schema
}

#[test]
fn resolves_by_simple_and_qualified_name() {
    let mut engine = Engine::new(hr_schema(), MemoryStore::new(), NoPrompt);

    let by_simple = engine.find_entity(Some("Employee")).unwrap();
    let by_qualified = engine.find_entity(Some("com.example.hr.Employee")).unwrap();
    assert_eq!(by_simple, by_qualified);
}

#[test]
fn resolves_through_the_configured_entity_package() {
    let mut schema = hr_schema();
    schema.register(ClassName::new("com.example.billing", "Invoice"));

    let mut engine =
        Engine::new(schema, MemoryStore::new(), NoPrompt).with_entity_package("com.example");

    // Partially qualified relative to the entity package
    let resolved = engine.find_entity(Some("billing.Invoice")).unwrap();
    assert_eq!(
        engine.schema().class(resolved).name.qualified(),
        "com.example.billing.Invoice"
    );
}

#[test]
fn falls_back_to_an_interactive_choice() {
    let prompt = ScriptedPrompt {
        choice: 1,
        ..Default::default()
    };
    let mut engine = Engine::new(hr_schema(), MemoryStore::new(), prompt);

    let resolved = engine.find_entity(None).unwrap();
    assert_eq!(
        engine.schema().class(resolved).name.qualified(),
        "com.example.hr.Employee"
    );
}

#[test]
fn prompt_offers_qualified_names() {
    let prompt = ScriptedPrompt::default();
    let mut engine = Engine::new(hr_schema(), MemoryStore::new(), prompt);

    engine.find_entity(None).unwrap();

    // The prompt was handed every registered entity, fully qualified
    assert_eq!(
        engine.prompt().offered,
        ["com.example.hr.Dept", "com.example.hr.Employee"]
    );
}

#[test]
fn unknown_name_still_offers_a_choice() {
    let prompt = ScriptedPrompt::default();
    let mut engine = Engine::new(hr_schema(), MemoryStore::new(), prompt);

    let resolved = engine.find_entity(Some("Missing")).unwrap();
    assert_eq!(
        engine.schema().class(resolved).name.qualified(),
        "com.example.hr.Dept"
    );
}

#[test]
fn resolution_fails_without_a_prompt() {
    let mut engine = Engine::new(hr_schema(), MemoryStore::new(), NoPrompt);

    let err = engine.find_entity(Some("Missing")).unwrap_err();
    assert!(err.is_entity_not_found());
}

#[test]
fn empty_schema_has_nothing_to_offer() {
    let prompt = ScriptedPrompt::default();
    let mut engine = Engine::new(Schema::new(), MemoryStore::new(), prompt);

    let err = engine.find_entity(None).unwrap_err();
    assert!(err.is_entity_not_found());
}
