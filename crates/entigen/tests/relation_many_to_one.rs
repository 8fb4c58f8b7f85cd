use entigen::schema::{AnnotationKind, AttrValue, ClassId, ClassName, RelationKind, Schema, TypeRef};
use entigen::synth::bidirectional;
use entigen::{Engine, MemoryStore, NoPrompt};
use entigen_java::Serializer;

use pretty_assertions::assert_eq;

fn hr_engine() -> (Engine<MemoryStore, NoPrompt>, ClassId, ClassId) {
    let mut schema = Schema::new();
    let employee = schema.register(ClassName::new("com.example.hr", "Employee"));
    let dept = schema.register(ClassName::new("com.example.hr", "Dept"));
    (
        Engine::new(schema, MemoryStore::new(), NoPrompt),
        employee,
        dept,
    )
}

#[test]
fn bidirectional_many_to_one() {
    let (mut engine, employee, dept) = hr_engine();

    engine
        .many_to_one(employee, "dept", "Dept", Some("staff"))
        .unwrap();

    let schema = engine.schema();
    let employee_class = schema.class(employee);
    let dept_class = schema.class(dept);

    // Scalar forward field on the many side
    let forward = employee_class.field_by_name("dept").unwrap();
    assert_eq!(forward.ty, TypeRef::Entity(dept));
    let annotation = forward.annotation(AnnotationKind::ManyToOne).unwrap();
    assert!(annotation.attrs.is_empty());

    // Collection inverse on the one side, mappedBy the forward field and
    // cascading, without orphan removal
    let inverse = dept_class.field_by_name("staff").unwrap();
    assert_eq!(inverse.ty, TypeRef::set_of(TypeRef::Entity(employee)));
    let annotation = inverse.annotation(AnnotationKind::OneToMany).unwrap();
    assert_eq!(
        annotation.get("mappedBy"),
        Some(&AttrValue::Str("dept".into()))
    );
    assert_eq!(
        annotation.get("cascade"),
        Some(&AttrValue::Literal("CascadeType.ALL".into()))
    );
    assert!(annotation.get("orphanRemoval").is_none());

    // The one side hosts the link-maintenance methods
    let param = [TypeRef::Entity(employee)];
    assert!(dept_class.has_method_signature("setBidirectional", &param));
    let set = dept_class
        .method_by_signature("setBidirectional", &param)
        .unwrap();
    assert_eq!(
        Serializer::new(schema).serialize_body(set),
        "Set<Employee> setOfEmployee = this.getStaff();\n\
         for (Employee employee : setOfEmployee) {\n\
         \x20   employee.setDept(this);\n\
         }\n"
    );

    // The one side is durable before the many side
    assert_eq!(
        engine.store().save_log(),
        ["com.example.hr.Dept", "com.example.hr.Employee"]
    );
}

#[test]
fn unidirectional_many_to_one() {
    let (mut engine, employee, dept) = hr_engine();

    engine.many_to_one(employee, "dept", "Dept", None).unwrap();

    assert!(engine.schema().class(dept).fields.is_empty());
    assert_eq!(engine.store().save_log(), ["com.example.hr.Employee"]);
}

#[test]
fn direct_many_to_one_wiring_is_rejected() {
    let (mut engine, employee, dept) = hr_engine();

    // The association is directional; the synthesizer refuses to host link
    // methods for it, and no method is created
    let err = bidirectional::synthesize(
        engine.schema_mut(),
        RelationKind::ManyToOne,
        employee,
        dept,
        "dept",
        "staff",
    )
    .unwrap_err();

    assert!(err.to_string().contains("directional"));
    assert!(engine.schema().class(employee).methods.is_empty());
}
