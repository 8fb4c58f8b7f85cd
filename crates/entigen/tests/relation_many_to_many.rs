use entigen::schema::{AnnotationKind, AttrValue, ClassId, ClassName, RelationKind, Schema, TypeRef};
use entigen::synth::bidirectional;
use entigen::{Engine, MemoryStore, NoPrompt};
use entigen_java::Serializer;

use pretty_assertions::assert_eq;

fn school_engine() -> (Engine<MemoryStore, NoPrompt>, ClassId, ClassId) {
    let mut schema = Schema::new();
    let student = schema.register(ClassName::new("com.example.school", "Student"));
    let course = schema.register(ClassName::new("com.example.school", "Course"));
    (
        Engine::new(schema, MemoryStore::new(), NoPrompt),
        student,
        course,
    )
}

#[test]
fn bidirectional_many_to_many() {
    let (mut engine, student, course) = school_engine();

    engine
        .many_to_many(student, "courses", "Course", Some("students"))
        .unwrap();

    let schema = engine.schema();
    let student_class = schema.class(student);
    let course_class = schema.class(course);

    // Forward collection carries mappedBy; the mirrored collection is bare
    let forward = student_class.field_by_name("courses").unwrap();
    assert_eq!(forward.ty, TypeRef::set_of(TypeRef::Entity(course)));
    let annotation = forward.annotation(AnnotationKind::ManyToMany).unwrap();
    assert_eq!(
        annotation.get("mappedBy"),
        Some(&AttrValue::Str("students".into()))
    );

    let mirror = course_class.field_by_name("students").unwrap();
    assert_eq!(mirror.ty, TypeRef::set_of(TypeRef::Entity(student)));
    let annotation = mirror.annotation(AnnotationKind::ManyToMany).unwrap();
    assert!(annotation.attrs.is_empty());

    // The other entity hosts the link-maintenance methods, parameterized by
    // the declaring class
    let param = [TypeRef::Entity(student)];
    assert!(course_class.has_method_signature("setBidirectional", &param));
    assert!(!student_class.has_method_signature("setBidirectional", &[TypeRef::Entity(course)]));

    let serializer = Serializer::new(schema);
    let set = course_class
        .method_by_signature("setBidirectional", &param)
        .unwrap();
    assert_eq!(
        serializer.serialize_body(set),
        "Set<Student> setOfstudents = this.getStudents();\n\
         for (Student student : setOfstudents) {\n\
         \x20   student.getCourses().add(this);\n\
         }\n"
    );
    let remove = course_class
        .method_by_signature("removeBidirectional", &param)
        .unwrap();
    assert_eq!(
        serializer.serialize_body(remove),
        "Set<Student> setOfstudents = this.getStudents();\n\
         for (Student student : setOfstudents) {\n\
         \x20   student.getCourses().remove(this);\n\
         }\n"
    );

    // The other entity is durable before the declaring class
    assert_eq!(
        engine.store().save_log(),
        ["com.example.school.Course", "com.example.school.Student"]
    );
}

#[test]
fn unidirectional_many_to_many() {
    let (mut engine, student, course) = school_engine();

    engine.many_to_many(student, "courses", "Course", None).unwrap();

    let schema = engine.schema();
    let forward = schema.class(student).field_by_name("courses").unwrap();
    assert!(forward
        .annotation(AnnotationKind::ManyToMany)
        .unwrap()
        .attrs
        .is_empty());
    assert!(schema.class(course).fields.is_empty());
    assert!(schema.class(course).methods.is_empty());
    assert_eq!(engine.store().save_log(), ["com.example.school.Student"]);
}

#[test]
fn repeated_synthesis_appends_duplicate_snippet() {
    let (mut engine, student, course) = school_engine();

    engine
        .many_to_many(student, "courses", "Course", Some("students"))
        .unwrap();

    // Re-running the synthesis for the same field pair appends a second
    // copy of the iteration snippet; deduplication is by method existence
    // only, not by field pair
    bidirectional::synthesize(
        engine.schema_mut(),
        RelationKind::ManyToMany,
        course,
        student,
        "students",
        "courses",
    )
    .unwrap();

    let schema = engine.schema();
    let param = [TypeRef::Entity(student)];
    let set = schema
        .class(course)
        .method_by_signature("setBidirectional", &param)
        .unwrap();

    assert_eq!(set.body.stmts.len(), 4);
    let body = Serializer::new(schema).serialize_body(set);
    assert_eq!(
        body.matches("Set<Student> setOfstudents = this.getStudents();")
            .count(),
        2
    );
}
