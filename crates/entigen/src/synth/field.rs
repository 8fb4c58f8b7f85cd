use entigen_core::schema::{
    name, Annotation, AnnotationKind, ClassId, ClassModel, Field, FieldId, Method, Param,
    RelationKind, Schema, TypeRef, Visibility,
};
use entigen_core::stmt::{Block, Expr, Stmt};
use entigen_core::{Error, Result};

use tracing::debug;

/// Adds a scalar field with the given annotation, plus accessors.
pub fn add_scalar_field(
    schema: &mut Schema,
    target: ClassId,
    ty: TypeRef,
    field_name: &str,
    kind: AnnotationKind,
) -> Result<FieldId> {
    add_field(schema, target, ty, field_name, Annotation::new(kind), None, &[])
}

/// Adds a field referencing another entity class, annotated with the
/// relationship kind, and registers the entity's import.
pub fn add_entity_field(
    schema: &mut Schema,
    target: ClassId,
    entity: ClassId,
    field_name: &str,
    kind: RelationKind,
) -> Result<FieldId> {
    add_field(
        schema,
        target,
        TypeRef::Entity(entity),
        field_name,
        Annotation::new(kind.annotation()),
        None,
        &[],
    )
}

/// Adds a set-valued field of another entity class, default-initialized to
/// an empty set.
pub fn add_collection_field(
    schema: &mut Schema,
    target: ClassId,
    element: ClassId,
    field_name: &str,
    kind: RelationKind,
) -> Result<FieldId> {
    add_field(
        schema,
        target,
        TypeRef::set_of(TypeRef::Entity(element)),
        field_name,
        Annotation::new(kind.annotation()),
        Some(Expr::construct("HashSet", Some(TypeRef::Entity(element)))),
        &["java.util.Set", "java.util.HashSet"],
    )
}

/// The single-field insertion all variants go through. Rejects a duplicate
/// name before any mutation, registers imports, adds the annotated private
/// field, and synthesizes accessors that do not already exist.
pub(crate) fn add_field(
    schema: &mut Schema,
    target: ClassId,
    ty: TypeRef,
    field_name: &str,
    annotation: Annotation,
    init: Option<Expr>,
    extra_imports: &[&str],
) -> Result<FieldId> {
    let class = schema.class(target);
    if class.has_field(field_name) {
        return Err(Error::duplicate_field(
            class.name.simple.clone(),
            field_name,
        ));
    }

    let type_import = ty.import_needed(schema);
    let annotation_import = annotation.kind.qualified_name();

    let class = schema.class_mut(target);
    for import in extra_imports {
        class.add_import(*import);
    }
    if let Some(import) = type_import {
        class.add_import(import);
    }
    class.add_import(annotation_import);

    let mut field = Field::new(field_name, ty.clone());
    field.annotations.push(annotation);
    field.init = init;
    let id = class.add_field(field);

    debug!(class = %class.name.simple, field = field_name, "added field");

    synthesize_accessors(class, field_name, &ty);

    Ok(id)
}

/// Synthesizes the getter and setter unless methods with those exact
/// signatures already exist.
fn synthesize_accessors(class: &mut ClassModel, field_name: &str, ty: &TypeRef) {
    let getter = name::getter_name(field_name);
    if !class.has_method_signature(&getter, &[]) {
        class.add_method(Method {
            name: getter,
            params: vec![],
            ret: Some(ty.clone()),
            visibility: Visibility::Public,
            body: Block::from(vec![Stmt::ret(Expr::field(field_name))]),
        });
    }

    let setter = name::setter_name(field_name);
    if !class.has_method_signature(&setter, std::slice::from_ref(ty)) {
        class.add_method(Method {
            name: setter,
            params: vec![Param::new(ty.clone(), "value")],
            ret: None,
            visibility: Visibility::Public,
            body: Block::from(vec![Stmt::assign(
                Expr::field_on(Expr::This, field_name),
                Expr::var("value"),
            )]),
        });
    }
}
