use entigen_core::schema::{
    name, ClassId, Method, Param, RelationKind, Schema, TypeRef, Visibility,
};
use entigen_core::stmt::{Block, Expr, Stmt};
use entigen_core::{bail, Result};

use tracing::info;

const SET_METHOD: &str = "setBidirectional";
const REMOVE_METHOD: &str = "removeBidirectional";

/// Synthesizes or appends the `setBidirectional`/`removeBidirectional`
/// method bodies for a bidirectional association.
///
/// `owning` hosts the methods; `other` is the single parameter type and, for
/// collection kinds, the loop element type. `owner_field` is the field read
/// off the guard or loop source, `inverse_field` the accessor invoked on
/// each element. When a method with the exact single-parameter signature
/// already exists its body is kept as a prefix and the new statements are
/// appended; repeated synthesis for the same field pair therefore appends a
/// second copy of the snippet. Deduplication is by method existence only.
pub fn synthesize(
    schema: &mut Schema,
    kind: RelationKind,
    owning: ClassId,
    other: ClassId,
    owner_field: &str,
    inverse_field: &str,
) -> Result<()> {
    info!(kind = ?kind, "adding bidirectional relationship");

    match kind {
        RelationKind::OneToOne => {
            one_to_one(schema, owning, other, owner_field, inverse_field);
        }
        RelationKind::OneToMany => {
            one_to_many(schema, owning, other, owner_field, inverse_field);
        }
        RelationKind::ManyToMany => {
            many_to_many(schema, owning, other, owner_field, inverse_field);
        }
        RelationKind::ManyToOne => {
            bail!("a many-to-one association is directional; declare the inverse from the one side")
        }
    }

    Ok(())
}

fn one_to_one(
    schema: &mut Schema,
    owning: ClassId,
    other: ClassId,
    owner_field: &str,
    inverse_field: &str,
) {
    let param = name::local_var(&schema.class(other).name.simple);
    let guarded = Expr::call(Expr::var(param.as_str()), name::getter_name(owner_field), vec![]);

    let body = |value: Expr| {
        vec![Stmt::if_then(
            Expr::not_null(guarded.clone()),
            vec![Stmt::from(Expr::call(
                guarded.clone(),
                name::setter_name(inverse_field),
                vec![value],
            ))],
        )]
    };

    append_link_method(schema, owning, other, &param, SET_METHOD, body(Expr::This));
    append_link_method(schema, owning, other, &param, REMOVE_METHOD, body(Expr::Null));
}

fn one_to_many(
    schema: &mut Schema,
    owning: ClassId,
    other: ClassId,
    owner_field: &str,
    inverse_field: &str,
) {
    let many_simple = schema.class(other).name.simple.clone();
    let loop_var = name::local_var(&many_simple);
    let alias = format!("setOf{many_simple}");
    let item_ty = TypeRef::Entity(other);

    let body = |value: Expr| {
        vec![
            Stmt::local(
                TypeRef::set_of(item_ty.clone()),
                alias.as_str(),
                Expr::call(Expr::This, name::getter_name(owner_field), vec![]),
            ),
            Stmt::for_each(
                item_ty.clone(),
                loop_var.as_str(),
                Expr::var(alias.as_str()),
                vec![Stmt::from(Expr::call(
                    Expr::var(loop_var.as_str()),
                    name::setter_name(inverse_field),
                    vec![value],
                ))],
            ),
        ]
    };

    // The generated body links every element of the collection; the
    // parameter itself is not referenced, and the loop variable takes the
    // lower-cased class name, so the parameter gets the neutral name.
    append_link_method(schema, owning, other, "value", SET_METHOD, body(Expr::This));
    append_link_method(schema, owning, other, "value", REMOVE_METHOD, body(Expr::Null));
}

fn many_to_many(
    schema: &mut Schema,
    owning: ClassId,
    other: ClassId,
    owner_field: &str,
    inverse_field: &str,
) {
    let elem_simple = schema.class(other).name.simple.clone();
    let loop_var = name::local_var(&elem_simple);
    let alias = format!("setOf{owner_field}");
    let item_ty = TypeRef::Entity(other);

    // The inverse side holds a collection, so elements are linked through
    // add/remove on it rather than a setter.
    let body = |mutator: &str| {
        vec![
            Stmt::local(
                TypeRef::set_of(item_ty.clone()),
                alias.as_str(),
                Expr::call(Expr::This, name::getter_name(owner_field), vec![]),
            ),
            Stmt::for_each(
                item_ty.clone(),
                loop_var.as_str(),
                Expr::var(alias.as_str()),
                vec![Stmt::from(Expr::call(
                    Expr::call(
                        Expr::var(loop_var.as_str()),
                        name::getter_name(inverse_field),
                        vec![],
                    ),
                    mutator,
                    vec![Expr::This],
                ))],
            ),
        ]
    };

    append_link_method(schema, owning, other, "value", SET_METHOD, body("add"));
    append_link_method(schema, owning, other, "value", REMOVE_METHOD, body("remove"));
}

/// Appends to the method with the exact single-parameter signature or
/// creates it. Existing bodies are never overwritten.
fn append_link_method(
    schema: &mut Schema,
    owning: ClassId,
    other: ClassId,
    param_name: &str,
    method_name: &str,
    stmts: Vec<Stmt>,
) {
    let param_ty = TypeRef::Entity(other);
    let class = schema.class_mut(owning);

    match class.method_by_signature_mut(method_name, std::slice::from_ref(&param_ty)) {
        Some(method) => method.body.append(stmts),
        None => class.add_method(Method {
            name: method_name.into(),
            params: vec![Param::new(param_ty, param_name)],
            ret: None,
            visibility: Visibility::Public,
            body: Block::from(stmts),
        }),
    }
}
