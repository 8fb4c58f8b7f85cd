use entigen_core::schema::{ClassId, Method, Schema, TypeRef, Visibility};
use entigen_core::stmt::{Block, Expr, Stmt};

/// Recomputes the string-representation method from the current eligible
/// field set. Eligible fields are everything except those named `id` or
/// `version` and except non-scalar types, so relationship and collection
/// fields never participate. Full recompute on every call; when no field is
/// eligible the class is left without the method.
pub fn refresh_to_string(schema: &mut Schema, target: ClassId) {
    let class = schema.class_mut(target);

    class.remove_method("toString", &[]);

    let eligible: Vec<String> = class
        .fields
        .iter()
        .filter(|field| field.name != "id" && field.name != "version" && field.ty.is_scalar())
        .map(|field| field.name.clone())
        .collect();

    if eligible.is_empty() {
        return;
    }

    let mut expr = Expr::call(Expr::invoke("getClass", vec![]), "getSimpleName", vec![]);
    for (index, field) in eligible.iter().enumerate() {
        let label = if index == 0 {
            format!(" [{field}: ")
        } else {
            format!(", {field}: ")
        };
        expr = Expr::add(expr, Expr::str(label));
        expr = Expr::add(expr, Expr::field(field.as_str()));
    }
    expr = Expr::add(expr, Expr::str("]"));

    class.add_method(Method {
        name: "toString".into(),
        params: vec![],
        ret: Some(TypeRef::simple("String")),
        visibility: Visibility::Public,
        body: Block::from(vec![Stmt::ret(expr)]),
    });
}
