use entigen_core::schema::{
    Annotation, AnnotationKind, ClassName, Field, Method, Param, Schema, TypeRef, Visibility,
};
use entigen_core::stmt::{Block, Expr, Stmt};
use entigen_java::Serializer;

use pretty_assertions::assert_eq;

#[test]
fn renders_a_complete_compilation_unit() {
    let mut schema = Schema::new();
    let dept = schema.register(ClassName::new("com.example.hr", "Dept"));
    let employee = schema.register(ClassName::new("com.example.hr", "Employee"));

    let class = schema.class_mut(dept);
    class.annotations.push(Annotation::new(AnnotationKind::Entity));
    class.add_import("java.util.Set");
    class.add_import("java.util.HashSet");
    class.add_import("com.example.hr.Employee");
    class.add_import("javax.persistence.OneToMany");

    let mut annotation = Annotation::new(AnnotationKind::OneToMany);
    annotation.set_str("mappedBy", "owner");
    let mut field = Field::new("employees", TypeRef::set_of(TypeRef::Entity(employee)));
    field.annotations.push(annotation);
    field.init = Some(Expr::construct("HashSet", Some(TypeRef::Entity(employee))));
    class.add_field(field);

    let mut getter = Method::new("getEmployees");
    getter.ret = Some(TypeRef::set_of(TypeRef::Entity(employee)));
    getter.body = Block::from(vec![Stmt::ret(Expr::field("employees"))]);
    class.add_method(getter);

    let mut setter = Method::new("setEmployees");
    setter.params = vec![Param::new(TypeRef::set_of(TypeRef::Entity(employee)), "value")];
    setter.body = Block::from(vec![Stmt::assign(
        Expr::field_on(Expr::This, "employees"),
        Expr::var("value"),
    )]);
    class.add_method(setter);

    let source = Serializer::new(&schema).serialize_class(schema.class(dept));

    assert_eq!(
        source,
        "\
package com.example.hr;

import java.util.Set;
import java.util.HashSet;
import com.example.hr.Employee;
import javax.persistence.OneToMany;

@Entity
public class Dept {

    @OneToMany(mappedBy = \"owner\")
    private Set<Employee> employees = new HashSet<Employee>();

    public Set<Employee> getEmployees() {
        return employees;
    }

    public void setEmployees(Set<Employee> value) {
        this.employees = value;
    }
}
"
    );
}

#[test]
fn renders_nested_statements_with_indentation() {
    let mut schema = Schema::new();
    let order = schema.register(ClassName::new("com.example.sales", "Order"));
    let item = schema.register(ClassName::new("com.example.sales", "Item"));

    let guard = Expr::call(Expr::var("item"), "getOrder", vec![]);
    let mut method = Method::new("setBidirectional");
    method.params = vec![Param::new(TypeRef::Entity(item), "item")];
    method.body = Block::from(vec![Stmt::if_then(
        Expr::not_null(guard.clone()),
        vec![Stmt::from(Expr::call(guard, "setItems", vec![Expr::This]))],
    )]);
    schema.class_mut(order).add_method(method);

    let source = Serializer::new(&schema).serialize_class(schema.class(order));

    assert_eq!(
        source,
        "\
package com.example.sales;

public class Order {

    public void setBidirectional(Item item) {
        if (item.getOrder() != null) {
            item.getOrder().setItems(this);
        }
    }
}
"
    );
}

#[test]
fn renders_an_empty_class() {
    let mut schema = Schema::new();
    let marker = schema.register(ClassName::new("", "Marker"));

    let source = Serializer::new(&schema).serialize_class(schema.class(marker));

    assert_eq!(source, "public class Marker {\n}\n");
}

#[test]
fn renders_visibility_and_primitive_types() {
    use entigen_core::schema::Primitive;

    let mut schema = Schema::new();
    let counter = schema.register(ClassName::new("com.example", "Counter"));

    let mut field = Field::new("count", TypeRef::Primitive(Primitive::Int));
    field.visibility = Visibility::Protected;
    schema.class_mut(counter).add_field(field);

    let source = Serializer::new(&schema).serialize_class(schema.class(counter));
    assert!(source.contains("protected int count;"));
}
