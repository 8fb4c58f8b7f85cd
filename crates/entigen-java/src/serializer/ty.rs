use super::{Formatter, ToJava};

use entigen_core::schema::TypeRef;

impl ToJava for &TypeRef {
    fn to_java(self, f: &mut Formatter<'_>) {
        match self {
            TypeRef::Primitive(primitive) => fmt!(f, primitive.as_str()),
            TypeRef::Simple(name) => fmt!(f, name),
            TypeRef::Qualified(name) => fmt!(f, &name.simple),
            TypeRef::Entity(id) => fmt!(f, f.serializer.class_name(*id)),
            TypeRef::Set(element) => fmt!(f, "Set<", element.as_ref(), ">"),
        }
    }
}
