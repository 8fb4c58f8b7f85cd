use super::{ClassId, ClassName, Schema};

/// A reference to a Java type as it appears in a field or method signature.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    Primitive(Primitive),

    /// A type usable by simple name without an import: java.lang built-ins
    /// and unqualified names.
    Simple(String),

    /// A type outside java.lang that must be imported, e.g. `java.util.Date`.
    Qualified(ClassName),

    /// Another class in the schema arena.
    Entity(ClassId),

    /// A set of the element type, used by collection-valued relationship
    /// fields.
    Set(Box<TypeRef>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
}

impl TypeRef {
    pub fn simple(name: impl Into<String>) -> TypeRef {
        TypeRef::Simple(name.into())
    }

    pub fn qualified(package: impl Into<String>, simple: impl Into<String>) -> TypeRef {
        TypeRef::Qualified(ClassName::new(package, simple))
    }

    pub fn set_of(element: TypeRef) -> TypeRef {
        TypeRef::Set(Box::new(element))
    }

    /// Parses a user-supplied type name. Names in java.lang resolve to their
    /// simple form; other dotted names require an import; bare names are
    /// used as-is.
    pub fn parse(src: &str) -> TypeRef {
        match src.rsplit_once('.') {
            Some(("java.lang", simple)) => TypeRef::simple(simple),
            Some((package, simple)) => TypeRef::qualified(package, simple),
            None => TypeRef::simple(src),
        }
    }

    /// True for types eligible to appear in the derived string
    /// representation: primitives and simple built-ins, never relationship
    /// or collection fields.
    pub fn is_scalar(&self) -> bool {
        matches!(self, TypeRef::Primitive(_) | TypeRef::Simple(_))
    }

    /// The qualified name to register as an import on the declaring class,
    /// if the type needs one.
    pub fn import_needed(&self, schema: &Schema) -> Option<String> {
        match self {
            TypeRef::Primitive(_) | TypeRef::Simple(_) => None,
            TypeRef::Qualified(name) => Some(name.qualified()),
            TypeRef::Entity(id) => Some(schema.class(*id).name.qualified()),
            TypeRef::Set(element) => element.import_needed(schema),
        }
    }
}

impl Primitive {
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Char => "char",
        }
    }
}

impl From<Primitive> for TypeRef {
    fn from(value: Primitive) -> Self {
        TypeRef::Primitive(value)
    }
}
