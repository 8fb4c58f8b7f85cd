mod annotation;
pub use annotation::{Annotation, AnnotationKind, AttrValue, TemporalType};

mod class;
pub use class::{ClassModel, ClassName};

mod field;
pub use field::{Field, FieldId, Visibility};

mod method;
pub use method::{Method, Param};

pub mod name;

mod relation;
pub use relation::RelationKind;

#[allow(clippy::module_inception)]
mod schema;
pub use schema::{ClassId, Schema};

mod ty;
pub use ty::{Primitive, TypeRef};
