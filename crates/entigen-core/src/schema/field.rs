use super::{Annotation, AnnotationKind, ClassId, TypeRef};
use crate::stmt::Expr;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Uniquely identifies the field within the containing class.
    pub id: FieldId,

    /// The field name
    pub name: String,

    /// The declared type
    pub ty: TypeRef,

    pub visibility: Visibility,

    /// At most one relationship-kind annotation per field.
    pub annotations: Vec<Annotation>,

    /// Initializer expression, set for collection-valued relationship
    /// fields (the empty-set literal).
    pub init: Option<Expr>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub class: ClassId,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Field {
    /// Creates a private field with no annotations. The id is assigned when
    /// the field is added to a class.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            id: FieldId::placeholder(),
            name: name.into(),
            ty,
            visibility: Visibility::Private,
            annotations: vec![],
            init: None,
        }
    }

    pub fn annotation(&self, kind: AnnotationKind) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.kind == kind)
    }

    pub fn annotation_mut(&mut self, kind: AnnotationKind) -> Option<&mut Annotation> {
        self.annotations.iter_mut().find(|a| a.kind == kind)
    }

    pub fn is_relation(&self) -> bool {
        self.annotations.iter().any(|a| a.kind.is_relation())
    }
}

impl FieldId {
    pub(crate) const fn placeholder() -> Self {
        Self {
            class: ClassId::placeholder(),
            index: usize::MAX,
        }
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({:?}, {})", self.class, self.index)
    }
}
