use indexmap::IndexMap;

/// An annotation attached to a class, field, or method.
///
/// Attributes keep their insertion order so rendered source is stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub kind: AnnotationKind,

    /// Attribute name to value, e.g. `mappedBy -> "owner"`.
    pub attrs: IndexMap<String, AttrValue>,
}

/// An annotation attribute value, distinguished by how it renders.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Rendered as a quoted string literal.
    Str(String),
    /// Rendered verbatim, e.g. `CascadeType.ALL`.
    Literal(String),
    Bool(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    Entity,
    Column,
    Temporal,
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

/// Temporal precision for date-valued fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalType {
    Date,
    Time,
    Timestamp,
}

impl Annotation {
    pub fn new(kind: AnnotationKind) -> Self {
        Self {
            kind,
            attrs: IndexMap::new(),
        }
    }

    pub fn set_str(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), AttrValue::Str(value.into()));
    }

    pub fn set_literal(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs
            .insert(name.into(), AttrValue::Literal(value.into()));
    }

    pub fn set_bool(&mut self, name: impl Into<String>, value: bool) {
        self.attrs.insert(name.into(), AttrValue::Bool(value));
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }
}

impl AnnotationKind {
    pub fn simple_name(self) -> &'static str {
        match self {
            AnnotationKind::Entity => "Entity",
            AnnotationKind::Column => "Column",
            AnnotationKind::Temporal => "Temporal",
            AnnotationKind::OneToOne => "OneToOne",
            AnnotationKind::OneToMany => "OneToMany",
            AnnotationKind::ManyToOne => "ManyToOne",
            AnnotationKind::ManyToMany => "ManyToMany",
        }
    }

    pub fn qualified_name(self) -> String {
        format!("javax.persistence.{}", self.simple_name())
    }

    pub fn is_relation(self) -> bool {
        matches!(
            self,
            AnnotationKind::OneToOne
                | AnnotationKind::OneToMany
                | AnnotationKind::ManyToOne
                | AnnotationKind::ManyToMany
        )
    }
}

impl TemporalType {
    /// The literal attribute value placed on a `@Temporal` annotation.
    pub fn literal(self) -> &'static str {
        match self {
            TemporalType::Date => "TemporalType.DATE",
            TemporalType::Time => "TemporalType.TIME",
            TemporalType::Timestamp => "TemporalType.TIMESTAMP",
        }
    }
}
