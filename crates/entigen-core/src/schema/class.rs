use super::{Annotation, ClassId, Field, FieldId, Method, TypeRef};

use indexmap::IndexSet;

/// A mutable model of one Java class: fields, methods, imports, and
/// class-level annotations. Identity is the qualified name.
#[derive(Debug, Clone)]
pub struct ClassModel {
    /// Uniquely identifies the class within the schema
    pub id: ClassId,

    pub name: ClassName,

    /// Invariant: field names unique within the class
    pub fields: Vec<Field>,

    /// Invariant: method name + ordered parameter type list unique within
    /// the class
    pub methods: Vec<Method>,

    /// Qualified names, in registration order
    pub imports: IndexSet<String>,

    /// Class-level annotations, e.g. `@Entity`
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName {
    pub package: String,
    pub simple: String,
}

impl ClassName {
    pub fn new(package: impl Into<String>, simple: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple: simple.into(),
        }
    }

    pub fn qualified(&self) -> String {
        if self.package.is_empty() {
            self.simple.clone()
        } else {
            format!("{}.{}", self.package, self.simple)
        }
    }
}

impl ClassModel {
    pub(crate) fn new(id: ClassId, name: ClassName) -> Self {
        Self {
            id,
            name,
            fields: vec![],
            methods: vec![],
            imports: IndexSet::new(),
            annotations: vec![],
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    pub fn field(&self, id: FieldId) -> &Field {
        assert_eq!(self.id, id.class);
        &self.fields[id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_by_name_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    /// Appends a field, assigning its id. The caller checks name uniqueness
    /// first; this only asserts it.
    pub fn add_field(&mut self, mut field: Field) -> FieldId {
        debug_assert!(
            !self.has_field(&field.name),
            "duplicate field {} on {}",
            field.name,
            self.name.simple
        );
        let id = FieldId {
            class: self.id,
            index: self.fields.len(),
        };
        field.id = id;
        self.fields.push(field);
        id
    }

    pub fn has_method_signature(&self, name: &str, param_tys: &[TypeRef]) -> bool {
        self.method_by_signature(name, param_tys).is_some()
    }

    pub fn method_by_signature(&self, name: &str, param_tys: &[TypeRef]) -> Option<&Method> {
        self.methods
            .iter()
            .find(|method| method.signature_matches(name, param_tys))
    }

    pub fn method_by_signature_mut(
        &mut self,
        name: &str,
        param_tys: &[TypeRef],
    ) -> Option<&mut Method> {
        self.methods
            .iter_mut()
            .find(|method| method.signature_matches(name, param_tys))
    }

    pub fn add_method(&mut self, method: Method) {
        debug_assert!(
            !self.has_method_signature(
                &method.name,
                &method.params.iter().map(|p| p.ty.clone()).collect::<Vec<_>>()
            ),
            "duplicate method {} on {}",
            method.name,
            self.name.simple
        );
        self.methods.push(method);
    }

    /// Removes the method with the given signature, if present. Returns true
    /// if a method was removed.
    pub fn remove_method(&mut self, name: &str, param_tys: &[TypeRef]) -> bool {
        let before = self.methods.len();
        self.methods
            .retain(|method| !method.signature_matches(name, param_tys));
        self.methods.len() < before
    }

    /// Registers an import. A no-op when already present.
    pub fn add_import(&mut self, qualified: impl Into<String>) {
        self.imports.insert(qualified.into());
    }
}
