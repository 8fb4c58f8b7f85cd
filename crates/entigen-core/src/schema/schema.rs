use super::{ClassModel, ClassName};

use indexmap::IndexMap;
use std::fmt;

/// The arena of class models, addressed by [`ClassId`]. Classes reference
/// each other by id, so bidirectional association cycles are representable
/// without ownership cycles.
#[derive(Debug, Default)]
pub struct Schema {
    pub classes: IndexMap<ClassId, ClassModel>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ClassId(pub usize);

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty class model and returns its id.
    pub fn register(&mut self, name: ClassName) -> ClassId {
        let id = ClassId(self.classes.len());
        self.classes.insert(id, ClassModel::new(id, name));
        id
    }

    /// Get a class by id
    pub fn class(&self, id: ClassId) -> &ClassModel {
        self.classes.get(&id).expect("invalid class ID")
    }

    pub fn class_mut(&mut self, id: ClassId) -> &mut ClassModel {
        self.classes.get_mut(&id).expect("invalid class ID")
    }

    /// Iterates classes in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassModel> {
        self.classes.values()
    }

    /// Finds a class by simple or qualified name.
    pub fn class_by_name(&self, name: &str) -> Option<&ClassModel> {
        self.classes()
            .find(|class| class.name.simple == name || class.name.qualified() == name)
    }
}

impl ClassId {
    pub(crate) const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ClassId({})", self.0)
    }
}
