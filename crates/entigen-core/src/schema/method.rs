use super::{TypeRef, Visibility};
use crate::stmt::Block;

#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,

    pub params: Vec<Param>,

    /// `None` renders as `void`.
    pub ret: Option<TypeRef>,

    pub visibility: Visibility,

    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty: TypeRef,
    pub name: String,
}

impl Method {
    /// Creates a public void method with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: vec![],
            ret: None,
            visibility: Visibility::Public,
            body: Block::default(),
        }
    }

    /// True when the method has the given name and exactly the given ordered
    /// parameter types. Name + parameter type list is the uniqueness key
    /// within a class.
    pub fn signature_matches(&self, name: &str, param_tys: &[TypeRef]) -> bool {
        self.name == name
            && self.params.len() == param_tys.len()
            && self.params.iter().zip(param_tys).all(|(p, ty)| &p.ty == ty)
    }
}

impl Param {
    pub fn new(ty: TypeRef, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}
