//! A small typed statement tree for synthesized method bodies. Bodies are
//! assembled structurally and rendered to Java syntax only at persistence
//! time, so synthesis stays testable via structural equality.

mod block;
pub use block::Block;

mod expr;
pub use expr::{Expr, ExprBinary, ExprCall, ExprField, ExprNew};

mod op_binary;
pub use op_binary::BinaryOp;

use crate::schema::TypeRef;

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A local variable declaration with initializer
    Local(Local),

    /// A conditional over a block
    If(If),

    /// Iteration over a collection
    ForEach(ForEach),

    Assign(Assign),

    Return(Return),

    /// An expression statement (a call)
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Local {
    pub ty: TypeRef,
    pub name: String,
    pub init: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub cond: Expr,
    pub then: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForEach {
    pub item_ty: TypeRef,
    pub var: String,
    pub iterable: Expr,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub target: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub expr: Expr,
}

impl Stmt {
    pub fn local(ty: TypeRef, name: impl Into<String>, init: Expr) -> Stmt {
        Stmt::Local(Local {
            ty,
            name: name.into(),
            init,
        })
    }

    pub fn if_then(cond: Expr, then: impl Into<Block>) -> Stmt {
        Stmt::If(If {
            cond,
            then: then.into(),
        })
    }

    pub fn for_each(
        item_ty: TypeRef,
        var: impl Into<String>,
        iterable: Expr,
        body: impl Into<Block>,
    ) -> Stmt {
        Stmt::ForEach(ForEach {
            item_ty,
            var: var.into(),
            iterable,
            body: body.into(),
        })
    }

    pub fn assign(target: Expr, value: Expr) -> Stmt {
        Stmt::Assign(Assign { target, value })
    }

    pub fn ret(expr: Expr) -> Stmt {
        Stmt::Return(Return { expr })
    }
}

impl From<Expr> for Stmt {
    fn from(value: Expr) -> Self {
        Stmt::Expr(value)
    }
}
