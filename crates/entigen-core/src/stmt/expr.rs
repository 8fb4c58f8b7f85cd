use super::BinaryOp;
use crate::schema::TypeRef;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// The receiver instance, `this`
    This,

    Null,

    /// A local variable or parameter reference
    Var(String),

    /// A string literal
    Str(String),

    /// A field access; a bare field name when there is no receiver
    Field(ExprField),

    /// A method invocation; an unqualified call when there is no receiver
    Call(ExprCall),

    /// An object construction, e.g. `new HashSet<Employee>()`
    New(ExprNew),

    Binary(ExprBinary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprField {
    pub recv: Option<Box<Expr>>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    pub recv: Option<Box<Expr>>,
    pub method: String,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprNew {
    pub class: String,
    pub type_arg: Option<TypeRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinary {
    pub op: BinaryOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Var(name.into())
    }

    pub fn str(value: impl Into<String>) -> Expr {
        Expr::Str(value.into())
    }

    /// A bare field reference, `name`
    pub fn field(name: impl Into<String>) -> Expr {
        Expr::Field(ExprField {
            recv: None,
            name: name.into(),
        })
    }

    /// A field reference through a receiver, `recv.name`
    pub fn field_on(recv: Expr, name: impl Into<String>) -> Expr {
        Expr::Field(ExprField {
            recv: Some(Box::new(recv)),
            name: name.into(),
        })
    }

    /// A method invocation through a receiver, `recv.method(args)`
    pub fn call(recv: Expr, method: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::Call(ExprCall {
            recv: Some(Box::new(recv)),
            method: method.into(),
            args,
        })
    }

    /// An unqualified invocation, `method(args)`
    pub fn invoke(method: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::Call(ExprCall {
            recv: None,
            method: method.into(),
            args,
        })
    }

    /// A no-argument construction, `new Class<TypeArg>()`
    pub fn construct(class: impl Into<String>, type_arg: Option<TypeRef>) -> Expr {
        Expr::New(ExprNew {
            class: class.into(),
            type_arg,
        })
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Add, lhs, rhs)
    }

    pub fn ne(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Ne, lhs, rhs)
    }

    /// The null guard `expr != null`
    pub fn not_null(expr: Expr) -> Expr {
        Expr::ne(expr, Expr::Null)
    }

    fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(ExprBinary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }
}
