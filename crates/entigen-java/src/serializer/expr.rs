use super::{Comma, Formatter, ToJava};

use entigen_core::stmt::{Expr, ExprBinary, ExprCall, ExprField, ExprNew};

impl ToJava for &Expr {
    fn to_java(self, f: &mut Formatter<'_>) {
        match self {
            Expr::This => fmt!(f, "this"),
            Expr::Null => fmt!(f, "null"),
            Expr::Var(name) => fmt!(f, name),
            Expr::Str(value) => fmt!(f, "\"", value, "\""),
            Expr::Field(expr) => expr.to_java(f),
            Expr::Call(expr) => expr.to_java(f),
            Expr::New(expr) => expr.to_java(f),
            Expr::Binary(expr) => expr.to_java(f),
        }
    }
}

impl ToJava for &ExprField {
    fn to_java(self, f: &mut Formatter<'_>) {
        let recv = self.recv.as_deref().map(|recv| (recv, "."));
        fmt!(f, recv, &self.name);
    }
}

impl ToJava for &ExprCall {
    fn to_java(self, f: &mut Formatter<'_>) {
        let recv = self.recv.as_deref().map(|recv| (recv, "."));
        let args = Comma(&self.args);
        fmt!(f, recv, &self.method, "(", args, ")");
    }
}

impl ToJava for &ExprNew {
    fn to_java(self, f: &mut Formatter<'_>) {
        let type_arg = self.type_arg.as_ref().map(|ty| ("<", ty, ">"));
        fmt!(f, "new ", &self.class, type_arg, "()");
    }
}

impl ToJava for &ExprBinary {
    fn to_java(self, f: &mut Formatter<'_>) {
        fmt!(f, self.lhs.as_ref(), " ", self.op.as_str(), " ", self.rhs.as_ref());
    }
}
