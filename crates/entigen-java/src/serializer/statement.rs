use super::{Formatter, ToJava};

use entigen_core::stmt::{Block, Stmt};

impl ToJava for &Stmt {
    fn to_java(self, f: &mut Formatter<'_>) {
        match self {
            Stmt::Local(stmt) => {
                fmt!(f, &stmt.ty, " ", &stmt.name, " = ", &stmt.init, ";");
            }
            Stmt::If(stmt) => {
                fmt!(f, "if (", &stmt.cond, ") ", &stmt.then);
            }
            Stmt::ForEach(stmt) => {
                fmt!(
                    f,
                    "for (",
                    &stmt.item_ty,
                    " ",
                    &stmt.var,
                    " : ",
                    &stmt.iterable,
                    ") ",
                    &stmt.body
                );
            }
            Stmt::Assign(stmt) => {
                fmt!(f, &stmt.target, " = ", &stmt.value, ";");
            }
            Stmt::Return(stmt) => {
                fmt!(f, "return ", &stmt.expr, ";");
            }
            Stmt::Expr(expr) => {
                fmt!(f, expr, ";");
            }
        }
    }
}

impl ToJava for &Block {
    fn to_java(self, f: &mut Formatter<'_>) {
        f.dst.push('{');
        f.indent += 1;
        for stmt in &self.stmts {
            f.newline();
            stmt.to_java(f);
        }
        f.indent -= 1;
        f.newline();
        f.dst.push('}');
    }
}
