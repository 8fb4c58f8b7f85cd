use super::{Formatter, ToJava};

use entigen_core::schema::ClassModel;

impl ToJava for &ClassModel {
    fn to_java(self, f: &mut Formatter<'_>) {
        if !self.name.package.is_empty() {
            fmt!(f, "package ", &self.name.package, ";");
            f.blank();
            f.blank();
        }

        if !self.imports.is_empty() {
            for import in &self.imports {
                fmt!(f, "import ", import, ";");
                f.blank();
            }
            f.blank();
        }

        for annotation in &self.annotations {
            annotation.to_java(f);
            f.blank();
        }

        fmt!(f, "public class ", &self.name.simple, " {");

        f.indent += 1;

        for field in &self.fields {
            f.blank();
            for annotation in &field.annotations {
                f.newline();
                annotation.to_java(f);
            }
            f.newline();
            fmt!(f, field.visibility, &field.ty, " ", &field.name);
            if let Some(init) = &field.init {
                fmt!(f, " = ", init);
            }
            fmt!(f, ";");
        }

        for method in &self.methods {
            f.blank();
            f.newline();
            method.to_java(f);
        }

        f.indent -= 1;
        f.newline();
        fmt!(f, "}");
    }
}
