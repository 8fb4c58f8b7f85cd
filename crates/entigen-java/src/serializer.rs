#[macro_use]
mod fmt;
use fmt::ToJava;

mod delim;
use delim::Comma;

// Fragment serializers
mod annotation;
mod class_def;
mod expr;
mod method;
mod statement;
mod ty;

use entigen_core::schema::{ClassId, ClassModel, Method, Schema};

/// Serialize a class model to Java source text
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema against which entity type references are resolved
    schema: &'a Schema,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized Java
    dst: &'a mut String,

    /// Current indentation level, four spaces per level
    indent: usize,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Renders a complete compilation unit: package declaration, imports,
    /// class-level annotations, fields, and methods.
    pub fn serialize_class(&self, class: &ClassModel) -> String {
        let mut ret = String::new();

        let mut f = Formatter {
            serializer: self,
            dst: &mut ret,
            indent: 0,
        };

        class.to_java(&mut f);

        ret.push('\n');
        ret
    }

    /// Renders one method's body, a statement per line, without the
    /// enclosing braces. Intended for structural assertions in tests.
    pub fn serialize_body(&self, method: &Method) -> String {
        let mut ret = String::new();

        let mut f = Formatter {
            serializer: self,
            dst: &mut ret,
            indent: 0,
        };

        for stmt in &method.body.stmts {
            stmt.to_java(&mut f);
            f.dst.push('\n');
        }

        ret
    }

    fn class_name(&self, id: ClassId) -> &'a str {
        &self.schema.class(id).name.simple
    }
}

impl Formatter<'_> {
    /// Starts a new line at the current indentation level.
    fn newline(&mut self) {
        self.dst.push('\n');
        for _ in 0..self.indent {
            self.dst.push_str("    ");
        }
    }

    /// Ends the current line without indenting, leaving a blank separator.
    fn blank(&mut self) {
        self.dst.push('\n');
    }
}
