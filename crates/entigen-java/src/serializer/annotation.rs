use super::{Comma, Formatter, ToJava};

use entigen_core::schema::{Annotation, AttrValue};

impl ToJava for &Annotation {
    fn to_java(self, f: &mut Formatter<'_>) {
        fmt!(f, "@", self.kind.simple_name());

        if self.attrs.is_empty() {
            return;
        }

        // A lone `value` attribute renders without its name
        if let (1, Some(value)) = (self.attrs.len(), self.attrs.get("value")) {
            fmt!(f, "(", value, ")");
            return;
        }

        let attrs = Comma(self.attrs.iter().map(|(name, value)| (name, " = ", value)));
        fmt!(f, "(", attrs, ")");
    }
}

impl ToJava for &AttrValue {
    fn to_java(self, f: &mut Formatter<'_>) {
        match self {
            AttrValue::Str(value) => fmt!(f, "\"", value, "\""),
            AttrValue::Literal(value) => fmt!(f, value),
            AttrValue::Bool(true) => fmt!(f, "true"),
            AttrValue::Bool(false) => fmt!(f, "false"),
        }
    }
}
