use super::{Comma, Formatter, ToJava};

use entigen_core::schema::{Method, Param, Visibility};

impl ToJava for &Method {
    fn to_java(self, f: &mut Formatter<'_>) {
        fmt!(f, self.visibility);
        match &self.ret {
            Some(ty) => fmt!(f, ty),
            None => fmt!(f, "void"),
        }
        let params = Comma(&self.params);
        fmt!(f, " ", &self.name, "(", params, ") ", &self.body);
    }
}

impl ToJava for &Param {
    fn to_java(self, f: &mut Formatter<'_>) {
        fmt!(f, &self.ty, " ", &self.name);
    }
}

impl ToJava for Visibility {
    fn to_java(self, f: &mut Formatter<'_>) {
        let s = match self {
            Visibility::Public => "public ",
            Visibility::Protected => "protected ",
            Visibility::PackagePrivate => "",
            Visibility::Private => "private ",
        };
        fmt!(f, s);
    }
}
