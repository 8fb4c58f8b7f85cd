use super::Formatter;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr ),* $(,)?) => {{
        $(
            $fragments.to_java($f);
        )*
    }};
}

pub(super) trait ToJava {
    fn to_java(self, f: &mut Formatter<'_>);
}

impl ToJava for &str {
    fn to_java(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToJava for &String {
    fn to_java(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl<T: ToJava> ToJava for Option<T> {
    fn to_java(self, f: &mut Formatter<'_>) {
        if let Some(fragment) = self {
            fragment.to_java(f);
        }
    }
}

impl<A: ToJava, B: ToJava> ToJava for (A, B) {
    fn to_java(self, f: &mut Formatter<'_>) {
        self.0.to_java(f);
        self.1.to_java(f);
    }
}

impl<A: ToJava, B: ToJava, C: ToJava> ToJava for (A, B, C) {
    fn to_java(self, f: &mut Formatter<'_>) {
        self.0.to_java(f);
        self.1.to_java(f);
        self.2.to_java(f);
    }
}
