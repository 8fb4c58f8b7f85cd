use super::{Formatter, ToJava};

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

impl<L> ToJava for Comma<L>
where
    L: IntoIterator,
    L::Item: ToJava,
{
    fn to_java(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s, i);
            s = ", ";
        }
    }
}
