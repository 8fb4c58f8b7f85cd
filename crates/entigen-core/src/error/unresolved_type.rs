/// Error when a requested scalar type name cannot be mapped to a known
/// Java type.
#[derive(Debug)]
pub(super) struct UnresolvedTypeError {
    ty: String,
}

impl UnresolvedTypeError {
    pub(super) fn new(ty: String) -> Self {
        UnresolvedTypeError { ty }
    }
}

impl std::error::Error for UnresolvedTypeError {}

impl core::fmt::Display for UnresolvedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "[{}] is not a known scalar type; try something in the java.lang or java.math packages",
            self.ty
        )
    }
}
