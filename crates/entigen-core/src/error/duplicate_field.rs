/// Error when a field synthesis targets a class that already contains a
/// field with the requested name.
#[derive(Debug)]
pub(super) struct DuplicateFieldError {
    class: String,
    field: String,
}

impl DuplicateFieldError {
    pub(super) fn new(class: String, field: String) -> Self {
        DuplicateFieldError { class, field }
    }
}

impl std::error::Error for DuplicateFieldError {}

impl core::fmt::Display for DuplicateFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "entity {} already has a field named [{}]",
            self.class, self.field
        )
    }
}
