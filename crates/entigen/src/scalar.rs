use crate::engine::Engine;
use crate::store::{EntityPrompt, SourceStore};
use crate::synth;

use entigen_core::schema::{
    Annotation, AnnotationKind, ClassId, Primitive, TemporalType, TypeRef,
};
use entigen_core::{Error, Result};

const JAVA_LANG_NUMBERS: &[&str] = &["Byte", "Short", "Integer", "Long", "Float", "Double"];
const JAVA_MATH_NUMBERS: &[&str] = &["BigDecimal", "BigInteger"];

/// The scalar-field operations: single-field insertions with a `@Column` (or
/// `@Temporal`) annotation, a string-representation refresh, and persistence
/// of the one touched class.
impl<S: SourceStore, P: EntityPrompt> Engine<S, P> {
    /// Adds a custom-typed field. A trailing `.java` on the type name is
    /// ignored.
    pub fn custom_field(&mut self, current: ClassId, field_name: &str, ty: &str) -> Result<()> {
        let ty = ty.strip_suffix(".java").unwrap_or(ty);
        self.scalar_field(current, TypeRef::parse(ty), field_name)
    }

    pub fn boolean_field(
        &mut self,
        current: ClassId,
        field_name: &str,
        primitive: bool,
    ) -> Result<()> {
        let ty = if primitive {
            Primitive::Boolean.into()
        } else {
            TypeRef::simple("Boolean")
        };
        self.scalar_field(current, ty, field_name)
    }

    pub fn int_field(&mut self, current: ClassId, field_name: &str, primitive: bool) -> Result<()> {
        let ty = if primitive {
            Primitive::Int.into()
        } else {
            TypeRef::simple("Integer")
        };
        self.scalar_field(current, ty, field_name)
    }

    pub fn long_field(
        &mut self,
        current: ClassId,
        field_name: &str,
        primitive: bool,
    ) -> Result<()> {
        let ty = if primitive {
            Primitive::Long.into()
        } else {
            TypeRef::simple("Long")
        };
        self.scalar_field(current, ty, field_name)
    }

    pub fn string_field(&mut self, current: ClassId, field_name: &str) -> Result<()> {
        self.scalar_field(current, TypeRef::simple("String"), field_name)
    }

    /// Adds a number field resolved against the java.lang and java.math
    /// number types.
    pub fn number_field(&mut self, current: ClassId, field_name: &str, ty: &str) -> Result<()> {
        let ty = resolve_number_type(ty)?;
        self.scalar_field(current, ty, field_name)
    }

    /// Adds a `java.util.Date` field with the given temporal precision.
    pub fn temporal_field(
        &mut self,
        current: ClassId,
        temporal: TemporalType,
        field_name: &str,
    ) -> Result<()> {
        let mut annotation = Annotation::new(AnnotationKind::Temporal);
        annotation.set_literal("value", temporal.literal());

        let schema = self.schema_mut();
        synth::field::add_field(
            schema,
            current,
            TypeRef::qualified("java.util", "Date"),
            field_name,
            annotation,
            None,
            &["javax.persistence.TemporalType"],
        )?;
        synth::to_string::refresh_to_string(schema, current);
        self.persist(current)
    }

    fn scalar_field(&mut self, current: ClassId, ty: TypeRef, field_name: &str) -> Result<()> {
        let schema = self.schema_mut();
        synth::field::add_scalar_field(schema, current, ty, field_name, AnnotationKind::Column)?;
        synth::to_string::refresh_to_string(schema, current);
        self.persist(current)
    }
}

fn resolve_number_type(ty: &str) -> Result<TypeRef> {
    let (package, simple) = match ty.rsplit_once('.') {
        Some((package, simple)) => (Some(package), simple),
        None => (None, ty),
    };

    if JAVA_LANG_NUMBERS.contains(&simple) && matches!(package, None | Some("java.lang")) {
        return Ok(TypeRef::simple(simple));
    }
    if JAVA_MATH_NUMBERS.contains(&simple) && matches!(package, None | Some("java.math")) {
        return Ok(TypeRef::qualified("java.math", simple));
    }

    Err(Error::unresolved_type(ty))
}
