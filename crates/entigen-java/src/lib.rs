//! Renders class models and their synthesized method bodies to Java source
//! text. Rendering happens only at persistence time; everything upstream
//! works on the structured model.

mod serializer;
pub use serializer::Serializer;
