use crate::engine::Engine;
use crate::store::{EntityPrompt, SourceStore};
use crate::synth;

use entigen_core::schema::{AnnotationKind, ClassId, RelationKind};
use entigen_core::Result;

/// The four relationship operations. Each resolves the target entity before
/// any mutation, synthesizes the forward field on the current class, wires
/// the inverse side when an inverse field name is given, refreshes the
/// string representation of every touched class, and persists the secondary
/// class before the current one.
impl<S: SourceStore, P: EntityPrompt> Engine<S, P> {
    /// Adds a one-to-one relationship field to the current class. With an
    /// inverse name, the target class gains the inverse field (`mappedBy`
    /// pointing back at the forward field) and the current class gains the
    /// link-maintenance methods.
    pub fn one_to_one(
        &mut self,
        current: ClassId,
        field_name: &str,
        target_entity: &str,
        inverse_field_name: Option<&str>,
    ) -> Result<()> {
        let target = self.find_entity(Some(target_entity))?;
        let schema = self.schema_mut();

        synth::field::add_entity_field(schema, current, target, field_name, RelationKind::OneToOne)?;

        let mut touched_target = false;
        if let Some(inverse) = non_empty(inverse_field_name) {
            let inverse_id =
                synth::field::add_entity_field(schema, target, current, inverse, RelationKind::OneToOne)?;
            synth::bidirectional::synthesize(
                schema,
                RelationKind::OneToOne,
                current,
                target,
                inverse,
                field_name,
            )?;
            schema.class_mut(target).fields[inverse_id.index]
                .annotation_mut(AnnotationKind::OneToOne)
                .expect("inverse field carries its relationship annotation")
                .set_str("mappedBy", field_name);
            touched_target = true;
        }

        if touched_target {
            synth::to_string::refresh_to_string(schema, target);
        }
        synth::to_string::refresh_to_string(schema, current);

        if touched_target {
            self.persist(target)?;
        }
        self.persist(current)
    }

    /// Adds a set-valued one-to-many relationship field to the current
    /// ("one") class. With an inverse name, the forward annotation gains
    /// `mappedBy`, `cascade` and `orphanRemoval`, the "many" class gains a
    /// scalar many-to-one field, and the current class gains the
    /// link-maintenance methods.
    pub fn one_to_many(
        &mut self,
        current: ClassId,
        field_name: &str,
        target_entity: &str,
        inverse_field_name: Option<&str>,
    ) -> Result<()> {
        let many = self.find_entity(Some(target_entity))?;
        let schema = self.schema_mut();

        let forward =
            synth::field::add_collection_field(schema, current, many, field_name, RelationKind::OneToMany)?;

        let mut touched_many = false;
        if let Some(inverse) = non_empty(inverse_field_name) {
            let class = schema.class_mut(current);
            {
                let annotation = class.fields[forward.index]
                    .annotation_mut(AnnotationKind::OneToMany)
                    .expect("forward field carries its relationship annotation");
                annotation.set_str("mappedBy", inverse);
                annotation.set_literal("cascade", "CascadeType.ALL");
                annotation.set_bool("orphanRemoval", true);
            }
            class.add_import("javax.persistence.CascadeType");

            synth::bidirectional::synthesize(
                schema,
                RelationKind::OneToMany,
                current,
                many,
                field_name,
                inverse,
            )?;
            synth::field::add_entity_field(schema, many, current, inverse, RelationKind::ManyToOne)?;
            touched_many = true;
        }

        if touched_many {
            synth::to_string::refresh_to_string(schema, many);
        }
        synth::to_string::refresh_to_string(schema, current);

        if touched_many {
            self.persist(many)?;
        }
        self.persist(current)
    }

    /// Adds a scalar many-to-one relationship field to the current ("many")
    /// class. With an inverse name, the target ("one") class gains a
    /// set-valued one-to-many field (`mappedBy` pointing back, cascade ALL)
    /// and hosts the link-maintenance methods; a direct many-to-one wiring
    /// is rejected by the synthesizer as inherently directional.
    pub fn many_to_one(
        &mut self,
        current: ClassId,
        field_name: &str,
        target_entity: &str,
        inverse_field_name: Option<&str>,
    ) -> Result<()> {
        let one = self.find_entity(Some(target_entity))?;
        let schema = self.schema_mut();

        synth::field::add_entity_field(schema, current, one, field_name, RelationKind::ManyToOne)?;

        let mut touched_one = false;
        if let Some(inverse) = non_empty(inverse_field_name) {
            let inverse_id =
                synth::field::add_collection_field(schema, one, current, inverse, RelationKind::OneToMany)?;
            let class = schema.class_mut(one);
            {
                let annotation = class.fields[inverse_id.index]
                    .annotation_mut(AnnotationKind::OneToMany)
                    .expect("inverse field carries its relationship annotation");
                annotation.set_str("mappedBy", field_name);
                annotation.set_literal("cascade", "CascadeType.ALL");
            }
            class.add_import("javax.persistence.CascadeType");

            synth::bidirectional::synthesize(
                schema,
                RelationKind::OneToMany,
                one,
                current,
                inverse,
                field_name,
            )?;
            touched_one = true;
        }

        if touched_one {
            synth::to_string::refresh_to_string(schema, one);
        }
        synth::to_string::refresh_to_string(schema, current);

        if touched_one {
            self.persist(one)?;
        }
        self.persist(current)
    }

    /// Adds a set-valued many-to-many relationship field to the current
    /// class. With an inverse name, the other entity gains the mirrored
    /// collection field and hosts the link-maintenance methods, and the
    /// forward annotation gains `mappedBy`.
    pub fn many_to_many(
        &mut self,
        current: ClassId,
        field_name: &str,
        target_entity: &str,
        inverse_field_name: Option<&str>,
    ) -> Result<()> {
        let other = self.find_entity(Some(target_entity))?;
        let schema = self.schema_mut();

        let forward =
            synth::field::add_collection_field(schema, current, other, field_name, RelationKind::ManyToMany)?;

        let mut touched_other = false;
        if let Some(inverse) = non_empty(inverse_field_name) {
            synth::bidirectional::synthesize(
                schema,
                RelationKind::ManyToMany,
                other,
                current,
                inverse,
                field_name,
            )?;
            schema.class_mut(current).fields[forward.index]
                .annotation_mut(AnnotationKind::ManyToMany)
                .expect("forward field carries its relationship annotation")
                .set_str("mappedBy", inverse);
            synth::field::add_collection_field(schema, other, current, inverse, RelationKind::ManyToMany)?;
            touched_other = true;
        }

        if touched_other {
            synth::to_string::refresh_to_string(schema, other);
        }
        synth::to_string::refresh_to_string(schema, current);

        if touched_other {
            self.persist(other)?;
        }
        self.persist(current)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
