use serde_json::Value;

use crate::schema::types::json_schema::{
    any_property, boolean_property, date_property, id_property, number_property,
    reference_property, string_property, stub_definition,
};
use crate::schema::types::{Entity, FieldType, SchemaDocument};

/// Property name of the auto-injected identifier.
const ID_PROPERTY: &str = "id";

/// Derives one [`SchemaDocument`] per entity from a validated collection.
///
/// Generation is pure, deterministic, and total: it never mutates its
/// input, never fails, and degrades unrecognized field types to the
/// unconstrained schema instead of erroring. Output order preserves input
/// entity order; within a document, properties appear in field order,
/// then the auto-injected `id` (when absent), then relationship-derived
/// foreign keys in relationship order.
pub struct SchemaGenerator;

impl SchemaGenerator {
    #[must_use]
    pub fn generate(entities: &[Entity]) -> Vec<SchemaDocument> {
        entities.iter().map(Self::generate_document).collect()
    }

    fn generate_document(entity: &Entity) -> SchemaDocument {
        let mut document = SchemaDocument::new(&entity.name);

        for field in &entity.fields {
            document
                .properties
                .insert(field.name.clone(), property_schema(&field.field_type));
            if field.required && !document.required.contains(&field.name) {
                document.required.push(field.name.clone());
            }
        }

        // Never overwrites a user-defined id field, and never lands in
        // the required set.
        if !document.properties.contains_key(ID_PROPERTY) {
            document
                .properties
                .insert(ID_PROPERTY.to_string(), id_property());
        }

        for relationship in &entity.relationships {
            let target = &relationship.related_entity;
            if !document.definitions.contains_key(target) {
                // Stubs are synthesized even for targets absent from the
                // entity collection; dangling references stay valid.
                document
                    .definitions
                    .insert(target.clone(), stub_definition());
            }
            document
                .properties
                .insert(foreign_key_name(target), reference_property(target));
        }

        document
    }
}

/// The `{related_entity}_id` property name used for foreign keys.
#[must_use]
pub fn foreign_key_name(target: &str) -> String {
    format!("{target}_id")
}

fn property_schema(field_type: &FieldType) -> Value {
    match field_type {
        FieldType::String => string_property(),
        FieldType::Number => number_property(),
        FieldType::Boolean => boolean_property(),
        FieldType::Date => date_property(),
        FieldType::Other(_) => any_property(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{Field, Relationship, RelationshipKind};
    use serde_json::json;

    fn user_entity() -> Entity {
        let mut entity = Entity::new("User");
        entity.add_field(Field::new("email", FieldType::String, true));
        entity.add_relationship(Relationship::new("Team", RelationshipKind::ManyToOne));
        entity
    }

    #[test]
    fn generates_the_reference_user_document() {
        let documents = SchemaGenerator::generate(&[user_entity()]);
        assert_eq!(documents.len(), 1);

        let document = &documents[0];
        assert_eq!(document.name, "User");
        assert_eq!(document.required, vec!["email".to_string()]);
        assert_eq!(
            serde_json::to_value(&document.properties).unwrap(),
            json!({
                "email": {"type": "string"},
                "id": {"type": "integer", "minimum": 1},
                "Team_id": {
                    "$ref": "#/definitions/Team",
                    "description": "Reference to the Team",
                },
            })
        );
        assert_eq!(
            serde_json::to_value(&document.definitions).unwrap(),
            json!({
                "Team": {
                    "type": "object",
                    "properties": {"id": {"type": "integer"}},
                },
            })
        );
    }

    #[test]
    fn property_order_is_fields_then_id_then_foreign_keys() {
        let documents = SchemaGenerator::generate(&[user_entity()]);
        let keys: Vec<&str> = documents[0].properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["email", "id", "Team_id"]);
    }

    #[test]
    fn user_defined_id_is_never_overwritten() {
        let mut entity = Entity::new("Invoice");
        entity.add_field(Field::new("id", FieldType::String, true));
        let documents = SchemaGenerator::generate(&[entity]);
        let document = &documents[0];
        assert_eq!(
            document.properties.get("id"),
            Some(&json!({"type": "string"}))
        );
        assert_eq!(document.required, vec!["id".to_string()]);
    }

    #[test]
    fn injected_id_is_optional() {
        let mut entity = Entity::new("Note");
        entity.add_field(Field::new("body", FieldType::String, false));
        let documents = SchemaGenerator::generate(&[entity]);
        let document = &documents[0];
        assert_eq!(
            document.properties.get("id"),
            Some(&json!({"type": "integer", "minimum": 1}))
        );
        assert!(document.required.is_empty());
    }

    #[test]
    fn date_fields_carry_the_calendar_annotation() {
        let mut entity = Entity::new("Event");
        entity.add_field(Field::new("starts_on", FieldType::Date, true));
        let documents = SchemaGenerator::generate(&[entity]);
        assert_eq!(
            documents[0].properties.get("starts_on"),
            Some(&json!({
                "type": "string",
                "description": "Must be parseable as a calendar date",
            }))
        );
    }

    #[test]
    fn unrecognized_field_types_degrade_to_the_unconstrained_schema() {
        let mut entity = Entity::new("Legacy");
        entity.add_field(Field::new(
            "payload",
            FieldType::Other("relation".to_string()),
            false,
        ));
        let documents = SchemaGenerator::generate(&[entity]);
        assert_eq!(documents[0].properties.get("payload"), Some(&json!({})));
    }

    #[test]
    fn dangling_targets_still_get_stub_definitions() {
        let documents = SchemaGenerator::generate(&[user_entity()]);
        // No "Team" entity exists anywhere in the input.
        assert!(documents[0].definitions.contains_key("Team"));
    }

    #[test]
    fn generation_is_deterministic() {
        let entities = vec![user_entity()];
        let first = serde_json::to_string(&SchemaGenerator::generate(&entities)).unwrap();
        let second = serde_json::to_string(&SchemaGenerator::generate(&entities)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn output_preserves_input_entity_order() {
        let mut team = Entity::new("Team");
        team.add_field(Field::new("title", FieldType::String, true));
        let entities = vec![user_entity(), team];
        let names: Vec<String> = SchemaGenerator::generate(&entities)
            .into_iter()
            .map(|document| document.name)
            .collect();
        assert_eq!(names, vec!["User".to_string(), "Team".to_string()]);
    }
}
