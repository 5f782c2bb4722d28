use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Description attached to date-typed string properties. Generation only
/// describes the constraint; enforcement happens when instance data is
/// checked by the
/// [`InstanceValidator`](crate::schema::instance::InstanceValidator).
pub const DATE_DESCRIPTION: &str = "Must be parseable as a calendar date";

/// The derived, per-entity structural description produced by the
/// generator: typed properties, the required-property set, and stub
/// definitions for relationship targets.
///
/// Documents are recomputed from the entity collection on every generation
/// request; they are never mutated in place or partially updated. Property
/// and definition maps keep insertion order, which the export artifact
/// format relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub name: String,
    pub properties: Map<String, Value>,
    pub required: Vec<String>,
    pub definitions: Map<String, Value>,
}

impl SchemaDocument {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Map::new(),
            required: Vec::new(),
            definitions: Map::new(),
        }
    }
}

/// One element of the export artifact: a `{name, jsonSchema}` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub name: String,
    #[serde(rename = "jsonSchema")]
    pub json_schema: SchemaDocument,
}

/// `{type: string}`
#[must_use]
pub fn string_property() -> Value {
    json!({"type": "string"})
}

/// `{type: number}`
#[must_use]
pub fn number_property() -> Value {
    json!({"type": "number"})
}

/// `{type: boolean}`
#[must_use]
pub fn boolean_property() -> Value {
    json!({"type": "boolean"})
}

/// Dates travel as strings carrying the calendar-date annotation.
#[must_use]
pub fn date_property() -> Value {
    json!({"type": "string", "description": DATE_DESCRIPTION})
}

/// The unconstrained schema. Unrecognized type tags degrade to this so
/// generation stays total.
#[must_use]
pub fn any_property() -> Value {
    json!({})
}

/// The auto-injected identifier property.
#[must_use]
pub fn id_property() -> Value {
    json!({"type": "integer", "minimum": 1})
}

/// A foreign-key property referencing `target`'s definition.
#[must_use]
pub fn reference_property(target: &str) -> Value {
    json!({
        "$ref": format!("#/definitions/{target}"),
        "description": format!("Reference to the {target}"),
    })
}

/// Minimal placeholder definition for a relationship target, synthesized
/// whether or not the target exists in the entity collection.
#[must_use]
pub fn stub_definition() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer"}
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_property_points_into_definitions() {
        assert_eq!(
            reference_property("Team"),
            json!({
                "$ref": "#/definitions/Team",
                "description": "Reference to the Team",
            })
        );
    }

    #[test]
    fn document_serializes_with_stable_key_order() {
        let mut document = SchemaDocument::new("User");
        document.properties.insert("b".to_string(), string_property());
        document.properties.insert("a".to_string(), number_property());
        let rendered = serde_json::to_string(&document).unwrap();
        let b_at = rendered.find("\"b\"").unwrap();
        let a_at = rendered.find("\"a\"").unwrap();
        assert!(b_at < a_at, "insertion order must survive serialization");
    }
}
