use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use crate::schema::types::json_schema::DATE_DESCRIPTION;
use crate::schema::types::{InstanceError, SchemaDocument};

/// Checks instance data against a generated [`SchemaDocument`].
///
/// Generation only describes constraints; this is where they are
/// evaluated. All failures are aggregated so callers see every problem
/// with a record at once.
pub struct InstanceValidator;

impl InstanceValidator {
    pub fn validate_instance(
        document: &SchemaDocument,
        instance: &Value,
    ) -> Result<(), Vec<InstanceError>> {
        let Some(object) = instance.as_object() else {
            return Err(vec![InstanceError::NotAnObject]);
        };

        let mut errors = Vec::new();

        for name in &document.required {
            if !object.contains_key(name) {
                errors.push(InstanceError::MissingRequired(name.clone()));
            }
        }

        for (name, value) in object {
            // Properties outside the schema are ignored; the document
            // describes what it knows about, nothing more.
            if let Some(schema) = document.properties.get(name) {
                check_value(name, schema, value, &mut errors);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_value(property: &str, schema: &Value, value: &Value, errors: &mut Vec<InstanceError>) {
    // Foreign keys accept either an embedded object or an integer id.
    if schema.get("$ref").is_some() {
        if !(value.is_object() || value.is_i64() || value.is_u64()) {
            errors.push(mismatch(property, "object or integer", value));
        }
        return;
    }

    let Some(expected) = schema.get("type").and_then(Value::as_str) else {
        // The unconstrained schema accepts everything.
        return;
    };

    match expected {
        "string" => match value.as_str() {
            Some(text) => {
                let dated = schema.get("description").and_then(Value::as_str)
                    == Some(DATE_DESCRIPTION);
                if dated && !is_calendar_date(text) {
                    errors.push(InstanceError::InvalidDateFormat(property.to_string()));
                }
            }
            None => errors.push(mismatch(property, "string", value)),
        },
        "number" => {
            if !value.is_number() {
                errors.push(mismatch(property, "number", value));
            }
        }
        "boolean" => {
            if !value.is_boolean() {
                errors.push(mismatch(property, "boolean", value));
            }
        }
        "integer" => match value.as_i64() {
            Some(number) => {
                if let Some(minimum) = schema.get("minimum").and_then(Value::as_i64) {
                    if number < minimum {
                        errors.push(InstanceError::BelowMinimum {
                            property: property.to_string(),
                            minimum,
                        });
                    }
                }
            }
            None => errors.push(mismatch(property, "integer", value)),
        },
        "object" => {
            if !value.is_object() {
                errors.push(mismatch(property, "object", value));
            }
        }
        _ => {}
    }
}

fn mismatch(property: &str, expected: &str, actual: &Value) -> InstanceError {
    InstanceError::TypeMismatch {
        property: property.to_string(),
        expected: expected.to_string(),
        actual: json_type_name(actual).to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn is_calendar_date(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}
