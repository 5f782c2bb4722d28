use std::fmt;
use thiserror::Error;

use super::entity::Entity;

/// Which identifier family a name error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Entity,
    Field,
}

impl NameKind {
    fn empty_message(self) -> &'static str {
        match self {
            Self::Entity => "Entity name is required",
            Self::Field => "Field name is required",
        }
    }

    fn format_message(self) -> &'static str {
        match self {
            Self::Entity => {
                "Entity name must start with a letter or underscore and contain only letters, numbers, and underscores"
            }
            Self::Field => {
                "Field name must be a single word or use underscores for multi-word names"
            }
        }
    }
}

/// Errors produced by identifier validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    Empty(NameKind),
    InvalidFormat(NameKind),
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(kind) => write!(f, "{}", kind.empty_message()),
            Self::InvalidFormat(kind) => write!(f, "{}", kind.format_message()),
        }
    }
}

impl std::error::Error for NameError {}

/// Errors produced by field validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error("Field type '{0}' is not one of string, number, boolean, date")]
    InvalidType(String),
}

/// Errors produced by relationship validation. Always first-error: the
/// relationship checks short-circuit rather than aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationshipError {
    #[error("Related entity is required")]
    MissingTarget,
    #[error("Relationship type '{0}' is not a recognized cardinality")]
    InvalidCardinality(String),
    #[error("A relationship with entity '{0}' already exists")]
    DuplicateTarget(String),
}

/// Errors produced by entity-level validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    #[error("An entity named '{0}' already exists")]
    DuplicateName(String),
    #[error("At least one field is required")]
    NoFields,
}

/// Any single validation failure. Entity- and field-level validation
/// aggregate these into a list so every failing rule is reported at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Relationship(#[from] RelationshipError),
    #[error(transparent)]
    Entity(#[from] EntityError),
}

/// Join a list of validation errors into a single display string.
#[must_use]
pub fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors reported when instance data is checked against a generated
/// schema document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    #[error("Instance data must be a JSON object")]
    NotAnObject,
    #[error("Missing required property '{0}'")]
    MissingRequired(String),
    #[error("Property '{property}' expected {expected}, got {actual}")]
    TypeMismatch {
        property: String,
        expected: String,
        actual: String,
    },
    #[error("Property '{property}' must be at least {minimum}")]
    BelowMinimum { property: String, minimum: i64 },
    #[error("Invalid date format for property '{0}'")]
    InvalidDateFormat(String),
}

/// Service-level errors surfaced by the entity collection and the
/// exporter. Validator errors are wrapped in `Validation`, with the
/// rejected candidate attached so callers can retain their edit state.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Invalid entity definition: {}", join_messages(.errors))]
    Validation {
        candidate: Box<Entity>,
        errors: Vec<ValidationError>,
    },
    #[error("Invalid export name '{0}': no usable characters remain after sanitization")]
    InvalidExportName(String),
    #[error("Failed to serialize schema document: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
