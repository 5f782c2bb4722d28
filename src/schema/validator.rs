use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::types::{
    Entity, EntityError, Field, FieldError, NameError, NameKind, Relationship, RelationshipError,
    ValidationError,
};

static ENTITY_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("entity name pattern"));

// Single-word alphanumeric starting with a letter, or underscore-delimited
// multi-word with alphanumeric segments.
static FIELD_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9]*$|^[A-Za-z]+(_[A-Za-z0-9]+)*$")
        .expect("field name pattern")
});

/// Validates identifier-style names for entities and fields.
///
/// Pure syntactic checks; first-error only.
pub struct NameValidator;

impl NameValidator {
    pub fn validate_entity_name(name: &str) -> Result<(), NameError> {
        if name.is_empty() {
            return Err(NameError::Empty(NameKind::Entity));
        }
        if !ENTITY_NAME_PATTERN.is_match(name) {
            return Err(NameError::InvalidFormat(NameKind::Entity));
        }
        Ok(())
    }

    pub fn validate_field_name(name: &str) -> Result<(), NameError> {
        if name.is_empty() {
            return Err(NameError::Empty(NameKind::Field));
        }
        if !FIELD_NAME_PATTERN.is_match(name) {
            return Err(NameError::InvalidFormat(NameKind::Field));
        }
        Ok(())
    }
}

/// Validates a single field definition.
///
/// Every failing rule is collected so the caller can surface all problems
/// at once. Duplicate names against `existing` are deliberately not
/// rejected; they are logged, and the last definition wins the property
/// key during generation.
pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_field(
        candidate: &Field,
        existing: &[Field],
    ) -> Result<Field, Vec<ValidationError>> {
        let mut errors: Vec<ValidationError> = Vec::new();

        if let Err(name_error) = NameValidator::validate_field_name(&candidate.name) {
            errors.push(FieldError::Name(name_error).into());
        }

        if !candidate.field_type.is_recognized() {
            errors.push(FieldError::InvalidType(candidate.field_type.to_string()).into());
        }

        if existing.iter().any(|field| field.name == candidate.name) {
            warn!(
                "field '{}' is defined more than once; the last definition wins during generation",
                candidate.name
            );
        }

        if errors.is_empty() {
            Ok(candidate.clone())
        } else {
            Err(errors)
        }
    }
}

/// Validates a single relationship definition against the relationships
/// already present on the entity.
///
/// First-error only. When a relationship is edited in place, its own slot
/// is excluded from the duplicate-target check via `editing_index`.
pub struct RelationshipValidator;

impl RelationshipValidator {
    pub fn validate_relationship(
        candidate: &Relationship,
        existing: &[Relationship],
        editing_index: Option<usize>,
    ) -> Result<Relationship, RelationshipError> {
        if candidate.related_entity.is_empty() {
            return Err(RelationshipError::MissingTarget);
        }

        if !candidate.kind.is_recognized() {
            return Err(RelationshipError::InvalidCardinality(
                candidate.kind.to_string(),
            ));
        }

        let duplicate = existing.iter().enumerate().any(|(index, relationship)| {
            relationship.related_entity == candidate.related_entity
                && editing_index != Some(index)
        });
        if duplicate {
            return Err(RelationshipError::DuplicateTarget(
                candidate.related_entity.clone(),
            ));
        }

        Ok(candidate.clone())
    }
}

/// Validates a whole entity definition against the containing collection.
///
/// Composes the name, field, and relationship validators and aggregates
/// every failure into one list. Whether a relationship target actually
/// exists in `existing` is not checked here; dangling references are
/// resolved lazily by the generator.
pub struct EntityValidator;

impl EntityValidator {
    /// Validate `candidate` against the entities already in the
    /// collection. When editing, `original_name` identifies the entity
    /// being replaced so its own name is excluded from the duplicate
    /// check.
    pub fn validate_entity(
        candidate: &Entity,
        existing: &[Entity],
        original_name: Option<&str>,
    ) -> Result<Entity, Vec<ValidationError>> {
        let mut errors: Vec<ValidationError> = Vec::new();

        if let Err(name_error) = NameValidator::validate_entity_name(&candidate.name) {
            errors.push(name_error.into());
        }

        let collides = existing.iter().any(|entity| {
            entity.name == candidate.name && original_name != Some(entity.name.as_str())
        });
        if collides {
            errors.push(EntityError::DuplicateName(candidate.name.clone()).into());
        }

        if candidate.fields.is_empty() {
            errors.push(EntityError::NoFields.into());
        }
        for (index, field) in candidate.fields.iter().enumerate() {
            if let Err(field_errors) =
                FieldValidator::validate_field(field, &candidate.fields[..index])
            {
                errors.extend(field_errors);
            }
        }

        for (index, relationship) in candidate.relationships.iter().enumerate() {
            if let Err(relationship_error) = RelationshipValidator::validate_relationship(
                relationship,
                &candidate.relationships[..index],
                None,
            ) {
                errors.push(relationship_error.into());
            }
        }

        if errors.is_empty() {
            Ok(candidate.clone())
        } else {
            Err(errors)
        }
    }
}
