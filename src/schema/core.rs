use log::info;

use crate::schema::export::{ExportArtifact, SchemaExporter};
use crate::schema::generator::SchemaGenerator;
use crate::schema::types::{Entity, SchemaDocument, SchemaError};
use crate::schema::validator::EntityValidator;

/// The caller-owned, ordered collection of entity definitions.
///
/// Every mutation is gated by [`EntityValidator`]; a rejected candidate
/// leaves the collection untouched and is handed back inside the error.
/// Order matters: generation emits documents in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EntityCollection {
    entities: Vec<Entity>,
}

impl EntityCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.name == name)
    }

    /// Validate `candidate` and append it to the collection.
    pub fn add(&mut self, candidate: Entity) -> Result<(), SchemaError> {
        match EntityValidator::validate_entity(&candidate, &self.entities, None) {
            Ok(entity) => {
                info!("added entity '{}'", entity.name);
                self.entities.push(entity);
                Ok(())
            }
            Err(errors) => Err(SchemaError::Validation {
                candidate: Box::new(candidate),
                errors,
            }),
        }
    }

    /// Validate `candidate` and replace the entity previously known as
    /// `original_name`, keeping its position. The entity being edited is
    /// excluded from the duplicate-name check, so renaming and saving
    /// under the same name both work.
    pub fn update(&mut self, original_name: &str, candidate: Entity) -> Result<(), SchemaError> {
        let Some(position) = self
            .entities
            .iter()
            .position(|entity| entity.name == original_name)
        else {
            return Err(SchemaError::NotFound(original_name.to_string()));
        };

        match EntityValidator::validate_entity(&candidate, &self.entities, Some(original_name)) {
            Ok(entity) => {
                info!("updated entity '{}' as '{}'", original_name, entity.name);
                self.entities[position] = entity;
                Ok(())
            }
            Err(errors) => Err(SchemaError::Validation {
                candidate: Box::new(candidate),
                errors,
            }),
        }
    }

    /// Remove the entity named `name`, returning it if present.
    /// Relationships in other entities that point at it are left alone;
    /// they become dangling references, which generation tolerates.
    pub fn remove(&mut self, name: &str) -> Option<Entity> {
        let position = self.entities.iter().position(|entity| entity.name == name)?;
        let removed = self.entities.remove(position);
        info!("removed entity '{}'", removed.name);
        Some(removed)
    }

    /// Derive one schema document per entity, in collection order.
    #[must_use]
    pub fn generate(&self) -> Vec<SchemaDocument> {
        SchemaGenerator::generate(&self.entities)
    }

    /// Generate and package the export artifact under `raw_name`.
    pub fn export(&self, raw_name: &str) -> Result<ExportArtifact, SchemaError> {
        SchemaExporter::export(&self.generate(), raw_name)
    }
}
