//! # Schema Designer
//!
//! This library implements an entity modeling engine: callers describe a
//! set of data entities (name, typed fields, relationships between
//! entities), the engine validates those definitions, and a pure generator
//! derives one JSON-schema-style document per entity, ready for instance
//! validation and export.
//!
//! ## Core Components
//!
//! * `schema::validator` - name, field, relationship, and entity validators
//! * `schema::generator` - derives schema documents from validated entities
//! * `schema::instance` - checks instance data against generated documents
//! * `schema::core` - the caller-owned, ordered entity collection
//! * `schema::export` - export artifact packaging and filename sanitization
//! * `config` - CLI configuration
//!
//! ## Architecture
//!
//! The engine is a pure, synchronous library: validators accept or reject
//! candidate definitions without touching prior state, accepted entities
//! accumulate in an [`EntityCollection`], and generation recomputes every
//! document from scratch on each request. The editing surface (a form UI,
//! a CLI, a test harness) lives outside the crate and talks to it with
//! plain data.

pub mod config;
pub mod schema;

// Re-export main types for convenience
pub use config::{ConfigError, DesignerConfig};
pub use schema::core::EntityCollection;
pub use schema::export::{ExportArtifact, SchemaExporter};
pub use schema::generator::SchemaGenerator;
pub use schema::instance::InstanceValidator;
pub use schema::types::{
    Entity, EntityError, Field, FieldError, FieldType, InstanceError, NameError, NameKind,
    Relationship, RelationshipError, RelationshipKind, SchemaDocument, SchemaError,
    ValidationError,
};
pub use schema::validator::{
    EntityValidator, FieldValidator, NameValidator, RelationshipValidator,
};
