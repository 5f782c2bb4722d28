pub mod core;
pub mod export;
pub mod generator;
pub mod instance;
pub mod types;
pub mod validator;

pub use core::EntityCollection;
pub use export::{ExportArtifact, SchemaExporter};
pub use generator::SchemaGenerator;
pub use instance::InstanceValidator;
pub use types::{
    Entity, EntityError, Field, FieldError, FieldType, InstanceError, NameError, NameKind,
    Relationship, RelationshipError, RelationshipKind, SchemaDocument, SchemaError,
    ValidationError,
};
pub use validator::{EntityValidator, FieldValidator, NameValidator, RelationshipValidator};
