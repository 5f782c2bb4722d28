pub mod entity;
pub mod errors;
pub mod json_schema;

pub use entity::{Entity, Field, FieldType, Relationship, RelationshipKind};
pub use errors::{
    join_messages, EntityError, FieldError, InstanceError, NameError, NameKind, RelationshipError,
    SchemaError, ValidationError,
};
pub use json_schema::{ExportEntry, SchemaDocument};
