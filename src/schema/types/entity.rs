use serde::{Deserialize, Serialize};
use std::fmt;

/// A named record type with typed fields and relationships to other entities.
///
/// Entities are owned by the caller's [`EntityCollection`](crate::schema::core::EntityCollection)
/// and identified by `name`, which must be unique within that collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub fields: Vec<Field>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Entity {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            relationships: Vec::new(),
        }
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }
}

/// A scalar-typed, optionally required attribute of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType, required: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            required,
        }
    }
}

/// The type tag carried by a field definition.
///
/// Four tags are recognized; anything else is preserved verbatim in
/// `Other` so that stale definitions can still round-trip through
/// serialization and degrade to an unconstrained schema at generation
/// time instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Other(String),
}

impl FieldType {
    /// Whether this tag is one of the four recognized field types.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "string" => Self::String,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            _ => Self::Other(tag),
        }
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Date => write!(f, "date"),
            Self::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// A directed, cardinality-typed association from one entity to another.
///
/// `related_entity` is a weak reference: a name lookup into the entity
/// collection, never an ownership edge. It may point at an entity that has
/// not been defined yet; the generator papers over missing targets with
/// stub definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(rename = "relatedEntity")]
    pub related_entity: String,
    #[serde(rename = "type")]
    pub kind: RelationshipKind,
}

impl Relationship {
    #[must_use]
    pub fn new(related_entity: impl Into<String>, kind: RelationshipKind) -> Self {
        Self {
            related_entity: related_entity.into(),
            kind,
        }
    }

    /// Render the human-readable description of this relationship as seen
    /// from `current_entity`.
    #[must_use]
    pub fn describe(&self, current_entity: &str) -> String {
        let target = &self.related_entity;
        match self.kind {
            RelationshipKind::OneToMany => {
                format!("One {target} can have many {current_entity}(s).")
            }
            RelationshipKind::ManyToOne => {
                format!("Many {current_entity}(s) can belong to one {target}.")
            }
            RelationshipKind::ManyToMany => {
                format!("Many {current_entity}(s) can belong to many {target}(s).")
            }
            RelationshipKind::OneToOne => {
                format!("One {current_entity} can be associated with one {target}.")
            }
            RelationshipKind::Other(_) => {
                format!("Unrecognized relationship type between {current_entity} and {target}.")
            }
        }
    }
}

/// The directional multiplicity of a relationship.
///
/// Like [`FieldType`], unknown tags are carried in `Other` rather than
/// rejected at the serialization boundary; the validator is what refuses
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
    Other(String),
}

impl RelationshipKind {
    /// Whether this tag is one of the four recognized cardinality kinds.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for RelationshipKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "one-to-one" => Self::OneToOne,
            "one-to-many" => Self::OneToMany,
            "many-to-one" => Self::ManyToOne,
            "many-to-many" => Self::ManyToMany,
            _ => Self::Other(tag),
        }
    }
}

impl From<RelationshipKind> for String {
    fn from(kind: RelationshipKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneToOne => write!(f, "one-to-one"),
            Self::OneToMany => write!(f, "one-to-many"),
            Self::ManyToOne => write!(f, "many-to-one"),
            Self::ManyToMany => write!(f, "many-to-many"),
            Self::Other(tag) => write!(f, "{}", tag),
        }
    }
}
