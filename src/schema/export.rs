use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::schema::types::{ExportEntry, SchemaDocument, SchemaError};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));
static NON_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("identifier pattern"));

/// A ready-to-download export: the sanitized file name plus the serialized
/// artifact. The engine never writes this anywhere by itself; handing it
/// to a file, an HTTP response, or a clipboard is the caller's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub contents: String,
}

/// Serializes generated documents into the export artifact format: a JSON
/// array of `{name, jsonSchema}` pairs in generation order, pretty-printed
/// with stable key ordering.
pub struct SchemaExporter;

impl SchemaExporter {
    /// Collapse whitespace runs to underscores and strip every character
    /// outside `[A-Za-z0-9_]`. An empty result is an invalid export
    /// request, not a fallback name.
    pub fn sanitize_name(raw: &str) -> Result<String, SchemaError> {
        let collapsed = WHITESPACE_RUN.replace_all(raw, "_");
        let sanitized = NON_IDENTIFIER.replace_all(&collapsed, "");
        if sanitized.is_empty() {
            return Err(SchemaError::InvalidExportName(raw.to_string()));
        }
        Ok(sanitized.into_owned())
    }

    /// Pair each document with its entity name, preserving generation
    /// order.
    #[must_use]
    pub fn export_entries(documents: &[SchemaDocument]) -> Vec<ExportEntry> {
        documents
            .iter()
            .map(|document| ExportEntry {
                name: document.name.clone(),
                json_schema: document.clone(),
            })
            .collect()
    }

    /// Build the export artifact for `documents` under the caller-supplied
    /// name.
    pub fn export(
        documents: &[SchemaDocument],
        raw_name: &str,
    ) -> Result<ExportArtifact, SchemaError> {
        let name = Self::sanitize_name(raw_name)?;
        let contents = serde_json::to_string_pretty(&Self::export_entries(documents))?;
        info!(
            "exported {} schema document(s) as '{}.json'",
            documents.len(),
            name
        );
        Ok(ExportArtifact {
            file_name: format!("{name}.json"),
            contents,
        })
    }

    /// Write an artifact into `directory`, creating it if needed, and
    /// return the full path.
    pub fn write_artifact(
        artifact: &ExportArtifact,
        directory: &Path,
    ) -> Result<PathBuf, SchemaError> {
        std::fs::create_dir_all(directory)?;
        let path = directory.join(&artifact.file_name);
        std::fs::write(&path, &artifact.contents)?;
        info!("wrote export artifact to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::generator::SchemaGenerator;
    use crate::schema::types::{Entity, Field, FieldType};
    use serde_json::json;

    fn note_documents() -> Vec<SchemaDocument> {
        let mut entity = Entity::new("Note");
        entity.add_field(Field::new("body", FieldType::String, true));
        SchemaGenerator::generate(&[entity])
    }

    #[test]
    fn sanitize_collapses_whitespace_and_strips_symbols() {
        assert_eq!(
            SchemaExporter::sanitize_name("my schema!").unwrap(),
            "my_schema"
        );
        assert_eq!(
            SchemaExporter::sanitize_name("  crm   model v2 ").unwrap(),
            "_crm_model_v2_"
        );
        assert_eq!(SchemaExporter::sanitize_name("Orders").unwrap(), "Orders");
    }

    #[test]
    fn unusable_names_are_rejected() {
        assert!(matches!(
            SchemaExporter::sanitize_name("!!!"),
            Err(SchemaError::InvalidExportName(_))
        ));
        assert!(matches!(
            SchemaExporter::sanitize_name(""),
            Err(SchemaError::InvalidExportName(_))
        ));
    }

    #[test]
    fn artifact_is_an_array_of_name_schema_pairs() {
        let artifact = SchemaExporter::export(&note_documents(), "notes").unwrap();
        assert_eq!(artifact.file_name, "notes.json");

        let parsed: serde_json::Value = serde_json::from_str(&artifact.contents).unwrap();
        assert_eq!(
            parsed,
            json!([{
                "name": "Note",
                "jsonSchema": {
                    "name": "Note",
                    "properties": {
                        "body": {"type": "string"},
                        "id": {"type": "integer", "minimum": 1},
                    },
                    "required": ["body"],
                    "definitions": {},
                },
            }])
        );
    }

    #[test]
    fn write_artifact_creates_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = SchemaExporter::export(&note_documents(), "notes").unwrap();
        let path =
            SchemaExporter::write_artifact(&artifact, &dir.path().join("out")).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), artifact.contents);
    }
}
