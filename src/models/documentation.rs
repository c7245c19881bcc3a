//! This module defines the patient/encounter documentation instance models.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::template::TemplateType;

/// Payload for creating a new documentation instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentationCreate {
    /// Patient the documentation belongs to.
    pub patient_id: String,
    /// Encounter the documentation belongs to.
    pub encounter_id: String,
    /// Template the documentation was produced from.
    pub template_id: String,
    /// Category of the source template.
    pub template_type: TemplateType,
    /// Structured documentation content.
    pub content: Value,
    /// User who created the documentation.
    pub created_by: String,
}

/// A stored patient/encounter documentation instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Documentation {
    /// Server-generated unique identifier.
    #[serde(default = "generate_documentation_id")]
    pub id: String,
    /// Patient the documentation belongs to.
    pub patient_id: String,
    /// Encounter the documentation belongs to.
    pub encounter_id: String,
    /// Template the documentation was produced from.
    pub template_id: String,
    /// Category of the source template.
    pub template_type: TemplateType,
    /// Structured documentation content.
    pub content: Value,
    /// User who created the documentation.
    pub created_by: String,
    /// Timestamp when the documentation was created.
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
    /// Timestamp when the documentation was last updated.
    #[serde(default = "default_timestamp")]
    pub updated_at: DateTime<Utc>,
    /// User who last updated the documentation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl Documentation {
    /// Builds a stored instance from a creation payload, assigning a fresh
    /// identifier and timestamps.
    pub fn from_create(create: DocumentationCreate) -> Self {
        let now = Utc::now();
        Self {
            id: generate_documentation_id(),
            patient_id: create.patient_id,
            encounter_id: create.encounter_id,
            template_id: create.template_id,
            template_type: create.template_type,
            content: create.content,
            created_by: create.created_by,
            created_at: now,
            updated_at: now,
            updated_by: None,
        }
    }
}

/// Provides a default timestamp for serde deserialization
fn default_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Generates a unique identifier for a documentation instance.
fn generate_documentation_id() -> String {
    let now = Utc::now();
    let mut hasher = DefaultHasher::new();
    now.to_rfc3339().hash(&mut hasher);
    format!("doc-{}-{}", now.timestamp_millis(), hasher.finish() % 10_000)
}
