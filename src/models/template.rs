//! This module defines the clinical documentation template model and its
//! category-specific content variants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The supported clinical documentation template categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateType {
    /// Review of all major body systems.
    #[serde(rename = "reviewOfSystems")]
    ReviewOfSystems,
    /// Chief complaint capture.
    #[serde(rename = "chiefComplaint")]
    ChiefComplaint,
    /// Physical examination.
    #[serde(rename = "physicalExam")]
    PhysicalExam,
    /// Assessment and plan.
    #[serde(rename = "assessmentPlan")]
    AssessmentPlan,
}

/// A single clinical finding within a template section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier of the finding, unique within its section.
    pub id: String,
    /// Display name of the finding.
    pub name: String,
    /// Whether the finding defaults to normal.
    #[serde(default = "default_normal")]
    pub normal: bool,
    /// Recorded value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Finding {
    /// Creates a finding that defaults to normal with no recorded value.
    pub fn new(id: &str, name: &str) -> Self {
        Self { id: id.to_string(), name: name.to_string(), normal: true, value: None }
    }
}

/// Provides the default value for a finding's normal flag.
fn default_normal() -> bool {
    true
}

/// A named group of findings within a sectioned template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Identifier of the section, unique within its template.
    pub id: String,
    /// Display name of the section.
    pub name: String,
    /// Findings belonging to this section.
    pub findings: Vec<Finding>,
}

/// A clinical documentation template.
///
/// Templates are stored wholesale as JSON inside a single blob-store
/// document; the shape of `body` depends on the template category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Caller-supplied unique identifier.
    pub id: String,
    /// Human-readable template name.
    pub name: String,
    /// Template category.
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Timestamp when the template was created.
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
    /// Timestamp when the template was last updated.
    #[serde(default = "default_timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Category-specific template content.
    #[serde(flatten)]
    pub body: TemplateBody,
}

/// Category-specific content carried by a template.
///
/// The variants are distinguished purely by which keys are present, matching
/// the stored JSON shape rather than an explicit tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateBody {
    /// Assessment-and-plan templates carry separate assessment and plan
    /// field lists.
    AssessmentPlan {
        /// Fields captured during assessment.
        assessment_fields: Vec<Value>,
        /// Fields captured during planning.
        plan_fields: Vec<Value>,
    },
    /// Sectioned templates (review of systems, physical exam).
    Sections {
        /// Ordered sections of findings.
        sections: Vec<Section>,
    },
    /// Flat field-list templates (chief complaint).
    Fields {
        /// Ordered field definitions.
        fields: Vec<Value>,
    },
}

/// Provides a default timestamp for serde deserialization
fn default_timestamp() -> DateTime<Utc> {
    Utc::now()
}
