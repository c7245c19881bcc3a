//! Registry for clinical documentation templates.

use std::sync::Arc;

use chrono::Utc;

use super::error::RegistryError;
use crate::{
    models::{Finding, Section, Template, TemplateBody, TemplateType},
    persistence::traits::BlobStore,
};

/// Blob store key holding the full template collection.
pub const TEMPLATE_STORAGE_KEY: &str = "documentation_templates";

/// Outcome of a seed operation.
#[derive(Debug, Clone, Copy)]
pub struct SeedOutcome {
    /// Whether the default template set was installed by this call.
    pub seeded: bool,
    /// Number of templates in the collection after the call.
    pub count: usize,
}

/// Manages the template collection stored in the blob store.
#[derive(Clone)]
pub struct TemplateRegistry {
    store: Arc<dyn BlobStore>,
}

impl TemplateRegistry {
    /// Creates a new registry over the given blob store.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Vec<Template>, RegistryError> {
        match self.store.get_json(TEMPLATE_STORAGE_KEY).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, templates: &[Template]) -> Result<(), RegistryError> {
        let value = serde_json::to_value(templates)?;
        self.store.put_json(TEMPLATE_STORAGE_KEY, &value).await?;
        Ok(())
    }

    /// Lists all templates, optionally filtered by category.
    pub async fn list(
        &self,
        template_type: Option<TemplateType>,
    ) -> Result<Vec<Template>, RegistryError> {
        let mut templates = self.load().await?;
        if let Some(filter) = template_type {
            templates.retain(|t| t.template_type == filter);
        }
        Ok(templates)
    }

    /// Retrieves a template by its identifier.
    pub async fn get(&self, template_id: &str) -> Result<Template, RegistryError> {
        let templates = self.load().await?;
        templates.into_iter().find(|t| t.id == template_id).ok_or_else(|| {
            RegistryError::NotFound(format!("Template with ID {template_id} not found"))
        })
    }

    /// Adds a new template to the collection.
    pub async fn create(&self, template: Template) -> Result<Template, RegistryError> {
        let mut templates = self.load().await?;
        if templates.iter().any(|t| t.id == template.id) {
            return Err(RegistryError::Conflict(format!(
                "Template with ID {} already exists",
                template.id
            )));
        }
        templates.push(template.clone());
        self.save(&templates).await?;
        Ok(template)
    }

    /// Replaces an existing template, stamping its update timestamp.
    ///
    /// The identifier in the path wins over whatever the payload carries.
    pub async fn update(
        &self,
        template_id: &str,
        mut template: Template,
    ) -> Result<Template, RegistryError> {
        let mut templates = self.load().await?;
        let position = templates.iter().position(|t| t.id == template_id).ok_or_else(|| {
            RegistryError::NotFound(format!("Template with ID {template_id} not found"))
        })?;
        template.id = template_id.to_string();
        template.updated_at = Utc::now();
        templates[position] = template.clone();
        self.save(&templates).await?;
        Ok(template)
    }

    /// Removes a template from the collection.
    pub async fn delete(&self, template_id: &str) -> Result<(), RegistryError> {
        let mut templates = self.load().await?;
        let initial_count = templates.len();
        templates.retain(|t| t.id != template_id);
        if templates.len() == initial_count {
            return Err(RegistryError::NotFound(format!(
                "Template with ID {template_id} not found"
            )));
        }
        self.save(&templates).await?;
        Ok(())
    }

    /// Installs the default template set when the collection is empty.
    ///
    /// Calling seed on a non-empty collection leaves it untouched and
    /// reports the existing count.
    pub async fn seed(&self) -> Result<SeedOutcome, RegistryError> {
        let templates = self.load().await?;
        if !templates.is_empty() {
            return Ok(SeedOutcome { seeded: false, count: templates.len() });
        }
        let defaults = default_templates();
        let count = defaults.len();
        self.save(&defaults).await?;
        Ok(SeedOutcome { seeded: true, count })
    }
}

/// The default template set installed by seeding.
fn default_templates() -> Vec<Template> {
    vec![standard_review_of_systems()]
}

/// The standard review-of-systems template covering the major body systems.
fn standard_review_of_systems() -> Template {
    let now = Utc::now();
    Template {
        id: "ros-template-1".to_string(),
        name: "Standard Review of Systems".to_string(),
        template_type: TemplateType::ReviewOfSystems,
        description: Some("Comprehensive review of all major body systems".to_string()),
        created_at: now,
        updated_at: now,
        body: TemplateBody::Sections {
            sections: vec![
                Section {
                    id: "constitutional".to_string(),
                    name: "Constitutional".to_string(),
                    findings: vec![
                        Finding::new("fever", "Fever"),
                        Finding::new("chills", "Chills"),
                        Finding::new("fatigue", "Fatigue"),
                        Finding::new("malaise", "Malaise"),
                        Finding::new("weight-loss", "Weight Loss"),
                        Finding::new("weight-gain", "Weight Gain"),
                    ],
                },
                Section {
                    id: "heent".to_string(),
                    name: "HEENT".to_string(),
                    findings: vec![
                        Finding::new("headache", "Headache"),
                        Finding::new("vision-changes", "Vision Changes"),
                        Finding::new("hearing-loss", "Hearing Loss"),
                        Finding::new("ear-pain", "Ear Pain"),
                        Finding::new("tinnitus", "Tinnitus"),
                        Finding::new("nasal-congestion", "Nasal Congestion"),
                        Finding::new("sore-throat", "Sore Throat"),
                    ],
                },
                Section {
                    id: "cardiovascular".to_string(),
                    name: "Cardiovascular".to_string(),
                    findings: vec![
                        Finding::new("chest-pain", "Chest Pain"),
                        Finding::new("palpitations", "Palpitations"),
                        Finding::new("edema", "Edema"),
                        Finding::new("orthopnea", "Orthopnea"),
                        Finding::new("pnd", "PND"),
                    ],
                },
                Section {
                    id: "respiratory".to_string(),
                    name: "Respiratory".to_string(),
                    findings: vec![
                        Finding::new("shortness-of-breath", "Shortness of Breath"),
                        Finding::new("cough", "Cough"),
                        Finding::new("wheezing", "Wheezing"),
                        Finding::new("hemoptysis", "Hemoptysis"),
                    ],
                },
            ],
        },
    }
}
