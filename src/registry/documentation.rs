//! Registry for patient/encounter documentation instances.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use super::error::RegistryError;
use crate::{
    models::{Documentation, DocumentationCreate},
    persistence::traits::BlobStore,
};

/// Blob store key holding the full documentation collection.
pub const DOCUMENTATION_STORAGE_KEY: &str = "documentation_instances";

/// Manages the documentation collection stored in the blob store.
#[derive(Clone)]
pub struct DocumentationRegistry {
    store: Arc<dyn BlobStore>,
}

impl DocumentationRegistry {
    /// Creates a new registry over the given blob store.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Vec<Documentation>, RegistryError> {
        match self.store.get_json(DOCUMENTATION_STORAGE_KEY).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, documentations: &[Documentation]) -> Result<(), RegistryError> {
        let value = serde_json::to_value(documentations)?;
        self.store.put_json(DOCUMENTATION_STORAGE_KEY, &value).await?;
        Ok(())
    }

    /// Stores a new documentation instance, assigning it an identifier and
    /// timestamps.
    pub async fn create(
        &self,
        create: DocumentationCreate,
    ) -> Result<Documentation, RegistryError> {
        let documentation = Documentation::from_create(create);
        let mut documentations = self.load().await?;
        documentations.push(documentation.clone());
        self.save(&documentations).await?;
        Ok(documentation)
    }

    /// Retrieves a documentation instance by its identifier.
    pub async fn get(&self, documentation_id: &str) -> Result<Documentation, RegistryError> {
        let documentations = self.load().await?;
        documentations.into_iter().find(|d| d.id == documentation_id).ok_or_else(|| {
            RegistryError::NotFound(format!(
                "Documentation with ID {documentation_id} not found"
            ))
        })
    }

    /// Lists all documentation instances recorded for a patient.
    pub async fn list_for_patient(
        &self,
        patient_id: &str,
    ) -> Result<Vec<Documentation>, RegistryError> {
        let mut documentations = self.load().await?;
        documentations.retain(|d| d.patient_id == patient_id);
        Ok(documentations)
    }

    /// Lists all documentation instances recorded for an encounter.
    pub async fn list_for_encounter(
        &self,
        encounter_id: &str,
    ) -> Result<Vec<Documentation>, RegistryError> {
        let mut documentations = self.load().await?;
        documentations.retain(|d| d.encounter_id == encounter_id);
        Ok(documentations)
    }

    /// Replaces the content of an existing documentation instance, stamping
    /// the update timestamp and author.
    pub async fn update_content(
        &self,
        documentation_id: &str,
        content: Value,
        updated_by: &str,
    ) -> Result<Documentation, RegistryError> {
        let mut documentations = self.load().await?;
        let documentation = documentations
            .iter_mut()
            .find(|d| d.id == documentation_id)
            .ok_or_else(|| {
                RegistryError::NotFound(format!(
                    "Documentation with ID {documentation_id} not found"
                ))
            })?;
        documentation.content = content;
        documentation.updated_at = Utc::now();
        documentation.updated_by = Some(updated_by.to_string());
        let updated = documentation.clone();
        self.save(&documentations).await?;
        Ok(updated)
    }
}
