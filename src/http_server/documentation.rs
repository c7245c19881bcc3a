//! Handlers for documentation-instance endpoints in the HTTP server.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::{Value, json};

use super::{ApiState, error::ApiError};
use crate::models::DocumentationCreate;

/// Creates a new documentation instance.
pub async fn create_documentation(
    State(state): State<ApiState>,
    Json(payload): Json<DocumentationCreate>,
) -> Result<impl IntoResponse, ApiError> {
    let documentation = state.documentation.create(payload).await?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "Documentation created successfully",
            "documentation": documentation,
        })),
    ))
}

/// Retrieves a specific documentation instance by its ID.
pub async fn get_documentation(
    State(state): State<ApiState>,
    Path(documentation_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let documentation = state.documentation.get(&documentation_id).await?;
    Ok((StatusCode::OK, Json(documentation)))
}

/// Retrieves all documentation instances for a patient.
pub async fn get_patient_documentations(
    State(state): State<ApiState>,
    Path(patient_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let documentations = state.documentation.list_for_patient(&patient_id).await?;
    Ok((StatusCode::OK, Json(json!({ "documentations": documentations }))))
}

/// Retrieves all documentation instances for an encounter.
pub async fn get_encounter_documentations(
    State(state): State<ApiState>,
    Path(encounter_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let documentations = state.documentation.list_for_encounter(&encounter_id).await?;
    Ok((StatusCode::OK, Json(json!({ "documentations": documentations }))))
}

/// Query parameters accepted by the documentation update endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateDocumentationQuery {
    /// User recorded as the author of the update.
    pub updated_by: String,
}

/// Replaces the content of an existing documentation instance.
///
/// The request body is the new content document itself; the author comes
/// from the `updated_by` query parameter.
pub async fn update_documentation(
    State(state): State<ApiState>,
    Path(documentation_id): Path<String>,
    Query(query): Query<UpdateDocumentationQuery>,
    Json(content): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    state.documentation.update_content(&documentation_id, content, &query.updated_by).await?;
    Ok((StatusCode::OK, Json(json!({ "message": "Documentation updated successfully" }))))
}
