//! Handlers for template-related endpoints in the HTTP server.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::json;

use super::{ApiState, error::ApiError};
use crate::models::{Template, TemplateType};

/// Query parameters accepted by the template list endpoint.
#[derive(Debug, Deserialize)]
pub struct TemplateListQuery {
    /// Restricts the listing to one template category.
    pub template_type: Option<TemplateType>,
}

/// Retrieves all templates, optionally filtered by category.
pub async fn get_templates(
    State(state): State<ApiState>,
    Query(query): Query<TemplateListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let templates = state.templates.list(query.template_type).await?;
    Ok((StatusCode::OK, Json(json!({ "templates": templates }))))
}

/// Retrieves a specific template by its ID.
pub async fn get_template(
    State(state): State<ApiState>,
    Path(template_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let template = state.templates.get(&template_id).await?;
    Ok((StatusCode::OK, Json(template)))
}

/// Creates a new template from the provided payload.
pub async fn create_template(
    State(state): State<ApiState>,
    Json(template): Json<Template>,
) -> Result<impl IntoResponse, ApiError> {
    let template = state.templates.create(template).await?;
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Template created successfully", "template": template })),
    ))
}

/// Updates an existing template.
pub async fn update_template(
    State(state): State<ApiState>,
    Path(template_id): Path<String>,
    Json(template): Json<Template>,
) -> Result<impl IntoResponse, ApiError> {
    let template = state.templates.update(&template_id, template).await?;
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Template updated successfully", "template": template })),
    ))
}

/// Deletes a template by its ID.
pub async fn delete_template(
    State(state): State<ApiState>,
    Path(template_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.templates.delete(&template_id).await?;
    Ok((StatusCode::OK, Json(json!({ "message": "Template deleted successfully" }))))
}

/// Seeds the default template set if none exists.
pub async fn seed_templates(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let outcome = state.templates.seed().await?;
    let message = if outcome.seeded {
        "Initial templates seeded successfully"
    } else {
        "Templates already exist, skipping seed"
    };
    Ok((StatusCode::OK, Json(json!({ "message": message, "count": outcome.count }))))
}
