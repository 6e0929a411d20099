//! Stateless grading endpoints

use axum::Json;

use crate::models::*;
use accent_core::{base_equals, validate as grade};

/// POST /api/validate
pub async fn validate(Json(request): Json<ValidateRequest>) -> Json<ValidationVerdict> {
    let verdict = grade(&request.submitted, &request.reference);
    tracing::debug!(category = verdict.category.as_str(), "validated answer");
    Json(verdict)
}

/// POST /api/compare
pub async fn compare(Json(request): Json<CompareRequest>) -> Json<CompareResponse> {
    Json(CompareResponse {
        equivalent: base_equals(&request.a, &request.b),
    })
}
