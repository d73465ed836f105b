//! Outcome -> HTTP response mapping
//!
//! Every failure body is a problem-details document. Infrastructure errors
//! are logged here and reach the client without their detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::log_error;
use crate::shared::application::{Outcome, OutcomeKind, ValidationErrors};
use crate::shared::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub status: u16,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl ProblemDetails {
    pub fn new(status: StatusCode, detail: Option<String>) -> Self {
        Self {
            status: status.as_u16(),
            title: status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
            detail,
            errors: None,
        }
    }

    pub fn validation(errors: ValidationErrors) -> Self {
        Self {
            detail: Some("One or more validation errors occurred.".to_string()),
            errors: Some(errors),
            ..Self::new(StatusCode::BAD_REQUEST, None)
        }
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Status code for a non-success outcome, or `success` for `Success`
pub fn status_for(kind: OutcomeKind, success: StatusCode) -> StatusCode {
    match kind {
        OutcomeKind::Success => success,
        OutcomeKind::ValidationError => StatusCode::BAD_REQUEST,
        OutcomeKind::NotFound => StatusCode::NOT_FOUND,
        OutcomeKind::Conflict => StatusCode::CONFLICT,
    }
}

/// Render an outcome, delegating the success body to `on_success`
pub fn outcome_response<T, F>(outcome: Outcome<T>, on_success: F) -> Response
where
    F: FnOnce(T) -> Response,
{
    let status = status_for(outcome.kind(), StatusCode::OK);
    match outcome {
        Outcome::Success(value) => on_success(value),
        Outcome::ValidationError(errors) => ProblemDetails::validation(errors).into_response(),
        Outcome::NotFound(message) | Outcome::Conflict(message) => {
            ProblemDetails::new(status, Some(message)).into_response()
        }
    }
}

/// 400 for requests rejected before reaching a workflow (bad JSON, bad path)
pub fn bad_request(detail: impl Into<String>) -> Response {
    ProblemDetails::new(StatusCode::BAD_REQUEST, Some(detail.into())).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        log_error!("Request failed with {}: {}", status.as_u16(), self);
        ProblemDetails::new(status, None).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn problem_of(response: Response) -> ProblemDetails {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping_covers_every_kind() {
        assert_eq!(status_for(OutcomeKind::Success, StatusCode::CREATED), StatusCode::CREATED);
        assert_eq!(status_for(OutcomeKind::ValidationError, StatusCode::OK), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(OutcomeKind::NotFound, StatusCode::OK), StatusCode::NOT_FOUND);
        assert_eq!(status_for(OutcomeKind::Conflict, StatusCode::OK), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_validation_outcome_carries_field_map() {
        let mut errors = ValidationErrors::new();
        errors.insert("title".to_string(), vec!["Title is required.".to_string()]);

        let response = outcome_response(Outcome::<()>::validation_error(errors.clone()), |_| {
            StatusCode::OK.into_response()
        });

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let problem = problem_of(response).await;
        assert_eq!(problem.status, 400);
        assert_eq!(problem.errors, Some(errors));
    }

    #[tokio::test]
    async fn test_conflict_outcome_carries_message() {
        let response = outcome_response(Outcome::<()>::conflict("already exists"), |_| {
            StatusCode::OK.into_response()
        });

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let problem = problem_of(response).await;
        assert_eq!(problem.title, "Conflict");
        assert_eq!(problem.detail.as_deref(), Some("already exists"));
        assert!(problem.errors.is_none());
    }

    #[tokio::test]
    async fn test_success_uses_callback() {
        let response = outcome_response(Outcome::success(7), |value| {
            (StatusCode::CREATED, Json(value)).into_response()
        });
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_infrastructure_error_is_opaque() {
        let response =
            AppError::DatabaseError("password authentication failed".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let problem = problem_of(response).await;
        assert!(problem.detail.is_none());
    }

    #[tokio::test]
    async fn test_timeout_maps_to_gateway_timeout() {
        let response = AppError::Timeout("import movies".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
