use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

use crate::forms::pipeline::SubmitOutcome;

pub mod movies;
pub mod music;

// Commit redirects with 303 so the browser re-requests the list view as a
// GET. Rejections and remote failures keep the client on the form.
impl IntoResponse for SubmitOutcome {
    fn into_response(self) -> Response {
        match self {
            SubmitOutcome::Committed { ref redirect_to, .. } => {
                Redirect::to(redirect_to).into_response()
            }
            SubmitOutcome::Rejected { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
            }
            SubmitOutcome::Failed { .. } => (StatusCode::BAD_GATEWAY, Json(self)).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::schema::FieldErrors;

    #[test]
    fn test_committed_outcome_redirects() {
        let response = SubmitOutcome::Committed {
            id: "m1".into(),
            redirect_to: "/movies".into(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(axum::http::header::LOCATION).unwrap(),
            "/movies"
        );
    }

    #[test]
    fn test_rejected_outcome_is_unprocessable() {
        let mut errors = FieldErrors::default();
        errors.push("year", "Must be between 1900 and 2021");

        let response = SubmitOutcome::Rejected { errors }.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_failed_outcome_is_bad_gateway() {
        let response = SubmitOutcome::Failed {
            error: "The change could not be saved".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
