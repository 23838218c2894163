use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
};

// A generic error report for loader/action handlers.
// Produced via `Err(some_err).wrap_err("Some context")`
// or `Err(color_eyre::eyre::Report::new(SomeError))`
pub struct Report(color_eyre::Report);

impl std::fmt::Debug for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<E> From<E> for Report
where
    E: Into<color_eyre::Report>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// Tell axum how to convert `Report` into a response. Remote-service details
// stay in the log; the client only sees a generic failure.
impl IntoResponse for Report {
    fn into_response(self) -> Response<Body> {
        let err = self.0;
        let err_string = format!("{err:?}");

        log::error!("{err_string}");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong".to_string(),
        )
            .into_response()
    }
}
