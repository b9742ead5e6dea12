//! Landing page and its form target.
//!
//! `GET /` renders the page with the current signup count. The form posts
//! to `POST /waitlist`, which runs the same signup path as the JSON API and
//! re-renders the page in its `success` or `error` state with a refreshed
//! count.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use kinetic_shared::waitlist::SignupRequest;
use maud::Markup;
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;
use crate::page::{render_landing, FormStatus, PageView};

/// Fields posted by the landing page form
#[derive(Debug, Deserialize)]
pub struct WaitlistForm {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub stage: Option<String>,
}

/// Render the landing page.
pub async fn home_page(State(state): State<AppState>) -> Markup {
    render_with(&state, FormStatus::Idle).await
}

/// Handle a form submission and re-render the page.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<WaitlistForm>,
) -> Response {
    let status = FormStatus::Idle.submit();
    let request = SignupRequest::new(form.email, form.stage.as_deref());

    let (code, status) = match state.submitter.submit(request).await {
        Ok(_) => (StatusCode::OK, status.finish(Ok(()))),
        Err(err) => {
            let err = ApiError::from(err);
            if err.status_code().is_server_error() {
                tracing::error!(error = %err, "waitlist form submission failed");
            }
            (err.status_code(), status.finish(Err(err.public_message())))
        }
    };

    (code, render_with(&state, status).await).into_response()
}

async fn render_with(state: &AppState, status: FormStatus) -> Markup {
    // A missing count only changes the label
    let count = state.counter.fetch().await.ok().flatten();

    render_landing(&PageView {
        status,
        count,
        capacity: state.capacity(),
    })
}
