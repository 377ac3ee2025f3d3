// ./src/routes.rs

use axum::{routing::get, Router};
use tracing::debug;

use crate::extract::FormFields;
use crate::response::{page, PageResponse};
use crate::view::{ViewState, MESSAGE_FIELD};

/// Builds the whole application: one page, either viewed or posted back.
///
/// The router owns no state. Every request is classified by method and
/// handled from scratch; nothing is shared between requests.
pub fn router() -> Router {
    Router::new().route("/", get(show).post(submit))
}

/// GET / — the initial view.
async fn show() -> PageResponse {
    debug!("serving initial view");
    page(ViewState::initial())
}

/// POST / — echo the submitted message back on the same page.
async fn submit(fields: FormFields) -> PageResponse {
    debug!(
        field_present = fields.value(MESSAGE_FIELD).is_some(),
        "form submitted"
    );
    page(ViewState::submitted(&fields))
}
