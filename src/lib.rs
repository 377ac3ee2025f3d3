// ./src/lib.rs

pub mod config;
pub mod extract;
pub mod response;
pub mod routes;
pub mod view;

// Re-export the core API so a host binary can just `use echoform::*`
pub use extract::FormFields;
pub use response::{page, PageResponse};
pub use routes::router;
pub use view::{ViewState, DEFAULT_PROMPT, MESSAGE_FIELD};
// Re-export Axum primitives callers might need for convenience
pub use axum;
pub use axum::http::StatusCode;
pub use axum::response::Response;
