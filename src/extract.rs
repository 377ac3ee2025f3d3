// ./src/extract.rs

use std::collections::HashMap;
use std::ops::Deref;

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};

// ════════════════════════════════════════════════════════════
// 1. The Extractor Struct
// ════════════════════════════════════════════════════════════

/// The submitted form fields, as a plain name → value map.
///
/// Wraps `Form<HashMap<String, String>>` so a handler sees whatever was
/// posted without committing to a typed payload. A well-formed body that
/// lacks a given field still extracts; the field is simply absent from the
/// map. Only undecodable submissions (wrong content type, broken encoding)
/// are rejected, and those rejections are axum's own.
#[derive(Debug, Clone, Default)]
pub struct FormFields(pub HashMap<String, String>);

impl FormFields {
    /// Looks up a single field by name.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl Deref for FormFields {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ════════════════════════════════════════════════════════════
// 2. Axum Integration
// ════════════════════════════════════════════════════════════

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = FormRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state).await?;
        Ok(FormFields(fields))
    }
}
