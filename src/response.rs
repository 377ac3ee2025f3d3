use axum::response::{Html, IntoResponse, Response};

use crate::view::{ViewState, MESSAGE_FIELD};

// ════════════════════════════════════════════════════════════
// 1. The Page Wrapper
// ════════════════════════════════════════════════════════════

/// The echo page, ready to be sent. Wraps a [`ViewState`] and renders it to
/// a full HTML document on the way out.
pub struct PageResponse {
    pub view: ViewState,
}

impl IntoResponse for PageResponse {
    fn into_response(self) -> Response {
        Html(render_page(&self.view)).into_response()
    }
}

// ════════════════════════════════════════════════════════════
// 2. Markup Assembly
// ════════════════════════════════════════════════════════════

/// Renders the document: the current message plus the post-back form, with
/// the input re-bound to the message the way the page last saw it.
///
/// Entity encoding happens here and nowhere else. The `ViewState` keeps the
/// submitted value byte-for-byte; only the rendered output is escaped.
fn render_page(view: &ViewState) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Echo a message</title></head>
<body>
  <p id="message">{text}</p>
  <form method="post">
    <input type="text" name="{field}" value="{value}" />
    <button type="submit">Submit</button>
  </form>
</body>
</html>"#,
        text = htmlescape::encode_minimal(&view.message),
        field = MESSAGE_FIELD,
        value = htmlescape::encode_attribute(&view.message),
    )
}

// ════════════════════════════════════════════════════════════
// 3. Constructor
// ════════════════════════════════════════════════════════════

pub fn page(view: ViewState) -> PageResponse {
    PageResponse { view }
}

#[cfg(test)]
mod tests {
    use super::{page, render_page};
    use crate::view::ViewState;
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};

    #[tokio::test]
    async fn page_responds_with_html_and_200() {
        let response = page(ViewState::initial()).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let ct = response.headers()["content-type"].to_str().expect("ascii");
        assert!(ct.contains("text/html"), "expected text/html, got: {ct}");

        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let text = String::from_utf8(body.to_vec()).expect("page should be utf8");
        assert!(text.contains("Enter your message here"));
    }

    #[test]
    fn markup_characters_are_entity_encoded() {
        let rendered = render_page(&ViewState {
            message: "<script>&".to_owned(),
        });
        assert!(rendered.contains("&lt;script&gt;&amp;"));
        assert!(!rendered.contains("<script>"));
    }

    #[test]
    fn input_value_survives_embedded_quotes() {
        let rendered = render_page(&ViewState {
            message: r#"say "hi""#.to_owned(),
        });
        // The attribute must stay closed: no raw quote between value=" and "
        assert!(rendered.contains(r#"value="say&#x20;&quot;hi&quot;""#));
    }
}
