// ./src/view.rs

use std::collections::HashMap;

/// The message shown before anything has been submitted.
pub const DEFAULT_PROMPT: &str = "Enter your message here";

/// Form key for the message field, fixed at design time. Both the page
/// markup and the submission lookup use this name.
pub const MESSAGE_FIELD: &str = "Message";

// ════════════════════════════════════════════════════════════
// ViewState — everything the rendering layer gets to see
// ════════════════════════════════════════════════════════════

/// Per-request view state. Built fresh for every request and dropped once the
/// response is rendered; nothing survives between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Always a concrete string: the prompt on an initial view, the echoed
    /// value (possibly empty) after a submission.
    pub message: String,
}

impl ViewState {
    /// The initial view of the page, with the placeholder prompt.
    pub fn initial() -> Self {
        Self {
            message: DEFAULT_PROMPT.to_owned(),
        }
    }

    /// A submission: echo whatever the form carried under [`MESSAGE_FIELD`].
    /// A missing field is an absent value, not an error: the message is
    /// simply empty, and never falls back to the prompt.
    pub fn submitted(fields: &HashMap<String, String>) -> Self {
        Self {
            message: fields.get(MESSAGE_FIELD).cloned().unwrap_or_default(),
        }
    }
}
