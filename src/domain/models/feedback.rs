use serde::Deserialize;
use serde::Serialize;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Warning,
    Error,
    #[default]
    None,
}

/// Verdict on a learner's code submission. The wire field for the kind is
/// named `type`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFeedback {
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub message: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}
