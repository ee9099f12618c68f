use serde::Deserialize;
use serde::Serialize;

/// One unit of instruction inside a flat lesson. `examples` and `tips` may be
/// empty but are never absent, which is why they default on deserialize.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonStep {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub initial_code: String,
}

/// The flat lesson shape consumed by the single-lesson learning view. Step
/// order is instructional order, index 0 is the entry point.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedLesson {
    pub lesson_title: String,
    pub lesson_description: String,
    pub steps: Vec<LessonStep>,
}
