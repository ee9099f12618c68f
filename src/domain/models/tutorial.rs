#[cfg(test)]
#[path = "tutorial_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use super::GeneratedLesson;
use super::LessonStep;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExample {
    pub title: String,
    pub explanation: String,
    pub language: String,
    pub code: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialStep {
    pub title: String,
    pub explanation: String,
    pub code_example: CodeExample,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<CodeExample>,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// The rich tutorial shape: a full walkthrough with a code example, an
/// optional exercise, and tips per step. A flat [`GeneratedLesson`] is always
/// derivable from it, never the reverse.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepByStepTutorial {
    pub title: String,
    pub description: String,
    pub language: String,
    pub concept_explanation: String,
    pub steps: Vec<TutorialStep>,
    #[serde(default)]
    pub additional_resources: Vec<String>,
}

impl StepByStepTutorial {
    /// Flattens the rich tutorial into the lesson shape. Lossy on purpose:
    /// example explanations, exercise titles, the concept explanation, and
    /// additional resources have no counterpart in the target shape and are
    /// dropped. Each step keeps exactly one example (the code example's code)
    /// and turns the exercise code, when present, into the starter code.
    pub fn to_lesson(&self) -> Result<GeneratedLesson> {
        if self.steps.is_empty() {
            bail!("A tutorial with no steps cannot be flattened into a lesson");
        }

        let steps = self
            .steps
            .iter()
            .map(|step| {
                let initial_code = step
                    .exercise
                    .as_ref()
                    .map(|exercise| return exercise.code.to_string())
                    .unwrap_or_default();

                return LessonStep {
                    title: step.title.to_string(),
                    description: step.explanation.to_string(),
                    examples: vec![step.code_example.code.to_string()],
                    tips: step.tips.clone(),
                    initial_code,
                };
            })
            .collect::<Vec<LessonStep>>();

        return Ok(GeneratedLesson {
            lesson_title: self.title.to_string(),
            lesson_description: self.description.to_string(),
            steps,
        });
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialRequest {
    pub topic: String,
    pub user_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programming_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<DifficultyLevel>,
}
