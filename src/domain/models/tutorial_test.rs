use anyhow::Result;

use super::CodeExample;
use super::StepByStepTutorial;
use super::TutorialRequest;
use super::TutorialStep;

fn build_tutorial() -> StepByStepTutorial {
    return StepByStepTutorial {
        title: "闭包指南".to_string(),
        description: "理解闭包".to_string(),
        language: "javascript".to_string(),
        concept_explanation: "闭包是函数与其词法环境的组合。".to_string(),
        steps: vec![
            TutorialStep {
                title: "1. 基础".to_string(),
                explanation: "闭包的基本形态。".to_string(),
                code_example: CodeExample {
                    title: "示例".to_string(),
                    explanation: "一个简单的闭包。".to_string(),
                    language: "javascript".to_string(),
                    code: "const inc = () => count++;".to_string(),
                },
                exercise: Some(CodeExample {
                    title: "练习".to_string(),
                    explanation: "完成计数器。".to_string(),
                    language: "javascript".to_string(),
                    code: "function counter() {\n  // 在这里编写代码\n}".to_string(),
                }),
                tips: vec!["先读懂示例".to_string()],
            },
            TutorialStep {
                title: "2. 进阶".to_string(),
                explanation: "闭包与循环。".to_string(),
                code_example: CodeExample {
                    title: "示例".to_string(),
                    explanation: "循环中的闭包。".to_string(),
                    language: "javascript".to_string(),
                    code: "for (let i = 0; i < 3; i++) {}".to_string(),
                },
                exercise: None,
                tips: vec![],
            },
        ],
        additional_resources: vec!["MDN".to_string()],
    };
}

#[test]
fn it_preserves_step_count_when_flattening() -> Result<()> {
    let tutorial = build_tutorial();
    let lesson = tutorial.to_lesson()?;

    assert_eq!(lesson.lesson_title, tutorial.title);
    assert_eq!(lesson.lesson_description, tutorial.description);
    assert_eq!(lesson.steps.len(), tutorial.steps.len());
    return Ok(());
}

#[test]
fn it_keeps_exactly_one_example_per_step() -> Result<()> {
    let tutorial = build_tutorial();
    let lesson = tutorial.to_lesson()?;

    for (idx, step) in lesson.steps.iter().enumerate() {
        assert_eq!(
            step.examples,
            vec![tutorial.steps[idx].code_example.code.to_string()]
        );
        assert_eq!(step.tips, tutorial.steps[idx].tips);
    }
    return Ok(());
}

#[test]
fn it_turns_the_exercise_into_starter_code() -> Result<()> {
    let tutorial = build_tutorial();
    let lesson = tutorial.to_lesson()?;

    assert_eq!(
        lesson.steps[0].initial_code,
        "function counter() {\n  // 在这里编写代码\n}"
    );
    assert!(lesson.steps[1].initial_code.is_empty());
    return Ok(());
}

#[test]
fn it_rejects_a_tutorial_with_no_steps() {
    let mut tutorial = build_tutorial();
    tutorial.steps = vec![];

    let res = tutorial.to_lesson();
    assert!(res.is_err());
}

#[test]
fn it_serializes_requests_with_wire_field_names() -> Result<()> {
    let request = TutorialRequest {
        topic: "指针".to_string(),
        user_query: "教我指针".to_string(),
        programming_language: Some("c".to_string()),
        difficulty_level: None,
    };

    let body = serde_json::to_value(&request)?;
    assert_eq!(body["topic"], "指针");
    assert_eq!(body["userQuery"], "教我指针");
    assert_eq!(body["programmingLanguage"], "c");
    assert!(body.get("difficultyLevel").is_none());
    return Ok(());
}
