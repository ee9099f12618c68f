#[cfg(test)]
#[path = "agent_test.rs"]
mod tests;

use crate::domain::models::AgentConfig;
use crate::domain::models::AgentConfigOverride;
use crate::domain::models::AgentResponse;
use crate::domain::models::AgentTurn;
use crate::domain::models::AssistanceRequest;
use crate::domain::models::AssistanceResponse;
use crate::domain::models::BackendHandle;
use crate::domain::models::StepByStepTutorial;
use crate::domain::models::TutorialRequest;
use crate::domain::services::intent;
use crate::domain::services::TutorialSynthesizer;

/// Conversational front door. Classifies each message, synthesizes a tutorial
/// up front on teaching intent, and attaches it to the reply no matter which
/// path produced the reply text. Total like the rest of the services.
pub struct AgentService {
    backend: BackendHandle,
    synthesizer: TutorialSynthesizer,
}

impl AgentService {
    pub fn new(backend: BackendHandle) -> AgentService {
        let synthesizer = TutorialSynthesizer::new(backend.clone());
        return AgentService {
            backend,
            synthesizer,
        };
    }

    /// Produces the reply envelope for one user message. The tutorial, when
    /// the message reads as a teaching request, is synthesized exactly once
    /// and rides along on both the remote and local reply paths.
    pub async fn respond(
        &self,
        message: &str,
        session_id: Option<&str>,
        topic: Option<&str>,
        overrides: &AgentConfigOverride,
    ) -> AgentResponse {
        let config = AgentConfig::default().merge(overrides);
        let is_tutorial = intent::is_tutorial_request(message);

        let mut tutorial = None;
        if is_tutorial {
            let request = TutorialRequest {
                topic: intent::extract_topic(message, topic),
                user_query: message.to_string(),
                programming_language: Some(intent::detect_language(message)),
                difficulty_level: None,
            };
            tutorial = Some(self.synthesizer.generate_tutorial(&request).await);
        }

        let turn = AgentTurn {
            message: message.to_string(),
            session_id: session_id.map(|id| return id.to_string()),
            topic: topic.map(|topic| return topic.to_string()),
            config,
            is_tutorial_request: is_tutorial,
        };

        let mut response = match self.backend.agent_reply(&turn).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = ?err, "agent reply failed, building the local envelope");
                offline_reply(message, session_id, topic)
            }
        };

        attach_tutorial(&mut response, tutorial);
        return response;
    }

    /// Contextual help inside a lesson view. Same contract as [`respond`]
    /// without session tracking or tutorial synthesis.
    pub async fn assist(
        &self,
        question: &str,
        lesson_title: Option<&str>,
        current_step_title: Option<&str>,
    ) -> AssistanceResponse {
        let request = AssistanceRequest {
            user_question: question.to_string(),
            lesson_title: lesson_title.map(|title| return title.to_string()),
            current_step_title: current_step_title.map(|title| return title.to_string()),
        };

        match self.backend.assistance(&request).await {
            Ok(response) => return response,
            Err(err) => {
                tracing::warn!(error = ?err, "assistance request failed, using the reply templates");
            }
        }

        return AssistanceResponse {
            message: offline_message(question, lesson_title),
            related_links: Some(related_links()),
            code_snippets: Some(code_snippets()),
        };
    }
}

fn attach_tutorial(response: &mut AgentResponse, tutorial: Option<StepByStepTutorial>) {
    let Some(tutorial) = tutorial else {
        return;
    };

    match tutorial.to_lesson() {
        Ok(lesson) => response.tutorial = Some(lesson),
        Err(err) => {
            // Unreachable for synthesizer output, which is never empty.
            tracing::warn!(error = ?err, "tutorial could not be flattened into a lesson");
        }
    }
    response.step_by_step_tutorial = Some(tutorial);
}

fn offline_reply(message: &str, session_id: Option<&str>, topic: Option<&str>) -> AgentResponse {
    return AgentResponse {
        session_id: session_id.unwrap_or("mock-session-id").to_string(),
        message: offline_message(message, topic),
        related_links: Some(related_links()),
        code_snippets: Some(code_snippets()),
        suggested_next_questions: Some(vec![
            "如何进一步优化这段代码？".to_string(),
            "这个概念有哪些实际应用场景？".to_string(),
            "有没有相关的最佳实践？".to_string(),
        ]),
        tutorial: None,
        step_by_step_tutorial: None,
    };
}

/// Picks one of the four canned reply templates by keyword. The comparison
/// branch defaults the subject to 编程, the others to 这个主题.
fn offline_message(message: &str, topic: Option<&str>) -> String {
    let lowered = message.to_lowercase();

    if lowered.contains("怎么") || lowered.contains("如何") {
        let subject = topic.unwrap_or("这个主题");
        return format!(
            "作为AI学习助手，我建议您可以按照以下步骤学习{subject}：\n\n1. 首先理解基本概念和原理\n2. 通过简单的例子实践\n3. 逐步尝试更复杂的应用\n4. 查阅官方文档深入学习\n\n您想从哪一方面开始深入了解呢？"
        );
    }

    if lowered.contains("例子") || lowered.contains("示例") {
        let subject = topic.unwrap_or("这个主题");
        return format!(
            "以下是{subject}的一个简单示例：\n\n```javascript\n// 示例代码\nfunction example() {{\n  console.log(\"这是一个示例\");\n  return \"示例结果\";\n}}\n\n// 调用示例\nconst result = example();\nconsole.log(result);\n```\n\n这个例子展示了基本用法，您可以根据需要修改和扩展。您对这个例子有什么疑问吗？"
        );
    }

    if lowered.contains("区别") || lowered.contains("比较") {
        let subject = topic.unwrap_or("编程");
        return format!(
            "在{subject}中，这些概念的主要区别在于：\n\n1. **用途不同**：第一个主要用于A场景，而第二个适用于B场景\n2. **实现方式不同**：第一个使用X技术实现，第二个基于Y技术\n3. **性能特点不同**：第一个在C情况下性能更好，第二个在D情况下更有优势\n\n理解这些区别对选择合适的技术方案非常重要。您想了解更多关于哪一方面的信息？"
        );
    }

    let subject = topic.unwrap_or("这个主题");
    return format!(
        "感谢您的问题！关于{subject}，这是一个很好的学习点。\n\n学习编程最重要的是理解核心概念并通过实践来巩固知识。我建议您可以：\n\n1. 尝试编写一些小型项目来应用所学知识\n2. 参考优质的开源代码来学习最佳实践\n3. 加入相关的技术社区讨论和分享\n\n您对{subject}有什么具体的学习目标吗？"
    );
}

fn related_links() -> Vec<String> {
    return vec![
        "官方文档".to_string(),
        "相关教程".to_string(),
        "常见问题".to_string(),
    ];
}

fn code_snippets() -> Vec<String> {
    return vec!["```javascript\nconsole.log(\"Hello from AI Agent\");\n```".to_string()];
}
