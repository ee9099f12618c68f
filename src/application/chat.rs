use anyhow::Result;
use chrono::Utc;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AgentConfigOverride;
use crate::domain::models::AgentResponse;
use crate::domain::models::AgentSession;
use crate::domain::models::BackendName;
use crate::domain::models::CodeFeedback;
use crate::domain::models::FeedbackKind;
use crate::domain::models::GeneratedLesson;
use crate::domain::models::Role;
use crate::domain::models::SlashCommand;
use crate::domain::models::StepByStepTutorial;
use crate::domain::models::UserData;
use crate::domain::services::AgentService;
use crate::domain::services::CodeFeedbackService;
use crate::domain::services::SessionClient;
use crate::domain::services::TutorialSynthesizer;
use crate::domain::services::UserService;
use crate::infrastructure::backends::BackendManager;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /lesson (/l) [TOPIC] - Generates a step-by-step lesson on a topic and prints it. Defaults to the session topic.
- /check (/c) [CODE] - Evaluates code against the current step of the last lesson, advancing on success.
- /ask (/a) [QUESTION] - Asks for help with the current topic without leaving the session.
- /sessions (/s) - Lists your previous sessions.
- /profile (/p) - Shows your profile and learning history.
- /quit /exit (/q) - Exit StepCode.
- /help (/h) - Provides this help menu.
        "#;

    return text.trim().to_string();
}

fn config_overrides() -> AgentConfigOverride {
    let model = Config::get(ConfigKey::Model);
    if model.is_empty() {
        return AgentConfigOverride::default();
    }

    return AgentConfigOverride {
        model: Some(model),
        ..Default::default()
    };
}

pub fn print_lesson(lesson: &GeneratedLesson) {
    println!();
    println!("{}", lesson.lesson_title.bold());
    println!("{}", lesson.lesson_description.dimmed());

    for (idx, step) in lesson.steps.iter().enumerate() {
        println!();
        println!("{}", format!("{n}. {title}", n = idx + 1, title = step.title).bold());
        println!("{}", step.description);

        for example in &step.examples {
            println!();
            println!("{}", example);
        }

        if !step.tips.is_empty() {
            println!();
            for tip in &step.tips {
                println!("{}", format!("  · {tip}").dimmed());
            }
        }
    }
    println!();
}

fn print_tutorial_outline(tutorial: &StepByStepTutorial) {
    println!();
    println!("{}", tutorial.title.bold());
    println!("{}", tutorial.concept_explanation.dimmed());
    for step in &tutorial.steps {
        println!("  {}", step.title);
    }
    if !tutorial.additional_resources.is_empty() {
        println!("{}", format!("  参考资料: {}", tutorial.additional_resources.join("、")).dimmed());
    }
}

fn print_feedback(feedback: &CodeFeedback) {
    println!();
    match feedback.kind {
        FeedbackKind::Success => println!("{}", feedback.message.green().bold()),
        FeedbackKind::Warning => println!("{}", feedback.message.yellow().bold()),
        FeedbackKind::Error => println!("{}", feedback.message.red().bold()),
        FeedbackKind::None => println!("{}", feedback.message.bold()),
    }
    if !feedback.details.is_empty() {
        println!("{}", feedback.details);
    }
    for suggestion in &feedback.suggestions {
        println!("{}", format!("  · {suggestion}").dimmed());
    }
    println!();
}

fn print_profile(user: &UserData) {
    println!();
    println!("{}", user.username.bold());
    println!("{}", user.email.dimmed());
    println!(
        "  主题: {theme}  语言: {language}",
        theme = user.preferences.theme,
        language = user.preferences.language
    );

    if !user.learning_history.is_empty() {
        println!();
        println!("学习记录:");
        for record in &user.learning_history {
            println!(
                "- {title}，进度 {progress}%，第{step}步，{date}",
                title = record.lesson_title,
                progress = record.progress,
                step = record.current_step,
                date = record.last_access_date.format("%Y-%m-%d")
            );
        }
    }
    println!();
}

fn print_response(response: &AgentResponse) {
    println!();
    println!("{}", response.message);

    if let Some(tutorial) = &response.step_by_step_tutorial {
        print_tutorial_outline(tutorial);
    }

    if let Some(questions) = &response.suggested_next_questions {
        println!();
        for question in questions {
            println!("{}", format!("  ? {question}").dimmed());
        }
    }
    println!();
}

async fn print_sessions(sessions: &SessionClient) {
    let listed = sessions.list(&Config::get(ConfigKey::UserID)).await;
    for session in &listed {
        println!(
            "- (ID: {id}) {updated}, {topic}",
            id = session.id,
            updated = session.updated_at.format("%Y-%m-%d %H:%M"),
            topic = session.topic
        );
    }
}

pub async fn start() -> Result<()> {
    let backend = BackendManager::get();
    let agent = AgentService::new(backend.clone());
    let sessions = SessionClient::new(backend.clone());
    let synthesizer = TutorialSynthesizer::new(backend.clone());
    let feedback = CodeFeedbackService::new(backend.clone());
    let users = UserService::new(backend.clone());

    let user_id = Config::get(ConfigKey::UserID);
    let username = Config::get(ConfigKey::Username);
    let topic = Config::get(ConfigKey::Topic);

    let session_id = Config::get(ConfigKey::SessionID);
    let session = if session_id.is_empty() {
        sessions.create(&user_id, &topic).await
    } else {
        // Reopened sessions replay their history before the prompt comes up.
        let history = sessions.messages(&session_id).await;
        for message in &history {
            let label = match message.role {
                Role::Assistant => "AI".to_string(),
                _ => username.to_string(),
            };
            println!("{label}: {content}", label = label.bold(), content = message.content);
        }

        let now = Utc::now();
        AgentSession {
            id: session_id,
            user_id: user_id.to_string(),
            topic: topic.to_string(),
            messages: history,
            created_at: now,
            updated_at: now,
        }
    };

    println!();
    println!(
        "你好！我是你的AI学习助手。我可以帮助你学习关于{topic}的知识。有什么我能帮到你的吗？",
        topic = session.topic
    );
    if backend.name() == BackendName::Offline {
        println!("{}", "Running offline. Replies come from the built-in templates.".dimmed());
    }
    println!();

    // /check walks the most recent lesson one step at a time.
    let mut lesson: Option<GeneratedLesson> = None;
    let mut step_idx: usize = 0;

    loop {
        let line = match Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(&username)
            .interact_text()
        {
            Ok(line) => line,
            Err(_) => break,
        };

        if line.trim().is_empty() {
            continue;
        }

        if let Some(command) = SlashCommand::parse(&line) {
            if command.is_quit() {
                break;
            }
            if command.is_help() {
                println!("{}", help_text());
                continue;
            }
            if command.is_sessions() {
                print_sessions(&sessions).await;
                continue;
            }
            if command.is_profile() {
                let user = users.get(&user_id).await;
                print_profile(&user);
                continue;
            }
            if command.is_lesson() {
                let mut lesson_topic = command.args.join(" ");
                if lesson_topic.is_empty() {
                    lesson_topic = session.topic.to_string();
                }
                let generated = synthesizer.generate_lesson(&lesson_topic).await;
                print_lesson(&generated);
                lesson = Some(generated);
                step_idx = 0;
                continue;
            }
            if command.is_check() {
                let Some(current) = &lesson else {
                    println!("{}", "No lesson yet. Generate one with /lesson first.".dimmed());
                    continue;
                };

                let code = command.args.join(" ");
                let verdict = feedback
                    .evaluate(&code, &current.steps[step_idx], &current.lesson_title)
                    .await;
                print_feedback(&verdict);

                if verdict.kind == FeedbackKind::Success {
                    if step_idx + 1 < current.steps.len() {
                        step_idx += 1;
                        println!("{}", format!("下一步：{}", current.steps[step_idx].title).bold());
                    } else {
                        println!("{}", "恭喜完成本课程！".bold());
                    }
                    println!();
                }
                continue;
            }
            if command.is_ask() {
                let question = command.args.join(" ");
                let assistance = agent.assist(&question, Some(&session.topic), None).await;
                println!();
                println!("{}", assistance.message);
                if let Some(links) = &assistance.related_links {
                    println!("{}", format!("  参考: {}", links.join("、")).dimmed());
                }
                println!();
                continue;
            }
        }

        let response = agent
            .respond(&line, Some(&session.id), Some(&session.topic), &config_overrides())
            .await;
        print_response(&response);
    }

    return Ok(());
}
