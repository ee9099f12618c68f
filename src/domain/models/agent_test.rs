use anyhow::Result;

use super::AgentConfig;
use super::AgentConfigOverride;
use super::AgentTurn;

#[test]
fn it_keeps_defaults_when_the_override_is_empty() {
    let config = AgentConfig::default().merge(&AgentConfigOverride::default());

    assert_eq!(config, AgentConfig::default());
    assert_eq!(config.model, "gpt-3.5-turbo");
    assert_eq!(config.max_tokens, 1000);
    assert_eq!(config.context_window, 4000);
}

#[test]
fn it_merges_only_the_set_fields() {
    let overrides = AgentConfigOverride {
        model: Some("gpt-4".to_string()),
        max_tokens: Some(2000),
        ..AgentConfigOverride::default()
    };

    let config = AgentConfig::default().merge(&overrides);

    assert_eq!(config.model, "gpt-4");
    assert_eq!(config.max_tokens, 2000);
    assert_eq!(config.temperature, AgentConfig::default().temperature);
    assert_eq!(config.context_window, 4000);
}

#[test]
fn it_does_not_mutate_the_base_config() {
    let base = AgentConfig::default();
    let overrides = AgentConfigOverride {
        temperature: Some(0.2),
        ..AgentConfigOverride::default()
    };

    let merged = base.merge(&overrides);

    assert_eq!(base, AgentConfig::default());
    assert_eq!(merged.temperature, 0.2);
}

#[test]
fn it_serializes_turns_with_wire_field_names() -> Result<()> {
    let turn = AgentTurn {
        message: "教我Rust".to_string(),
        session_id: None,
        topic: Some("Rust".to_string()),
        config: AgentConfig::default(),
        is_tutorial_request: true,
    };

    let body = serde_json::to_value(&turn)?;
    assert_eq!(body["message"], "教我Rust");
    assert_eq!(body["topic"], "Rust");
    assert_eq!(body["isTutorialRequest"], true);
    assert_eq!(body["config"]["maxTokens"], 1000);
    assert_eq!(body["config"]["contextWindow"], 4000);
    assert!(body.get("sessionId").is_none());
    return Ok(());
}
