use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    let text = "";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_space_only() {
    let text = " ";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_single_slash() {
    let text = "/";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_invalid_prefix() {
    let text = "!q";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_valid_prefix() {
    let text = "/q";
    let cmd = SlashCommand::parse(text);
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}
#[test]
fn it_parse_plain_message() {
    let text = "教我写代码";
    assert!(SlashCommand::parse(text).is_none());
}

#[test]
fn it_is_short_quit() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_quit() {
    let cmd = SlashCommand::parse("/quit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_exit() {
    let cmd = SlashCommand::parse("/exit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_not_quit() {
    let cmd = SlashCommand::parse("/l").unwrap();
    assert!(!cmd.is_quit());
}

#[test]
fn it_is_short_help() {
    let cmd = SlashCommand::parse("/h").unwrap();
    assert!(cmd.is_help());
}
#[test]
fn it_is_help() {
    let cmd = SlashCommand::parse("/help").unwrap();
    assert!(cmd.is_help());
}
#[test]
fn it_is_not_help() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert!(!cmd.is_help());
}

#[test]
fn it_is_short_lesson() {
    let cmd = SlashCommand::parse("/l 指针").unwrap();
    assert!(cmd.is_lesson());
    assert_eq!(cmd.args, vec!["指针".to_string()]);
}
#[test]
fn it_is_lesson() {
    let cmd = SlashCommand::parse("/lesson React Hooks").unwrap();
    assert!(cmd.is_lesson());
    assert_eq!(cmd.args, vec!["React".to_string(), "Hooks".to_string()]);
}
#[test]
fn it_is_lesson_without_topic() {
    let cmd = SlashCommand::parse("/lesson").unwrap();
    assert!(cmd.is_lesson());
    assert!(cmd.args.is_empty());
}
#[test]
fn it_is_not_lesson() {
    let cmd = SlashCommand::parse("/a").unwrap();
    assert!(!cmd.is_lesson());
}

#[test]
fn it_is_short_ask() {
    let cmd = SlashCommand::parse("/a 这一步为什么要用指针").unwrap();
    assert!(cmd.is_ask());
}
#[test]
fn it_is_ask() {
    let cmd = SlashCommand::parse("/ask 有没有具体的例子").unwrap();
    assert!(cmd.is_ask());
}
#[test]
fn it_is_not_ask() {
    let cmd = SlashCommand::parse("/s").unwrap();
    assert!(!cmd.is_ask());
}

#[test]
fn it_is_short_check() {
    let cmd = SlashCommand::parse("/c console.log(1)").unwrap();
    assert!(cmd.is_check());
    assert_eq!(cmd.args, vec!["console.log(1)".to_string()]);
}
#[test]
fn it_is_check() {
    let cmd = SlashCommand::parse("/check return x + y;").unwrap();
    assert!(cmd.is_check());
}
#[test]
fn it_is_not_check() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert!(!cmd.is_check());
}

#[test]
fn it_is_short_sessions() {
    let cmd = SlashCommand::parse("/s").unwrap();
    assert!(cmd.is_sessions());
}
#[test]
fn it_is_sessions() {
    let cmd = SlashCommand::parse("/sessions").unwrap();
    assert!(cmd.is_sessions());
}
#[test]
fn it_is_not_sessions() {
    let cmd = SlashCommand::parse("/help").unwrap();
    assert!(!cmd.is_sessions());
}

#[test]
fn it_is_short_profile() {
    let cmd = SlashCommand::parse("/p").unwrap();
    assert!(cmd.is_profile());
}
#[test]
fn it_is_profile() {
    let cmd = SlashCommand::parse("/profile").unwrap();
    assert!(cmd.is_profile());
}
#[test]
fn it_is_not_profile() {
    let cmd = SlashCommand::parse("/sessions").unwrap();
    assert!(!cmd.is_profile());
}
