use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use owo_colors::OwoColorize;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::chat;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AgentSession;
use crate::domain::services::SessionClient;
use crate::domain::services::TutorialSynthesizer;
use crate::infrastructure::backends::BackendManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn format_session(session: &AgentSession) -> String {
    let mut res = format!(
        "- (ID: {}) {}, Topic: {}",
        session.id,
        session.updated_at.format("%Y-%m-%d %H:%M"),
        session.topic,
    );

    if !session.messages.is_empty() {
        let mut line = session.messages[0]
            .content
            .split('\n')
            .collect::<Vec<_>>()[0]
            .to_string();

        // Chop on characters, the first message is usually Chinese.
        if line.chars().count() >= 70 {
            line = format!("{}...", line.chars().take(67).collect::<String>());
        }
        res = format!("{res}, {line}");
    }

    return res;
}

async fn print_sessions_list() -> Result<()> {
    let sessions = SessionClient::new(BackendManager::get())
        .list(&Config::get(ConfigKey::UserID))
        .await
        .iter()
        .map(|session| {
            return format_session(session);
        })
        .collect::<Vec<String>>();

    if sessions.is_empty() {
        println!("There are no sessions available. You should start your first one!");
    } else {
        println!("{}", sessions.join("\n"));
    }

    return Ok(());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

async fn load_config_from_session_interactive() -> Result<()> {
    let sessions = SessionClient::new(BackendManager::get())
        .list(&Config::get(ConfigKey::UserID))
        .await;

    if sessions.is_empty() {
        println!("There are no sessions available. You should start your first one!");
        return Ok(());
    }

    let session_options = sessions
        .iter()
        .map(|session| {
            return format_session(session);
        })
        .collect::<Vec<String>>();

    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which session would you like to open?")
        .default(0)
        .items(&session_options)
        .interact_opt()?
        .unwrap();

    Config::set(ConfigKey::SessionID, &sessions[idx].id);
    Config::set(ConfigKey::Topic, &sessions[idx].topic);

    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_lesson() -> Command {
    return Command::new("lesson")
        .about("Generates a step-by-step lesson for a topic and prints it.")
        .arg(
            clap::Arg::new("subject")
                .help("The topic to teach, for example 闭包 or JavaScript Promise.")
                .num_args(1..)
                .required(true),
        );
}

fn arg_model() -> Arg {
    return Arg::new(ConfigKey::Model.to_string())
        .short('m')
        .long(ConfigKey::Model.to_string())
        .env("STEPCODE_MODEL")
        .num_args(1)
        .help("The model name forwarded to the conversational agent. The service picks one when not set.");
}

fn subcommand_chat() -> Command {
    return Command::new("chat")
        .about("Start a new chat session.")
        .arg(arg_model());
}

fn subcommand_sessions() -> Command {
    return Command::new("sessions")
        .about("Manage past chat sessions.")
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List all previous sessions with their ids and topics."))
        .subcommand(
            Command::new("open")
                .about("Open a previous session by ID. Omit passing any session ID to load an interactive selection.")
                .arg(
                    clap::Arg::new(ConfigKey::SessionID.to_string())
                        .short('i')
                        .long("id")
                        .help("Session ID")
                        .required(false),
                ),
        );
}

pub fn build() -> Command {
    let commands_text = chat::help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") {
                return format!("CHAT {line}").underline().bold().to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("stepcode")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_lesson())
        .subcommand(subcommand_sessions())
        .arg(arg_model())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("STEPCODE_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::ApiURL.to_string())
                .long(ConfigKey::ApiURL.to_string())
                .env("STEPCODE_API_URL")
                .num_args(1)
                .help(format!("The tutoring service URL to connect to. Pass 'offline' or an empty string to run without a server. [default: {}]", Config::default(ConfigKey::ApiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ApiTimeout.to_string())
                .long(ConfigKey::ApiTimeout.to_string())
                .env("STEPCODE_API_TIMEOUT")
                .num_args(1)
                .help(format!("Time to wait in milliseconds before giving up on a service request. [default: {}]", Config::default(ConfigKey::ApiTimeout)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::UserID.to_string())
                .long(ConfigKey::UserID.to_string())
                .env("STEPCODE_USER_ID")
                .num_args(1)
                .help(format!("The user ID sent to the session and profile endpoints. [default: {}]", Config::default(ConfigKey::UserID)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Topic.to_string())
                .long(ConfigKey::Topic.to_string())
                .env("STEPCODE_TOPIC")
                .num_args(1)
                .help(format!("The default topic for new chat sessions. [default: {}]", Config::default(ConfigKey::Topic)))
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("lesson", lesson_matches)) => {
            Config::load(build(), vec![&matches, lesson_matches]).await?;

            let topic = lesson_matches
                .get_many::<String>("subject")
                .unwrap()
                .map(|entry| {
                    return entry.to_string();
                })
                .collect::<Vec<String>>()
                .join(" ");

            let lesson = TutorialSynthesizer::new(BackendManager::get())
                .generate_lesson(&topic)
                .await;
            chat::print_lesson(&lesson);
            return Ok(false);
        }
        Some(("sessions", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("list", _)) => {
                Config::load(build(), vec![&matches]).await?;
                print_sessions_list().await?;
                return Ok(false);
            }
            Some(("open", open_matches)) => {
                Config::load(build(), vec![&matches, open_matches]).await?;
                if let Some(session_id) =
                    open_matches.get_one::<String>(&ConfigKey::SessionID.to_string())
                {
                    Config::set(ConfigKey::SessionID, session_id);
                } else {
                    load_config_from_session_interactive().await?;
                }
            }
            _ => {
                subcommand_sessions().print_long_help()?;
                return Ok(false);
            }
        },
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
