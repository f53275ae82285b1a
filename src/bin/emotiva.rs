//! Terminal chat front end for emotiva.
//!
//! Reads one utterance per line from stdin and prints replies to stdout.
//! Tracing goes to stderr so the transcript stays clean.

use clap::Parser;
use emotiva::mood::timeline;
use emotiva::tts::SpeechOutcome;
use emotiva::{ChatPipeline, EmotivaConfig, LanguageSelection, Session};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Emotiva: where every mood matters.
#[derive(Parser)]
#[command(name = "emotiva", version, about)]
struct Cli {
    /// Path to TOML configuration file (defaults to ~/.config/emotiva/config.toml if present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reply language: "auto" or a language name/code (overrides config).
    #[arg(short, long)]
    language: Option<String>,

    /// Synthesize speech for every reply.
    #[arg(long)]
    speak: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("emotiva=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => EmotivaConfig::from_file(path)?,
        None => {
            let path = EmotivaConfig::default_config_path();
            if path.exists() {
                EmotivaConfig::from_file(&path)?
            } else {
                EmotivaConfig::default()
            }
        }
    };
    if let Some(language) = cli.language {
        config.chat.language = language;
    }

    let mut pipeline = ChatPipeline::from_config(&config)?;
    let mut session = Session::new();

    println!("🤖 Emotiva v{}: where every mood matters", env!("CARGO_PKG_VERSION"));
    println!("Commands: /lang <name|auto>, /speak [reply #], /mood, /reset, /quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if let Some(command) = line.strip_prefix('/') {
            if !run_command(command, &mut pipeline, &mut session).await {
                break;
            }
            continue;
        }

        let Some(outcome) = pipeline.handle_turn(&mut session, line).await else {
            continue;
        };
        println!(
            "#{} [{} | {} | {}] {}",
            session.user_turn_count(),
            outcome.emotion,
            outcome.reply.intent,
            outcome.language,
            outcome.reply.text
        );
        if cli.speak {
            report_speech(pipeline.speak_turn(&session, outcome.assistant_index).await);
        }
    }

    tracing::info!(session = %session.id(), turns = session.turns().len(), "session ended");
    Ok(())
}

/// Run a slash command. Returns `false` when the session should end.
async fn run_command(command: &str, pipeline: &mut ChatPipeline, session: &mut Session) -> bool {
    let mut parts = command.split_whitespace();
    match parts.next().unwrap_or_default() {
        "quit" | "exit" => return false,
        "reset" => {
            session.reset();
            println!("(conversation cleared)");
        }
        "lang" => match parts.next().map(LanguageSelection::parse) {
            Some(Ok(selection)) => match pipeline.set_selection(selection) {
                Ok(()) => println!("(reply language: {selection:?})"),
                Err(e) => println!("({e})"),
            },
            Some(Err(e)) => println!("({e})"),
            None => {
                let names: Vec<&str> = pipeline
                    .engine()
                    .languages()
                    .iter()
                    .map(|l| l.display_name())
                    .collect();
                println!(
                    "(current: {:?}; available: auto, {})",
                    pipeline.selection(),
                    names.join(", ")
                );
            }
        },
        "mood" => {
            let points = timeline(session.mood_history());
            if points.is_empty() {
                println!("(no mood history yet)");
            }
            for point in points {
                println!("  #{:<3} {:<10} {}", point.index + 1, point.label.as_str(), point.color);
            }
        }
        "speak" => {
            let outcome = match parts.next().map(str::parse::<usize>) {
                Some(Ok(number)) => match session.reply_index(number) {
                    Some(index) => pipeline.speak_turn(session, index).await,
                    None => SpeechOutcome::Unavailable(format!("no reply #{number}")),
                },
                Some(Err(_)) => SpeechOutcome::Unavailable("reply # must be a number".to_owned()),
                None => pipeline.speak_last(session).await,
            };
            report_speech(outcome);
        }
        other => println!("(unknown command: /{other})"),
    }
    true
}

fn report_speech(outcome: SpeechOutcome) {
    match outcome {
        SpeechOutcome::Ready(artifact) => {
            println!("🔊 {} ({} bytes)", artifact.path.display(), artifact.size);
        }
        SpeechOutcome::Unavailable(reason) => println!("(speech unavailable: {reason})"),
    }
}
