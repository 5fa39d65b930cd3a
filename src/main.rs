use chrono::{Local, NaiveTime};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use voicebell::config::Config;
use voicebell::repl::{ReplAction, Session, process_slash_command};
use voicebell::store::{AlarmStore, TimerStore};
use voicebell::{
    CommandParser, ExecutionResult, Normalizer, TimerEvent, TokioTimerMonitor,
    VoiceCommandExecutor,
};

#[derive(Parser)]
#[command(name = "voicebell")]
struct Cli {
    /// Config file (defaults to ./voicebell.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show how an utterance is understood, without running it
    Parse {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Run one utterance and wait for a started timer to ring
    Exec {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Time of day to resolve against, HH:MM (defaults to now)
        #[arg(long, value_parser = parse_clock)]
        now: Option<NaiveTime>,
    },
}

fn parse_clock(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM: {}", e))
}

#[hotpath::main]
fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    match cli.command {
        Some(Command::Parse { text }) => {
            let text = text.join(" ");
            let normalized = Normalizer::from_config(&config.voice).normalize(&text);
            println!("{}", CommandParser::new(&config.voice).parse(&normalized));
            Ok(())
        }
        Some(Command::Exec { text, now }) => run_once(&config, &text.join(" "), now).await,
        None => run_repl(&config).await,
    }
}

struct App {
    executor: VoiceCommandExecutor,
    session: Session,
    timer_events: flume::Receiver<TimerEvent>,
}

fn build_app(config: &Config) -> App {
    let alarms = Arc::new(AlarmStore::new());
    let timers = Arc::new(TimerStore::new());
    let (monitor, timer_events) = TokioTimerMonitor::new(Arc::clone(&timers));

    let executor = VoiceCommandExecutor::new(
        config,
        alarms.clone(),
        timers.clone(),
        Arc::new(monitor),
    );

    App {
        executor,
        session: Session {
            alarms,
            timers,
            use_24_hour: config.ui.use_24_hour,
        },
        timer_events,
    }
}

async fn run_once(
    config: &Config,
    text: &str,
    now: Option<NaiveTime>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let app = build_app(config);
    let now = now.unwrap_or_else(|| Local::now().time());

    match app.executor.execute_voice_command(text, now).await {
        ExecutionResult::Success { message } => println!("{}", message),
        ExecutionResult::Error { message } => return Err(message.into()),
    }

    if app.session.timers.running().is_some() {
        if let Ok(event) = app.timer_events.recv_async().await {
            print_timer_event(&event);
        }
    }

    Ok(())
}

async fn run_repl(config: &Config) -> Result<(), Box<dyn Error + Send + Sync>> {
    let app = build_app(config);

    // Ctrl+C -> quit
    let (quit_tx, quit_rx) = flume::bounded::<()>(1);
    ctrlc::set_handler(move || {
        let _ = quit_tx.try_send(());
    })?;

    // stdin reader thread, one utterance per line
    let (input_tx, input_rx) = flume::unbounded::<String>();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(line).is_err() {
                break;
            }
        }
    });

    println!("Say something like \"set alarm for seven\" (type /help for commands)\n");

    loop {
        tokio::select! {
            biased;

            _ = quit_rx.recv_async() => break,

            Ok(event) = app.timer_events.recv_async() => {
                print_timer_event(&event);
            }

            line = input_rx.recv_async() => {
                let Ok(line) = line else { break }; // stdin closed
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let now = Local::now();
                let action = process_slash_command(line, &app.session, now.naive_local());
                if let Some(action) = action {
                    match action {
                        ReplAction::Say(text) => println!("{}", text),
                        ReplAction::Quit => break,
                    }
                    continue;
                }

                let result = app.executor.execute_voice_command(line, now.time()).await;
                println!("{}", result.message());
            }
        }
    }

    Ok(())
}

fn print_timer_event(event: &TimerEvent) {
    match event {
        TimerEvent::Finished { id, label } if label.is_empty() => {
            println!("Timer {} finished", id)
        }
        TimerEvent::Finished { id, label } => println!("Timer {} '{}' finished", id, label),
    }
}
