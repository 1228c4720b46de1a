//! SecuroPass: password generator and encrypted credential vault.
//!
//! Entry point: a small console front end over the library. With a subcommand
//! it runs that one command; without one an interactive prompt reads commands
//! from stdin until `quit`.

mod cli;

use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use securopass::app::App;
use securopass::services::credential_vault::CredentialVaultTrait;
use securopass::services::settings_engine::SettingsEngineTrait;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigCommands, PromptLine};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("securopass=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let mut app = match App::new(cli.config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    if let Some(command) = cli.command {
        match execute(&mut app, command) {
            Ok(Some(out)) => println!("{}", out),
            Ok(None) => {}
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = prompt_loop(&mut app) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Reads commands from stdin until EOF or `quit`.
fn prompt_loop(app: &mut App) -> io::Result<()> {
    println!(
        "SecuroPass v{}. Type 'help' for commands.",
        env!("CARGO_PKG_VERSION")
    );
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.first() {
            None => continue,
            Some(&"quit") | Some(&"exit") => return Ok(()),
            Some(_) => {}
        }

        match PromptLine::try_parse_from(words.iter().copied()) {
            Ok(parsed) => match execute(app, parsed.command) {
                Ok(Some(out)) => println!("{}", out),
                Ok(None) => {}
                Err(e) => eprintln!("error: {}", e),
            },
            // Help and usage text come back as errors; clap picks the stream.
            Err(e) => e.print()?,
        }
    }
}

/// Runs one command and returns the text to print, if any.
fn execute(app: &mut App, command: Commands) -> Result<Option<String>, Box<dyn Error>> {
    match command {
        Commands::Gen(args) => {
            let prefs = args.apply(app.default_preferences());
            Ok(Some(app.generate(&prefs)?))
        }
        Commands::Save { identifier, secret } => {
            app.vault.save(&identifier, &secret.join(" "))?;
            Ok(Some(format!("Saved '{}'", identifier)))
        }
        Commands::Get { identifier } => Ok(Some(app.vault.retrieve(&identifier)?)),
        Commands::Delete { identifier } => {
            app.vault.delete(&identifier)?;
            Ok(Some(format!("Deleted '{}'", identifier)))
        }
        Commands::List => Ok(Some(app.vault.list_identifiers()?.join("\n"))),
        Commands::Show => {
            let lines: Vec<String> = app
                .vault
                .reveal_all()?
                .into_iter()
                .map(|entry| match entry.secret {
                    Ok(secret) => format!("{}: {}", entry.identifier, secret),
                    Err(reason) => format!("{}: <{}>", entry.identifier, reason),
                })
                .collect();
            Ok(Some(lines.join("\n")))
        }
        Commands::Config { command } => run_config(app, command),
    }
}

fn run_config(app: &mut App, command: ConfigCommands) -> Result<Option<String>, Box<dyn Error>> {
    let engine = &mut app.settings_engine;
    match command {
        ConfigCommands::Get { key: None } => {
            Ok(Some(serde_json::to_string_pretty(engine.get_settings())?))
        }
        ConfigCommands::Get { key: Some(key) } => Ok(Some(engine.get_value(&key)?.to_string())),
        ConfigCommands::Set { key, value } => {
            let parsed = serde_json::from_str(&value)
                .unwrap_or(serde_json::Value::String(value));
            engine.set_value(&key, parsed)?;
            Ok(Some(format!("Updated {}", key)))
        }
        ConfigCommands::Reset => {
            engine.reset()?;
            Ok(Some("Settings restored to defaults".to_string()))
        }
        ConfigCommands::Path => Ok(Some(engine.get_config_path().to_string())),
    }
}
