//! ntepd CLI - interactive terminal frontend for the note editor
//!
//! Drives one editor session against a remote collection store: list and
//! open notes, edit the draft, watch the markdown preview, and let the
//! 10-second autosave do the saving. Deleting asks for confirmation, like
//! the delete dialog it stands in for.

mod prefs;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;

use ntepd_core::models::ThemeMode;
use ntepd_core::sinks::{NotificationSink, PreferenceStore, TracingDiagnostics};
use ntepd_core::{DraftField, Editor, NoteId, SaveOutcome, TransportError};
use ntepd_http::HttpCollectionStore;
use prefs::FilePreferences;

#[derive(Parser)]
#[command(name = "ntepd")]
#[command(about = "A minimal markdown note editor backed by a remote collection store")]
#[command(version)]
struct Cli {
    /// Base URL of the note collection store
    #[arg(long, value_name = "URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Directory for the preference file (platform config dir by default)
    #[arg(long, value_name = "PATH")]
    config_dir: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Toast sink printing transient messages to the terminal.
struct StdoutToast;

impl NotificationSink for StdoutToast {
    fn notify(&self, message: &str) {
        println!("* {message}");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Help,
    List,
    New,
    Open(NoteId),
    Title(String),
    Body(String),
    Preview,
    Save,
    Delete(NoteId),
    Theme(ThemeMode),
    Status,
    Quit,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ntepd=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let preference_path = cli.config_dir.map_or_else(FilePreferences::default_path, |dir| {
        dir.join(prefs::PREFERENCES_FILE)
    });
    let mut preferences = FilePreferences::load(preference_path);
    let mut theme = load_theme(&preferences);

    let transport = HttpCollectionStore::new(&cli.api_url)?;
    let editor = Editor::new(transport, Arc::new(StdoutToast), Arc::new(TracingDiagnostics));

    // Mirror the page load: fetch the list, start on a fresh draft.
    editor.refresh_notes().await;
    println!(
        "ntepd - {} note(s) at {} - theme {theme}",
        editor.notes().len(),
        cli.api_url
    );
    println!("Type `help` for commands.");

    loop {
        let Some(line) = prompt("> ")? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            ReplCommand::Help => print_help(),
            ReplCommand::List => {
                let notes = editor.notes();
                if notes.is_empty() {
                    println!("No notes yet.");
                }
                for note in notes {
                    println!("{:>5}  {}", note.id, note.display_title());
                }
            }
            ReplCommand::New => {
                editor.new_note();
                println!("Started a new note.");
            }
            ReplCommand::Open(id) => match editor.find_note(id) {
                Some(note) => {
                    let title = note.display_title().to_string();
                    editor.open_note(note);
                    println!("Editing \"{title}\".");
                }
                None => println!("No note with id {id} in the list (try `list`)."),
            },
            ReplCommand::Title(text) => editor.edit(DraftField::Title, &text),
            ReplCommand::Body(text) => editor.edit(DraftField::Body, &text),
            ReplCommand::Preview => println!("{}", editor.preview_html()),
            ReplCommand::Save => match editor.save().await {
                SaveOutcome::Skipped => println!("Nothing to save yet."),
                SaveOutcome::Failed => println!("Save failed; the draft is kept for retry."),
                // Created/Saved already toast; Stale cannot happen from here.
                _ => {}
            },
            ReplCommand::Delete(id) => match editor.find_note(id) {
                Some(note) => {
                    let label = note.display_title().to_string();
                    editor.arm_delete(note);
                    let answer = prompt(&format!("Delete note \"{label}\"? [y/N] "))?;
                    if answer.as_deref().is_some_and(is_confirmation) {
                        editor.confirm_delete().await;
                    } else {
                        editor.cancel_delete();
                        println!("Cancelled.");
                    }
                }
                None => println!("No note with id {id} in the list (try `list`)."),
            },
            ReplCommand::Theme(mode) => {
                preferences.set("theme", mode.as_str());
                theme = mode;
                println!("Theme set to {theme}.");
            }
            ReplCommand::Status => {
                match editor.current_note() {
                    Some(note) => println!("Editing note {} (\"{}\")", note.id, note.display_title()),
                    None => println!("Editing a new, unsaved note"),
                }
                println!(
                    "Autosave {} - {} note(s) listed - theme {theme}",
                    if editor.autosave_armed() { "armed" } else { "idle" },
                    editor.notes().len()
                );
            }
            ReplCommand::Quit => break,
        }
    }

    Ok(())
}

fn load_theme(preferences: &FilePreferences) -> ThemeMode {
    preferences
        .get("theme")
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y" | "yes" | "Yes")
}

fn parse_command(line: &str) -> Result<Option<ReplCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb {
        "help" => ReplCommand::Help,
        "list" | "ls" => ReplCommand::List,
        "new" => ReplCommand::New,
        "open" => ReplCommand::Open(parse_id(rest)?),
        "title" => ReplCommand::Title(rest.to_string()),
        "body" => ReplCommand::Body(rest.to_string()),
        "preview" => ReplCommand::Preview,
        "save" => ReplCommand::Save,
        "delete" => ReplCommand::Delete(parse_id(rest)?),
        "theme" => ReplCommand::Theme(rest.parse()?),
        "status" => ReplCommand::Status,
        "quit" | "exit" => ReplCommand::Quit,
        other => return Err(format!("Unknown command '{other}' (try `help`).")),
    };

    Ok(Some(command))
}

fn parse_id(rest: &str) -> Result<NoteId, String> {
    rest.parse()
        .map_err(|_| format!("Expected a note id, got '{rest}'."))
}

fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;

    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        Ok(None)
    } else {
        Ok(Some(buffer.trim_end().to_string()))
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list              Show the note list");
    println!("  new               Start a new note (discards unsaved edits)");
    println!("  open <id>         Edit a listed note");
    println!("  title <text>      Set the draft title");
    println!("  body <text>       Set the draft body (markdown)");
    println!("  preview           Print the rendered markdown preview");
    println!("  save              Save now instead of waiting for autosave");
    println!("  delete <id>       Delete a note (asks for confirmation)");
    println!("  theme <dark|light>  Switch and persist the theme");
    println!("  status            Show the current draft and autosave state");
    println!("  quit              Exit");
}
