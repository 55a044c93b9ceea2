// multiprompt - An embeddable multi-line terminal prompt
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::Context as _;
use clap::Parser;
use crossterm::event::{self, Event};
use multiprompt::{EventOutcome, KeywordCompleter, Prompt, PromptConfig, PromptEvent, ui};
use ratatui::DefaultTerminal;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_DIR_NAME: &str = "multiprompt";
const LOG_FILE: &str = "multiprompt.log";

/// Multi-line SQL-style prompt with history and keyword completion.
#[derive(Debug, Parser)]
#[command(name = "multiprompt", version)]
struct Cli {
    /// JSON file with `[{"text": ..., "description": ...}]` keywords (default: built-in SQL set).
    #[arg(long, value_name = "PATH")]
    keywords: Option<PathBuf>,

    /// Suggestions shown at once before the popup scrolls.
    #[arg(long, default_value_t = 6)]
    popup_height: usize,

    /// Show keyword descriptions next to suggestions.
    #[arg(long)]
    show_descriptions: bool,

    /// Prompt for the first line.
    #[arg(long, default_value = "sql> ")]
    primary: String,

    /// Prompt for continuation lines.
    #[arg(long, default_value = "  -> ")]
    secondary: String,

    /// Log file path (default: <cache dir>/multiprompt/multiprompt.log).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.clone())?;

    let completer = match &cli.keywords {
        Some(path) => KeywordCompleter::from_json_file(path)?,
        None => KeywordCompleter::sql(),
    };
    let config = PromptConfig::new(cli.primary, cli.secondary)
        .with_completer(move |before, fragment| completer.complete(before, fragment))
        .with_executor(echo_statement)
        .with_popup_max_height(cli.popup_height)
        .with_show_description(cli.show_descriptions);
    let mut prompt = Prompt::new(config);

    let mut terminal = ratatui::try_init().context("failed to initialise terminal")?;
    let result = run(&mut terminal, &mut prompt);
    ratatui::restore();
    tracing::info!(submitted = prompt.history().len(), "session ended");
    result
}

fn run(terminal: &mut DefaultTerminal, prompt: &mut Prompt) -> anyhow::Result<()> {
    loop {
        terminal
            .draw(|frame| {
                let area = frame.area();
                ui::render(frame, area, prompt);
            })
            .context("failed to draw prompt")?;

        let Event::Key(key) = event::read().context("failed to read terminal event")? else {
            continue;
        };
        let Some(prompt_event) = PromptEvent::from_key(key) else {
            continue;
        };
        if prompt.handle(prompt_event) == EventOutcome::Quit {
            return Ok(());
        }
    }
}

fn echo_statement(input: &str) -> String {
    let lines = input.lines().count();
    format!("{input}\n({lines} line{})", if lines == 1 { "" } else { "s" })
}

fn init_tracing(log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let Some(path) = log_file.or_else(default_log_path) else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log dir {}", parent.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("multiprompt=info"));
    // stdout belongs to the TUI, so logs only go to the file.
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_err()
    {
        eprintln!("tracing subscriber already installed");
    }
    Ok(())
}

fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(LOG_DIR_NAME).join(LOG_FILE))
}
