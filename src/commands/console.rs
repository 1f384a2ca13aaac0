//! Line-oriented review console.
//!
//! Reads one command per line from stdin. Generation and sync run in the
//! background while the prompt keeps accepting commands.

use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use jiff::tz::Offset;
use owo_colors::{OwoColorize, Stream};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::console::{Console, GenerateOutcome, SyncOutcome, TaskHandle};
use crate::display::{format_detail, format_list_view};
use crate::error::{ReplydeskError, Result};
use crate::export::{ArtifactSink, DirectorySink, ExportFormat};
use crate::types::TicketId;

const HELP: &str = "\
Commands:
  list                   show the ticket list
  select <id>            open a ticket
  close                  close the open ticket
  show                   show the open ticket again
  draft <text>           replace the reply draft of the open ticket
  generate               generate a reply for the open ticket
  send                   send the draft and mark the ticket answered
  sync                   synchronize with the mail backend
  wait                   wait for running generation and sync
  export <csv|xlsx> [dir]
  reload                 fetch tickets again
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    List,
    Select(TicketId),
    Deselect,
    Show,
    Draft(String),
    Generate,
    Send,
    Sync,
    Wait,
    Export {
        format: ExportFormat,
        dir: Option<PathBuf>,
    },
    Reload,
    Help,
    Quit,
}

impl FromStr for ReplCommand {
    type Err = ReplydeskError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "list" | "ls" => ReplCommand::List,
            "select" | "open" => {
                let id: u64 = rest.parse().map_err(|_| {
                    ReplydeskError::InvalidCommand(format!("usage: select <id>, got '{}'", rest))
                })?;
                ReplCommand::Select(TicketId::new(id))
            }
            "close" | "deselect" => ReplCommand::Deselect,
            "show" => ReplCommand::Show,
            "draft" => ReplCommand::Draft(rest.to_string()),
            "generate" | "gen" => ReplCommand::Generate,
            "send" => ReplCommand::Send,
            "sync" => ReplCommand::Sync,
            "wait" => ReplCommand::Wait,
            "export" => {
                let mut args = rest.split_whitespace();
                let format = args
                    .next()
                    .ok_or_else(|| {
                        ReplydeskError::InvalidCommand("usage: export <csv|xlsx> [dir]".to_string())
                    })?
                    .parse()?;
                ReplCommand::Export {
                    format,
                    dir: args.next().map(PathBuf::from),
                }
            }
            "reload" => ReplCommand::Reload,
            "help" | "?" => ReplCommand::Help,
            "quit" | "exit" => ReplCommand::Quit,
            other => {
                return Err(ReplydeskError::InvalidCommand(format!(
                    "unknown command '{}', type 'help'",
                    other
                )));
            }
        };
        Ok(command)
    }
}

struct Session {
    console: Console,
    offset: Offset,
    pending: Vec<TaskHandle>,
}

impl Session {
    fn selected(&self) -> Result<TicketId> {
        self.console
            .selected()
            .ok_or_else(|| ReplydeskError::InvalidCommand("no ticket is open".to_string()))
    }

    fn print_list(&self) {
        println!("{}", format_list_view(&self.console.list_view(), self.offset));
    }

    fn print_detail(&self) {
        match self.console.detail_view() {
            Some(view) => println!("{}", format_detail(&view, self.offset)),
            None => println!("Обращение не выбрано"),
        }
    }

    async fn run(&mut self, command: ReplCommand) -> Result<()> {
        self.pending.retain(|h| !h.is_finished());

        match command {
            ReplCommand::List => self.print_list(),
            ReplCommand::Select(id) => {
                self.console.select(id)?;
                self.print_detail();
            }
            ReplCommand::Deselect => self.console.deselect(),
            ReplCommand::Show => self.print_detail(),
            ReplCommand::Draft(text) => {
                let id = self.selected()?;
                self.console.set_draft(id, text);
            }
            ReplCommand::Generate => {
                let id = self.selected()?;
                match self.console.generate(id)? {
                    GenerateOutcome::Started(handle) => {
                        self.pending.push(handle);
                        println!("Генерация...");
                    }
                    GenerateOutcome::AlreadyGenerating => println!("Генерация уже идёт"),
                }
            }
            ReplCommand::Send => {
                let id = self.selected()?;
                let ticket = self.console.send(id)?;
                println!(
                    "{} #{}",
                    "Ответ отправлен".if_supports_color(Stream::Stdout, |t| t.green()),
                    ticket.id
                );
            }
            ReplCommand::Sync => match self.console.sync() {
                SyncOutcome::Started(handle) => {
                    self.pending.push(handle);
                    self.print_list();
                }
                SyncOutcome::AlreadySyncing => println!("Синхронизация уже идёт"),
            },
            ReplCommand::Wait => {
                for handle in self.pending.drain(..) {
                    handle.wait().await;
                }
                if self.console.selected().is_some() {
                    self.print_detail();
                } else {
                    self.print_list();
                }
            }
            ReplCommand::Export { format, dir } => {
                let artifact = self.console.export(format)?;
                let dir = dir.unwrap_or_else(|| PathBuf::from("."));
                let path = DirectorySink::new(dir).deliver(&artifact)?;
                println!(
                    "{} {}",
                    "Exported".if_supports_color(Stream::Stdout, |t| t.green()),
                    path.display()
                );
            }
            ReplCommand::Reload => {
                if let Err(e) = self.console.reload().await {
                    tracing::warn!("Reload failed: {}", e);
                }
                self.print_list();
            }
            ReplCommand::Help => println!("{}", HELP),
            ReplCommand::Quit => {}
        }
        Ok(())
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

/// Run the interactive review console on stdin/stdout
pub async fn cmd_console() -> Result<()> {
    let config = Config::load()?;
    let offset = config.display_offset()?;
    let console = Console::from_config(&config)?;

    println!("{}", format_list_view(&console.list_view(), offset));
    if let Err(e) = console.load().await {
        tracing::warn!("Initial load failed: {}", e);
    }

    let mut session = Session {
        console,
        offset,
        pending: Vec::new(),
    };
    session.print_list();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        if !line.trim().is_empty() {
            match line.parse::<ReplCommand>() {
                Ok(ReplCommand::Quit) => break,
                Ok(command) => {
                    if let Err(e) = session.run(command).await {
                        eprintln!("{}", e);
                    }
                }
                Err(e) => eprintln!("{}", e),
            }
        }
        prompt()?;
    }

    Ok(())
}
