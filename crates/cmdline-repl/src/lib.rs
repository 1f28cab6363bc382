//! cmdline REPL: an interactive front end for the command shell.
//!
//! On start the session transcript is replayed, then each line is handed to
//! the [`Shell`]. Lines starting with `/` are meta-commands for the REPL
//! itself:
//!
//! - `/help` shows REPL help
//! - `/info` shows the scopes and the current directory
//! - `/history` lists recorded commands
//! - `/quit` or `/exit` leaves

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use cmdline_kernel::cursor::DEFAULT_ROOT;
use cmdline_kernel::state::{SYSTEM_SOURCE, TranscriptEntry};
use cmdline_kernel::{Outcome, Shell, ShellConfig};

/// Command-line flags.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cmdline",
    version,
    about = "Interactive command shell with scoped commands and persisted sessions"
)]
pub struct Cli {
    /// Project directory holding the root folder (defaults to the working directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Root folder the `dir` commands are confined to
    #[arg(short, long, default_value = DEFAULT_ROOT)]
    pub root: String,

    /// Session name; state is kept per session
    #[arg(short, long, default_value = "default")]
    pub session: String,

    /// Explicit state file instead of the per-session data file
    #[arg(long, conflicts_with = "no_persist")]
    pub state: Option<PathBuf>,

    /// Keep history and transcript in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Run a single line and exit with its status code
    #[arg(short, long)]
    pub command: Option<String>,
}

impl Cli {
    /// Session configuration described by these flags.
    pub fn config(&self) -> ShellConfig {
        let mut config = if self.no_persist {
            ShellConfig::transient()
        } else {
            ShellConfig::persistent(&self.session)
        };
        if let Some(project) = &self.project {
            config = config.with_project_dir(project);
        }
        if let Some(state) = &self.state {
            config = config.with_state_path(state);
        }
        config.with_root_name(&self.root)
    }
}

/// Result of feeding one line to the REPL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to show.
    Silent,
    /// Text to print.
    Text(String),
    /// The user asked to leave.
    Quit,
}

/// REPL state: a shell session plus display settings.
pub struct Repl {
    shell: Shell,
    color: bool,
}

impl Repl {
    /// Open a session for `config`.
    pub fn new(config: ShellConfig) -> Result<Self> {
        let shell = Shell::new(config).context("Failed to start shell session")?;
        Ok(Self::with_shell(shell))
    }

    /// A REPL over an in-memory session.
    pub fn transient() -> Result<Self> {
        Self::new(ShellConfig::transient())
    }

    /// Wrap an existing session. Color is off.
    pub fn with_shell(shell: Shell) -> Self {
        Self {
            shell,
            color: false,
        }
    }

    /// Enable or disable colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Prompt showing the current directory.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.shell.cursor().display())
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> Reply {
        let trimmed = line.trim();
        if trimmed.starts_with('/') {
            return self.handle_meta_command(trimmed);
        }

        match self.shell.process_line(trimmed) {
            Some(outcome) => Reply::Text(self.render_outcome(&outcome)),
            None => Reply::Silent,
        }
    }

    fn handle_meta_command(&self, cmd: &str) -> Reply {
        match cmd {
            "/quit" | "/q" | "/exit" => Reply::Quit,
            "/help" | "/h" | "/?" => Reply::Text(HELP_TEXT.to_string()),
            "/info" => Reply::Text(format!(
                "{}\n{}",
                self.shell.scopes_line(),
                self.shell.directory_line()
            )),
            "/history" => {
                let commands = self.shell.history().commands();
                if commands.is_empty() {
                    return Reply::Text("(no history)".to_string());
                }
                let lines: Vec<String> = commands
                    .iter()
                    .enumerate()
                    .map(|(i, c)| format!("{:>4}  {c}", i + 1))
                    .collect();
                Reply::Text(lines.join("\n"))
            }
            _ => Reply::Text(format!("Unknown meta command: {cmd}. Type /help for help.")),
        }
    }

    fn render_outcome(&self, outcome: &Outcome) -> String {
        if self.color && !outcome.ok() {
            outcome.output.red().to_string()
        } else {
            outcome.output.clone()
        }
    }

    /// The stored transcript, formatted for display.
    pub fn transcript(&self) -> String {
        self.shell
            .history()
            .transcript()
            .iter()
            .map(|entry| self.render_entry(entry))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_entry(&self, entry: &TranscriptEntry) -> String {
        if entry.command == SYSTEM_SOURCE {
            return if self.color {
                entry.output.dimmed().to_string()
            } else {
                entry.output.clone()
            };
        }

        let command = format!("> {}", entry.command);
        if self.color {
            format!("{}\n{}", command.bold(), entry.output)
        } else {
            format!("{command}\n{}", entry.output)
        }
    }
}

const HELP_TEXT: &str = r#"cmdline REPL

Meta commands:
  /help, /h, /?     Show this help
  /info             Show scopes and the current directory
  /history          List recorded commands
  /quit, /q, /exit  Exit the REPL

Shell:
  help              List built-in commands and scopes
  help <scope>      List the commands in a scope
  <scope> <cmd> ..  Run a scoped command, e.g. `math add 2 3`
  "quoted text"     Keep spaces inside one argument
"#;

/// Send panic reports to `tracing` at debug level instead of stderr.
///
/// The dispatcher already catches panicking commands and shows them as
/// `Execution Error: <message>`; the default hook would also print a report
/// over the prompt.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::debug!(panic = %info, "command panicked");
    }));
}

/// Run one line non-interactively. Returns the line's status code.
pub fn run_once(cli: &Cli, line: &str) -> Result<i32> {
    let mut shell = Shell::new(cli.config())?;
    match shell.process_line(line) {
        Some(outcome) => {
            if outcome.ok() {
                println!("{}", outcome.output);
            } else {
                eprintln!("{}", outcome.output);
            }
            Ok(outcome.code)
        }
        None => Ok(cmdline_kernel::EXIT_OK),
    }
}

/// Run the interactive REPL.
pub fn run(cli: &Cli) -> Result<()> {
    let color = std::io::stdout().is_terminal();
    let mut repl = Repl::new(cli.config())?.with_color(color);
    tracing::debug!(session = repl.shell().name(), "session started");

    let mut rl = DefaultEditor::new().context("Failed to create editor")?;
    for command in repl.shell().history().commands() {
        let _ = rl.add_history_entry(command.as_str());
    }

    println!("{}", repl.transcript());
    println!("Type /help for REPL commands, /quit to exit.\n");

    loop {
        match rl.readline(&repl.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.trim());
                }

                match repl.process_line(&line) {
                    Reply::Text(output) => println!("{output}"),
                    Reply::Silent => {}
                    Reply::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        }
    }

    Ok(())
}
