//! Integration tests for the cmdline REPL.
//!
//! These tests run scripts through the REPL and verify behavior.

use std::sync::Arc;

use clap::Parser;
use cmdline_kernel::commands::{CommandProvider, CommandSchema, Discovery, Registrar};
use cmdline_kernel::error::DiscoveryError;
use cmdline_kernel::state::MemoryStore;
use cmdline_kernel::{Shell, ShellConfig};
use cmdline_repl::{Cli, Reply, Repl};
use tempfile::TempDir;

fn project() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    std::fs::create_dir_all(dir.path().join("Assets/Scripts")).expect("mkdir");
    dir
}

fn repl_for(args: &[&str]) -> Repl {
    let cli = Cli::parse_from(args);
    Repl::new(cli.config()).expect("Failed to create REPL")
}

/// Helper to run multiple lines through a REPL and collect outputs.
fn run_script(repl: &mut Repl, script: &str) -> Vec<String> {
    let mut outputs = Vec::new();

    for line in script.lines() {
        // Skip comments and empty lines
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match repl.process_line(line) {
            Reply::Text(output) => outputs.push(output),
            Reply::Silent => {}
            Reply::Quit => break,
        }
    }

    outputs
}

// ============================================================================
// Script Tests
// ============================================================================

#[test]
fn script_runs_builtins_and_scopes() {
    let dir = project();
    let project_arg = dir.path().to_string_lossy().to_string();
    let mut repl = repl_for(&["cmdline", "--no-persist", "-p", &project_arg]);

    let outputs = run_script(
        &mut repl,
        r#"
        # builtins
        echo "hello   world"
        math add 2 3
        dir cd Scripts
        dir current
    "#,
    );

    assert_eq!(
        outputs,
        vec![
            "hello   world",
            "2 + 3 = 5",
            r#"Current directory is: "Assets/Scripts/""#,
            r#"Current directory is: "Assets/Scripts/""#,
        ]
    );
    assert_eq!(repl.prompt(), "Assets/Scripts/> ");
}

#[test]
fn quit_stops_script() {
    let mut repl = Repl::transient().expect("repl");
    let outputs = run_script(
        &mut repl,
        r#"
        echo one
        /quit
        echo two
    "#,
    );
    assert_eq!(outputs, vec!["one"]);
}

#[test]
fn history_meta_lists_commands() {
    let mut repl = Repl::transient().expect("repl");
    let outputs = run_script(
        &mut repl,
        r#"
        /history
        echo a
        echo b
        echo a
        /history
    "#,
    );
    assert_eq!(outputs.first().map(String::as_str), Some("(no history)"));
    assert_eq!(outputs.last().map(String::as_str), Some("   1  echo b\n   2  echo a"));
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[test]
fn transcript_replays_after_restart() {
    let dir = project();
    let state = dir.path().join("session.json");
    let project_arg = dir.path().to_string_lossy().to_string();
    let state_arg = state.to_string_lossy().to_string();
    let args = ["cmdline", "-p", &project_arg, "--state", &state_arg];

    {
        let mut repl = repl_for(&args);
        run_script(&mut repl, "echo remembered\nmath multiply 2 2.5");
    }

    let repl = repl_for(&args);
    let transcript = repl.transcript();
    assert!(transcript.starts_with("Welcome to the command line."));
    assert!(transcript.contains("> echo remembered\nremembered"));
    assert!(transcript.contains("> math multiply 2 2.5\n2 * 2.5 = 5"));
    assert_eq!(repl.shell().history().commands().len(), 2);
}

#[test]
fn clear_empties_replayed_transcript() {
    let dir = project();
    let state = dir.path().join("session.json");
    let project_arg = dir.path().to_string_lossy().to_string();
    let state_arg = state.to_string_lossy().to_string();
    let args = ["cmdline", "-p", &project_arg, "--state", &state_arg];

    {
        let mut repl = repl_for(&args);
        run_script(&mut repl, "echo gone\nclear");
    }

    // A cleared session starts over with only the welcome line.
    let repl = repl_for(&args);
    assert_eq!(
        repl.transcript(),
        "Welcome to the command line. Type 'help' for commands."
    );
    assert!(repl.shell().history().commands().is_empty());
}

// ============================================================================
// Panic Tests
// ============================================================================

#[derive(Default)]
struct Faulty;

impl CommandProvider for Faulty {
    fn register(self: Arc<Self>, registrar: &mut Registrar) -> Result<(), DiscoveryError> {
        registrar.command(CommandSchema::scoped("faulty", "boom"), |_, _| {
            panic!("handler blew up")
        });
        Ok(())
    }
}

#[test]
fn panicking_command_is_reported_and_repl_continues() {
    cmdline_repl::install_panic_hook();

    let mut discovery = Discovery::with_defaults();
    discovery.add_default::<Faulty>("faulty");
    let shell = Shell::with_store(
        &ShellConfig::transient(),
        Box::new(MemoryStore::new()),
        discovery,
    );
    let mut repl = Repl::with_shell(shell);

    let outputs = run_script(&mut repl, "faulty boom\necho still here");
    assert_eq!(
        outputs,
        vec!["Execution Error: handler blew up", "still here"]
    );
}
