use clap::Parser;
use miette::{IntoDiagnostic, Result};
use pocket_ledger::application::account_store::AccountStore;
use pocket_ledger::infrastructure::json_file::{DEFAULT_SNAPSHOT_PATH, JsonFileSnapshot};
use pocket_ledger::interfaces::console::{ConsoleDriver, Exit, RawTerminal, ScriptedTerminal};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Snapshot file holding the saved accounts
    #[arg(long, default_value = DEFAULT_SNAPSHOT_PATH)]
    file: PathBuf,

    /// Read commands as whole lines instead of single keypresses
    #[arg(long)]
    line_mode: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let snapshot = JsonFileSnapshot::new(&cli.file);
    let mut store = AccountStore::new();
    let stdout = io::stdout();

    let exit = if cli.line_mode || !io::stdin().is_terminal() {
        let terminal = ScriptedTerminal::new(io::stdin().lock());
        ConsoleDriver::new(&mut store, &snapshot, terminal, stdout.lock()).run()
    } else {
        ConsoleDriver::new(&mut store, &snapshot, RawTerminal::new(), stdout.lock()).run()
    }
    .into_diagnostic()?;

    tracing::debug!(?exit, saved = exit == Exit::Saved, "session ended");
    Ok(())
}
