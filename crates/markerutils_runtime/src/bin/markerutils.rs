//! markerutils CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use markerutils_runtime::command::USAGE;
use markerutils_runtime::config::DEFAULT_DELETE_COMMAND;
use markerutils_runtime::{
    CommandConfig, CommandOutcome, Console, ConsoleEffects, ConsoleSender, MarkerCommand,
    Permission, RustylineEditor,
};
use markerutils_store::{MarkerStore, StoreConfig};
use tracing_subscriber::EnvFilter;

/// Look up, teleport to, and delete map markers by id.
#[derive(Parser, Debug)]
#[command(name = "markerutils", version)]
struct Cli {
    /// Path to the marker file
    #[arg(long, env = "MARKERUTILS_SOURCE", conflicts_with = "plugin_folder")]
    source: Option<PathBuf>,

    /// Plugin data folder; the marker file is looked up in its sibling `dynmap/`
    #[arg(long)]
    plugin_folder: Option<PathBuf>,

    /// Permission to grant: delete, tp, or info (repeatable; default all)
    #[arg(long = "grant", value_name = "PERMISSION")]
    grants: Vec<Permission>,

    /// Run as the named player, which makes `tp` available
    #[arg(long)]
    player: Option<String>,

    /// World known to the console (repeatable; default any world)
    #[arg(long = "world", value_name = "WORLD")]
    worlds: Vec<String>,

    /// Print completions for the arguments instead of running them
    #[arg(long)]
    complete: bool,

    /// Command run to delete a marker; `{id}` is replaced by the marker id
    #[arg(long, default_value = DEFAULT_DELETE_COMMAND)]
    delete_command: String,

    /// Command to run once, e.g. `info spawn`; starts the console if omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let store_config = match (cli.source, cli.plugin_folder) {
        (Some(source), _) => StoreConfig::new(source),
        (None, Some(folder)) => StoreConfig::for_plugin_folder(&folder),
        (None, None) => StoreConfig::default(),
    };
    let store = Arc::new(MarkerStore::new(store_config));
    let command = Arc::new(MarkerCommand::new(
        store,
        CommandConfig::default().with_delete_command(cli.delete_command),
    ));

    if cli.complete {
        for candidate in command.complete(&cli.args) {
            println!("{candidate}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut sender = ConsoleSender::stdout();
    if !cli.grants.is_empty() {
        sender = sender.with_permissions(cli.grants);
    }
    if let Some(player) = cli.player {
        sender = sender.as_player(player);
    }
    let mut effects = ConsoleEffects::new();
    if !cli.worlds.is_empty() {
        effects = effects.with_worlds(cli.worlds);
    }

    if cli.args.is_empty() {
        let editor = RustylineEditor::new(Arc::clone(&command))?;
        Console::new(editor, command, sender, effects).run()?;
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = command.execute(&mut sender, &mut effects, &cli.args);
    Ok(match outcome {
        CommandOutcome::Usage => {
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
        CommandOutcome::Deleted { .. }
        | CommandOutcome::Teleported { .. }
        | CommandOutcome::Described { .. } => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
