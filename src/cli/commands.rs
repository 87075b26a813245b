use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::play;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{build_mansion, release_all};
use crate::tree_traits::RoomTreeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match cli.command.clone().unwrap_or(Commands::Explore) {
        Commands::Explore => _explore(cli),
        Commands::Map => _map(cli),
        Commands::Completion { shell } => _completion(shell),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    if let Some(path) = &cli.config {
        if !path.exists() {
            return Err(CliError::Usage(format!(
                "settings file not found: {}",
                path.display()
            )));
        }
    }
    Ok(Settings::load(cli.config.as_deref())?)
}

#[instrument(skip(cli))]
fn _explore(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    debug!(keys = ?settings.keys, "starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let journey = play(settings.keys, &mut stdin.lock(), &mut stdout.lock())?;
    debug!(?journey, "game over");
    Ok(())
}

#[instrument(skip(cli))]
fn _map(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let mansion = build_mansion();

    output::header(&"Mapa da mansão");
    output::info(&mansion.to_tree_string(&settings.keys));
    output::action("Salas", &mansion.len());
    output::action("Profundidade", &mansion.depth());
    let leaves = mansion.leaf_names();
    output::action("Cômodos sem saída", &leaves.len());
    for leaf in leaves {
        output::detail(leaf);
    }

    release_all(mansion);
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
