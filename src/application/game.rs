//! One complete game: welcome, build the mansion, explore it, tear it down.

use std::io::{BufRead, Write};

use tracing::{info, instrument};

use crate::application::{ApplicationResult, Ending, Explorer, IoResultExt};
use crate::domain::{build_mansion, release_all, KeyBindings};

/// Owned summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    /// Room names in the order they were entered
    pub path: Vec<String>,
    pub ending: Ending,
    /// Rooms released when the mansion was torn down
    pub released: usize,
}

/// Plays one game of Detective Quest over the given streams.
#[instrument(level = "debug", skip(input, out))]
pub fn play<R, W>(keys: KeyBindings, input: &mut R, out: &mut W) -> ApplicationResult<Journey>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Bem-vindo(a) ao Detective Quest - exploração da mansão.")
        .with_context("print welcome")?;
    writeln!(
        out,
        "Você começará no Hall de entrada. Explore escolhendo '{}' (esquerda), '{}' (direita) ou '{}' (sair).\n",
        keys.left, keys.right, keys.quit
    )
    .with_context("print welcome")?;

    let mansion = build_mansion();
    let expedition = Explorer::new(keys).explore(Some(&mansion), input, out)?;
    let path: Vec<String> = expedition.visited.iter().map(str::to_owned).collect();
    let ending = expedition.ending;

    let released = release_all(mansion).len();
    info!(released, rooms_visited = path.len(), "mansion released");

    writeln!(
        out,
        "\nExploração encerrada. Obrigado por jogar Detective Quest (demo)."
    )
    .with_context("print goodbye")?;
    out.flush().with_context("flush output")?;

    Ok(Journey {
        path,
        ending,
        released,
    })
}
