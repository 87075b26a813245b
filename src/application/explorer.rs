//! Interactive walk through the mansion, one door at a time.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, instrument, trace};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{Choice, DomainError, DomainResult, KeyBindings, Rejection, Room};

/// Separator between room names when the path is printed.
pub const PATH_SEPARATOR: &str = " -> ";

/// How an exploration came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// There was no map to explore
    EmptyMap,
    /// Reached a room without doors
    DeadEnd,
    /// The player chose to quit
    Quit,
    /// Input ended or could not be read
    InputClosed,
}

/// Ordered names of the rooms entered during one exploration.
///
/// Names are borrowed from the map, which outlives the log.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VisitLog<'a> {
    rooms: Vec<&'a str>,
}

impl<'a> VisitLog<'a> {
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Appends a room name; fails only if the log cannot grow.
    pub fn record(&mut self, name: &'a str) -> DomainResult<()> {
        self.rooms
            .try_reserve(1)
            .map_err(|source| DomainError::OutOfMemory {
                what: "visit log",
                source,
            })?;
        self.rooms.push(name);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn last(&self) -> Option<&'a str> {
        self.rooms.last().copied()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.rooms
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.rooms.iter().copied()
    }
}

impl fmt::Display for VisitLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rooms.join(PATH_SEPARATOR))
    }
}

/// Result of one exploration: where the player went and why it stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expedition<'a> {
    pub visited: VisitLog<'a>,
    pub ending: Ending,
}

/// Runs exploration sessions with a given set of keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct Explorer {
    keys: KeyBindings,
}

impl Explorer {
    pub fn new(keys: KeyBindings) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &KeyBindings {
        &self.keys
    }

    /// Lets the player walk the map from `root`, reading one choice per line.
    ///
    /// Stops on a room without doors, on the quit key, or when `input` ends.
    /// Blank or unknown input and doors that do not exist are reported and the
    /// prompt repeats with nothing else changed. Once stopped, the path taken is
    /// printed. An absent map prints a notice and returns straight away.
    ///
    /// # Errors
    ///
    /// Fails when `out` cannot be written or the visit log cannot grow. Read
    /// errors on `input` are not errors: they end the session like end of input.
    /// Bytes that are not UTF-8 are read as replacement characters, so such a
    /// line counts as an unknown choice unless it starts with a bound key.
    #[instrument(level = "debug", skip_all, fields(root = root.map(Room::name)))]
    pub fn explore<'a, R, W>(
        &self,
        root: Option<&'a Room>,
        input: &mut R,
        out: &mut W,
    ) -> ApplicationResult<Expedition<'a>>
    where
        R: BufRead,
        W: Write,
    {
        let Some(root) = root else {
            writeln!(out, "Mapa vazio. Não há salas para explorar.").with_context("print notice")?;
            return Ok(Expedition {
                visited: VisitLog::new(),
                ending: Ending::EmptyMap,
            });
        };

        let mut visited = VisitLog::new();
        let mut cursor = root;
        visited.record(cursor.name())?;
        writeln!(out, "Você está no Hall de entrada: {}", cursor.name())
            .with_context("print entrance")?;

        let ending = loop {
            if cursor.is_leaf() {
                writeln!(out, "\nVocê chegou a um cômodo sem saídas ({}).", cursor.name())
                    .with_context("print dead end")?;
                break Ending::DeadEnd;
            }

            self.show_menu(cursor, out)?;

            // Raw bytes: a line that is not UTF-8 is still a line to interpret
            let mut buf = Vec::new();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    writeln!(out, "\nEntrada encerrada. Saindo...").with_context("print farewell")?;
                    break Ending::InputClosed;
                }
                Err(e) => {
                    debug!(error = %e, "reading choice failed, leaving");
                    writeln!(out, "\nEntrada encerrada. Saindo...").with_context("print farewell")?;
                    break Ending::InputClosed;
                }
                Ok(_) => {}
            }

            match self.keys.parse(&String::from_utf8_lossy(&buf)) {
                Err(Rejection::Blank) => {
                    writeln!(out, "Entrada inválida. Tente novamente.").with_context("print warning")?;
                }
                Err(Rejection::Unknown(c)) => {
                    trace!(key = %c, "unknown choice");
                    writeln!(
                        out,
                        "Opção inválida. Use '{}', '{}' ou '{}'.",
                        self.keys.left, self.keys.right, self.keys.quit
                    )
                    .with_context("print warning")?;
                }
                Ok(Choice::Quit) => {
                    writeln!(out, "Você optou por sair da exploração.").with_context("print farewell")?;
                    break Ending::Quit;
                }
                Ok(Choice::Go(side)) => match cursor.child(side) {
                    Some(next) => {
                        debug!(from = cursor.name(), to = next.name(), "moving");
                        cursor = next;
                        visited.record(cursor.name())?;
                        writeln!(out, "Você entrou em: {}", cursor.name())
                            .with_context("print room")?;
                    }
                    None => {
                        trace!(room = cursor.name(), %side, "no door");
                        writeln!(
                            out,
                            "Não há caminho {} nesta sala. Escolha outra opção.",
                            side.towards()
                        )
                        .with_context("print warning")?;
                    }
                },
            }
        };

        writeln!(out, "\n--- Caminho percorrido ---").with_context("print path")?;
        writeln!(out, "{visited}").with_context("print path")?;
        writeln!(out, "-------------------------").with_context("print path")?;
        out.flush().with_context("flush output")?;

        debug!(rooms = visited.len(), ?ending, "exploration finished");
        Ok(Expedition { visited, ending })
    }

    fn show_menu<W: Write>(&self, room: &Room, out: &mut W) -> ApplicationResult<()> {
        writeln!(out, "\nVocê está na sala: {}", room.name()).with_context("print menu")?;
        writeln!(out, "Escolha um caminho:").with_context("print menu")?;
        for (side, next) in room.exits() {
            writeln!(
                out,
                "  ({}) {:<8} -> {}",
                self.keys.key_for(side),
                side.label(),
                next.name()
            )
            .with_context("print menu")?;
        }
        writeln!(out, "  ({}) Sair da exploração", self.keys.quit).with_context("print menu")?;
        write!(
            out,
            "Digite sua escolha ({}/{}/{}): ",
            self.keys.left, self.keys.right, self.keys.quit
        )
        .with_context("print prompt")?;
        out.flush().with_context("flush prompt")
    }
}

/// Explores with the default keys (`e`, `d`, `s`).
pub fn explore<'a, R: BufRead, W: Write>(
    root: Option<&'a Room>,
    input: &mut R,
    out: &mut W,
) -> ApplicationResult<Expedition<'a>> {
    Explorer::default().explore(root, input, out)
}
