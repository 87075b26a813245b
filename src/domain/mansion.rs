//! The demo mansion, assembled by hand.

use tracing::instrument;

use super::room::{create_room, Room};

pub const HALL: &str = "Hall de Entrada";
pub const LIVING_ROOM: &str = "Sala de Estar";
pub const LIBRARY: &str = "Biblioteca";
pub const STUDY: &str = "Escritório";
pub const GARDEN: &str = "Jardim Interno";
pub const CELLAR: &str = "Porão Misterioso";
pub const KITCHEN: &str = "Cozinha Antiga";
pub const ATTIC: &str = "Sótão empoeirado";

/// Builds the mansion map and returns its entrance.
///
/// ```text
/// Hall de Entrada
/// ├── Sala de Estar
/// │   └── Cozinha Antiga          (left only)
/// └── Biblioteca
///     ├── Escritório
///     │   ├── Porão Misterioso
///     │   └── Sótão empoeirado
///     └── Jardim Interno
/// ```
#[instrument(level = "debug")]
pub fn build_mansion() -> Room {
    let mut hall = create_room(HALL);
    let mut living_room = create_room(LIVING_ROOM);
    let mut library = create_room(LIBRARY);
    let mut study = create_room(STUDY);
    let garden = create_room(GARDEN);
    let cellar = create_room(CELLAR);
    let kitchen = create_room(KITCHEN);
    let attic = create_room(ATTIC);

    study.left = Some(Box::new(cellar));
    study.right = Some(Box::new(attic));

    library.left = Some(Box::new(study));
    library.right = Some(Box::new(garden));

    // No door on the right of the living room
    living_room.left = Some(Box::new(kitchen));

    hall.left = Some(Box::new(living_room));
    hall.right = Some(Box::new(library));

    hall
}
