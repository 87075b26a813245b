//! Domain layer: the mansion map and its rooms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod keys;
pub mod mansion;
pub mod room;

pub use error::{DomainError, DomainResult};
pub use keys::{Choice, KeyBindings, Rejection};
pub use mansion::build_mansion;
pub use room::{create_room, release_all, Room, RoomIterator, Side};
