//! Detective Quest: explore a mansion mapped as a binary tree of rooms.
//!
//! The map is assembled by hand ([`domain::build_mansion`]), walked
//! interactively ([`application::Explorer`]) and released room by room
//! ([`domain::release_all`]).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use application::{explore, play, ApplicationError, Ending, Expedition, Explorer, Journey, VisitLog};
pub use domain::{build_mansion, create_room, release_all, KeyBindings, Room, Side};
