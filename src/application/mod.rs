//! Application layer: exploration session and game flow
//!
//! This layer drives the domain over line-oriented console streams.

pub mod error;
pub mod error_ext;
pub mod explorer;
pub mod game;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use explorer::{explore, Ending, Expedition, Explorer, VisitLog, PATH_SEPARATOR};
pub use game::{play, Journey};
