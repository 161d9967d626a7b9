pub mod grid;
pub mod search;
pub mod session;
pub mod validator;

pub use grid::GridGenerator;
pub use search::{is_traceable, trace, PathFinder, SearchPolicy};
pub use session::{GuessOutcome, Session, SessionSettings};
pub use validator::PathValidator;
