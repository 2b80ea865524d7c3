//! Game rules, move sets, and session orchestration.

mod moves;
mod rules;
mod session;
mod table;

pub use moves::MoveSet;
pub use rules::{relation, Outcome};
pub use session::{GameSession, Reveal};
pub use table::OutcomeTable;
