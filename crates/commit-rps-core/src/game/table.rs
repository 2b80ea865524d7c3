//! Human-readable pairwise outcome matrix.

use std::fmt;

use super::rules::{relation, Outcome};
use super::MoveSet;

/// Margin added to the longest move name when padding cells
const CELL_MARGIN: usize = 2;

/// Pairwise outcome matrix over a move set, rendered through `Display`.
///
/// Row 0 and column 0 hold the move names in cycle order; cell (i, j) holds
/// the outcome of playing the row move against the column move. Every cell
/// is padded to a uniform width so the grid lines up in a terminal.
pub struct OutcomeTable<'a> {
    moves: &'a MoveSet,
}

impl<'a> OutcomeTable<'a> {
    pub fn new(moves: &'a MoveSet) -> Self {
        Self { moves }
    }

    /// Outcome of row move `i` against column move `j`
    pub fn outcome(&self, i: usize, j: usize) -> Outcome {
        relation(i, j, self.moves.len())
    }

    fn cell_width(&self) -> usize {
        let longest = self.moves.iter().map(str::len).max().unwrap_or(0);
        longest + CELL_MARGIN
    }
}

fn label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Draw => "Draw",
        Outcome::HumanWins => "Win",
        Outcome::ComputerWins => "Lose",
    }
}

impl fmt::Display for OutcomeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.moves.len();
        let width = self.cell_width();

        // Header row: padded blank corner, then the column moves.
        write!(f, "{:width$}", "")?;
        for name in self.moves.iter() {
            write!(f, "{:width$}", name)?;
        }

        for (i, row_move) in self.moves.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:width$}", row_move)?;
            for j in 0..n {
                write!(f, "{:width$}", label(self.outcome(i, j)))?;
            }
        }

        Ok(())
    }
}
