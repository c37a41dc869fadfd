//! Session action errors.

use derive_more::{Display, Error};

use crate::model::{Color, Pos, Status};

/// Returned when a session operation is invoked outside its precondition.
///
/// Each of these marks a caller bug rather than a recoverable runtime
/// condition: a well-behaved front end only offers the actions the current
/// status allows. The failing call leaves the session untouched.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum ActionError {
    /// The game has already been won; only a restart is meaningful.
    #[display("the game is already over")]
    GameFinished,
    /// The operation does not apply to the session's current status.
    #[display("cannot {action} while the session is {status}")]
    WrongStatus {
        action: &'static str,
        status: Status,
    },
    /// A color-constrained operation ran with no color in play.
    #[display("no color is in play")]
    NoActiveColor,
    /// The position lies outside the 5x5 grid.
    #[display("({}, {}) is outside the board", pos.row, pos.col)]
    OutOfBounds { pos: Pos },
    /// The targeted cell is already lit.
    #[display("cell ({}, {}) is already lit", pos.row, pos.col)]
    AlreadyLit { pos: Pos },
    /// The targeted cell does not match the answered color.
    #[display("cell ({}, {}) is {actual}, expected {expected}", pos.row, pos.col)]
    ColorMismatch {
        pos: Pos,
        expected: Color,
        actual: Color,
    },
}
