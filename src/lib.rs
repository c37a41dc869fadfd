//! Core rules for a color bingo quiz game.
//!
//! The game runs on a 5x5 board of colored cells drawn from five colors,
//! each color bound to a question category. A round spins a uniformly
//! random color, asks a question of that category, and on a correct answer
//! lights one cell of that color; completing any row, column or main
//! diagonal wins. Generated boards keep every color's total between 4 and
//! 6 (at least three colors at exactly 5) and never put more than two
//! cells of one color on a single line.
//!
//! This crate owns board generation and the session state machine.
//! Rendering, the spin animation and snapshot persistence belong to the
//! embedding front end, which serializes [`GameSession`] as-is and
//! discards any snapshot that no longer deserializes.
//!
//! ## Usage
//!
//! ```rust
//! use bingo_quiz_core::{spin_color, AnswerOutcome, GameSession, Pos};
//!
//! # fn main() -> bingo_quiz_core::Result<()> {
//! let mut rng = rand::rng();
//! let mut session = GameSession::start(&mut rng);
//!
//! // One full round: spin, answer, light a cell.
//! session.begin_spin()?;
//! let color = spin_color(&mut rng);
//! session.pick_color(color)?;
//!
//! if let AnswerOutcome::Correct { can_select_any } = session.record_answer(true)? {
//!     let pos = (0..25)
//!         .map(|i| Pos { row: i / 5, col: i % 5 })
//!         .find(|&pos| {
//!             session
//!                 .board
//!                 .get(pos)
//!                 .is_some_and(|cell| !cell.lit && (can_select_any || cell.color == color))
//!         })
//!         .expect("a fresh board has unlit cells of every color");
//!     let won = session.select_cell(pos)?;
//!     assert!(!won);
//! }
//! # Ok(())
//! # }
//! ```

mod data;
mod error;
mod logic;
mod model;

pub use data::{Board, CELL_COUNT, Cell, GRID_SIZE, LINE_COUNT, MAX_PER_LINE, line_positions};
pub use error::ActionError;
pub use logic::{AnswerOutcome, GameSession, MAX_GENERATION_ATTEMPTS, generate, spin_color};
pub use model::{Color, Pos, Status};

pub type Result<T> = std::result::Result<T, ActionError>;
