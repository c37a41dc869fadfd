use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::Result;
use crate::data::{Board, CELL_COUNT, GRID_SIZE, MAX_PER_LINE, line_positions};
use crate::error::ActionError;
use crate::model::{Color, Pos, Status};

/// Attempt budget for the rejection-sampling generator. Valid boards are
/// dense in the search space, so generation succeeds within the first few
/// attempts; the budget only bounds pathological random sequences.
pub const MAX_GENERATION_ATTEMPTS: usize = 1000;

fn pick_distribution(rng: &mut impl Rng) -> [usize; Color::ALL.len()] {
    // Three equally likely base patterns; the shuffle decides which
    // colors receive the off-5 counts.
    let mut counts = match rng.random_range(0..3) {
        0 => [5, 5, 5, 5, 5],
        1 => [5, 5, 5, 4, 6],
        _ => [5, 5, 5, 6, 4],
    };
    counts.shuffle(rng);
    counts
}

fn flatten_distribution(counts: &[usize; Color::ALL.len()]) -> Vec<Color> {
    let mut colors = Vec::with_capacity(CELL_COUNT);
    for (&color, &count) in Color::ALL.iter().zip(counts) {
        for _ in 0..count {
            colors.push(color);
        }
    }
    colors
}

fn within_line_limit(colors: &[Color]) -> bool {
    line_positions().iter().all(|line| {
        let mut counts = [0usize; Color::ALL.len()];
        for pos in line {
            counts[colors[pos.row * GRID_SIZE + pos.col].index()] += 1;
        }
        counts.iter().all(|&count| count <= MAX_PER_LINE)
    })
}

/// Generates a board where every color appears 4 to 6 times, at least
/// three colors appear exactly 5 times, and no row, column or main
/// diagonal holds more than two cells of one color.
///
/// Total function: if the random search exhausts its budget, the
/// diagonally striped board stands in, so callers never see a failure.
#[instrument(level = "trace", skip(rng))]
pub fn generate(rng: &mut impl Rng) -> Board {
    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let mut colors = flatten_distribution(&pick_distribution(rng));
        colors.shuffle(rng);

        if within_line_limit(&colors) {
            debug!("Generated valid board on attempt {}", attempt);
            return Board::from_colors(&colors);
        }
    }

    warn!(
        "No valid board within {} attempts, falling back to the striped board",
        MAX_GENERATION_ATTEMPTS
    );
    Board::striped()
}

/// Uniformly random terminal pick of the color wheel. The rapid cycling a
/// front end shows before settling is cosmetic; this pick is what reaches
/// [`GameSession::pick_color`], and once computed it is committed.
pub fn spin_color(rng: &mut impl Rng) -> Color {
    Color::ALL[rng.random_range(0..Color::ALL.len())]
}

/// Result of grading an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Wrong answer: the round ends with no cell lit.
    Incorrect,
    /// Right answer: the player lights a cell next. `can_select_any` is
    /// true when every cell of the answered color is already lit, which
    /// opens the whole board for this selection.
    Correct { can_select_any: bool },
}

/// One play-through: the board plus the spin/answer/selection cycle.
///
/// The whole value is the persistence snapshot; a front end serializes it
/// as-is and rebuilds a session by deserializing. Operations validate
/// their own preconditions, so the session is safe to drive from tests or
/// any alternate front end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub board: Board,
    pub current_color: Option<Color>,
    pub question_count: u32,
    pub game_over: bool,
    pub status: Status,
    pub can_select_any: bool,
}

impl GameSession {
    /// Starts a fresh session around a newly generated board.
    #[instrument(level = "trace", skip(rng))]
    pub fn start(rng: &mut impl Rng) -> Self {
        info!("Starting new session");
        Self {
            board: generate(rng),
            current_color: None,
            question_count: 0,
            game_over: false,
            status: Status::Idle,
            can_select_any: false,
        }
    }

    /// Replaces the whole session with a fresh one. Never a partial
    /// reset: board, counters and status all go at once. Valid from any
    /// state, including after a win.
    #[instrument(level = "trace", skip(self, rng))]
    pub fn restart(&mut self, rng: &mut impl Rng) {
        info!("Restarting session after {} questions", self.question_count);
        *self = Self::start(rng);
    }

    /// Enters the cosmetic spinning state while the front end cycles the
    /// wheel. The spin resolves through [`pick_color`](Self::pick_color).
    #[instrument(level = "trace", skip(self))]
    pub fn begin_spin(&mut self) -> Result<()> {
        if self.game_over {
            warn!("Rejected spin: the game is over");
            return Err(ActionError::GameFinished);
        }
        if self.status != Status::Idle {
            warn!("Rejected spin while {}", self.status);
            return Err(ActionError::WrongStatus {
                action: "spin",
                status: self.status,
            });
        }

        self.status = Status::Spinning;
        Ok(())
    }

    /// Commits the spin's terminal color and opens its question. Counts
    /// the question immediately: the counter never reverts, even when the
    /// answer turns out wrong.
    #[instrument(level = "trace", skip(self))]
    pub fn pick_color(&mut self, color: Color) -> Result<()> {
        if self.game_over {
            warn!("Rejected color pick: the game is over");
            return Err(ActionError::GameFinished);
        }
        if !matches!(self.status, Status::Idle | Status::Spinning) {
            warn!("Rejected color pick while {}", self.status);
            return Err(ActionError::WrongStatus {
                action: "pick a color",
                status: self.status,
            });
        }

        self.current_color = Some(color);
        self.question_count += 1;
        self.status = Status::AwaitingAnswer;
        debug!(
            "Question {} is {}: {}",
            self.question_count,
            color,
            color.prompt()
        );
        Ok(())
    }

    /// Grades the pending question. A wrong answer ends the round; a
    /// right answer moves to cell selection, deriving whether the whole
    /// board is open because every cell of the answered color already
    /// shines.
    #[instrument(level = "trace", skip(self))]
    pub fn record_answer(&mut self, correct: bool) -> Result<AnswerOutcome> {
        if self.status != Status::AwaitingAnswer {
            warn!("Rejected answer while {}", self.status);
            return Err(ActionError::WrongStatus {
                action: "record an answer",
                status: self.status,
            });
        }
        let Some(color) = self.current_color else {
            warn!("Rejected answer: no color is in play");
            return Err(ActionError::NoActiveColor);
        };

        if !correct {
            debug!("Wrong answer on question {}", self.question_count);
            self.status = Status::Idle;
            self.current_color = None;
            return Ok(AnswerOutcome::Incorrect);
        }

        let can_select_any = self.board.all_of_color_lit(color);
        self.can_select_any = can_select_any;
        self.status = Status::AwaitingSelection;
        debug!(
            "Correct answer on {}, any-cell selection: {}",
            color, can_select_any
        );
        Ok(AnswerOutcome::Correct { can_select_any })
    }

    /// Lights an eligible cell and re-derives the win condition over the
    /// whole board. Returns whether this selection completed the first
    /// bingo line.
    #[instrument(level = "trace", skip(self), fields(row = pos.row, col = pos.col))]
    pub fn select_cell(&mut self, pos: Pos) -> Result<bool> {
        if self.status != Status::AwaitingSelection {
            warn!("Rejected selection while {}", self.status);
            return Err(ActionError::WrongStatus {
                action: "select a cell",
                status: self.status,
            });
        }
        let Some(cell) = self.board.get(pos) else {
            warn!("Rejected selection outside the board: ({}, {})", pos.row, pos.col);
            return Err(ActionError::OutOfBounds { pos });
        };
        if cell.lit {
            warn!("Rejected selection: cell ({}, {}) is already lit", pos.row, pos.col);
            return Err(ActionError::AlreadyLit { pos });
        }
        if !self.can_select_any {
            let Some(expected) = self.current_color else {
                warn!("Rejected selection: no color is in play");
                return Err(ActionError::NoActiveColor);
            };
            if cell.color != expected {
                warn!(
                    "Rejected selection: cell ({}, {}) is {}, expected {}",
                    pos.row, pos.col, cell.color, expected
                );
                return Err(ActionError::ColorMismatch {
                    pos,
                    expected,
                    actual: cell.color,
                });
            }
        }

        if let Some(cell) = self.board.get_mut(pos) {
            cell.lit = true;
        }
        self.status = Status::Idle;
        self.current_color = None;
        self.can_select_any = false;

        // game_over only ever moves false -> true.
        let was_over = self.game_over;
        if self.board.has_bingo() {
            self.game_over = true;
        }
        let newly_won = self.game_over && !was_over;

        if newly_won {
            info!("Bingo after {} questions", self.question_count);
        } else {
            debug!("Lit cell ({}, {}), game continues", pos.row, pos.col);
        }
        Ok(newly_won)
    }
}
