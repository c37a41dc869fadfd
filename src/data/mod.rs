use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Color, Pos};

pub const GRID_SIZE: usize = 5;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
// 5 rows, 5 columns and the two main diagonals.
pub const LINE_COUNT: usize = 2 * GRID_SIZE + 2;
// No color may occupy more than this many cells of any single line.
pub const MAX_PER_LINE: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: Uuid,
    pub color: Color,
    pub lit: bool,
}

impl Cell {
    pub(crate) fn new(color: Color) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            lit: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub cells: Vec<Cell>,
}

/// Every line a bingo can complete, as grid positions.
pub fn line_positions() -> [[Pos; GRID_SIZE]; LINE_COUNT] {
    let mut lines = [[Pos { row: 0, col: 0 }; GRID_SIZE]; LINE_COUNT];
    for i in 0..GRID_SIZE {
        for j in 0..GRID_SIZE {
            lines[i][j] = Pos { row: i, col: j };
            lines[GRID_SIZE + i][j] = Pos { row: j, col: i };
        }
        lines[2 * GRID_SIZE][i] = Pos { row: i, col: i };
        lines[2 * GRID_SIZE + 1][i] = Pos {
            row: i,
            col: GRID_SIZE - 1 - i,
        };
    }
    lines
}

impl Board {
    /// Wraps a row-major color assignment into fresh, unlit cells.
    pub(crate) fn from_colors(colors: &[Color]) -> Self {
        debug_assert_eq!(colors.len(), CELL_COUNT);
        Self {
            cells: colors.iter().map(|&color| Cell::new(color)).collect(),
        }
    }

    /// Diagonally striped board: cell (r, c) takes color (r + c) mod 5.
    /// Every line holds five distinct colors and every color appears
    /// exactly five times.
    pub(crate) fn striped() -> Self {
        let mut colors = Vec::with_capacity(CELL_COUNT);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                colors.push(Color::ALL[(row + col) % Color::ALL.len()]);
            }
        }
        Self::from_colors(&colors)
    }

    pub fn validate_pos(&self, pos: &Pos) -> bool {
        pos.row < GRID_SIZE && pos.col < GRID_SIZE
    }

    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        if self.validate_pos(&pos) {
            self.cells.get(pos.row * GRID_SIZE + pos.col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        if self.validate_pos(&pos) {
            self.cells.get_mut(pos.row * GRID_SIZE + pos.col)
        } else {
            None
        }
    }

    /// Per-color totals, indexed by [`Color::index`].
    pub fn color_counts(&self) -> [usize; Color::ALL.len()] {
        let mut counts = [0; Color::ALL.len()];
        for cell in &self.cells {
            counts[cell.color.index()] += 1;
        }
        counts
    }

    /// True once any row, column or main diagonal is fully lit. Rescans
    /// the whole board each call; lighting a cell can only help, so the
    /// result is monotonic across selections.
    pub fn has_bingo(&self) -> bool {
        line_positions().iter().any(|line| {
            line.iter()
                .all(|&pos| self.get(pos).is_some_and(|cell| cell.lit))
        })
    }

    /// True once every cell of the given color is lit.
    pub fn all_of_color_lit(&self, color: Color) -> bool {
        self.cells
            .iter()
            .filter(|cell| cell.color == color)
            .all(|cell| cell.lit)
    }
}

#[cfg(test)]
pub(crate) fn assert_valid_board(board: &Board) {
    assert_eq!(board.cells.len(), CELL_COUNT);

    let counts = board.color_counts();
    for (color, &count) in Color::ALL.iter().zip(&counts) {
        assert!(
            (4..=6).contains(&count),
            "{} appears {} times, outside 4..=6",
            color,
            count
        );
    }
    let exactly_five = counts.iter().filter(|&&count| count == 5).count();
    assert!(
        exactly_five >= 3,
        "only {} colors appear exactly 5 times: {:?}",
        exactly_five,
        counts
    );

    for line in line_positions() {
        let mut per_line = [0usize; Color::ALL.len()];
        for pos in line {
            let cell = board.get(pos).expect("line position is on the board");
            per_line[cell.color.index()] += 1;
        }
        assert!(
            per_line.iter().all(|&count| count <= MAX_PER_LINE),
            "line {:?} has more than {} of one color",
            line,
            MAX_PER_LINE
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_board(lit: &[Pos]) -> Board {
        let mut board = Board::striped();
        for &pos in lit {
            board.get_mut(pos).unwrap().lit = true;
        }
        board
    }

    #[test]
    fn line_positions_cover_the_grid() {
        let lines = line_positions();
        assert_eq!(lines.len(), LINE_COUNT);
        for line in &lines {
            for pos in line {
                assert!(pos.row < GRID_SIZE && pos.col < GRID_SIZE);
            }
        }
        // Rows, then columns, then the two diagonals.
        assert_eq!(lines[2][3], Pos { row: 2, col: 3 });
        assert_eq!(lines[GRID_SIZE + 2][3], Pos { row: 3, col: 2 });
        assert_eq!(lines[2 * GRID_SIZE][4], Pos { row: 4, col: 4 });
        assert_eq!(lines[2 * GRID_SIZE + 1][0], Pos { row: 0, col: 4 });
    }

    #[test]
    fn striped_board_is_valid() {
        assert_valid_board(&Board::striped());
    }

    #[test]
    fn fresh_board_is_unlit_and_has_no_bingo() {
        let board = Board::striped();
        assert!(board.cells.iter().all(|cell| !cell.lit));
        assert!(!board.has_bingo());
    }

    #[test]
    fn full_row_is_a_bingo() {
        let row: Vec<Pos> = (0..GRID_SIZE).map(|col| Pos { row: 2, col }).collect();
        assert!(lit_board(&row).has_bingo());
    }

    #[test]
    fn full_column_is_a_bingo() {
        let col: Vec<Pos> = (0..GRID_SIZE).map(|row| Pos { row, col: 4 }).collect();
        assert!(lit_board(&col).has_bingo());
    }

    #[test]
    fn anti_diagonal_is_a_bingo() {
        let diag: Vec<Pos> = (0..GRID_SIZE)
            .map(|i| Pos {
                row: i,
                col: GRID_SIZE - 1 - i,
            })
            .collect();
        assert!(lit_board(&diag).has_bingo());
    }

    #[test]
    fn four_of_five_everywhere_is_not_a_bingo() {
        // Leave unlit a permutation with exactly one cell on each
        // diagonal: every row, column and diagonal ends up with exactly
        // four of its five cells lit.
        let unlit = [
            Pos { row: 0, col: 1 },
            Pos { row: 1, col: 0 },
            Pos { row: 2, col: 2 },
            Pos { row: 3, col: 4 },
            Pos { row: 4, col: 3 },
        ];
        let mut board = Board::striped();
        for cell in &mut board.cells {
            cell.lit = true;
        }
        for &pos in &unlit {
            board.get_mut(pos).unwrap().lit = false;
        }

        for line in line_positions() {
            let lit = line
                .iter()
                .filter(|&&pos| board.get(pos).unwrap().lit)
                .count();
            assert_eq!(lit, GRID_SIZE - 1);
        }
        assert!(!board.has_bingo());
    }

    #[test]
    fn all_of_color_lit_tracks_each_cell() {
        let mut board = Board::striped();
        assert!(!board.all_of_color_lit(Color::Blue));

        let blue: Vec<Pos> = (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| Pos { row, col }))
            .filter(|&pos| board.get(pos).unwrap().color == Color::Blue)
            .collect();
        for &pos in &blue {
            board.get_mut(pos).unwrap().lit = true;
        }
        assert!(board.all_of_color_lit(Color::Blue));
        assert!(!board.all_of_color_lit(Color::Red));
    }

    #[test]
    fn positions_outside_the_grid_are_rejected() {
        let mut board = Board::striped();
        assert!(board.get(Pos { row: 5, col: 0 }).is_none());
        assert!(board.get_mut(Pos { row: 0, col: 5 }).is_none());
        assert!(!board.validate_pos(&Pos { row: 5, col: 5 }));
    }
}
