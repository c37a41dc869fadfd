use bingo_quiz_core::{
    AnswerOutcome, Color, GRID_SIZE, GameSession, Pos, spin_color,
};
use rand::Rng;

fn main() -> bingo_quiz_core::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut rng = rand::rng();
    let mut session = GameSession::start(&mut rng);

    println!("Starting board:");
    display_board(&session);

    while !session.game_over {
        session.begin_spin()?;
        let color = spin_color(&mut rng);
        session.pick_color(color)?;
        println!(
            "\nQuestion {} ({}): {}",
            session.question_count,
            color.label(),
            color.prompt()
        );

        // Pretend the host answers correctly four times out of five.
        let correct = rng.random_ratio(4, 5);
        match session.record_answer(correct)? {
            AnswerOutcome::Incorrect => {
                println!("Wrong answer, round over.");
                continue;
            }
            AnswerOutcome::Correct { can_select_any } => {
                if can_select_any {
                    println!("Every {} cell already shines - pick any square!", color);
                }
                let pos = pick_target(&session, color, can_select_any);
                let won = session.select_cell(pos)?;
                println!("Lit ({}, {}):", pos.row, pos.col);
                display_board(&session);
                if won {
                    println!("\nBINGO! Won in {} questions.", session.question_count);
                }
            }
        }
    }

    Ok(())
}

/// First eligible cell, scanning row-major.
fn pick_target(session: &GameSession, color: Color, can_select_any: bool) -> Pos {
    (0..GRID_SIZE * GRID_SIZE)
        .map(|i| Pos {
            row: i / GRID_SIZE,
            col: i % GRID_SIZE,
        })
        .find(|&pos| {
            session
                .board
                .get(pos)
                .is_some_and(|cell| !cell.lit && (can_select_any || cell.color == color))
        })
        .expect("a valid board always offers an eligible cell")
}

fn display_board(session: &GameSession) {
    for row in 0..GRID_SIZE {
        print!("  ");
        for col in 0..GRID_SIZE {
            let cell = session
                .board
                .get(Pos { row, col })
                .expect("position is on the board");
            let letter = &cell.color.label()[..1];
            if cell.lit {
                print!("[{}]", letter);
            } else {
                print!(" {} ", letter.to_lowercase());
            }
        }
        println!();
    }
}
