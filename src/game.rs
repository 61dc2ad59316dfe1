use log::info;
use rand::Rng;

use crate::error::Result;
use crate::game_board::GameBoard;
use crate::grid::Cell;
use crate::solver::Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    /// The solver had to guess and hit a mine.
    Lost(Cell),
    /// Every cell is either played or a known mine, but not every mine was found.
    Exhausted,
}

///
/// Reveal a cell the player chose: feed its neighbor count to the solver and flag every mine
/// the solver now knows. Returns false if the cell was a mine.
///
pub fn reveal(board: &mut GameBoard, solver: &mut Solver, cell: Cell) -> Result<bool> {
    if board.is_mine(cell)? {
        return Ok(false);
    }
    let count = board.nearby_mines(cell)?;
    solver.process_move(cell, count)?;
    for mine in solver.mines() {
        board.flag(*mine)?;
    }
    Ok(true)
}

/// Let the solver play the board to the end.
pub fn play<R: Rng>(board: &mut GameBoard, solver: &mut Solver, rng: &mut R) -> Result<GameOutcome> {
    loop {
        if board.is_won() {
            info!("won after {} moves", solver.moves_made().len());
            return Ok(GameOutcome::Won);
        }
        let cell = match solver.make_safe_move() {
            Some(cell) => {
                info!("playing safe move {:?}", cell);
                cell
            }
            None => match solver.make_random_move_with_rng(rng) {
                Some(cell) => {
                    info!("no known safe move, guessing {:?}", cell);
                    cell
                }
                None => {
                    info!("no moves left");
                    return Ok(GameOutcome::Exhausted);
                }
            },
        };
        if !reveal(board, solver, cell)? {
            info!("hit a mine at {:?}", cell);
            return Ok(GameOutcome::Lost(cell));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reveal_flags_deduced_mines() {
        let mut board = GameBoard::from_mines(1, 4, &[(0, 3)]).unwrap();
        let mut solver = Solver::new(1, 4);
        assert!(reveal(&mut board, &mut solver, (0, 0)).unwrap());
        assert!(reveal(&mut board, &mut solver, (0, 1)).unwrap());
        assert!(!board.is_won());
        assert!(reveal(&mut board, &mut solver, (0, 2)).unwrap());
        assert!(board.is_won());
        assert!(!reveal(&mut board, &mut solver, (0, 3)).unwrap());
    }

    #[test]
    fn test_play_without_mines_is_won_immediately() {
        let mut board = GameBoard::from_mines(3, 3, &[]).unwrap();
        let mut solver = Solver::new(3, 3);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(GameOutcome::Won, play(&mut board, &mut solver, &mut rng).unwrap());
        assert!(solver.moves_made().is_empty());
    }

    #[test]
    fn test_play_deducible_board() {
        // x - x
        // - - -
        // - - -
        let mut rng = StdRng::seed_from_u64(5);
        let mut board = GameBoard::from_mines(3, 3, &[(0, 0), (0, 2)]).unwrap();
        let mut solver = Solver::new(3, 3);
        let outcome = play(&mut board, &mut solver, &mut rng).unwrap();
        match outcome {
            GameOutcome::Won => assert_eq!(*board.mines_found(), *solver.mines()),
            GameOutcome::Lost(cell) => assert!(board.is_mine(cell).unwrap()),
            GameOutcome::Exhausted => panic!("all cells accounted for without finding every mine"),
        }
    }
}
