use rand::rngs::StdRng;
use rand::SeedableRng;

use minesweeper_solver::game::{play, reveal, GameOutcome};
use minesweeper_solver::game_board::GameBoard;
use minesweeper_solver::grid::{all_cells, get_neighbors};
use minesweeper_solver::mine_map::mine_cells;
use minesweeper_solver::solver::Solver;

fn check_invariants(board: &GameBoard, solver: &Solver) {
    assert!(solver.safes().is_disjoint(solver.mines()));
    assert!(solver.moves_made().is_subset(solver.safes()));
    for cell in solver.mines() {
        assert!(board.is_mine(*cell).unwrap(), "{:?} deduced as a mine", cell);
    }
    for cell in solver.safes() {
        assert!(!board.is_mine(*cell).unwrap(), "{:?} deduced as safe", cell);
    }
    for sentence in solver.knowledge().iter() {
        assert!(sentence.count() <= sentence.cells().len());
        assert!(!sentence.is_settled(), "settled sentence left live: {}", sentence);
        for cell in sentence.cells() {
            assert!(!solver.safes().contains(cell));
            assert!(!solver.mines().contains(cell));
        }
    }
    if let Some(cell) = solver.make_safe_move() {
        assert!(!solver.mines().contains(&cell));
        assert!(!solver.moves_made().contains(&cell));
    }
}

#[test]
fn test_deductions_are_sound_on_random_boards() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = GameBoard::with_rng(8, 8, 8, &mut rng).unwrap();
        let mut solver = Solver::new(8, 8);
        loop {
            check_invariants(&board, &solver);
            let Some(cell) = solver.next_move_with_rng(&mut rng) else {
                break;
            };
            if !reveal(&mut board, &mut solver, cell).unwrap() {
                break;
            }
            if board.is_won() {
                break;
            }
        }
        check_invariants(&board, &solver);
    }
}

#[test]
fn test_closure_is_a_fixed_point_after_every_move() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut board = GameBoard::with_rng(6, 6, 5, &mut rng).unwrap();
    let mut solver = Solver::new(6, 6);
    loop {
        // Only guess cells that aren't mines so the game runs to the end.
        let guess = all_cells(6, 6).find(|cell| {
            !solver.moves_made().contains(cell) && !board.is_mine(*cell).unwrap()
        });
        let Some(cell) = solver.make_safe_move().or(guess) else {
            break;
        };
        assert!(reveal(&mut board, &mut solver, cell).unwrap());
        let nsentences = solver.knowledge().len();
        let nsafes = solver.safes().len();
        let nmines = solver.mines().len();
        assert!(!solver.infer().unwrap());
        assert_eq!(nsentences, solver.knowledge().len());
        assert_eq!(nsafes, solver.safes().len());
        assert_eq!(nmines, solver.mines().len());
    }
    assert_eq!(36 - 5, solver.moves_made().len());
    // With every safe cell revealed, any mine next to a revealed cell is known.
    for mine in mine_cells(board.mine_map()) {
        let borders_safe_cell = get_neighbors(6, 6, mine.0, mine.1)
            .into_iter()
            .any(|cell| !board.is_mine(cell).unwrap());
        if borders_safe_cell {
            assert!(solver.mines().contains(&mine), "{:?} not deduced", mine);
        }
    }
}

#[test]
fn test_play_ends_in_a_consistent_outcome() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(100 + seed);
        let mut board = GameBoard::with_rng(9, 9, 10, &mut rng).unwrap();
        let mut solver = Solver::new(9, 9);
        match play(&mut board, &mut solver, &mut rng).unwrap() {
            GameOutcome::Won => {
                assert!(board.is_won());
                assert_eq!(board.mines_found(), solver.mines());
            }
            GameOutcome::Lost(cell) => {
                assert!(board.is_mine(cell).unwrap());
                assert!(!solver.safes().contains(&cell));
            }
            GameOutcome::Exhausted => panic!("play stopped without a result"),
        }
        check_invariants(&board, &solver);
    }
}
