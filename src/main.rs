use std::io;
use std::num::ParseIntError;

use anyhow::{Context, Result};
use log::warn;

use minesweeper_solver::config::GameConfig;
use minesweeper_solver::game::reveal;
use minesweeper_solver::game_board::GameBoard;
use minesweeper_solver::mine_map::to_string;
use minesweeper_solver::solver::Solver;
use minesweeper_solver::Cell;

fn main() -> Result<()> {
    env_logger::init();
    let config = GameConfig::from_args(std::env::args().skip(1))
        .context("usage: minesweeper_solver [rows cols mines [seed]]")?;
    minesweeper_repl(config)
}

fn minesweeper_repl(config: GameConfig) -> Result<()> {
    let mut rng = config.rng();
    let mut game_board = GameBoard::with_rng(config.nrows, config.ncols, config.nmines, &mut rng)?;
    let mut solver = Solver::new(config.nrows, config.ncols);
    println!("Let's play minesweeper: {} x {} with {} mines", config.nrows, config.ncols, config.nmines);
    print(&game_board, &solver);

    loop {
        let recommended = solver.next_move_with_rng(&mut rng);
        match recommended {
            Some(cell) if solver.safes().contains(&cell) => {
                println!("The computer recommends: {:?} (known safe)", cell)
            }
            Some(cell) => println!("The computer recommends: {:?} (guess)", cell),
            None => {
                println!("No more moves available");
                break;
            }
        }

        let mut mark_str = String::new();
        println!("Enter a move as: row,col (enter to take the computer's recommendation, q to quit)");
        let nread = io::stdin()
            .read_line(&mut mark_str)
            .context("failed to read from stdin")?;
        if nread == 0 || mark_str.trim() == "q" {
            break;
        }

        let cell: Cell = if mark_str.trim().is_empty() {
            match recommended {
                Some(cell) => cell,
                None => continue,
            }
        } else {
            match parse_mark(&mark_str) {
                None => {
                    println!("Could not parse input as coordinates row,col: {}", mark_str.trim());
                    continue;
                }
                Some(m) => m,
            }
        };
        println!("Marking {:?}", cell);

        match reveal(&mut game_board, &mut solver, cell) {
            Ok(true) => {}
            Ok(false) => {
                println!("Hit a mine! at {},{}: {}", cell.0, cell.1, to_string(game_board.mine_map()));
                break;
            }
            Err(e) => {
                warn!("rejected move {:?}: {}", cell, e);
                println!("Can't play {:?}: {}", cell, e);
                continue;
            }
        }
        print(&game_board, &solver);

        if game_board.is_won() {
            println!("All mines found - you win!");
            break;
        }
    }
    Ok(())
}

fn parse_mark(mark_str: &str) -> Option<Cell> {
    let maybe_mark: Vec<Result<usize, ParseIntError>> = mark_str.splitn(2, ',')
        .map(|coord_str| coord_str.trim().parse::<usize>())
        .collect();

    if maybe_mark.len() != 2 {
        return None;
    }
    let row = maybe_mark[0].as_ref().ok()?;
    let col = maybe_mark[1].as_ref().ok()?;
    Some((*row, *col))
}

fn print(game_board: &GameBoard, solver: &Solver) {
    println!("{}", game_board.to_string());
    println!(
        "moves made: {}, known safe: {}, known mines: {}, sentences: {}",
        solver.moves_made().len(),
        solver.safes().len(),
        solver.mines().len(),
        solver.knowledge().len()
    );
}
