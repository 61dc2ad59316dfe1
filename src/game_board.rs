use std::collections::HashSet;

use rand::Rng;

use crate::error::Result;
use crate::grid::*;
use crate::mine_map::{self, get_neighbor_mine_count, MineMap};

// What the player has seen of a cell, kept independently from the mine map itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCell {
    Unknown,
    Revealed(usize),
    Flagged,
}

///
/// The board being played: the hidden mine layout, plus what the player has revealed and
/// flagged so far.
///
#[derive(Debug, Clone)]
pub struct GameBoard {
    mine_map: MineMap,
    mines: HashSet<Cell>,
    mines_found: HashSet<Cell>,
    cells: Vec<Vec<GameCell>>,
}

impl GameBoard {
    pub fn new(nrows: usize, ncols: usize, nmines: usize) -> Result<GameBoard> {
        Ok(GameBoard::from_mine_map(mine_map::generate_new_mine_map(nrows, ncols, nmines)?))
    }

    pub fn with_rng<R: Rng>(nrows: usize, ncols: usize, nmines: usize, rng: &mut R) -> Result<GameBoard> {
        Ok(GameBoard::from_mine_map(mine_map::generate_mine_map_with_rng(nrows, ncols, nmines, rng)?))
    }

    pub fn from_mines(nrows: usize, ncols: usize, mines: &[Cell]) -> Result<GameBoard> {
        Ok(GameBoard::from_mine_map(mine_map::from_cells(nrows, ncols, mines)?))
    }

    pub fn from_mine_map(mine_map: MineMap) -> GameBoard {
        let nrows = get_num_rows(&mine_map);
        let ncols = get_num_cols(&mine_map);
        GameBoard {
            mines: mine_map::mine_cells(&mine_map).into_iter().collect(),
            mines_found: HashSet::new(),
            cells: vec![vec![GameCell::Unknown; ncols]; nrows],
            mine_map,
        }
    }

    pub fn nrows(&self) -> usize {
        get_num_rows(&self.mine_map)
    }

    pub fn ncols(&self) -> usize {
        get_num_cols(&self.mine_map)
    }

    pub fn nmines(&self) -> usize {
        self.mines.len()
    }

    pub fn mine_map(&self) -> &MineMap {
        &self.mine_map
    }

    pub fn mines_found(&self) -> &HashSet<Cell> {
        &self.mines_found
    }

    pub fn get_cell(&self, cell: Cell) -> Result<GameCell> {
        check_bounds(cell, self.nrows(), self.ncols())?;
        Ok(*get(&self.cells, cell.0, cell.1))
    }

    pub fn is_mine(&self, cell: Cell) -> Result<bool> {
        check_bounds(cell, self.nrows(), self.ncols())?;
        Ok(*get(&self.mine_map, cell.0, cell.1))
    }

    /// The number of mines adjacent to cell. The cell is recorded as revealed.
    pub fn nearby_mines(&mut self, cell: Cell) -> Result<usize> {
        check_bounds(cell, self.nrows(), self.ncols())?;
        let (i, j) = cell;
        let count = get_neighbor_mine_count(&self.mine_map, i, j);
        *get_mut(&mut self.cells, i, j) = GameCell::Revealed(count);
        Ok(count)
    }

    /// Record that the player believes cell is a mine.
    pub fn flag(&mut self, cell: Cell) -> Result<()> {
        check_bounds(cell, self.nrows(), self.ncols())?;
        self.mines_found.insert(cell);
        let game_cell = get_mut(&mut self.cells, cell.0, cell.1);
        if *game_cell == GameCell::Unknown {
            *game_cell = GameCell::Flagged;
        }
        Ok(())
    }

    /// The game is won once exactly the mines have been flagged.
    pub fn is_won(&self) -> bool {
        self.mines_found == self.mines
    }

    pub fn flatten_cells(&self) -> Vec<Vec<i32>> {
        self.cells.iter().map(
            |row| row.iter().map(
                |cell| match cell {
                    GameCell::Unknown => -1,
                    GameCell::Flagged => -2,
                    GameCell::Revealed(count) => *count as i32,
                }
            ).collect()
        ).collect()
    }

    pub fn to_string(&self) -> String {
        let mut str = get_row_col_str(&self.cells);
        for row in &self.cells {
            for cell in row {
                match cell {
                    GameCell::Unknown => str.push_str("- "),
                    GameCell::Flagged => str.push_str("F "),
                    GameCell::Revealed(count) => str.push_str(&format!("{} ", count)),
                }
            }
            str.push('\n');
        }
        str
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MinesweeperError;

    fn test_board() -> GameBoard {
        GameBoard::from_mine_map(vec![
            vec![true, false, false],
            vec![true, true, false],
            vec![false, false, false],
        ])
    }

    #[test]
    fn test_nearby_mines() {
        let mut game_board = test_board();
        assert_eq!(3, game_board.nearby_mines((0, 1)).unwrap());
        assert_eq!(1, game_board.nearby_mines((2, 2)).unwrap());
        assert_eq!(2, game_board.nearby_mines((1, 1)).unwrap());
        println!("{}", game_board.to_string());

        assert_eq!(
            vec![
                vec![-1, 3, -1],
                vec![-1, 2, -1],
                vec![-1, -1, 1],
            ],
            game_board.flatten_cells()
        )
    }

    #[test]
    fn test_is_mine() {
        let game_board = test_board();
        assert!(game_board.is_mine((1, 0)).unwrap());
        assert!(!game_board.is_mine((2, 2)).unwrap());
        assert_eq!(
            Err(MinesweeperError::OutOfBounds { cell: (0, 3), nrows: 3, ncols: 3 }),
            game_board.is_mine((0, 3))
        );
    }

    #[test]
    fn test_is_won_needs_exactly_the_mines() {
        let mut game_board = test_board();
        assert!(!game_board.is_won());
        game_board.flag((0, 0)).unwrap();
        game_board.flag((1, 0)).unwrap();
        assert!(!game_board.is_won());
        game_board.flag((1, 1)).unwrap();
        assert!(game_board.is_won());
        game_board.flag((2, 2)).unwrap();
        assert!(!game_board.is_won());
    }

    #[test]
    fn test_random_board_has_requested_mines() {
        let game_board = GameBoard::new(8, 8, 8).unwrap();
        assert_eq!(8, game_board.nmines());
        assert_eq!(8, game_board.nrows());
        assert_eq!(8, game_board.ncols());
    }

    #[test]
    fn test_to_string() {
        let mut game_board = GameBoard::from_mines(2, 2, &[(0, 0)]).unwrap();
        game_board.nearby_mines((1, 1)).unwrap();
        game_board.flag((0, 0)).unwrap();
        assert_eq!("nrows: 2, ncols: 2\nF - \n- 1 \n", game_board.to_string());
    }
}
