use rand::prelude::*;

use crate::error::{MinesweeperError, Result};
use crate::grid::{get, get_neighbors, get_num_cols, get_num_rows, Cell};

/// Ground-truth representation of a game (i.e. where the mines are)
pub type MineMap = Vec<Vec<bool>>;

///
/// Generates a new nrows x ncols mine map with nmines mines
/// distributed across the map uniformly at random.
///
pub fn generate_new_mine_map(nrows: usize, ncols: usize, nmines: usize) -> Result<MineMap> {
    generate_mine_map_with_rng(nrows, ncols, nmines, &mut thread_rng())
}

pub fn generate_mine_map_with_rng<R: Rng>(
    nrows: usize, ncols: usize, nmines: usize, rng: &mut R) -> Result<MineMap> {
    let ncells = nrows * ncols;
    if nmines > ncells {
        return Err(MinesweeperError::TooManyMines { nmines, ncells });
    }
    // Selection sampling: walking the cells in row-major order, pick cell_idx with probability
    // n_left_to_pick / n_left_to_pick_from. This yields exactly nmines distinct cells,
    // each nmines-subset being equally likely.
    let mut mine_map: MineMap = vec![vec![false; ncols]; nrows];
    let mut n_picked = 0;
    for cell_idx in 0..ncells {
        let n_left_to_pick = (nmines - n_picked) as f64;
        let n_left_to_pick_from = (ncells - cell_idx) as f64;
        if rng.gen_bool(n_left_to_pick / n_left_to_pick_from) {
            // Row-major order
            mine_map[cell_idx / ncols][cell_idx % ncols] = true;
            n_picked += 1;
        }
    }
    Ok(mine_map)
}

/// Builds a mine map with mines at exactly the given cells.
pub fn from_cells(nrows: usize, ncols: usize, mines: &[Cell]) -> Result<MineMap> {
    let mut mine_map: MineMap = vec![vec![false; ncols]; nrows];
    for &(i, j) in mines {
        crate::grid::check_bounds((i, j), nrows, ncols)?;
        mine_map[i][j] = true;
    }
    Ok(mine_map)
}

/// The number of mines within one row and column of i,j, not including i,j itself.
pub fn get_neighbor_mine_count(mine_map: &MineMap, i: usize, j: usize) -> usize {
    get_neighbors(get_num_rows(mine_map), get_num_cols(mine_map), i, j)
        .into_iter()
        .filter(|(ni, nj)| *get(mine_map, *ni, *nj))
        .count()
}

pub fn mine_cells(mine_map: &MineMap) -> Vec<Cell> {
    crate::grid::all_cells(get_num_rows(mine_map), get_num_cols(mine_map))
        .filter(|(i, j)| *get(mine_map, *i, *j))
        .collect()
}

pub fn to_string(mine_map: &MineMap) -> String {
    let mut str = crate::grid::get_row_col_str(mine_map);
    for row in mine_map {
        for cell in row {
            str.push_str(if *cell { "x " } else { "- " });
        }
        str.push('\n');
    }
    str
}
