use crate::error::{MinesweeperError, Result};

//
// Common grid functions
//

/// A (row, col) coordinate on the board.
pub type Cell = (usize, usize);

pub fn get<T>(grid: &Vec<Vec<T>>, i: usize, j: usize) -> &T {
    &grid[i][j]
}

pub fn get_mut<T>(grid: &mut Vec<Vec<T>>, i: usize, j: usize) -> &mut T {
    &mut grid[i][j]
}

pub fn get_num_rows<T>(grid: &Vec<Vec<T>>) -> usize {
    grid.len()
}

pub fn get_num_cols<T>(grid: &Vec<Vec<T>>) -> usize {
    grid.first().map_or(0, |row| row.len())
}

pub fn check_bounds(cell: Cell, nrows: usize, ncols: usize) -> Result<()> {
    let (i, j) = cell;
    if i < nrows && j < ncols {
        Ok(())
    } else {
        Err(MinesweeperError::OutOfBounds { cell, nrows, ncols })
    }
}

///
/// All in-bounds cells adjacent to i,j (including diagonals), not including i,j itself.
///
pub fn get_neighbors(nrows: usize, ncols: usize, i: usize, j: usize) -> Vec<Cell> {
    let mut neighbors = Vec::with_capacity(8);
    for ni in i.saturating_sub(1)..=(i + 1).min(nrows.saturating_sub(1)) {
        for nj in j.saturating_sub(1)..=(j + 1).min(ncols.saturating_sub(1)) {
            if (ni, nj) != (i, j) {
                neighbors.push((ni, nj));
            }
        }
    }
    neighbors
}

/// Every cell of an nrows x ncols board, in row-major order.
pub fn all_cells(nrows: usize, ncols: usize) -> impl Iterator<Item = Cell> {
    (0..nrows).flat_map(move |i| (0..ncols).map(move |j| (i, j)))
}

pub fn get_row_col_str<T>(grid: &Vec<Vec<T>>) -> String {
    format!("nrows: {}, ncols: {}\n", get_num_rows(grid), get_num_cols(grid))
}
