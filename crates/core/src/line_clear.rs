//! Line clearing for the falling-block variant.

use crate::grid::Grid;
use crate::types::FallingCell;

/// Result of clearing full rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    pub board: Grid<FallingCell>,
    pub cleared: usize,
    /// Indices (in the input board) of the removed rows, top to bottom
    pub rows: Vec<usize>,
}

/// A row is full iff every cell in it is occupied
pub fn is_row_full(board: &Grid<FallingCell>, y: usize) -> bool {
    board
        .row(y)
        .is_some_and(|row| !row.is_empty() && row.iter().all(Option::is_some))
}

/// Remove every full row, keep the rest in order and pad empty rows on top
pub fn clear_lines(board: &Grid<FallingCell>) -> LineClear {
    let width = board.width();
    let height = board.height();

    let rows: Vec<usize> = (0..height).filter(|&y| is_row_full(board, y)).collect();
    if rows.is_empty() {
        return LineClear {
            board: board.clone(),
            cleared: 0,
            rows,
        };
    }

    let mut cells: Vec<FallingCell> = vec![None; rows.len() * width];
    cells.reserve((height - rows.len()) * width);
    for (y, row) in board.rows().enumerate() {
        if rows.binary_search(&y).is_err() {
            cells.extend_from_slice(row);
        }
    }

    LineClear {
        board: Grid::from_cells(width, height, cells),
        cleared: rows.len(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceColor;

    fn filled_row(board: Grid<FallingCell>, y: usize) -> Grid<FallingCell> {
        board.stamp((0..board.width() as i32).map(|x| (x, y as i32)), Some(PieceColor::Blue))
    }

    #[test]
    fn test_no_full_rows() {
        let board = Grid::new(10, 20).set(0, 19, Some(PieceColor::Red)).unwrap();
        let result = clear_lines(&board);
        assert_eq!(result.cleared, 0);
        assert_eq!(result.board, board);
    }

    #[test]
    fn test_clear_keeps_rows_above() {
        let mut board = filled_row(Grid::new(10, 20), 19);
        board = board.set(3, 18, Some(PieceColor::Green)).unwrap();

        let result = clear_lines(&board);
        assert_eq!(result.cleared, 1);
        assert_eq!(result.rows, vec![19]);
        assert_eq!(result.board.get(3, 19), Ok(Some(PieceColor::Green)));
        assert_eq!(result.board.count(Option::is_some), 1);
    }

    #[test]
    fn test_non_adjacent_rows() {
        let mut board = filled_row(Grid::new(4, 6), 1);
        board = filled_row(board, 4);
        board = board.set(0, 3, Some(PieceColor::Red)).unwrap();
        board = board.set(1, 5, Some(PieceColor::Cyan)).unwrap();

        let result = clear_lines(&board);
        assert_eq!(result.cleared, 2);
        assert_eq!(result.rows, vec![1, 4]);
        assert_eq!(result.board.height(), 6);
        assert_eq!(result.board.get(0, 4), Ok(Some(PieceColor::Red)));
        assert_eq!(result.board.get(1, 5), Ok(Some(PieceColor::Cyan)));
        assert!(result.board.row(0).unwrap().iter().all(Option::is_none));
        assert!(result.board.row(1).unwrap().iter().all(Option::is_none));
    }
}
