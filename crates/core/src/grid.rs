//! Grid module - fixed-dimension 2D cell store
//!
//! Both variants keep their board in a `Grid`: the falling-block game stores
//! `Option<PieceColor>` cells, the tile-merge game stores `u32` tiles.
//! Cells live in a flat row-major vector (`y * width + x`).
//!
//! A grid is immutable by convention: `set` returns a new grid and leaves the
//! original untouched. Dimensions are fixed at construction.

use crate::error::GridError;

/// Fixed-size board of `T` cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()` (empty)
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![T::default(); width * height],
        }
    }

    /// Build a grid from rows, top row first
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Wrap an already row-major cell vector. Length must be `width * height`.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline(always)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    fn out_of_bounds(&self, x: i64, y: i64) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read the cell at `(x, y)`
    pub fn get(&self, x: usize, y: usize) -> Result<T, GridError> {
        let (x, y) = (x as i64, y as i64);
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Return a copy of this grid with `(x, y)` set to `value`
    pub fn set(&self, x: usize, y: usize, value: T) -> Result<Self, GridError> {
        let (x, y) = (x as i64, y as i64);
        let idx = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        let mut next = self.clone();
        next.cells[idx] = value;
        Ok(next)
    }

    /// Signed probe: `None` when `(x, y)` is off the grid
    pub fn cell(&self, x: i32, y: i32) -> Option<T> {
        self.index(x as i64, y as i64).map(|idx| self.cells[idx])
    }

    /// Copy of this grid with every on-grid coordinate in `coords` set to
    /// `value`. Off-grid coordinates are skipped.
    pub(crate) fn stamp(&self, coords: impl IntoIterator<Item = (i32, i32)>, value: T) -> Self {
        let mut next = self.clone();
        for (x, y) in coords {
            if let Some(idx) = self.index(x as i64, y as i64) {
                next.cells[idx] = value;
            }
        }
        next
    }

    /// One row as a slice, `None` past the bottom
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.height).map(move |y| {
            let start = y * self.width;
            &self.cells[start..start + self.width]
        })
    }

    /// Copy of one column, top to bottom
    pub fn column(&self, x: usize) -> Option<Vec<T>> {
        if x >= self.width {
            return None;
        }
        Some(
            (0..self.height)
                .map(|y| self.cells[y * self.width + x])
                .collect(),
        )
    }

    /// Flat row-major view of every cell
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Number of cells matching `pred`
    pub fn count(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(c)).count()
    }

    /// Convert to nested rows (handy in tests and debug output)
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}
