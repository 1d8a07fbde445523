//! Pieces module - falling-block shape catalog and matrix rotation
//!
//! Shapes are small 0/1 matrices (at most 4x4). Rotation is the plain matrix
//! rotation: transpose, then reverse each row. There is no kick table; a
//! rotation that collides is simply rejected by the caller.

use arrayvec::ArrayVec;

use crate::types::{PieceColor, PieceKind};

/// Largest edge of any shape matrix
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of one filled cell from the shape's top-left corner: `(col, row)`
pub type CellOffset = (i32, i32);

/// Filled cells of a shape
pub type ShapeCells = ArrayVec<CellOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// A shape matrix of up to 4x4 cells
///
/// Cells outside `rows x cols` are always empty, so derived equality compares
/// shapes by matrix content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from a fixed-size 0/1 matrix
    pub const fn from_array<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        assert!(R > 0 && C > 0 && R <= MAX_SHAPE_DIM && C <= MAX_SHAPE_DIM);
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                bits[r][c] = matrix[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: R as u8,
            cols: C as u8,
            bits,
        }
    }

    /// Build a shape from nested rows; `None` if empty, ragged or larger than 4x4
    pub fn from_matrix(matrix: &[Vec<u8>]) -> Option<Self> {
        let rows = matrix.len();
        let cols = matrix.first()?.len();
        if rows == 0 || cols == 0 || rows > MAX_SHAPE_DIM || cols > MAX_SHAPE_DIM {
            return None;
        }
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in matrix.iter().enumerate() {
            if row.len() != cols {
                return None;
            }
            for (c, &v) in row.iter().enumerate() {
                bits[r][c] = v != 0;
            }
        }
        Some(Self {
            rows: rows as u8,
            cols: cols as u8,
            bits,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether `(row, col)` is filled; false outside the matrix
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.bits[row][col]
    }

    /// Rotate 90° clockwise: transpose, then reverse each row
    pub fn rotate_clockwise(&self) -> Self {
        let rows = self.rows();
        let cols = self.cols();
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        // Result is cols x rows; new[r][c] = old[rows - 1 - c][r].
        for (r, out_row) in bits.iter_mut().enumerate().take(cols) {
            for (c, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.bits[rows - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Filled cells as `(col, row)` offsets, row-major
    pub fn occupied(&self) -> ShapeCells {
        let mut cells = ShapeCells::new();
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                if self.bits[r][c] {
                    cells.push((c as i32, r as i32));
                }
            }
        }
        cells
    }

    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        (0..self.rows())
            .map(|r| (0..self.cols()).map(|c| self.bits[r][c] as u8).collect())
            .collect()
    }
}

/// One catalog entry: a kind, its spawn shape and its display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: PieceColor,
}

/// The seven falling-block shapes, in `PieceKind::ALL` order
pub const CATALOG: [CatalogEntry; 7] = [
    CatalogEntry {
        kind: PieceKind::I,
        shape: Shape::from_array([[1, 1, 1, 1]]),
        color: PieceColor::Cyan,
    },
    CatalogEntry {
        kind: PieceKind::O,
        shape: Shape::from_array([[1, 1], [1, 1]]),
        color: PieceColor::Yellow,
    },
    CatalogEntry {
        kind: PieceKind::T,
        shape: Shape::from_array([[0, 1, 0], [1, 1, 1]]),
        color: PieceColor::Purple,
    },
    CatalogEntry {
        kind: PieceKind::S,
        shape: Shape::from_array([[0, 1, 1], [1, 1, 0]]),
        color: PieceColor::Green,
    },
    CatalogEntry {
        kind: PieceKind::Z,
        shape: Shape::from_array([[1, 1, 0], [0, 1, 1]]),
        color: PieceColor::Red,
    },
    CatalogEntry {
        kind: PieceKind::J,
        shape: Shape::from_array([[1, 0, 0], [1, 1, 1]]),
        color: PieceColor::Blue,
    },
    CatalogEntry {
        kind: PieceKind::L,
        shape: Shape::from_array([[0, 0, 1], [1, 1, 1]]),
        color: PieceColor::Orange,
    },
];

/// Look up the catalog entry for a kind
pub fn catalog_entry(kind: PieceKind) -> &'static CatalogEntry {
    let idx = match kind {
        PieceKind::I => 0,
        PieceKind::O => 1,
        PieceKind::T => 2,
        PieceKind::S => 3,
        PieceKind::Z => 4,
        PieceKind::J => 5,
        PieceKind::L => 6,
    };
    &CATALOG[idx]
}

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub color: PieceColor,
    pub shape: Shape,
    /// Board column of the shape's left edge
    pub x: i32,
    /// Board row of the shape's top edge (may be negative while spawning)
    pub y: i32,
    /// Quarter turns applied since spawn, in `0..4`
    pub rotation: u8,
}

impl ActivePiece {
    /// A piece in spawn orientation anchored at `(x, y)`
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        let entry = catalog_entry(kind);
        Self {
            kind,
            color: entry.color,
            shape: entry.shape,
            x,
            y,
            rotation: 0,
        }
    }

    /// Board coordinates of every filled cell
    pub fn cells(&self) -> ShapeCells {
        self.shape
            .occupied()
            .into_iter()
            .map(|(col, row)| (self.x + col, self.y + row))
            .collect()
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same anchor, shape rotated clockwise
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate_clockwise(),
            rotation: (self.rotation + 1) % 4,
            ..*self
        }
    }
}
