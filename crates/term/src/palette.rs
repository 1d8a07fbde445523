//! Colors and labels for pieces and tiles.

use crate::fb::{CellStyle, Rgb};
use crate::types::PieceColor;

pub const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
pub const TILE_BOARD_BG: Rgb = Rgb::new(187, 173, 160);

const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

pub fn piece_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Cyan => Rgb::new(80, 220, 220),
        PieceColor::Yellow => Rgb::new(240, 220, 80),
        PieceColor::Purple => Rgb::new(200, 120, 220),
        PieceColor::Green => Rgb::new(100, 220, 120),
        PieceColor::Red => Rgb::new(220, 80, 80),
        PieceColor::Blue => Rgb::new(80, 120, 220),
        PieceColor::Orange => Rgb::new(255, 165, 0),
    }
}

/// Style for a locked or falling cell of `color`
pub fn piece_style(color: PieceColor) -> CellStyle {
    CellStyle::new(piece_rgb(color), BOARD_BG).bold()
}

/// Background for a tile value; values past 2048 share one color
pub fn tile_rgb(value: u32) -> Rgb {
    match value {
        0 => Rgb::new(205, 193, 180),
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => Rgb::new(60, 58, 50),
    }
}

/// Style for a tile cell: dark text on the two lightest tiles
pub fn tile_style(value: u32) -> CellStyle {
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    let style = CellStyle::new(fg, tile_rgb(value));
    if value >= 8 {
        style.bold()
    } else {
        style
    }
}

/// Text shown on a tile; empty cells have none
pub fn tile_label(value: u32) -> String {
    match value {
        0 => String::new(),
        v => v.to_string(),
    }
}
