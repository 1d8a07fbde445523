//! Terminal render sink.
//!
//! Sessions are drawn into a plain framebuffer ([`SessionView`]), which
//! [`TerminalRenderer`] then flushes to the terminal through crossterm.
//!
//! - Keep `core` deterministic and testable
//! - Allow precise control over aspect ratio (2 chars wide per falling cell)

pub mod fb;
pub mod palette;
pub mod renderer;
pub mod view;

pub use grid_puzzle_core as core;
pub use grid_puzzle_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{AnchorY, CellSize, SessionView, Viewport};
