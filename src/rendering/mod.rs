//! Board rendering

pub mod board_svg;
pub mod theme;

pub use board_svg::{render_board, render_board_with, RenderOptions, BOARD_SIZE};
pub use theme::{BoardTheme, ThemeColors};
