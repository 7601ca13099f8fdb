//! Board color themes
//!
//! Chosen once at startup with `--board-theme` and used for every board the
//! pages draw.

use clap::ValueEnum;

/// Board visual themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BoardTheme {
    #[default]
    Classic,
    Modern,
    Wood,
    Marble,
}

/// Fill colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub light_square: &'static str,
    pub dark_square: &'static str,
    pub light_last_move: &'static str,
    pub dark_last_move: &'static str,
    pub arrow: &'static str,
    pub coordinates: &'static str,
}

impl BoardTheme {
    pub fn name(&self) -> &'static str {
        match self {
            BoardTheme::Classic => "Classic",
            BoardTheme::Modern => "Modern",
            BoardTheme::Wood => "Wood",
            BoardTheme::Marble => "Marble",
        }
    }

    pub fn colors(&self) -> ThemeColors {
        match self {
            BoardTheme::Classic => ThemeColors {
                light_square: "#eeeed1", // Cream
                dark_square: "#769656",  // Green
                light_last_move: "#f6f669",
                dark_last_move: "#baca2b",
                arrow: "#15781b",
                coordinates: "#333333",
            },
            BoardTheme::Modern => ThemeColors {
                light_square: "#e6e6e6",
                dark_square: "#4d4d4d",
                light_last_move: "#cdd16a",
                dark_last_move: "#aaa23b",
                arrow: "#1f6feb",
                coordinates: "#222222",
            },
            BoardTheme::Wood => ThemeColors {
                light_square: "#d9b38c", // Light wood
                dark_square: "#8c5933",  // Dark wood
                light_last_move: "#e8d06a",
                dark_last_move: "#b39a2e",
                arrow: "#15781b",
                coordinates: "#3b2414",
            },
            BoardTheme::Marble => ThemeColors {
                light_square: "#f2f2f2",
                dark_square: "#262626",
                light_last_move: "#d8dc84",
                dark_last_move: "#6b6a2a",
                arrow: "#c0392b",
                coordinates: "#111111",
            },
        }
    }
}
