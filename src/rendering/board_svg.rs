//! SVG board renderer
//!
//! Pure function from a position (and optionally the last move) to inline SVG
//! markup. White is always at the bottom. Nothing is cached between calls.

use super::theme::BoardTheme;
use shakmaty::{Chess, Color, Piece, Position, Role, Square};

/// Display size used by the pages, in pixels
pub const BOARD_SIZE: u32 = 400;

const GLYPH_FONT: &str = "'DejaVu Sans', 'Segoe UI Symbol', 'Noto Sans Symbols2', serif";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub size: u32,
    pub theme: BoardTheme,
    /// Draw file letters and rank numbers in a margin
    pub coordinates: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            theme: BoardTheme::Classic,
            coordinates: true,
        }
    }
}

/// Render with the default size and theme
pub fn render_board(position: &Chess, last_move: Option<(Square, Square)>) -> String {
    render_board_with(position, last_move, &RenderOptions::default())
}

/// Render with explicit options
///
/// `last_move` tints its two squares and draws an arrow from the first to
/// the second.
pub fn render_board_with(
    position: &Chess,
    last_move: Option<(Square, Square)>,
    options: &RenderOptions,
) -> String {
    let geometry = Geometry::new(options);
    let colors = options.theme.colors();
    let mut svg = String::with_capacity(16 * 1024);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="chess-board" width="{s}" height="{s}" viewBox="0 0 {s} {s}">"#,
        s = options.size
    ));
    svg.push_str(&format!(
        r##"<rect x="0" y="0" width="{s}" height="{s}" fill="#ffffff"/>"##,
        s = options.size
    ));

    for index in 0..64u32 {
        let square = Square::new(index);
        let (x, y) = geometry.origin(square);
        let light = is_light(square);
        let highlighted = last_move.is_some_and(|(from, to)| square == from || square == to);
        let fill = match (light, highlighted) {
            (true, false) => colors.light_square,
            (false, false) => colors.dark_square,
            (true, true) => colors.light_last_move,
            (false, true) => colors.dark_last_move,
        };
        svg.push_str(&format!(
            r#"<rect class="square {shade} {square}" x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{w:.1}" fill="{fill}"/>"#,
            shade = if light { "light" } else { "dark" },
            w = geometry.square,
        ));
    }

    if options.coordinates {
        push_coordinates(&mut svg, &geometry, colors.coordinates);
    }

    for index in 0..64u32 {
        let square = Square::new(index);
        if let Some(piece) = position.board().piece_at(square) {
            push_piece(&mut svg, &geometry, square, piece);
        }
    }

    if let Some((from, to)) = last_move {
        push_arrow(&mut svg, &geometry, from, to, colors.arrow);
    }

    svg.push_str("</svg>");
    svg
}

/// Pixel layout derived from the options
struct Geometry {
    size: f64,
    margin: f64,
    square: f64,
}

impl Geometry {
    fn new(options: &RenderOptions) -> Self {
        let size = f64::from(options.size);
        let margin = if options.coordinates { size / 20.0 } else { 0.0 };
        Self {
            size,
            margin,
            square: (size - 2.0 * margin) / 8.0,
        }
    }

    /// Top-left corner of a square
    fn origin(&self, square: Square) -> (f64, f64) {
        let (file, rank) = file_rank(square);
        (
            self.margin + f64::from(file) * self.square,
            self.margin + f64::from(7 - rank) * self.square,
        )
    }

    fn center(&self, square: Square) -> (f64, f64) {
        let (x, y) = self.origin(square);
        (x + self.square / 2.0, y + self.square / 2.0)
    }
}

fn file_rank(square: Square) -> (u32, u32) {
    let index = u32::from(square);
    (index % 8, index / 8)
}

/// a1 is dark, h1 is light
fn is_light(square: Square) -> bool {
    let (file, rank) = file_rank(square);
    (file + rank) % 2 == 1
}

fn glyph(role: Role) -> char {
    match role {
        Role::King => '♚',
        Role::Queen => '♛',
        Role::Rook => '♜',
        Role::Bishop => '♝',
        Role::Knight => '♞',
        Role::Pawn => '♟',
    }
}

fn push_piece(svg: &mut String, geometry: &Geometry, square: Square, piece: Piece) {
    let (cx, cy) = geometry.center(square);
    let (fill, stroke, side) = match piece.color {
        Color::White => ("#ffffff", "#000000", "white"),
        Color::Black => ("#000000", "#000000", "black"),
    };
    // U+FE0E keeps the pawn from turning into an emoji
    svg.push_str(&format!(
        r#"<text class="piece {side} {role:?}" x="{cx:.1}" y="{cy:.1}" font-size="{fs:.1}" font-family="{GLYPH_FONT}" text-anchor="middle" dominant-baseline="central" fill="{fill}" stroke="{stroke}" stroke-width="1">{g}&#xFE0E;</text>"#,
        role = piece.role,
        fs = geometry.square * 0.8,
        g = glyph(piece.role),
    ));
}

fn push_coordinates(svg: &mut String, geometry: &Geometry, color: &str) {
    let font_size = geometry.margin * 0.7;
    for (i, file) in ('a'..='h').enumerate() {
        let x = geometry.margin + (i as f64 + 0.5) * geometry.square;
        let y = geometry.size - geometry.margin / 2.0;
        svg.push_str(&format!(
            r#"<text class="coord" x="{x:.1}" y="{y:.1}" font-size="{font_size:.1}" text-anchor="middle" dominant-baseline="central" fill="{color}">{file}</text>"#
        ));
    }
    for rank in 1..=8u32 {
        let x = geometry.margin / 2.0;
        let y = geometry.margin + (f64::from(8 - rank) + 0.5) * geometry.square;
        svg.push_str(&format!(
            r#"<text class="coord" x="{x:.1}" y="{y:.1}" font-size="{font_size:.1}" text-anchor="middle" dominant-baseline="central" fill="{color}">{rank}</text>"#
        ));
    }
}

/// Shaft plus a triangular head ending at the center of `to`
fn push_arrow(svg: &mut String, geometry: &Geometry, from: Square, to: Square, color: &str) {
    let (x1, y1) = geometry.center(from);
    let (x2, y2) = geometry.center(to);
    let (dx, dy) = (x2 - x1, y2 - y1);
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        return;
    }
    let (ux, uy) = (dx / length, dy / length);

    let head_length = geometry.square * 0.4;
    let head_half_width = geometry.square * 0.25;
    let (bx, by) = (x2 - ux * head_length, y2 - uy * head_length);
    let (px, py) = (-uy * head_half_width, ux * head_half_width);

    svg.push_str(&format!(
        r#"<g class="arrow" opacity="0.6"><line x1="{x1:.1}" y1="{y1:.1}" x2="{bx:.1}" y2="{by:.1}" stroke="{color}" stroke-width="{w:.1}" stroke-linecap="round"/><polygon points="{x2:.1},{y2:.1} {l1:.1},{l2:.1} {r1:.1},{r2:.1}" fill="{color}"/></g>"#,
        w = geometry.square * 0.15,
        l1 = bx + px,
        l2 = by + py,
        r1 = bx - px,
        r2 = by - py,
    ));
}
