//! Cell renderers: plain glyphs for console output, colored cells for the
//! live terminal view.

use termion::color;

use crate::compute::Board;

/// Renders rows of cells into printable strings.
///
/// Renderers are pure consumers: they read board state and never mutate it.
pub trait Renderer {
    /// Render one row of cells.
    fn row(&self, cells: &[bool]) -> String;

    /// Render the full board, one newline-terminated line per row.
    fn render(&self, board: &Board) -> String {
        let mut out = String::new();
        for row in board.rows() {
            out.push_str(&self.row(row));
            out.push('\n');
        }
        out
    }
}

/// Plain-character renderer for console output.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    pub dead: char,
    pub live: char,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            dead: ' ',
            live: 'O',
        }
    }
}

impl Renderer for TextRenderer {
    fn row(&self, cells: &[bool]) -> String {
        cells
            .iter()
            .map(|&cell| if cell { self.live } else { self.dead })
            .collect()
    }
}

/// Background-color renderer for the terminal: one colored blank per cell,
/// reset at the end of each row.
#[derive(Debug, Clone, Copy)]
pub struct ColorRenderer {
    pub dead: color::Rgb,
    pub live: color::Rgb,
}

impl Default for ColorRenderer {
    fn default() -> Self {
        Self {
            dead: color::Rgb(0, 0, 0),
            live: color::Rgb(255, 255, 255),
        }
    }
}

impl Renderer for ColorRenderer {
    fn row(&self, cells: &[bool]) -> String {
        let mut out = String::new();
        for &cell in cells {
            let bg = if cell { self.live } else { self.dead };
            out += &format!("{} ", color::Bg(bg));
        }
        out += &format!("{}", color::Bg(color::Reset));
        out
    }
}
