//! Unfolded-net rendering of a cube state for the terminal.

use nxcube_core::{Color, CubeState, Face};
use owo_colors::OwoColorize;

/// The horizontal band of the net, left to right.
const BAND: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];

/// Render `cube` as the standard unfolded net: Up on top, the
/// Left-Front-Right-Back band in the middle, Down underneath. One colored
/// letter per cell.
pub fn render(cube: &CubeState) -> String {
    let n = cube.side();
    // Up and Down sit above and below the Front block: one face width plus
    // the band gap.
    let indent = " ".repeat(2 * n + 1);
    let mut out = String::new();

    for row in cube.face(Face::Up).rows() {
        out.push_str(&indent);
        push_cells(&mut out, row);
        out.push('\n');
    }
    for r in 0..n {
        for (i, face) in BAND.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            let grid = cube.face(*face);
            let row: Vec<Color> = (0..n).map(|c| grid.get(r, c)).collect();
            push_cells(&mut out, &row);
        }
        out.push('\n');
    }
    for row in cube.face(Face::Down).rows() {
        out.push_str(&indent);
        push_cells(&mut out, row);
        out.push('\n');
    }

    out
}

fn push_cells(out: &mut String, row: &[Color]) {
    for (i, &color) in row.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&paint(color));
    }
}

fn paint(color: Color) -> String {
    let letter = color.letter();
    match color {
        Color::White => letter.white().to_string(),
        Color::Yellow => letter.yellow().to_string(),
        Color::Green => letter.green().to_string(),
        Color::Blue => letter.blue().to_string(),
        Color::Red => letter.red().to_string(),
        // The terminal palette has no orange.
        Color::Orange => letter.truecolor(255, 128, 0).to_string(),
    }
}
