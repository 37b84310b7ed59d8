//! Plain text rendering of a document
//!
//! Solid cells print as their palette index in hex, split cells as the block
//! triangle covering their main corner.

use std::fmt::Write;

use icy_pixel_edit::{Corner, Document, FillStyle};

fn glyph(corner: Corner) -> char {
    match corner {
        Corner::TopLeft => '◤',
        Corner::TopRight => '◥',
        Corner::BottomLeft => '◣',
        Corner::BottomRight => '◢',
    }
}

pub fn render(document: &Document) -> String {
    let grid = document.to_grid();
    let mut out = String::new();
    let mut split = 0;

    for row in 0..grid.rows() {
        let Some(line) = grid.line(row) else {
            continue;
        };
        for cell in line {
            match cell.fill_style() {
                FillStyle::Solid => {
                    let c = char::from_digit(u32::from(cell.main_color()), 16).map_or('#', |c| c.to_ascii_uppercase());
                    out.push(c);
                }
                FillStyle::Triangle(corner) => {
                    split += 1;
                    out.push(glyph(corner));
                }
            }
        }
        out.push('\n');
    }

    let layout = &document.layout;
    let (width, height) = layout.canvas_size(grid.rows(), grid.cols());
    let _ = writeln!(
        out,
        "{}x{} cells, {} split, {} colors, canvas {}x{} px (cell {}, spacing {}, background {})",
        grid.rows(),
        grid.cols(),
        split,
        document.palette.len(),
        width,
        height,
        layout.cell_size,
        layout.spacing,
        layout.background
    );
    out
}
