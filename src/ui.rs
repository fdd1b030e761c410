use alloc::string::String;
use core::fmt::Write;

use crate::surface::{MemorySurface, Readout};

/// Draw the surface as text: `#` for walls, `.` for open cells, the heading
/// glyph where the robot is, followed by the readouts.
pub fn render_surface(surface: &MemorySurface) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for x in 0..surface.width() {
        let _ = write!(out, "{:>2}", x);
    }
    out.push('\n');
    for y in 0..surface.height() as i32 {
        let _ = write!(out, "{:>2} ", y);
        for x in 0..surface.width() as i32 {
            let ch = match surface.cell_at(x, y) {
                Some(cell) if cell.active => cell.marker.unwrap_or('?'),
                Some(cell) if cell.wall => '#',
                Some(_) => '.',
                None => ' ',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "Position: ({}, {})",
        surface.readout(Readout::PosX),
        surface.readout(Readout::PosY)
    );
    let _ = writeln!(out, "Direction: {}", surface.readout(Readout::Heading));
    out
}

#[cfg(feature = "std")]
pub fn print_surface(surface: &MemorySurface) {
    std::print!("{}", render_surface(surface));
}
