//! Text rendering of the board for the console.

use std::fmt;

use super::Board;
use crate::core::{Side, ROWS};

impl fmt::Display for Board {
    /// Draws the vertical board, widening the frame once a home holds a
    /// two-digit count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let home_a = self.get_home(Side::A);
        let home_b = self.get_home(Side::B);
        let (pad, line) = if home_a > 9 || home_b > 9 {
            (" ", "_")
        } else {
            ("", "")
        };

        writeln!(f, "            {line}_______{line}")?;
        writeln!(f, "           |{pad}       {pad}|")?;
        writeln!(f, "           |{pad} ( {home_b} ) | <-- Home B")?;
        writeln!(f, "           |{pad}       {pad}|")?;
        for row in 0..ROWS {
            writeln!(
                f,
                " Row {row} --> |{pad} {}   {} {pad}|",
                self.get_hole(Side::A, row),
                self.get_hole(Side::B, row)
            )?;
        }
        writeln!(f, "           |{pad}       {pad}|")?;
        writeln!(f, "Home A --> |{pad} ( {home_a} ) |")?;
        write!(f, "           |{line}_______{line}|")
    }
}
