use std::fmt::Display;
use std::io::{self, Write};

pub const SEPARATOR_WIDTH: usize = 78;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub const fn left(width: usize) -> Self {
        Self {
            width,
            align: Align::Left,
        }
    }

    pub const fn right(width: usize) -> Self {
        Self {
            width,
            align: Align::Right,
        }
    }
}

/**
 * Fixed-width text table. Cells wider than their column are printed in full,
 * after a single space, and push the rest of the row to the right.
 */
pub struct Table {
    columns: &'static [Column],
}

impl Table {
    pub const fn new(columns: &'static [Column]) -> Self {
        Self { columns }
    }

    pub fn write_row<W: Write>(&self, out: &mut W, cells: &[&dyn Display]) -> io::Result<()> {
        debug_assert_eq!(cells.len(), self.columns.len());
        for (i, (column, cell)) in self.columns.iter().zip(cells).enumerate() {
            let text = cell.to_string();
            if i > 0 && text.len() >= column.width {
                write!(out, " ")?;
            }
            match column.align {
                Align::Left => write!(out, "{:<1$}", text, column.width)?,
                Align::Right => write!(out, "{:>1$}", text, column.width)?,
            }
        }
        writeln!(out)
    }
}

pub fn write_heading<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", text)?;
    writeln!(out, "{}", "*".repeat(SEPARATOR_WIDTH))
}
