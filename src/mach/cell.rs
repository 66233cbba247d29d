use super::{Cell, STACK_FILE_SUFFIX};
use std::convert::TryFrom;

/// The character a cell stands for. Values that are not Unicode scalar
/// values become U+FFFD.
pub fn to_char(cell: Cell) -> char {
    u32::try_from(cell)
        .ok()
        .and_then(std::char::from_u32)
        .unwrap_or(std::char::REPLACEMENT_CHARACTER)
}

/// Cells as text, one character per cell.
pub fn encode(cells: &[Cell]) -> String {
    cells.iter().map(|&cell| to_char(cell)).collect()
}

/// One cell per character. Invalid UTF-8 decodes as U+FFFD.
pub fn decode(bytes: &[u8]) -> Vec<Cell> {
    String::from_utf8_lossy(bytes)
        .chars()
        .map(|ch| Cell::from(u32::from(ch)))
        .collect()
}

pub fn stack_file_name(cell: Cell) -> String {
    format!("{}{}", cell, STACK_FILE_SUFFIX)
}
