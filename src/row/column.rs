//! Column slot identifiers.
//!
//! An import row has exactly 26 positional columns, lettered `A` to `Z`
//! like the spreadsheet the data is authored in.

use std::fmt;

/// Number of columns in an import row.
pub const COLUMN_COUNT: usize = 26;

/// One of the 26 fixed column slots of an import row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Column {
    /// All columns in positional order.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::A,
        Column::B,
        Column::C,
        Column::D,
        Column::E,
        Column::F,
        Column::G,
        Column::H,
        Column::I,
        Column::J,
        Column::K,
        Column::L,
        Column::M,
        Column::N,
        Column::O,
        Column::P,
        Column::Q,
        Column::R,
        Column::S,
        Column::T,
        Column::U,
        Column::V,
        Column::W,
        Column::X,
        Column::Y,
        Column::Z,
    ];

    /// Zero-based position of this column in a row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Spreadsheet letter for this column.
    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Look up a column by its zero-based position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_positional_order() {
        for (idx, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), idx);
        }
    }

    #[test]
    fn letters_run_a_to_z() {
        assert_eq!(Column::A.letter(), 'A');
        assert_eq!(Column::M.letter(), 'M');
        assert_eq!(Column::Z.letter(), 'Z');
    }

    #[test]
    fn display_is_letter() {
        assert_eq!(format!("{}", Column::Q), "Q");
    }

    #[test]
    fn from_index_bounds() {
        assert_eq!(Column::from_index(0), Some(Column::A));
        assert_eq!(Column::from_index(25), Some(Column::Z));
        assert_eq!(Column::from_index(26), None);
    }
}
