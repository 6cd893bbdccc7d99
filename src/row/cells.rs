//! Fixed-width cell storage for one import row.

use std::ops::{Index, IndexMut};

use super::column::{Column, COLUMN_COUNT};

/// The 26 cell values of a row, addressed by [`Column`].
///
/// Every slot is always present; unset slots hold an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cells([String; COLUMN_COUNT]);

impl Cells {
    /// Create a snapshot with every cell empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a column.
    pub fn get(&self, column: Column) -> &str {
        &self.0[column.index()]
    }

    /// Whether a column holds nothing but whitespace.
    pub fn is_blank(&self, column: Column) -> bool {
        self.get(column).trim().is_empty()
    }

    /// Iterate over `(column, value)` pairs in positional order.
    pub fn iter(&self) -> impl Iterator<Item = (Column, &str)> {
        Column::ALL
            .iter()
            .map(move |&column| (column, self.get(column)))
    }
}

impl Index<Column> for Cells {
    type Output = String;

    fn index(&self, column: Column) -> &String {
        &self.0[column.index()]
    }
}

impl IndexMut<Column> for Cells {
    fn index_mut(&mut self, column: Column) -> &mut String {
        &mut self.0[column.index()]
    }
}
