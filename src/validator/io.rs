//! Row sources and sinks.
//!
//! The file driver only sees decoded rows: a [`RowSource`] yields ordered
//! string cells per record and a [`RowSink`] accepts them. The CSV
//! implementations use comma delimiters and double-quote quoting.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecordsIntoIter, Writer, WriterBuilder};

use crate::error::{Result, ValidatorError};

/// An ordered sequence of decoded rows.
///
/// Any iterator of row results is a source, which keeps tests simple.
pub trait RowSource {
    /// The next row, `None` once the source is exhausted.
    fn next_row(&mut self) -> Option<Result<Vec<String>>>;
}

impl<I> RowSource for I
where
    I: Iterator<Item = Result<Vec<String>>>,
{
    fn next_row(&mut self) -> Option<Result<Vec<String>>> {
        self.next()
    }
}

/// A destination for encoded rows.
pub trait RowSink {
    /// Append one row.
    fn write_row(&mut self, cells: &[String]) -> Result<()>;
}

/// Reads rows from delimited text.
///
/// Records may have any width; the driver decides what a short row means.
pub struct CsvRowSource<R: Read> {
    records: StringRecordsIntoIter<R>,
    done: bool,
}

impl CsvRowSource<File> {
    /// Open a CSV file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ValidatorError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> CsvRowSource<R> {
    /// Read CSV records from any reader.
    pub fn from_reader(reader: R) -> Self {
        let records = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(b',')
            .quote(b'"')
            .from_reader(reader)
            .into_records();
        Self {
            records,
            done: false,
        }
    }
}

impl<R: Read> Iterator for CsvRowSource<R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.records.next()? {
            Ok(record) => Some(Ok(record.iter().map(String::from).collect())),
            Err(e) => {
                // A failing reader will not recover; decode errors only
                // affect the current record.
                if e.is_io_error() {
                    self.done = true;
                }
                Some(Err(e.into()))
            }
        }
    }
}

/// Writes rows as CSV records, flushing after each one.
pub struct CsvRowSink<W: Write> {
    writer: Writer<W>,
}

impl CsvRowSink<File> {
    /// Open `path` for appending, creating it if needed.
    pub fn append(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> CsvRowSink<W> {
    /// Write CSV records to any writer.
    pub fn from_writer(writer: W) -> Self {
        let writer = WriterBuilder::new()
            .delimiter(b',')
            .quote(b'"')
            .from_writer(writer);
        Self { writer }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ValidatorError::Io(e.into_error()))
    }
}

impl<W: Write> RowSink for CsvRowSink<W> {
    fn write_row(&mut self, cells: &[String]) -> Result<()> {
        self.writer.write_record(cells)?;
        self.writer.flush()?;
        Ok(())
    }
}
