//! Line and cell splitting for cart documents
//!
//! Copyright (c) 2025 Cartparse Team
//! Licensed under the Apache-2.0 license

use csv::{ByteRecord, ReaderBuilder, Trim};

/// One line of a document, split into trimmed cells
pub type Row = Vec<String>;

/// Column delimiter used when none is configured
pub const DEFAULT_DELIMITER: u8 = b',';

/// Splits raw document text into rows of cells.
///
/// No validation happens here: short, long or otherwise malformed rows are
/// passed through untouched so the validator can report them. Quotes have no
/// special meaning, so `a,"1,5",b` is four cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    delimiter: u8,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl Tokenizer {
    /// Create a tokenizer with the default `,` delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer splitting cells on the ASCII byte `delimiter`
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// The configured cell delimiter
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Split `text` into rows.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line. Lines that are empty or
    /// only whitespace are skipped wherever they appear, so rows are numbered
    /// by content line rather than physical line.
    pub fn tokenize(&self, text: &str) -> Vec<Row> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .delimiter(self.delimiter)
            .from_reader(text.as_bytes());

        // Reading from an in-memory slice has no I/O to fail
        reader
            .byte_records()
            .filter_map(|record| record.ok())
            .map(|record| to_row(&record))
            .filter(|row| !is_blank(row))
            .collect()
    }
}

/// Cells as owned strings, trimmed of any Unicode whitespace the byte-level
/// trim left behind
fn to_row(record: &ByteRecord) -> Row {
    record
        .iter()
        .map(|cell| String::from_utf8_lossy(cell).trim().to_string())
        .collect()
}

/// A whitespace-only line comes through as a single empty cell
fn is_blank(row: &Row) -> bool {
    matches!(row.as_slice(), [cell] if cell.is_empty())
}
