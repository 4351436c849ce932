/*!
# CSV Schema Definitions

Column names and row shapes of the vocabulary table (`words.csv`) and of the
table the normalizer derives from it (`words2.csv`).

Columns are matched by header name rather than position, so the source file is
free to order them differently.
*/

use crate::errors::{CsvError, CsvResult};
use csv::StringRecord;
use japanki_vocab::{Vocab, VocabError, VocabResult};
use serde::Deserialize;

// ================================================================================================
// Column Names
// ================================================================================================

pub const ORDER_COLUMN: &str = "order";
pub const HIRAGANA_COLUMN: &str = "hiragana";
pub const KANJI_COLUMN: &str = "kanji";
pub const EXAMPLES_COLUMN: &str = "examples";
pub const MEANING_COLUMN: &str = "meaning";
pub const EXAMPLE_COLUMN: &str = "example";
pub const CATEGORY_COLUMN: &str = "category";
pub const ROMANJI_COLUMN: &str = "romanji";

/// Older tables spell the transliteration column this way
pub const ROMAJI_ALIAS: &str = "romaji";

// ================================================================================================
// Vocabulary CSV Schema
// ================================================================================================

/// Headers `words.csv` must carry to be loaded as [`Vocab`] records.
/// `order`, `kanji` and `example` may be missing entirely.
pub const VOCAB_REQUIRED_HEADERS: &[&str] = &[
    HIRAGANA_COLUMN,
    MEANING_COLUMN,
    CATEGORY_COLUMN,
    ROMANJI_COLUMN,
];

/// Row structure for `words.csv`.
///
/// `category` stays a string here; it is checked against the enumeration when
/// the row becomes a [`Vocab`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VocabCsvRow {
    /// Missing column or blank cell falls back to the row position
    #[serde(default)]
    pub order: Option<u32>,

    pub hiragana: String,

    /// Empty cell deserializes to `None`
    #[serde(default)]
    pub kanji: Option<String>,

    pub meaning: String,

    pub category: String,

    #[serde(default)]
    pub example: Option<String>,

    #[serde(alias = "romaji")]
    pub romanji: String,
}

impl VocabCsvRow {
    /// `position` is the zero-based data row index, used when `order` is absent
    pub fn into_vocab(self, position: u32) -> VocabResult<Vocab> {
        let category = self.category.parse()?;
        Vocab::new(
            self.order.unwrap_or(position),
            self.hiragana,
            self.kanji,
            self.meaning,
            category,
            self.example,
            self.romanji,
        )
    }

    /// Same as [`Self::into_vocab`], with failures pinned to a source line
    pub(crate) fn into_vocab_at(self, position: u32, line: u64) -> CsvResult<Vocab> {
        self.into_vocab(position).map_err(|e| match e {
            VocabError::InvalidCategory(value) => CsvError::InvalidCategory { line, value },
            other => CsvError::MalformedRow {
                line,
                reason: other.to_string(),
            },
        })
    }
}

// ================================================================================================
// Normalized CSV Schema
// ================================================================================================

/// Columns of the table produced by splitting `examples`, in exact order
pub const NORMALIZED_CSV_HEADERS: &[&str] =
    &[HIRAGANA_COLUMN, KANJI_COLUMN, MEANING_COLUMN, EXAMPLE_COLUMN];

// ================================================================================================
// Untyped Tables
// ================================================================================================

/// A whole CSV table held as raw records.
///
/// The normalizer works on these because its column set depends on the mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
}

impl Table {
    pub fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        Self { headers, rows }
    }

    /// Index of the column named `name`
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn require_column(&self, name: &'static str, file_type: &str) -> CsvResult<usize> {
        self.column(name).ok_or_else(|| CsvError::MissingHeader {
            file_type: file_type.to_string(),
            header: name,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
