/*!
# Table Normalization

Derives a cleaned table from the raw vocabulary CSV. Two modes:

- **split-examples**: split the combined `examples` cell on its last newline
  into `meaning` and `example`, keeping only
  `hiragana, kanji, meaning, example`.
- **reindex**: prepend an `order` column holding each row's zero-based
  position, leaving the other columns untouched.

The whole table is transformed in memory before the output file is created.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::{
        Table, EXAMPLES_COLUMN, HIRAGANA_COLUMN, KANJI_COLUMN, NORMALIZED_CSV_HEADERS,
        ORDER_COLUMN,
    },
    validation::{read_table, write_table},
};
use csv::StringRecord;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizeMode {
    #[default]
    SplitExamples,
    Reindex,
}

impl fmt::Display for NormalizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use NormalizeMode::*;
        let s = match self {
            SplitExamples => "split-examples",
            Reindex => "reindex",
        };

        write!(f, "{}", s)
    }
}

impl FromStr for NormalizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "split-examples" => Ok(NormalizeMode::SplitExamples),
            "reindex" => Ok(NormalizeMode::Reindex),
            _ => Err(format!(
                "Invalid normalize mode: {s}. Valid options: split-examples, reindex"
            )),
        }
    }
}

/// Split on the last `\n`: `"a\nb\nc"` gives `("a\nb", Some("c"))`.
/// Text without a newline is all meaning.
pub fn split_examples(examples: &str) -> (&str, Option<&str>) {
    match examples.rsplit_once('\n') {
        Some((meaning, example)) => (meaning, Some(example)),
        None => (examples, None),
    }
}

/// Replace `examples` with `meaning`/`example`, dropping every other column
/// except `hiragana` and `kanji`
pub fn split_examples_table(table: &Table) -> CsvResult<Table> {
    let hiragana = table.require_column(HIRAGANA_COLUMN, "source table")?;
    let kanji = table.require_column(KANJI_COLUMN, "source table")?;
    let examples = table.require_column(EXAMPLES_COLUMN, "source table")?;

    let rows = table
        .rows
        .iter()
        .map(|row| {
            let (meaning, example) = split_examples(&row[examples]);
            StringRecord::from(vec![
                &row[hiragana],
                &row[kanji],
                meaning,
                example.unwrap_or(""),
            ])
        })
        .collect();

    Ok(Table::new(StringRecord::from(NORMALIZED_CSV_HEADERS), rows))
}

/// Prepend `order` = zero-based row position. An existing `order` column is
/// dropped rather than duplicated.
pub fn reindex_table(table: &Table) -> Table {
    let existing = table.column(ORDER_COLUMN);
    let keep = |record: &StringRecord| -> Vec<String> {
        record
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != existing)
            .map(|(_, field)| field.to_string())
            .collect()
    };

    let mut headers = StringRecord::from(vec![ORDER_COLUMN]);
    headers.extend(keep(&table.headers));

    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(position, row)| {
            let mut record = StringRecord::from(vec![position.to_string()]);
            record.extend(keep(row));
            record
        })
        .collect();

    Table::new(headers, rows)
}

pub fn normalize_table(table: &Table, mode: NormalizeMode) -> CsvResult<Table> {
    debug!(%mode, rows = table.len(), "Normalizing table");
    match mode {
        NormalizeMode::SplitExamples => split_examples_table(table),
        NormalizeMode::Reindex => Ok(reindex_table(table)),
    }
}

/// Read `input`, normalize it, and write the result to `output`.
///
/// Returns the number of data rows written. `output` must not name the same
/// file as `input`.
pub fn normalize_csv<P, Q>(input: P, output: Q, mode: NormalizeMode) -> CsvResult<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (input, output) = (input.as_ref(), output.as_ref());
    if same_file(input, output) {
        return Err(CsvError::OutputOverwritesInput(output.to_path_buf()));
    }

    let table = read_table(input)?;
    let normalized = normalize_table(&table, mode)?;
    write_table(output, &normalized)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        rows = normalized.len(),
        "Wrote normalized table"
    );
    Ok(normalized.len())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
