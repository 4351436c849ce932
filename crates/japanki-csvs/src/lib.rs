/*!
# japanki CSV Schema Definitions

The CSV contracts of the vocabulary table and the tools that read, write and
normalize it.

## Schema Files

### Vocabulary CSV (`words.csv`)
One row per entry, matched by header name:
- `order`: display index (u32), optional; defaults to the row position
- `hiragana`: phonetic form
- `kanji`: logographic form, may be blank
- `meaning`: English gloss
- `category`: category name, case-insensitive
- `example`: usage sentence, may be blank
- `romanji`: transliteration (`romaji` is accepted too)

### Normalized CSV (`words2.csv`)
Written by [`normalize_csv`]. Either `hiragana, kanji, meaning, example`
(split-examples mode) or `order` followed by the source columns (reindex mode).

## Usage

```rust,no_run
use japanki_csvs::{normalize_csv, read_vocab_csv, CsvResult, NormalizeMode};

fn example() -> CsvResult<()> {
    normalize_csv("data/raw.csv", "data/words.csv", NormalizeMode::Reindex)?;
    let vocabs = read_vocab_csv("data/words.csv")?;
    println!("{} entries", vocabs.len());
    Ok(())
}
```
*/

pub mod errors;
pub mod normalize;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use errors::{CsvError, CsvResult};
pub use normalize::{
    normalize_csv, normalize_table, reindex_table, split_examples, split_examples_table,
    NormalizeMode,
};
pub use schemas::{Table, VocabCsvRow, NORMALIZED_CSV_HEADERS};
pub use validation::{
    read_table, read_table_from_reader, read_vocab_csv, read_vocab_from_reader, write_table,
    write_table_to_writer,
};
