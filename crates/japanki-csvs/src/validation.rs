/*!
# CSV Validation & I/O

Reading of the vocabulary table as typed `Vocab` records, and reading and
writing of untyped tables (`Table`, for the normalizer). Headers are validated before any row is
read; row-level failures carry the line they came from.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::{Table, VocabCsvRow, ROMAJI_ALIAS, ROMANJI_COLUMN, VOCAB_REQUIRED_HEADERS},
};
use csv::{Reader, StringRecord, Writer};
use japanki_vocab::Vocab;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

// ================================================================================================
// Vocabulary Tables
// ================================================================================================

/// Read and validate a vocabulary CSV file
pub fn read_vocab_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<Vocab>> {
    let file = File::open(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "Reading vocabulary table");
    read_vocab_from_reader(file)
}

pub fn read_vocab_from_reader<R: Read>(reader: R) -> CsvResult<Vec<Vocab>> {
    let mut rdr = Reader::from_reader(reader);

    let headers = rdr.headers().map_err(CsvError::from_row)?.clone();
    validate_vocab_headers(&headers, "words.csv")?;

    let mut vocabs = Vec::new();
    let mut position: u32 = 0;
    for result in rdr.records() {
        let record = result.map_err(CsvError::from_row)?;
        let line = record.position().map_or(0, |pos| pos.line());
        let row: VocabCsvRow = record
            .deserialize(Some(&headers))
            .map_err(|e| CsvError::at_line(e, line))?;
        vocabs.push(row.into_vocab_at(position, line)?);
        position = position.saturating_add(1);
    }

    debug!(rows = vocabs.len(), "Loaded vocabulary table");
    Ok(vocabs)
}

// ================================================================================================
// Untyped Tables
// ================================================================================================

/// Read a whole CSV file into memory as raw records
pub fn read_table<P: AsRef<Path>>(path: P) -> CsvResult<Table> {
    let file = File::open(path)?;
    read_table_from_reader(file)
}

pub fn read_table_from_reader<R: Read>(reader: R) -> CsvResult<Table> {
    let mut rdr = Reader::from_reader(reader);
    let headers = rdr.headers().map_err(CsvError::from_row)?.clone();

    let rows = rdr
        .records()
        .map(|result| result.map_err(CsvError::from_row))
        .collect::<CsvResult<Vec<StringRecord>>>()?;

    Ok(Table::new(headers, rows))
}

pub fn write_table<P: AsRef<Path>>(path: P, table: &Table) -> CsvResult<()> {
    let file = File::create(path)?;
    write_table_to_writer(file, table)
}

pub fn write_table_to_writer<W: Write>(writer: W, table: &Table) -> CsvResult<()> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

// ================================================================================================
// Header Validation
// ================================================================================================

fn validate_vocab_headers(headers: &StringRecord, file_type: &str) -> CsvResult<()> {
    for &required in VOCAB_REQUIRED_HEADERS {
        let present = headers.iter().any(|header| {
            header == required || (required == ROMANJI_COLUMN && header == ROMAJI_ALIAS)
        });
        if !present {
            return Err(CsvError::MissingHeader {
                file_type: file_type.to_string(),
                header: required,
            });
        }
    }
    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use japanki_vocab::Category;
    use tempfile::NamedTempFile;

    const WORDS: &str = "\
order,hiragana,kanji,meaning,category,example,romanji
0,いま,今,now,time,今は九時です。,ima
1,くるま,車,car,Manmade,,kuruma
2,たべる,食べる,to eat,VERB,,taberu
";

    #[test]
    fn test_read_vocab_from_reader() {
        let vocabs = read_vocab_from_reader(WORDS.as_bytes()).unwrap();
        assert_eq!(vocabs.len(), 3);
        assert_eq!(vocabs[0].example(), Some("今は九時です。"));
        assert_eq!(vocabs[1].example(), None);
        assert_eq!(vocabs[2].category(), Category::Verb);
    }

    #[test]
    fn test_read_vocab_csv_from_file() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), WORDS).unwrap();

        let from_file = read_vocab_csv(temp_file.path()).unwrap();
        let from_reader = read_vocab_from_reader(WORDS.as_bytes()).unwrap();
        assert_eq!(from_file, from_reader);
    }

    #[test]
    fn test_header_only_table_writes_header_and_reads_back_empty() {
        let table = read_table_from_reader(
            "order,hiragana,kanji,meaning,category,example,romanji\n".as_bytes(),
        )
        .unwrap();
        assert!(table.is_empty());

        let temp_file = NamedTempFile::new().unwrap();
        write_table(temp_file.path(), &table).unwrap();

        let written = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(written, "order,hiragana,kanji,meaning,category,example,romanji\n");
        assert!(read_vocab_csv(temp_file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_table_without_order_uses_row_position() {
        let data = "\
hiragana,kanji,meaning,category,example,romanji
いち,一,one,unit,,ichi
に,二,two,unit,,ni
さん,三,three,unit,,san
";
        let vocabs = read_vocab_from_reader(data.as_bytes()).unwrap();
        let orders: Vec<u32> = vocabs.iter().map(|v| v.order()).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert_eq!(vocabs[2].to_string(), "[Unit] | 2 | さん | 三 | san");
    }

    #[test]
    fn test_missing_header() {
        let data = "order,hiragana,kanji,meaning,example,romanji\n0,いま,今,now,,ima\n";
        let result = read_vocab_from_reader(data.as_bytes());
        assert!(matches!(
            result,
            Err(CsvError::MissingHeader {
                header: "category",
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_stored_category() {
        let data = "\
order,hiragana,kanji,meaning,category,example,romanji
0,いま,今,now,time,,ima
1,そら,空,sky,weather,,sora
";
        match read_vocab_from_reader(data.as_bytes()) {
            Err(CsvError::InvalidCategory { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "weather");
            }
            other => panic!("expected InvalidCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_order_is_malformed() {
        let data = "order,hiragana,kanji,meaning,category,example,romanji\nfirst,いま,今,now,time,,ima\n";
        let result = read_vocab_from_reader(data.as_bytes());
        assert!(matches!(result, Err(CsvError::MalformedRow { line: 2, .. })));
    }

    #[test]
    fn test_wrong_column_count_is_malformed() {
        let data = "\
order,hiragana,kanji,meaning,category,example,romanji
0,いま,今,now,time,,ima
1,くるま,車,car
";
        let result = read_vocab_from_reader(data.as_bytes());
        match result {
            Err(CsvError::MalformedRow { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("expected 7 fields, found 4"));
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_meaning_is_malformed() {
        let data = "order,hiragana,kanji,meaning,category,example,romanji\n0,いま,今,,time,,ima\n";
        let result = read_vocab_from_reader(data.as_bytes());
        assert!(matches!(result, Err(CsvError::MalformedRow { line: 2, .. })));
    }

    #[test]
    fn test_table_round_trip() {
        let table = read_table_from_reader(WORDS.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.column("romanji"), Some(6));

        let mut out = Vec::new();
        write_table_to_writer(&mut out, &table).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), WORDS);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_vocab_csv(dir.path().join("nope.csv"));
        assert!(matches!(result, Err(CsvError::Io(_))));
    }
}
