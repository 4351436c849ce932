use crate::error::CliResult;
use japanki_csvs::read_vocab_csv;
use japanki_vocab::{parse_categories, pick_from_categories};
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Print one random entry from the requested categories.
///
/// With no categories, asks for one on stdin first.
pub fn execute(categories: Vec<String>, words_csv: PathBuf) -> CliResult<()> {
    let stdin = io::stdin();
    run(
        categories,
        &words_csv,
        &mut stdin.lock(),
        &mut io::stdout(),
        &mut rand::thread_rng(),
    )
}

/// [`execute`] with its input, output and random source supplied by the caller
pub fn run<I, W, R>(
    categories: Vec<String>,
    words_csv: &Path,
    input: &mut I,
    out: &mut W,
    rng: &mut R,
) -> CliResult<()>
where
    I: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    let categories = if categories.is_empty() {
        vec![prompt_category(input, out)?]
    } else {
        categories
    };

    show_random(&categories, words_csv, rng, out)
}

/// A single blocking read of one category name
pub fn prompt_category<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> CliResult<String> {
    writeln!(output, "select category")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn show_random<R, W>(
    names: &[String],
    words_csv: &Path,
    rng: &mut R,
    out: &mut W,
) -> CliResult<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    // names are checked before the table is touched
    let categories = parse_categories(names)?;
    info!(?categories, "Selected");

    info!("Reading in vocab database...");
    let vocabs = read_vocab_csv(words_csv)?;

    let vocab = pick_from_categories(&vocabs, names, rng)?;
    writeln!(out, "{}", vocab)?;
    Ok(())
}
