use crate::error::CliResult;
use japanki_csvs::{normalize_csv, NormalizeMode};
use std::path::PathBuf;
use tracing::info;

/// Rewrite the source table into a cleaned copy
pub fn execute(mode: NormalizeMode, input: PathBuf, output: PathBuf) -> CliResult<()> {
    info!(
        %mode,
        input = %input.display(),
        output = %output.display(),
        "Normalizing vocabulary table"
    );

    if output.exists() {
        info!(
            "Output file already exists and will be overwritten: {}",
            output.display()
        );
    }

    let rows = normalize_csv(&input, &output, mode)?;
    info!("Normalization completed: {} rows", rows);

    Ok(())
}
