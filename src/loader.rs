use std::{io::Read, path::Path};

use crate::{
    index::{IndexError, IndexOptions, PrefixIndex, Record},
    models::DataConfig,
};

const COL_COUNT: usize = 2;
const LOG_EVERY: usize = 100_000;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Index(#[from] IndexError),
    #[error("{0}")]
    Validation(String),
}

/// Load (name, score) records from a CSV file.
pub fn load_csv(path: &Path, cfg: &DataConfig) -> Result<Vec<Record>, LoadError> {
    log::info!("loading data from {} ...", path.display());

    let file = std::fs::File::open(path)?;
    let records = read_records(file, cfg)?;

    log::info!("finished. loaded {} records", records.len());
    Ok(records)
}

/// Load a CSV file and build a fresh index from it.
pub fn load_index(
    path: &Path,
    cfg: &DataConfig,
    opts: IndexOptions,
) -> Result<PrefixIndex, LoadError> {
    let records = load_csv(path, cfg)?;
    let index = PrefixIndex::build_with(records, opts)?;

    log::info!(
        "built index: {} records, {} keys",
        index.num_records(),
        index.num_entries()
    );
    Ok(index)
}

/// Read records from any CSV source. Every row must have exactly two columns.
pub fn read_records<R: Read>(rdr: R, cfg: &DataConfig) -> Result<Vec<Record>, LoadError> {
    // Rows of any width are accepted by the reader and rejected below with a line number.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(cfg.has_headers())
        .delimiter(delimiter(&cfg.delimiter)?)
        .flexible(true)
        .from_reader(rdr);

    let mut out = Vec::new();
    for (n, result) in reader.records().enumerate() {
        let row = result?;
        let line = row.position().map(|p| p.line() as usize).unwrap_or(n + 1);

        if row.len() != COL_COUNT {
            return Err(LoadError::Validation(format!(
                "line {}: every line should have exactly {} columns. Found {}",
                line,
                COL_COUNT,
                row.len()
            )));
        }

        let name = row.get(0).unwrap_or("");
        let score = row.get(1).unwrap_or("");
        out.push(Record::parse(line, name, score)?);

        if out.len().is_multiple_of(LOG_EVERY) {
            log::info!("read {} records", out.len());
        }
    }

    Ok(out)
}

fn delimiter(s: &str) -> Result<u8, LoadError> {
    match s.as_bytes() {
        [] => Ok(b','),
        [b] => Ok(*b),
        _ => Err(LoadError::Validation(format!(
            "delimiter should be a single byte. Found '{}'",
            s
        ))),
    }
}
