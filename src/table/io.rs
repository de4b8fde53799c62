//! CSV reading and writing.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim, Writer};
use tracing::debug;

use super::{Column, Table, Value};
use crate::error::{Error, Result};

/// Read a table from a CSV file with a header row.
///
/// Short records are padded with gaps. Fails with `NotFound` if `path` does not exist.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut values: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];

    for record in rdr.records() {
        let record = record?;
        for (i, column) in values.iter_mut().enumerate() {
            column.push(record.get(i).map_or(Value::Missing, Value::parse));
        }
    }

    let table = Table::from_columns(
        headers
            .into_iter()
            .zip(values)
            .map(|(name, values)| Column::new(name, values)),
    )?;

    debug!(
        path = %path.display(),
        rows = table.n_rows(),
        columns = table.n_columns(),
        "table loaded"
    );
    Ok(table)
}

/// Write a table to a CSV file with a header row.
pub fn write_csv<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(table.column_names())?;
    for i in 0..table.n_rows() {
        wtr.write_record(table.columns().iter().map(|c| c.values()[i].to_string()))?;
    }
    wtr.flush()?;

    debug!(path = %path.display(), rows = table.n_rows(), "table written");
    Ok(())
}
