//! CSV layout of the customer file.
//!
//! The file is UTF-8, comma separated, with a fixed header row followed by
//! one customer per line. Quoting of embedded commas, quotes and newlines
//! follows standard CSV rules.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::trace;

use crate::customer::Customer;
use crate::error::{Error, Result};

/// Column names of the customer file, in order.
pub const COLUMNS: [&str; 7] = [
    "ID",
    "Name",
    "Email",
    "Phone Number",
    "Address",
    "Company",
    "Date Added",
];

/// Check that a header row is exactly [`COLUMNS`].
#[must_use]
pub fn is_expected_header(header: &StringRecord) -> bool {
    header.iter().eq(COLUMNS.iter().copied())
}

/// Read every customer from the file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, its header is not
/// [`COLUMNS`], or any row fails to parse (wrong number of cells, an `ID`
/// that is not a non-negative integer, a `Date Added` that is not
/// `YYYY-MM-DD`).
pub fn read_customers(path: &Path) -> Result<Vec<Customer>> {
    let read_err = |source| Error::CsvRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(read_err)?;

    let header = reader.headers().map_err(read_err)?.clone();
    if !is_expected_header(&header) {
        return Err(Error::UnexpectedHeader {
            path: path.to_path_buf(),
            found: header.iter().collect::<Vec<_>>().join(","),
        });
    }

    let customers = reader
        .deserialize::<Customer>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(read_err)?;

    trace!(rows = customers.len(), "Parsed customer file");
    Ok(customers)
}

/// Write the header and every customer to `writer`.
///
/// The header is always written, so an empty table still produces a
/// one-line file.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn write_customers<W: Write>(writer: W, customers: &[Customer]) -> csv::Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    writer.write_record(COLUMNS)?;
    for customer in customers {
        writer.serialize(customer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Replace the file at `path` with the full customer table.
///
/// The table is written to a sibling file first (see [`staging_path`]) and
/// then renamed over `path`, so a failed write leaves the old file intact.
///
/// # Errors
///
/// Returns an error if the staging file cannot be created or written, or if
/// it cannot be moved over `path`.
pub fn save_customers(path: &Path, customers: &[Customer]) -> Result<()> {
    let staging = staging_path(path);
    let write_err = |source| Error::CsvWrite {
        path: staging.clone(),
        source,
    };

    let written = std::fs::File::create(&staging)
        .map_err(|e| write_err(e.into()))
        .and_then(|file| write_customers(file, customers).map_err(write_err));
    if let Err(e) = written {
        let _ = std::fs::remove_file(&staging);
        return Err(e);
    }

    if let Err(e) = std::fs::rename(&staging, path) {
        let _ = std::fs::remove_file(&staging);
        return Err(e.into());
    }

    trace!(rows = customers.len(), path = %path.display(), "Wrote customer file");
    Ok(())
}

/// Sibling path the table is staged in before replacing `path`.
///
/// `customers.csv` stages as `customers.csv.tmp`.
#[must_use]
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(OsString::new, OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}
