use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::application::AppError;
use crate::domain::Owners;

/// Parse an owners document produced by the exporter
pub fn read_owners<R: Read>(reader: R) -> Result<Owners, AppError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load an owners file from disk
pub fn load_owners(path: impl AsRef<Path>) -> Result<Owners, AppError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AppError::file_access(path, e))?;
    read_owners(BufReader::new(file))
}
