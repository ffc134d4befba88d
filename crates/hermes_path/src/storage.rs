use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::error::StorageError;

pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>, StorageError> {
    let read_error = |source| StorageError::Read {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer).map_err(read_error)?;
    Ok(buffer)
}

pub(crate) fn write_bytes(bytes: &[u8], path: &Path) -> Result<(), StorageError> {
    let write_error = |source| StorageError::Write {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(bytes).map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    Ok(())
}
