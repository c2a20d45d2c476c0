use crate::DatabaseError;
use include_dir::{Dir, include_dir};
use serde::de::DeserializeOwned;

static DATA_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/data");

/// Parses one of the embedded `data/*.json` tables.
pub fn load_json<T: DeserializeOwned>(file_name: &str) -> Result<T, DatabaseError> {
    let contents = DATA_DIR
        .get_file(file_name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| DatabaseError::MissingData(file_name.to_string()))?;

    Ok(serde_json::from_str(contents)?)
}
