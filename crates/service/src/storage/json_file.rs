use std::{
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;
use tokio::fs;

use crate::errors::ServiceError;

/// Result of reading a JSON list file from disk.
#[derive(Debug, PartialEq)]
pub enum Loaded<T> {
    /// No file at the path.
    Missing,
    Records(Vec<T>),
    /// The file exists but could not be read or is not a JSON array of `T`.
    Unreadable(String),
}

/// JSON file holding a single array of records.
///
/// Reads are lenient (see [`Loaded`]); writes always rewrite the whole file,
/// pretty-printed with four-space indentation. Non-ASCII text is written
/// as-is, serde_json never escapes it.
#[derive(Debug, Clone)]
pub struct JsonListFile<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonListFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into(), _records: PhantomData }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Loaded<T> {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<T>>(&bytes) {
                Ok(records) => Loaded::Records(records),
                Err(e) => Loaded::Unreadable(e.to_string()),
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Loaded::Missing,
            Err(e) => Loaded::Unreadable(e.to_string()),
        }
    }

    /// Serialize `records` and replace the file contents, creating parent dirs if needed.
    pub async fn save(&self, records: &[T]) -> Result<(), ServiceError> {
        let data = encode_pretty(records)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ServiceError::Persistence(format!("{}: {}", parent.display(), e)))?;
        }
        fs::write(&self.path, data)
            .await
            .map_err(|e| ServiceError::Persistence(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }
}

fn encode_pretty<T: Serialize>(records: &[T]) -> Result<Vec<u8>, ServiceError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records
        .serialize(&mut ser)
        .map_err(|e| ServiceError::Serialization(e.to_string()))?;
    Ok(buf)
}
