use super::{decode_records, Record};
use crate::error::{Result, StoreError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Outcome of a successful lookup: the store was readable, and the record
/// either exists or it does not.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::NotFound => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Lookup::Found(record) => Lookup::Found(f(record)),
            Lookup::NotFound => Lookup::NotFound,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(record: Option<T>) -> Self {
        record.map_or(Lookup::NotFound, Lookup::Found)
    }
}

/// Finds the first record in the store at `path` whose identifier equals
/// `target_id`.
///
/// The store is opened and decoded in full on every call. Records without a
/// resolvable identifier are skipped. The match is moved out of the decoded
/// sequence, which is dropped before returning, so the caller owns the only
/// copy.
pub fn find_by_id<T: Record>(path: impl AsRef<Path>, target_id: &str) -> Result<Lookup<T>> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<T> = decode_records(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            StoreError::Io {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            StoreError::Decode {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let found = records
        .into_iter()
        .find(|record| record.identifier() == Some(target_id));

    Ok(found.into())
}
