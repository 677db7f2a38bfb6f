//! Repository port and its JSON file adapter.

use crate::error::Result;
use crate::model::{Customer, Product};
use crate::store::{self, Lookup, Record};
use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Read access to records of type `T` by identifier.
///
/// `Ok(Lookup::NotFound)` means the backing store was read successfully and
/// holds no such record; `Err` means the store itself could not be used.
pub trait Repository<T>: Send + Sync {
    fn get_by_id(&self, id: &str) -> Result<Lookup<T>>;
}

/// Serves lookups from a JSON array file, re-read on every call.
pub struct JsonRepository<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

pub type JsonCustomerRepository = JsonRepository<Customer>;
pub type JsonProductRepository = JsonRepository<Product>;

impl<T> JsonRepository<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> Clone for JsonRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.path.clone())
    }
}

impl<T> fmt::Debug for JsonRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonRepository")
            .field("path", &self.path)
            .finish()
    }
}

impl<T: Record> Repository<T> for JsonRepository<T> {
    fn get_by_id(&self, id: &str) -> Result<Lookup<T>> {
        store::find_by_id(&self.path, id)
    }
}
