//! Read-only lookups over JSON array stores.
//!
//! A store is a file holding a JSON array of records of one type. Every lookup
//! re-reads and re-decodes the whole file; nothing is cached between calls.

pub mod decoder;
pub mod lookup;
pub mod resolver;

pub use decoder::decode_records;
pub use lookup::{find_by_id, Lookup};
pub use resolver::{resolve_identifier, Identified, IDENTIFIER_FIELDS};

use serde::de::DeserializeOwned;

/// Anything that can live in a store: decodable from JSON and identifiable.
pub trait Record: Identified + DeserializeOwned {}

impl<T: Identified + DeserializeOwned> Record for T {}
