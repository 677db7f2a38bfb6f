use serde_json::Value;

/// Field names searched, in priority order, on dynamically shaped records.
pub const IDENTIFIER_FIELDS: [&str; 2] = ["ID", "Id"];

/// Exposes the identifier a record is looked up by.
///
/// `None` means the record has no usable identifier; the lookup engine skips
/// such records instead of failing.
pub trait Identified {
    fn identifier(&self) -> Option<&str>;
}

/// Resolves the identifier of an untyped JSON record.
///
/// The first of [`IDENTIFIER_FIELDS`] present on the object decides: if it
/// holds a string, that string is the identifier; otherwise the record has none.
/// A non-string `ID` does not fall through to `Id`.
pub fn resolve_identifier(record: &Value) -> Option<&str> {
    let fields = record.as_object()?;
    IDENTIFIER_FIELDS
        .iter()
        .find_map(|name| fields.get(*name))
        .and_then(Value::as_str)
}

impl Identified for Value {
    fn identifier(&self) -> Option<&str> {
        resolve_identifier(self)
    }
}
