use serde::de::DeserializeOwned;
use std::io::Read;

/// Decodes a JSON array into records, preserving file order.
///
/// The whole input must be a single JSON array; any syntax error, a
/// non-array top-level value, or an element that does not fit `T` fails the
/// entire decode. Unknown keys are ignored and missing keys fall back to
/// whatever defaults `T` declares.
pub fn decode_records<T, R>(reader: R) -> Result<Vec<T>, serde_json::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    serde_json::from_reader(reader)
}
