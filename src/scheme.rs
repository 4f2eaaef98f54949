use crate::types::SchemeType;

/// Get the scheme type from a scheme string.
/// Matching is exact: `HTTP` is an opaque scheme.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    scheme_type_of(scheme.as_bytes())
}

/// Same as [`get_scheme_type`] over raw bytes
pub fn scheme_type_of(bytes: &[u8]) -> SchemeType {
    // Filter by length and first byte before the full comparison
    match (bytes.len(), bytes.first()) {
        (4, Some(b'h')) if bytes == b"http" => SchemeType::HttpFamily,
        (5, Some(b'h')) if bytes == b"https" => SchemeType::HttpFamily,
        (4, Some(b'f')) if bytes == b"file" => SchemeType::File,
        _ => SchemeType::Opaque,
    }
}
