use crate::compat::{Cow, String};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Bytes escaped by [`encode_uri_component`]: everything except ASCII
/// alphanumerics and `-_.!~*'()`. Space is handled separately.
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Write percent-encoded `input` directly to `buffer`
fn percent_encode_into(buffer: &mut String, input: &str) {
    for chunk in utf8_percent_encode(input, COMPONENT_SET) {
        buffer.push_str(chunk);
    }
}

/// Form-encode a URI component: space becomes `+`, reserved and
/// non-ASCII bytes become `%XX`.
///
/// # Examples
///
/// ```
/// use spanurl::encode_uri_component;
///
/// assert_eq!(encode_uri_component("a b&c"), "a+b%26c");
/// ```
pub fn encode_uri_component(input: &str) -> String {
    let mut buffer = String::with_capacity(input.len());
    for (i, piece) in input.split(' ').enumerate() {
        if i > 0 {
            buffer.push('+');
        }
        percent_encode_into(&mut buffer, piece);
    }
    buffer
}

/// Decode a form-encoded URI component: `+` becomes space and `%XX` is
/// unescaped. Malformed escapes are kept as written; invalid UTF-8 is
/// replaced with U+FFFD.
///
/// # Examples
///
/// ```
/// use spanurl::decode_uri_component;
///
/// assert_eq!(
///     decode_uri_component("https%3A%2F%2Fexample.org%2F"),
///     "https://example.org/"
/// );
/// ```
pub fn decode_uri_component(input: &str) -> String {
    let spaced: Cow<'_, str> = if input.contains('+') {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
