//! Component scanners
//!
//! Each scanner consumes a [`Cursor`] (or a span of the input) and records
//! what it found in a [`UrlParts`]. Spans are absolute offsets into the
//! input, so sub-cursors over the authority produce spans that resolve
//! against the whole URL.
use crate::cursor::Cursor;
use crate::error::{ParseError, Result};
use crate::log::trace;
use crate::span::Span;
use crate::types::SchemeType;
use crate::url_parts::UrlParts;

fn non_empty(span: Span) -> Option<Span> {
    (!span.is_empty()).then_some(span)
}

/// Scan up to the first `:` and step over it.
/// Any bytes are accepted as a scheme; case is preserved.
pub fn extract_scheme(cursor: &mut Cursor<'_>) -> Result<Span> {
    let Some(colon) = cursor.find(b':') else {
        trace!("no ':' before end of input");
        return Err(ParseError::MissingScheme);
    };
    let scheme = cursor.take_until(colon);
    cursor.advance();
    Ok(scheme)
}

/// Require `//`, then collect everything up to the next `/`, `?`, `#` or
/// end of input as the authority (http family) or the host (file).
/// The delimiter itself is left for the path scanner.
pub fn parse_after_scheme(
    bytes: &[u8],
    cursor: &mut Cursor<'_>,
    scheme_type: SchemeType,
    dst: &mut UrlParts,
) -> Result<()> {
    if !(cursor.eat(b'/') && cursor.eat(b'/')) {
        trace!("scheme not followed by \"//\" at offset {}", cursor.position());
        return Err(ParseError::MalformedSlashPrefix);
    }

    let authority = match cursor.find3(b'/', b'?', b'#') {
        Some(delimiter) => cursor.take_until(delimiter),
        None => cursor.take_remaining(),
    };

    match scheme_type {
        SchemeType::File => {
            // Present even when empty: "file:///p" differs from no host at all
            dst.host = Some(authority);
            Ok(())
        }
        SchemeType::HttpFamily | SchemeType::Opaque => {
            debug_assert_eq!(
                scheme_type,
                SchemeType::HttpFamily,
                "opaque schemes have no authority"
            );
            parse_authority(bytes, authority, dst)
        }
    }
}

/// Split `user:pass@host:port`. An empty authority leaves all four absent.
pub fn parse_authority(bytes: &[u8], authority: Span, dst: &mut UrlParts) -> Result<()> {
    dst.username = None;
    dst.password = None;
    dst.host = None;
    dst.port = None;

    if authority.is_empty() {
        return Ok(());
    }

    let mut cursor = Cursor::over(bytes, authority);
    if let Some(at) = cursor.find(b'@') {
        let user_info = cursor.take_until(at);
        cursor.advance();
        parse_user_info(bytes, user_info, dst)?;
    }
    parse_server_info(bytes, cursor.take_remaining(), dst)
}

/// `user` or `user:pass`. A `:` with nothing after it is rejected.
pub fn parse_user_info(bytes: &[u8], user_info: Span, dst: &mut UrlParts) -> Result<()> {
    let mut cursor = Cursor::over(bytes, user_info);
    let Some(colon) = cursor.find(b':') else {
        dst.username = Some(cursor.take_remaining());
        dst.password = None;
        return Ok(());
    };

    dst.username = Some(cursor.take_until(colon));
    cursor.advance();
    let password = cursor.take_remaining();
    if password.is_empty() {
        trace!("empty password at offset {}", password.start());
        return Err(ParseError::MalformedUserInfo);
    }
    dst.password = Some(password);
    Ok(())
}

/// `host`, `host:port`, `[v6]` or `[v6]:port`.
///
/// The port is taken verbatim: `host:` yields a present but empty port.
pub fn parse_server_info(bytes: &[u8], server_info: Span, dst: &mut UrlParts) -> Result<()> {
    if server_info.is_empty() {
        dst.host = None;
        dst.port = None;
        return Ok(());
    }

    let mut cursor = Cursor::over(bytes, server_info);
    let host_end = if cursor.peek() == Some(b'[') {
        // The port delimiter is the first ':' after the closing bracket
        let Some(close) = cursor.find(b']') else {
            trace!("unterminated '[' at offset {}", server_info.start());
            return Err(ParseError::MalformedIpv6Host);
        };
        close + 1
    } else {
        cursor.find(b':').unwrap_or(server_info.end())
    };

    let host = cursor.take_until(host_end);
    let has_port = cursor.eat(b':');
    if !has_port && !cursor.at_end() {
        trace!("garbage after ']' at offset {}", cursor.position());
        return Err(ParseError::MalformedIpv6Host);
    }
    if host.is_empty() {
        trace!("port without host at offset {}", host.start());
        return Err(ParseError::EmptyHost);
    }

    parse_host(bytes, host, dst)?;
    dst.port = has_port.then(|| cursor.take_remaining());
    Ok(())
}

/// Record `host`, stripping IPv6 brackets. `host` must not be empty.
pub fn parse_host(bytes: &[u8], host: Span, dst: &mut UrlParts) -> Result<()> {
    debug_assert!(!host.is_empty(), "host sub-parse on empty input");
    let text = host.as_bytes(bytes);

    if text.first() == Some(&b'[') {
        if text.len() < 2 || text.last() != Some(&b']') {
            trace!("unterminated '[' in host at offset {}", host.start());
            return Err(ParseError::MalformedIpv6Host);
        }
        dst.host = Some(host.substr(1, host.len() - 2));
        dst.is_ipv6 = true;
    } else {
        dst.host = Some(host);
        dst.is_ipv6 = false;
    }
    Ok(())
}

/// Path up to `?`/`#`, then query and fragment. Never fails.
///
/// An empty path is absent. An empty fragment after `#` is present.
pub fn parse_path(cursor: &mut Cursor<'_>, dst: &mut UrlParts) {
    dst.reset_path();
    if cursor.at_end() {
        return;
    }

    let Some(delimiter) = cursor.find2(b'?', b'#') else {
        dst.path = Some(cursor.take_remaining());
        return;
    };

    dst.path = non_empty(cursor.take_until(delimiter));
    let is_query = cursor.eat(b'?');
    if is_query {
        parse_query_and_ref(cursor, dst);
    } else {
        cursor.advance();
        dst.query = None;
        dst.fragment = Some(cursor.take_remaining());
    }
}

/// Query up to `#`, then the fragment verbatim
pub fn parse_query_and_ref(cursor: &mut Cursor<'_>, dst: &mut UrlParts) {
    if cursor.at_end() {
        dst.query = None;
        dst.fragment = None;
        return;
    }

    match cursor.find(b'#') {
        Some(hash) => {
            dst.query = non_empty(cursor.take_until(hash));
            cursor.advance();
            dst.fragment = Some(cursor.take_remaining());
        }
        None => {
            dst.query = Some(cursor.take_remaining());
        }
    }
}
