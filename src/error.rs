/// Errors that can occur during URL parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// No `:` terminates a scheme before the end of input
    MissingScheme,
    /// An `http`, `https` or `file` scheme is not followed by `//`
    MalformedSlashPrefix,
    /// User info has a `:` with nothing after it
    MalformedUserInfo,
    /// Host starts with `[` but has no matching `]`
    MalformedIpv6Host,
    /// Authority carries a port but no host, as in `http://:8080/`
    EmptyHost,
}

impl ParseError {
    /// Short machine-friendly name, handy for log fields
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingScheme => "missing-scheme",
            Self::MalformedSlashPrefix => "malformed-slash-prefix",
            Self::MalformedUserInfo => "malformed-user-info",
            Self::MalformedIpv6Host => "malformed-ipv6-host",
            Self::EmptyHost => "empty-host",
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MissingScheme => "Missing scheme",
            Self::MalformedSlashPrefix => "Expected \"//\" after scheme",
            Self::MalformedUserInfo => "Empty password after ':' in user info",
            Self::MalformedIpv6Host => "Unterminated IPv6 host",
            Self::EmptyHost => "Empty host before port",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
