use crate::checkers::parse_port;
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;
use crate::url_parts::UrlParts;

/// Read-only accessors over a spec string and the parts parsed from it
///
/// Implemented by the owning [`Url`](crate::Url) and the borrowing
/// [`UrlRef`](crate::UrlRef). Absent components read back as `""`; use
/// the `has_*` methods to tell absent from present-but-empty.
pub trait UrlBase {
    /// The buffer every span resolves against
    fn spec(&self) -> &str;

    /// The parsed spans
    fn parts(&self) -> &UrlParts;

    /// Get the scheme without the trailing `:` (e.g. "http")
    fn scheme(&self) -> &str {
        UrlParts::resolve(self.parts().scheme, self.spec())
    }

    fn username(&self) -> &str {
        UrlParts::resolve(self.parts().username, self.spec())
    }

    fn password(&self) -> &str {
        UrlParts::resolve(self.parts().password, self.spec())
    }

    /// Get the host, without brackets for IPv6
    fn host(&self) -> &str {
        UrlParts::resolve(self.parts().host, self.spec())
    }

    /// Get the port text as written, not validated
    fn port(&self) -> &str {
        UrlParts::resolve(self.parts().port, self.spec())
    }

    fn path(&self) -> &str {
        UrlParts::resolve(self.parts().path, self.spec())
    }

    /// Get the query without the leading `?`
    fn query(&self) -> &str {
        UrlParts::resolve(self.parts().query, self.spec())
    }

    /// Get the fragment without the leading `#`
    fn fragment(&self) -> &str {
        UrlParts::resolve(self.parts().fragment, self.spec())
    }

    fn is_ipv6(&self) -> bool {
        self.parts().is_ipv6
    }

    /// Check if a host is present (possibly empty, as in `file:///`)
    fn has_host(&self) -> bool {
        self.parts().host.is_some()
    }

    fn has_port(&self) -> bool {
        self.parts().port.is_some()
    }

    fn has_query(&self) -> bool {
        self.parts().query.is_some()
    }

    fn has_fragment(&self) -> bool {
        self.parts().fragment.is_some()
    }

    fn has_credentials(&self) -> bool {
        self.parts().username.is_some() || self.parts().password.is_some()
    }

    /// Port as a number; `None` if absent, empty, non-numeric or > 65535
    fn port_number(&self) -> Option<u16> {
        parse_port(self.port())
    }

    fn scheme_type(&self) -> SchemeType {
        self.parts()
            .scheme
            .map_or(SchemeType::Opaque, |_| get_scheme_type(self.scheme()))
    }

    /// Exact, case-sensitive scheme comparison. Always false when no
    /// scheme was parsed.
    fn scheme_is(&self, scheme: &str) -> bool {
        self.parts().scheme.is_some() && self.scheme() == scheme
    }

    fn scheme_is_in_http_family(&self) -> bool {
        self.scheme_is("http") || self.scheme_is("https")
    }

    fn scheme_is_file(&self) -> bool {
        self.scheme_is("file")
    }
}
