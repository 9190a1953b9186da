//! Reserved cookie directive names.
//!
//! A token whose key matches one of these names (ignoring ASCII case) is
//! routed to a dedicated field on [`Biscuit`](crate::cookies::biscuit::Biscuit)
//! instead of the data map.

/// A reserved cookie attribute with protocol-defined meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Domain,
    Path,
    Expires,
    MaxAge,
    Secure,
    HttpOnly,
}

impl Directive {
    /// Every reserved directive, in serialization order.
    pub const ALL: [Directive; 6] = [
        Directive::Domain,
        Directive::Path,
        Directive::Expires,
        Directive::MaxAge,
        Directive::Secure,
        Directive::HttpOnly,
    ];

    /// Directives that carry a string value.
    pub const VALUED: [Directive; 4] = [
        Directive::Domain,
        Directive::Path,
        Directive::Expires,
        Directive::MaxAge,
    ];

    /// Look up a directive by its wire name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Directive> {
        Self::ALL
            .into_iter()
            .find(|d| d.wire_name().eq_ignore_ascii_case(name))
    }

    /// Lowercase name used when matching and when rendering `key=value`.
    pub fn wire_name(self) -> &'static str {
        match self {
            Directive::Domain => "domain",
            Directive::Path => "path",
            Directive::Expires => "expires",
            Directive::MaxAge => "max-age",
            Directive::Secure => "secure",
            Directive::HttpOnly => "httponly",
        }
    }

    /// True for `secure` and `httponly`.
    pub fn is_flag(self) -> bool {
        matches!(self, Directive::Secure | Directive::HttpOnly)
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Whether `name` collides with a reserved directive.
pub fn is_reserved(name: &str) -> bool {
    Directive::from_name(name).is_some()
}
