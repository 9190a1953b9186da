//! Renders a [`Biscuit`] back into header text.
//!
//! Field order is fixed: data pairs (insertion order), then `domain`,
//! `path`, `expires`, `max-age`, then the `secure` and `HttpOnly` flags.

use crate::base::cookieerror::CookieError;
use crate::cookies::biscuit::Biscuit;
use crate::cookies::directive::Directive;
use http::HeaderValue;
use std::fmt;

const SET_COOKIE_PREFIX: &str = "Set-Cookie: ";
const SEPARATOR: &str = "; ";

impl Biscuit {
    /// Render the cookie, optionally prefixed with `Set-Cookie: `.
    ///
    /// Trailing whitespace and one trailing `;` are trimmed from the result,
    /// so an empty cookie renders as `""` (or `"Set-Cookie:"`).
    pub fn render(&self, include_name: bool) -> String {
        let mut out = String::new();
        if include_name {
            out.push_str(SET_COOKIE_PREFIX);
        }

        for (key, value) in self.iter() {
            push_field(&mut out, key, value);
        }
        for directive in Directive::VALUED {
            if let Some(value) = self.directive(directive) {
                push_field(&mut out, directive.wire_name(), value);
            }
        }
        if self.is_secure() {
            out.push_str("secure");
            out.push_str(SEPARATOR);
        }
        if self.is_http_only() {
            out.push_str("HttpOnly");
            out.push_str(SEPARATOR);
        }

        let trimmed = out.trim_end();
        trimmed.strip_suffix(';').unwrap_or(trimmed).to_string()
    }

    /// Render without the name prefix as an HTTP header value.
    pub fn to_header_value(&self) -> Result<HeaderValue, CookieError> {
        Ok(HeaderValue::from_str(&self.render(false))?)
    }
}

fn push_field(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push('=');
    out.push_str(value);
    out.push_str(SEPARATOR);
}

impl fmt::Display for Biscuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
