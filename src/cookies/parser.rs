//! Turns a raw `Cookie`/`Set-Cookie` header value into a [`Biscuit`].
//!
//! Parsing happens in two passes over the `;`-separated tokens:
//!
//! 1. `key=value` tokens are split by [`cookie::Cookie::split_parse`], then
//!    routed either to a directive field or to the data map.
//! 2. Bare `secure` / `httponly` tokens (no `=`) switch the flags on.
//!
//! The default parser never fails. Tokens with no key are dropped.

use crate::base::cookieerror::CookieError;
use crate::cookies::biscuit::Biscuit;
use crate::cookies::directive::Directive;
use http::HeaderValue;
use std::convert::Infallible;
use std::str::FromStr;

/// Parse `raw` permissively. Unrecognised tokens are ignored.
///
/// ```
/// let cookie = biscuit::parse("sid=abc123; Path=/; Secure");
/// assert_eq!(cookie.get_key("sid"), "abc123");
/// assert_eq!(cookie.path(), "/");
/// assert!(cookie.is_secure());
/// ```
pub fn parse(raw: &str) -> Biscuit {
    let mut biscuit = Biscuit::new();

    for pair in cookie::Cookie::split_parse(raw) {
        let pair = match pair {
            Ok(pair) => pair,
            Err(e) => {
                tracing::trace!(error = %e, "skipping cookie token without a key");
                continue;
            }
        };

        match Directive::from_name(pair.name()) {
            Some(directive) => biscuit.apply_directive(directive, pair.value()),
            None => biscuit.put_data(pair.name(), pair.value()),
        }
    }

    // Bare flags only ever switch on.
    for token in raw.split(';') {
        match token.trim().to_ascii_lowercase().as_str() {
            "secure" => {
                biscuit.set_secure(true);
            }
            "httponly" => {
                biscuit.set_http_only(true);
            }
            _ => {}
        }
    }

    biscuit
}

/// Configurable cookie parser.
///
/// In strict mode, any non-blank token that is neither `key=value` with a
/// non-empty key nor a bare `secure`/`httponly` flag is reported as
/// [`CookieError::MalformedToken`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BiscuitParser {
    strict: bool,
}

impl BiscuitParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn parse(&self, raw: &str) -> Result<Biscuit, CookieError> {
        if self.strict {
            if let Some(token) = raw.split(';').map(str::trim).find(|t| is_malformed(t)) {
                tracing::debug!(token = %token, "strict cookie parse failed");
                return Err(CookieError::malformed_token(token));
            }
        }
        Ok(parse(raw))
    }
}

fn is_malformed(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    match token.split_once('=') {
        Some((key, _)) => key.trim().is_empty(),
        None => !matches!(
            Directive::from_name(token),
            Some(Directive::Secure | Directive::HttpOnly)
        ),
    }
}

impl Biscuit {
    /// Permissive parse, see [`parse`].
    pub fn parse(raw: &str) -> Self {
        parse(raw)
    }

    /// Parse a header value. Values that are not visible ASCII yield an
    /// empty cookie.
    pub fn from_header_value(value: &HeaderValue) -> Self {
        match value.to_str() {
            Ok(raw) => parse(raw),
            Err(e) => {
                tracing::debug!(error = %e, "cookie header value is not visible ASCII");
                Biscuit::new()
            }
        }
    }
}

impl FromStr for Biscuit {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(parse(raw))
    }
}
